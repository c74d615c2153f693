//! Tableland table name parsing.
//!
//! Table names have the canonical form `{prefix}_{chainId}_{tableId}`. The
//! prefix may itself contain underscores, so the chain and table ids are
//! always the last two `_`-separated segments.

use tablebot_error::{SqlError, SqlErrorKind};

/// A parsed Tableland table name.
///
/// # Examples
///
/// ```
/// use tablebot_core::TableName;
///
/// let name = TableName::parse("healthbot_80001_1").unwrap();
/// assert_eq!(name.prefix(), "healthbot");
/// assert_eq!(name.chain_id(), 80001);
/// assert_eq!(name.table_id(), 1);
/// assert_eq!(name.to_string(), "healthbot_80001_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{prefix}_{chain_id}_{table_id}")]
pub struct TableName {
    prefix: String,
    chain_id: u64,
    table_id: u64,
}

impl TableName {
    /// Parse a canonical table name.
    ///
    /// # Errors
    ///
    /// Returns [`SqlErrorKind::InvalidTableName`] when the name has fewer
    /// than three segments or the trailing segments are not numeric.
    pub fn parse(name: &str) -> Result<Self, SqlError> {
        let segments: Vec<&str> = name.split('_').collect();
        if segments.len() < 3 {
            return Err(SqlError::new(SqlErrorKind::InvalidTableName(
                name.to_owned(),
            )));
        }

        let table_id = segments[segments.len() - 1];
        let chain_id = segments[segments.len() - 2];
        let (table_id, chain_id) = match (table_id.parse(), chain_id.parse()) {
            (Ok(table_id), Ok(chain_id)) => (table_id, chain_id),
            _ => {
                return Err(SqlError::new(SqlErrorKind::InvalidTableName(
                    name.to_owned(),
                )));
            }
        };

        Ok(Self {
            prefix: segments[..segments.len() - 2].join("_"),
            chain_id,
            table_id,
        })
    }

    /// Human-chosen table prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Chain the table is deployed on.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Id of the table on its chain.
    pub fn table_id(&self) -> u64 {
        self.table_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_name() {
        let name = TableName::parse("rigs_5_42").unwrap();
        assert_eq!(name.prefix(), "rigs");
        assert_eq!(name.chain_id(), 5);
        assert_eq!(name.table_id(), 42);
    }

    #[test]
    fn prefix_may_contain_underscores() {
        let name = TableName::parse("my_cool_table_80001_7").unwrap();
        assert_eq!(name.prefix(), "my_cool_table");
        assert_eq!(name.chain_id(), 80001);
        assert_eq!(name.table_id(), 7);
        assert_eq!(name.to_string(), "my_cool_table_80001_7");
    }

    #[test]
    fn rejects_too_few_segments() {
        assert!(TableName::parse("rigs_5").is_err());
        assert!(TableName::parse("rigs").is_err());
        assert!(TableName::parse("").is_err());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(TableName::parse("rigs_goerli_42").is_err());
        assert!(TableName::parse("rigs_5_last").is_err());
    }
}
