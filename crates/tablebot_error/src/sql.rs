//! SQL validation error types.
//!
//! Diagnostics produced by the statement validator. The `Syntax` variant
//! renders as `syntax error at position N`, the format the error-position
//! highlighter recognizes.

use derive_getters::Getters;

/// SQL validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SqlErrorKind {
    /// Statement failed to parse at a known 1-based character offset.
    #[display("syntax error at position {position}: {detail}")]
    Syntax {
        /// 1-based character offset of the offending token in the input.
        position: usize,
        /// Parser message describing the failure.
        detail: String,
    },

    /// Statement failed to parse and no source position could be recovered.
    #[display("unable to parse statement: {_0}")]
    Unparsable(String),

    /// Input contained no statements.
    #[display("no statements provided")]
    Empty,

    /// Statement type is not supported by the Tableland network.
    #[display("unsupported statement type: {_0}")]
    Unsupported(String),

    /// A batch mixed statement kinds (e.g. a read alongside a write).
    #[display("statement batch mixes {first} and {second} statements")]
    MixedBatch {
        /// Kind of the first statement in the batch.
        first: String,
        /// Conflicting kind encountered later in the batch.
        second: String,
    },

    /// The statement was expected to be a read query and was not.
    #[display("statement provided is not a read query")]
    NotReadStatement,

    /// No table reference could be extracted from the statement.
    #[display("statement does not reference a table")]
    MissingTable,

    /// Table name does not follow the `{prefix}_{chainId}_{tableId}` form.
    #[display("invalid table name: {_0}")]
    InvalidTableName(String),

    /// The table's chain id is not a supported Tableland chain.
    #[display("invalid chain provided: {_0}")]
    UnsupportedChain(u64),
}

/// SQL validation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("SQL Error: {} at line {} in {}", kind, line, file)]
pub struct SqlError {
    kind: SqlErrorKind,
    line: u32,
    file: &'static str,
}

impl SqlError {
    /// Create a new SqlError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebot_error::{SqlError, SqlErrorKind};
    ///
    /// let err = SqlError::new(SqlErrorKind::NotReadStatement);
    /// assert!(err.to_string().contains("not a read query"));
    /// ```
    #[track_caller]
    pub fn new(kind: SqlErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The user-facing diagnostic for this error, without location noise.
    pub fn diagnostic(&self) -> String {
        self.kind.to_string()
    }
}
