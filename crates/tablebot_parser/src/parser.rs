//! Tableland SQL parser built on `sqlparser`.

use crate::position::{char_offset, location_in, strip_location};
use crate::{NormalizedStatements, ReadStatement, StatementKind, StatementValidator};
use sqlparser::ast::{SetExpr, Statement, TableFactor};
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;
use tablebot_core::{Chain, TableName};
use tablebot_error::{SqlError, SqlErrorKind};
use tracing::debug;

/// Validator for the Tableland SQL dialect.
///
/// Tableland speaks a SQLite-flavored dialect, so statements are parsed with
/// `sqlparser`'s SQLite rules. The handle is cheap to construct and carries
/// no mutable state; build one at startup and pass it to every handler that
/// validates statements.
///
/// # Examples
///
/// ```
/// use tablebot_parser::{StatementValidator, TablelandParser};
///
/// let parser = TablelandParser::new();
/// let normalized = parser.normalize("select * from healthbot_80001_1").unwrap();
/// assert_eq!(normalized.kind().to_string(), "read");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TablelandParser;

impl TablelandParser {
    /// Create a new parser handle.
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, sql: &str) -> Result<Vec<Statement>, SqlError> {
        Parser::parse_sql(&SQLiteDialect {}, sql).map_err(|err| {
            let message = err.to_string();
            match location_in(&message)
                .and_then(|(line, column)| char_offset(sql, line, column))
            {
                Some(position) => SqlError::new(SqlErrorKind::Syntax {
                    position,
                    detail: strip_location(&message),
                }),
                None => SqlError::new(SqlErrorKind::Unparsable(message)),
            }
        })
    }

    fn classify(statement: &Statement) -> Result<StatementKind, SqlError> {
        match statement {
            Statement::Query { .. } => Ok(StatementKind::Read),
            Statement::Insert { .. } | Statement::Update { .. } | Statement::Delete { .. } => {
                Ok(StatementKind::Write)
            }
            Statement::CreateTable { .. } => Ok(StatementKind::Create),
            Statement::Grant { .. } | Statement::Revoke { .. } => Ok(StatementKind::Acl),
            other => {
                // Canonical renderings lead with the statement keyword.
                let keyword = other
                    .to_string()
                    .split_whitespace()
                    .next()
                    .unwrap_or("unknown")
                    .to_owned();
                Err(SqlError::new(SqlErrorKind::Unsupported(keyword)))
            }
        }
    }

    fn batch_kind(statements: &[Statement]) -> Result<StatementKind, SqlError> {
        let mut kinds = statements.iter().map(Self::classify);
        let first = kinds.next().ok_or_else(|| SqlError::new(SqlErrorKind::Empty))??;
        for kind in kinds {
            let kind = kind?;
            if kind != first {
                return Err(SqlError::new(SqlErrorKind::MixedBatch {
                    first: first.to_string(),
                    second: kind.to_string(),
                }));
            }
        }
        Ok(first)
    }

    /// The first table referenced by a read statement's FROM clause.
    fn first_table(statement: &Statement) -> Option<String> {
        match statement {
            Statement::Query(query) => Self::table_in_set_expr(&query.body),
            _ => None,
        }
    }

    fn table_in_set_expr(body: &SetExpr) -> Option<String> {
        match body {
            SetExpr::Select(select) => select
                .from
                .first()
                .and_then(|table| Self::table_in_factor(&table.relation)),
            SetExpr::Query(query) => Self::table_in_set_expr(&query.body),
            SetExpr::SetOperation { left, .. } => Self::table_in_set_expr(left),
            _ => None,
        }
    }

    fn table_in_factor(factor: &TableFactor) -> Option<String> {
        match factor {
            TableFactor::Table { name, .. } => {
                name.0.last().map(|ident| ident.value.clone())
            }
            TableFactor::Derived { subquery, .. } => Self::table_in_set_expr(&subquery.body),
            TableFactor::NestedJoin {
                table_with_joins, ..
            } => Self::table_in_factor(&table_with_joins.relation),
            _ => None,
        }
    }
}

impl StatementValidator for TablelandParser {
    fn normalize(&self, sql: &str) -> Result<NormalizedStatements, SqlError> {
        let statements = self.parse(sql)?;
        let kind = Self::batch_kind(&statements)?;
        let rendered: Vec<String> = statements.iter().map(Statement::to_string).collect();
        debug!(kind = %kind, count = rendered.len(), "normalized statement batch");
        Ok(NormalizedStatements::new(kind, rendered))
    }

    fn validate_read(&self, sql: &str) -> Result<ReadStatement, SqlError> {
        let statements = self.parse(sql)?;
        let kind = Self::batch_kind(&statements)?;
        if kind != StatementKind::Read {
            return Err(SqlError::new(SqlErrorKind::NotReadStatement));
        }

        let first = &statements[0];
        let table = Self::first_table(first)
            .ok_or_else(|| SqlError::new(SqlErrorKind::MissingTable))?;
        let table = TableName::parse(&table)?;
        let chain = Chain::from_id(table.chain_id())
            .ok_or_else(|| SqlError::new(SqlErrorKind::UnsupportedChain(table.chain_id())))?;

        debug!(table = %table, chain = chain.slug(), "validated read statement");
        Ok(ReadStatement::new(first.to_string(), table, chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_kind() {
        let parser = TablelandParser::new();
        let cases = [
            ("SELECT * FROM t_1_1", StatementKind::Read),
            ("INSERT INTO t_1_1 VALUES (1)", StatementKind::Write),
            ("UPDATE t_1_1 SET a = 1", StatementKind::Write),
            ("DELETE FROM t_1_1", StatementKind::Write),
            ("CREATE TABLE t (a INT)", StatementKind::Create),
        ];
        for (sql, expected) in cases {
            let normalized = parser.normalize(sql).unwrap();
            assert_eq!(*normalized.kind(), expected, "{sql}");
        }
    }

    #[test]
    fn rejects_mixed_batches() {
        let parser = TablelandParser::new();
        let err = parser
            .normalize("SELECT * FROM t_1_1; INSERT INTO t_1_1 VALUES (1)")
            .unwrap_err();
        assert!(matches!(err.kind(), SqlErrorKind::MixedBatch { .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let parser = TablelandParser::new();
        let err = parser.normalize("   ").unwrap_err();
        assert!(matches!(err.kind(), SqlErrorKind::Empty));
    }

    #[test]
    fn extracts_table_through_joins() {
        let parser = TablelandParser::new();
        let read = parser
            .validate_read("SELECT a.x FROM demo_5_2 a JOIN other_5_3 b ON a.id = b.id")
            .unwrap();
        assert_eq!(read.table().to_string(), "demo_5_2");
        assert_eq!(read.chain().slug(), "ethereum-goerli");
    }

    #[test]
    fn extracts_table_from_set_operations() {
        let parser = TablelandParser::new();
        let read = parser
            .validate_read("SELECT x FROM a_1_1 UNION SELECT x FROM b_1_2")
            .unwrap();
        assert_eq!(read.table().to_string(), "a_1_1");
    }
}
