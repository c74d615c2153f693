//! The statement validation seam.

use crate::NormalizedStatements;
use derive_getters::Getters;
use tablebot_core::{Chain, TableName};
use tablebot_error::SqlError;

/// Validates and normalizes SQL statements for the Tableland network.
///
/// Implementations are constructed once at startup and shared (behind an
/// `Arc`) by every command handler that needs them. Validation is pure and
/// synchronous; no implementation may perform I/O.
pub trait StatementValidator: Send + Sync {
    /// Parse, classify, and canonically render a statement batch.
    ///
    /// # Errors
    ///
    /// Returns a [`SqlError`] when the batch fails to parse, is empty, mixes
    /// statement kinds, or contains a statement type the network rejects.
    fn normalize(&self, sql: &str) -> Result<NormalizedStatements, SqlError>;

    /// Validate a batch as a single read query against a supported chain.
    ///
    /// # Errors
    ///
    /// Everything [`StatementValidator::normalize`] rejects, plus batches
    /// that are not reads, reads without a resolvable table reference, table
    /// names outside the `{prefix}_{chainId}_{tableId}` form, and chain ids
    /// the network does not run on.
    fn validate_read(&self, sql: &str) -> Result<ReadStatement, SqlError>;
}

/// A validated read query, ready for the gateway.
#[derive(Debug, Clone, Getters)]
pub struct ReadStatement {
    /// Canonical rendering of the query.
    statement: String,
    /// Table the query reads from.
    table: TableName,
    /// Chain the table lives on.
    #[getter(skip)]
    chain: &'static Chain,
}

impl ReadStatement {
    /// Bundle a validated read with its resolved table and chain.
    pub fn new(statement: String, table: TableName, chain: &'static Chain) -> Self {
        Self {
            statement,
            table,
            chain,
        }
    }

    /// Chain the table lives on.
    pub fn chain(&self) -> &'static Chain {
        self.chain
    }
}
