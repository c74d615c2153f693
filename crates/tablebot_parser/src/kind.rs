//! Statement classification types.

use derive_getters::Getters;

/// Classification of a statement batch, using the Tableland network's
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StatementKind {
    /// `SELECT` queries served by the gateway.
    #[display("read")]
    Read,
    /// `INSERT` / `UPDATE` / `DELETE` statements submitted on-chain.
    #[display("write")]
    Write,
    /// `CREATE TABLE` statements that mint a new table.
    #[display("create")]
    Create,
    /// `GRANT` / `REVOKE` access-control statements.
    #[display("acl")]
    Acl,
}

/// Result of a successful validation: the batch kind plus each statement
/// rendered in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NormalizedStatements {
    kind: StatementKind,
    statements: Vec<String>,
}

impl NormalizedStatements {
    /// Bundle a classified batch with its canonical renderings.
    pub fn new(kind: StatementKind, statements: Vec<String>) -> Self {
        Self { kind, statements }
    }
}
