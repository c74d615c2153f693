//! SQL statement validation and normalization for Tablebot.
//!
//! The Tableland network accepts a SQLite-flavored dialect and classifies
//! each statement batch as read, write, create, or acl. This crate provides
//! that validation behind the [`StatementValidator`] trait, implemented by
//! [`TablelandParser`] on top of the `sqlparser` crate.
//!
//! The parser handle is constructed explicitly at startup and passed to the
//! command handlers that need it; there is no process-global parser state.
//!
//! Syntax failures carry a 1-based character offset and render as
//! `syntax error at position N`, the format consumed by
//! `tablebot_core::highlight_error_position`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kind;
mod parser;
mod position;
mod validator;

pub use kind::{NormalizedStatements, StatementKind};
pub use parser::TablelandParser;
pub use validator::{ReadStatement, StatementValidator};
