//! Statement import for Cadence
//!
//! Turns bank statement exports into transactions. Everything malformed is
//! rejected here, so the services downstream can assume well-typed input.

pub mod statement;

pub use statement::{StatementLoader, DEFAULT_STATEMENT_DATE_FORMAT};
