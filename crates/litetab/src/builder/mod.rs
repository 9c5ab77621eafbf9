//! Structured SQL statement builders.
//!
//! Every builder renders plain SQL text with values embedded as literals
//! (see [`crate::literal`]); nothing is bound as a parameter.
//!
//! ## Design
//!
//! - Conditions, ordering and grouping are raw fragments supplied by the
//!   caller and passed through unchanged.
//! - Table and column names are checked as identifiers in `validate()`.
//! - No implicit safety: UPDATE and DELETE without a WHERE fragment touch
//!   every row of the table.

pub mod clause;
pub mod delete;
pub mod insert;
pub mod schema;
pub mod select;
pub mod traits;
pub mod update;

pub use clause::{QueryOptions, optional_clause};
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use schema::{AlterAction, AlterTableBuilder, CreateTableBuilder, DropTableBuilder};
pub use select::SelectBuilder;
pub use traits::{MutationBuilder, SqlBuilder};
pub use update::UpdateBuilder;

#[cfg(test)]
mod tests;
