//! Storage layer for skywatch
//!
//! SQLite-backed persistence via sqlx. Locations and their append-only
//! weather snapshots live in two tables linked by a cascading foreign key;
//! preferences are a single fixed-key row.

mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use store::SqliteStore;
