//! Database module: the quote model, its schema and the SQLite-backed store.
//!
//! Layout:
//! - `models.rs`: `Quote` row struct and the validated `QuoteDraft`
//! - `schema.rs`: SQL DDL for initializing the database
//! - `seed.rs`: sample quotes inserted into an empty store
//! - `sqlite.rs`: `QuoteStore`, the pool-backed CRUD handle

pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{Quote, QuoteDraft};
pub use schema::SQLITE_INIT;
pub use seed::{SAMPLE_QUOTES, sample_drafts};
pub use sqlite::{QuoteStore, SqlitePool};
