//! SQL DDL for the quote table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids of deleted rows are never reused
/// - `text` NOT NULL; emptiness is checked before insert
/// - `source` and `background_image_url` nullable
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    source TEXT NULL,
    background_image_url TEXT NULL
);
"#;
