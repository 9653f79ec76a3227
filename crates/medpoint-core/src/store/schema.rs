//! SQLite schema definition.

/// Complete database schema for the medical point store.
///
/// All persisted state lives in one key-value table: four collection blobs
/// (JSON arrays of records) plus the display-language setting.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
