//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps assigned ids `>= 1` and stops SQLite from reusing
/// the id of a deleted row.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name    TEXT NOT NULL,
    last_name     TEXT,
    email         TEXT,
    work_location TEXT NOT NULL
);

-- Both columns serve as lookup keys for the single-record fetch paths.
CREATE INDEX IF NOT EXISTS employees_first_name_idx ON employees(first_name);
CREATE INDEX IF NOT EXISTS employees_location_idx   ON employees(work_location);

PRAGMA user_version = 1;
";
