//! SQLite connection and schema setup.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::error::Res;

/// Single shared connection; requests take turns on the mutex.
pub struct DbPool(pub Mutex<Connection>);

/// Opens (or creates) the database file and ensures the schema exists.
pub fn init_db(db_path: &Path) -> Res<DbPool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::error::ApiError::Internal(e.to_string()))?;
        }
    }
    let conn = Connection::open(db_path)?;
    create_schema(&conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

/// In-memory variant used by tests.
pub fn init_db_in_memory() -> Res<DbPool> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

pub fn create_schema(conn: &Connection) -> Res<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            pi_username TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            pi_balance REAL DEFAULT 0.0,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS rides (
            id TEXT PRIMARY KEY,
            rider_id TEXT NOT NULL,
            driver_id TEXT,
            pickup TEXT NOT NULL,
            destination TEXT NOT NULL,
            status TEXT DEFAULT 'pending',
            fare REAL NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (rider_id) REFERENCES users (id),
            FOREIGN KEY (driver_id) REFERENCES users (id)
        );
        "#,
    )?;
    Ok(())
}
