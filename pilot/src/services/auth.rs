use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use crate::{error::Res, models::User};

/// Balance granted to every newly created demo account.
const STARTING_BALANCE: f64 = 1000.0;

/// Simulated network login: returns the existing user for `pi_username` or
/// creates one with the starting balance.
pub fn login_or_create(conn: &Connection, pi_username: &str, name: &str, role: &str) -> Res<User> {
    let existing = conn
        .query_row(
            "SELECT * FROM users WHERE pi_username = ?1",
            params![pi_username],
            |row| User::from_row(row),
        )
        .optional()?;

    if let Some(user) = existing {
        return Ok(user);
    }

    let user_id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO users (id, pi_username, name, role, pi_balance) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, pi_username, name, role, STARTING_BALANCE],
    )?;

    // read the row back so created_at carries the database default
    let user = conn.query_row(
        "SELECT * FROM users WHERE id = ?1",
        params![user_id],
        |row| User::from_row(row),
    )?;
    Ok(user)
}
