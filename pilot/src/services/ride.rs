use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use crate::{
    error::{ApiError, Res},
    models::Ride,
};

/// Quotes a fare in [10.00, 30.00) from the ride id's leading bytes. The id
/// is already random, so no separate RNG draw is needed.
pub fn quote_fare(ride_id: &Uuid) -> f64 {
    let bytes = ride_id.as_bytes();
    let n = u16::from_be_bytes([bytes[0], bytes[1]]) % 2000;
    10.0 + f64::from(n) / 100.0
}

/// Inserts a pending ride and returns its id together with the quoted fare.
pub fn request_ride(
    conn: &Connection,
    rider_id: &str,
    pickup: &str,
    destination: &str,
) -> Res<(String, f64)> {
    let ride_id = Uuid::new_v4();
    let fare = quote_fare(&ride_id);
    conn.execute(
        "INSERT INTO rides (id, rider_id, pickup, destination, fare) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![ride_id.to_string(), rider_id, pickup, destination, fare],
    )?;
    Ok((ride_id.to_string(), fare))
}

/// Pending rides for drivers to pick from, newest first.
pub fn available_rides(conn: &Connection) -> Res<Vec<Ride>> {
    let mut stmt = conn.prepare(
        "SELECT r.*, u.name AS rider_name
         FROM rides r
         JOIN users u ON r.rider_id = u.id
         WHERE r.status = 'pending'
         ORDER BY r.created_at DESC",
    )?;
    let rides = stmt
        .query_map([], |row| Ride::from_row_with_rider(row))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rides)
}

pub fn get_ride(conn: &Connection, ride_id: &str) -> Res<Ride> {
    conn.query_row(
        "SELECT * FROM rides WHERE id = ?1",
        params![ride_id],
        |row| Ride::from_row(row),
    )
    .optional()?
    .ok_or_else(|| ApiError::NotFound("Ride not found".to_string()))
}

/// Assigns the driver and flips the ride to "accepted".
pub fn accept_ride(conn: &Connection, ride_id: &str, driver_id: &str) -> Res<()> {
    get_ride(conn, ride_id)?;
    conn.execute(
        "UPDATE rides SET driver_id = ?1, status = 'accepted', updated_at = CURRENT_TIMESTAMP
         WHERE id = ?2",
        params![driver_id, ride_id],
    )?;
    Ok(())
}

/// Stores the supplied status string verbatim; there is no transition table.
pub fn update_status(conn: &Connection, ride_id: &str, status: &str) -> Res<()> {
    get_ride(conn, ride_id)?;
    conn.execute(
        "UPDATE rides SET status = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
        params![status, ride_id],
    )?;
    Ok(())
}

/// All rides for a user. Riders see the (possibly unassigned) driver's name,
/// drivers see the rider's name.
pub fn rides_for_user(conn: &Connection, user_id: &str, role: &str) -> Res<Vec<Ride>> {
    let rides = if role == "rider" {
        let mut stmt = conn.prepare(
            "SELECT r.*, d.name AS driver_name
             FROM rides r
             LEFT JOIN users d ON r.driver_id = d.id
             WHERE r.rider_id = ?1
             ORDER BY r.created_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| Ride::from_row_with_driver(row))?;
        rows.collect::<Result<Vec<_>, _>>()?
    } else {
        let mut stmt = conn.prepare(
            "SELECT r.*, u.name AS rider_name
             FROM rides r
             JOIN users u ON r.rider_id = u.id
             WHERE r.driver_id = ?1
             ORDER BY r.created_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| Ride::from_row_with_rider(row))?;
        rows.collect::<Result<Vec<_>, _>>()?
    };
    Ok(rides)
}

/// Live rides only, for the polling endpoint. Riders also see their pending
/// requests; drivers only see rides they have picked up.
pub fn ride_updates(conn: &Connection, user_id: &str, role: &str) -> Res<Vec<Ride>> {
    let rides = if role == "rider" {
        let mut stmt = conn.prepare(
            "SELECT r.*, d.name AS driver_name
             FROM rides r
             LEFT JOIN users d ON r.driver_id = d.id
             WHERE r.rider_id = ?1 AND r.status IN ('pending', 'accepted', 'in_progress')
             ORDER BY r.updated_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| Ride::from_row_with_driver(row))?;
        rows.collect::<Result<Vec<_>, _>>()?
    } else {
        let mut stmt = conn.prepare(
            "SELECT r.*, u.name AS rider_name
             FROM rides r
             JOIN users u ON r.rider_id = u.id
             WHERE r.driver_id = ?1 AND r.status IN ('accepted', 'in_progress')
             ORDER BY r.updated_at DESC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| Ride::from_row_with_rider(row))?;
        rows.collect::<Result<Vec<_>, _>>()?
    };
    Ok(rides)
}

/// Cancels a ride; only the requesting rider may cancel their own ride.
pub fn cancel_ride(conn: &Connection, ride_id: &str, user_id: &str) -> Res<()> {
    let ride = get_ride(conn, ride_id)?;
    if ride.rider_id != user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to cancel this ride".to_string(),
        ));
    }
    conn.execute(
        "UPDATE rides SET status = 'cancelled', updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
        params![ride_id],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_stays_in_quoted_range() {
        for _ in 0..256 {
            let fare = quote_fare(&Uuid::new_v4());
            assert!((10.0..30.0).contains(&fare), "fare out of range: {}", fare);
        }
    }

    #[test]
    fn fare_is_deterministic_per_ride() {
        let id = Uuid::new_v4();
        assert_eq!(quote_fare(&id), quote_fare(&id));
    }
}
