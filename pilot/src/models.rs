use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub pi_username: String,
    pub name: String,
    pub role: String,
    pub pi_balance: f64,
    pub created_at: String,
}

impl User {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get("id")?,
            pi_username: row.get("pi_username")?,
            name: row.get("name")?,
            role: row.get("role")?,
            pi_balance: row.get("pi_balance")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// A ride row, optionally joined with the counterpart's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    pub rider_id: String,
    pub driver_id: Option<String>,
    pub pickup: String,
    pub destination: String,
    pub status: String,
    pub fare: f64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
}

impl Ride {
    /// Maps a plain `SELECT * FROM rides` row.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Ride {
            id: row.get("id")?,
            rider_id: row.get("rider_id")?,
            driver_id: row.get("driver_id")?,
            pickup: row.get("pickup")?,
            destination: row.get("destination")?,
            status: row.get("status")?,
            fare: row.get("fare")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
            rider_name: None,
            driver_name: None,
        })
    }

    /// Maps a row that also carries a `rider_name` column.
    pub fn from_row_with_rider(row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut ride = Self::from_row(row)?;
        ride.rider_name = row.get("rider_name")?;
        Ok(ride)
    }

    /// Maps a row that also carries a `driver_name` column (LEFT JOIN, may
    /// be NULL while the ride is unassigned).
    pub fn from_row_with_driver(row: &Row<'_>) -> rusqlite::Result<Self> {
        let mut ride = Self::from_row(row)?;
        ride.driver_name = row.get("driver_name")?;
        Ok(ride)
    }
}
