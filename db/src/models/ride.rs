use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A transport offer published by a driver. `status` is a plain string
/// ("pending", "active", "completed", "cancelled", "paid" by convention).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Ride {
    pub id: i64,
    pub driver_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub status: String,
    pub price: f64,
    pub seats_available: i32,
    pub departure_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
