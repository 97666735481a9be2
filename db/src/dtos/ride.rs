use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct RideCreateRequest {
    pub driver_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub price: f64,
    pub seats_available: i32,
    pub departure_time: DateTime<Utc>,
    pub status: String,
}
