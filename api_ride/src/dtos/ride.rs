use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RideCreateBody {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub price: f64,
    pub seats_available: i32,
    pub departure_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RideListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RideStatusUpdateBody {
    pub status: String,
}
