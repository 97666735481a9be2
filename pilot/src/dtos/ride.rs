use serde::Deserialize;

/// Request bodies are loosely typed: every field arrives optional and
/// handlers reject missing ones with 400.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub pi_username: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RideRequestBody {
    pub rider_id: Option<String>,
    pub pickup: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AcceptBody {
    pub ride_id: Option<String>,
    pub driver_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub ride_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CancelBody {
    pub ride_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserRidesQuery {
    pub user_id: Option<String>,
    pub role: Option<String>,
}
