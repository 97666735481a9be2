use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

/// A nominal in-app currency transfer tied to a ride. `status` progresses
/// pending -> approved -> completed; `txid` is the settlement-network
/// transaction id supplied by the client at completion.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub payment_id: Uuid,
    pub user_id: Uuid,
    pub ride_id: Option<i64>,
    pub amount: f64,
    pub memo: String,
    pub metadata: JsonValue,
    pub status: String,
    pub txid: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
