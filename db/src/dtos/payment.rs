use sqlx::types::JsonValue;
use uuid::Uuid;

pub struct PaymentCreateRequest {
    pub payment_id: Uuid,
    pub user_id: Uuid,
    pub ride_id: Option<i64>,
    pub amount: f64,
    pub memo: String,
    pub metadata: JsonValue,
    pub status: String,
}
