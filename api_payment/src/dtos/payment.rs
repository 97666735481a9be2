use std::collections::HashMap;

use db::models::payment::Payment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentCreateBody {
    pub amount: f64,
    pub memo: String,
    /// Free-form string map; `rideId` links the payment to a ride.
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentApproveBody {
    #[serde(alias = "paymentId")]
    pub payment_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct PaymentCompleteBody {
    #[serde(alias = "paymentId")]
    pub payment_id: Uuid,
    pub txid: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub status: String,
    pub payment_id: Uuid,
    pub amount: f64,
    pub memo: String,
    pub metadata: HashMap<String, String>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        let metadata = serde_json::from_value(payment.metadata).unwrap_or_default();
        PaymentResponse {
            status: payment.status,
            payment_id: payment.payment_id,
            amount: payment.amount,
            memo: payment.memo,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_body_accepts_camel_case_alias() {
        let id = Uuid::new_v4();
        let body: PaymentApproveBody =
            serde_json::from_str(&format!("{{\"paymentId\": \"{}\"}}", id)).unwrap();
        assert_eq!(body.payment_id, id);

        let body: PaymentApproveBody =
            serde_json::from_str(&format!("{{\"payment_id\": \"{}\"}}", id)).unwrap();
        assert_eq!(body.payment_id, id);
    }
}
