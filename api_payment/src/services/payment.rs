use std::collections::HashMap;

use common::error::{AppError, Res};
use db::{dtos::payment::PaymentCreateRequest, models::payment::Payment};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{dtos::payment::PaymentCreateBody, models::status::PaymentStatus};

/// Extracts the linked ride id from the metadata map, if any. Presence of a
/// `rideId` key that does not parse as an id is a client error.
fn linked_ride_id(metadata: &HashMap<String, String>) -> Res<Option<i64>> {
    match metadata.get("rideId") {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest("Invalid rideId in metadata".to_string())),
        None => Ok(None),
    }
}

/// Builds the insert for a fresh pending payment. The amount is taken as-is,
/// zero and negative included.
fn new_payment_request(
    user_id: Uuid,
    body: PaymentCreateBody,
    ride_id: Option<i64>,
) -> Res<PaymentCreateRequest> {
    let metadata = serde_json::to_value(&body.metadata)
        .map_err(|e| AppError::Internal(format!("Failed to serialize metadata: {}", e)))?;
    Ok(PaymentCreateRequest {
        payment_id: Uuid::new_v4(),
        user_id,
        ride_id,
        amount: body.amount,
        memo: body.memo,
        metadata,
        status: PaymentStatus::Pending.as_str().to_string(),
    })
}

fn require_payment(found: Option<Payment>) -> Res<Payment> {
    found.ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
}

fn ensure_owned_by(payment: &Payment, user_id: Uuid) -> Res<()> {
    if payment.user_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to approve this payment".to_string(),
        ));
    }
    Ok(())
}

fn ensure_completable(payment: &Payment) -> Res<()> {
    if payment.status != PaymentStatus::Approved.as_str() {
        return Err(AppError::BadRequest(
            "Payment must be approved first".to_string(),
        ));
    }
    Ok(())
}

/// Creates a pending payment row with a freshly generated payment id.
///
/// The amount is stored as-is, zero and negative included. There is no
/// idempotency key beyond the generated identifier, so client retries create
/// duplicate rows. If the metadata carries a `rideId` it must reference an
/// existing ride.
pub async fn initiate_payment(
    pool: &PgPool,
    user_id: Uuid,
    body: PaymentCreateBody,
) -> Res<Payment> {
    let ride_id = match linked_ride_id(&body.metadata)? {
        Some(id) => {
            db::ride::get_ride_by_id(pool, id)
                .await?
                .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;
            Some(id)
        }
        None => None,
    };

    db::payment::insert_payment(pool, new_payment_request(user_id, body, ride_id)?).await
}

/// Marks a payment approved.
///
/// The payment must exist and belong to the caller. The current status is not
/// checked, so an already-completed payment can be re-approved.
pub async fn approve_payment(pool: &PgPool, user_id: Uuid, payment_id: Uuid) -> Res<Payment> {
    let payment =
        require_payment(db::payment::get_payment_by_payment_id(pool, payment_id).await?)?;
    ensure_owned_by(&payment, user_id)?;
    db::payment::set_payment_status(pool, payment_id, PaymentStatus::Approved.as_str()).await
}

/// Completes an approved payment, recording the supplied transaction id
/// verbatim; no ledger verification happens here. If the payment is linked to
/// a ride, that ride is flagged "paid".
pub async fn complete_payment(pool: &PgPool, payment_id: Uuid, txid: &str) -> Res<Payment> {
    let payment =
        require_payment(db::payment::get_payment_by_payment_id(pool, payment_id).await?)?;
    ensure_completable(&payment)?;

    let payment = db::payment::complete_payment(pool, payment_id, txid).await?;

    if let Some(ride_id) = payment.ride_id {
        db::ride::update_ride_status(pool, ride_id, "paid").await?;
    }

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn payment_with(status: &str, user_id: Uuid) -> Payment {
        Payment {
            id: 1,
            payment_id: Uuid::new_v4(),
            user_id,
            ride_id: None,
            amount: 24.5,
            memo: "Ride to the airport".to_string(),
            metadata: serde_json::json!({}),
            status: status.to_string(),
            txid: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn complete_requires_approved_status() {
        let owner = Uuid::new_v4();
        for status in ["pending", "completed", "garbage"] {
            let result = ensure_completable(&payment_with(status, owner));
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }
        assert!(ensure_completable(&payment_with("approved", owner)).is_ok());
    }

    #[test]
    fn approve_of_unknown_payment_is_not_found() {
        assert!(matches!(
            require_payment(None),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn only_the_owner_may_approve() {
        let owner = Uuid::new_v4();
        let payment = payment_with("pending", owner);
        assert!(ensure_owned_by(&payment, owner).is_ok());
        assert!(matches!(
            ensure_owned_by(&payment, Uuid::new_v4()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn zero_and_negative_amounts_are_accepted() {
        for amount in [0.0, -5.0] {
            let body = PaymentCreateBody {
                amount,
                memo: "test".to_string(),
                metadata: HashMap::new(),
            };
            let request = new_payment_request(Uuid::new_v4(), body, None).unwrap();
            assert_eq!(request.amount, amount);
            assert_eq!(request.status, PaymentStatus::Pending.as_str());
        }
    }

    #[test]
    fn ride_link_parses_or_rejects() {
        let mut metadata = HashMap::new();
        assert_eq!(linked_ride_id(&metadata).unwrap(), None);

        metadata.insert("rideId".to_string(), "42".to_string());
        assert_eq!(linked_ride_id(&metadata).unwrap(), Some(42));

        metadata.insert("rideId".to_string(), "not-a-number".to_string());
        assert!(matches!(
            linked_ride_id(&metadata),
            Err(AppError::BadRequest(_))
        ));
    }
}
