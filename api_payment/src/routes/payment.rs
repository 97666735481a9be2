use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{
    dtos::payment::{PaymentApproveBody, PaymentCompleteBody, PaymentCreateBody, PaymentResponse},
    services,
};

/// Starts a payment: inserts a row with status "pending".
///
/// # Input
/// - `body`: `{amount, memo, metadata}`; `metadata.rideId` (optional) must
///   reference an existing ride
///
/// # Output
/// - Success: `{status, payment_id, amount, memo, metadata}`
/// - Error: 400 for an unparsable rideId, 404 if the referenced ride does
///   not exist
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/payment/initiate', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     amount: 24.5,
///     memo: 'Ride to the airport',
///     metadata: { rideId: '42' }
///   })
/// });
/// ```
#[post("/initiate")]
async fn post_initiate(
    claims: web::ReqData<JwtClaims>,
    body: web::Json<PaymentCreateBody>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let payment =
        services::payment::initiate_payment(pg_pool, claims.user_id, body.into_inner()).await?;
    Success::ok(PaymentResponse::from(payment))
}

/// Approves a pending payment owned by the caller.
///
/// # Output
/// - Success: the payment with status "approved"
/// - Error: 404 unknown payment id, 403 if it belongs to someone else
#[post("/approve")]
async fn post_approve(
    claims: web::ReqData<JwtClaims>,
    body: web::Json<PaymentApproveBody>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let payment =
        services::payment::approve_payment(pg_pool, claims.user_id, body.payment_id).await?;
    Success::ok(PaymentResponse::from(payment))
}

/// Completes an approved payment and records the client-supplied txid.
///
/// # Output
/// - Success: the payment with status "completed"
/// - Error: 404 unknown payment id, 400 unless the current status is
///   "approved"
#[post("/complete")]
async fn post_complete(
    body: web::Json<PaymentCompleteBody>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let payment =
        services::payment::complete_payment(pg_pool, body.payment_id, &body.txid).await?;
    Success::ok(PaymentResponse::from(payment))
}
