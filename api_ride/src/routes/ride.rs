use std::sync::Arc;

use actix_web::{Responder, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{
    dtos::ride::{RideCreateBody, RideListQuery, RideStatusUpdateBody},
    services,
};

/// Publishes a new ride owned by the authenticated driver.
///
/// # Input
/// - `claims`: JWT claims of the caller; the ride's driver_id
/// - `body`: pickup/dropoff text and coordinates, price, seats, departure time
///
/// # Output
/// - Success: the persisted ride with status "pending" and 201 Created
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/ride/rides/', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     pickup_location: 'Central Station',
///     dropoff_location: 'Airport',
///     pickup_latitude: 52.52, pickup_longitude: 13.40,
///     dropoff_latitude: 52.36, dropoff_longitude: 13.50,
///     price: 24.5, seats_available: 3,
///     departure_time: '2025-05-01T08:30:00Z'
///   })
/// });
/// ```
#[post("/rides/")]
async fn post_create_ride(
    claims: web::ReqData<JwtClaims>,
    body: web::Json<RideCreateBody>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let ride = services::ride::create_ride(pg_pool, claims.user_id, body.into_inner()).await?;
    Success::created(ride)
}

/// Lists rides with simple offset pagination (`skip`/`limit`, defaults 0/10).
#[get("/rides/")]
async fn get_rides(
    query: web::Query<RideListQuery>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(10);
    let rides = services::ride::list_rides(pg_pool, skip, limit).await?;
    Success::ok(rides)
}

/// Fetches a single ride by id; 404 if it does not exist.
#[get("/rides/{ride_id}")]
async fn get_ride(
    path: web::Path<i64>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let ride = services::ride::get_ride(pg_pool, path.into_inner()).await?;
    Success::ok(ride)
}

/// Overwrites a ride's status string.
///
/// # Output
/// - Success: the updated ride
/// - Error: 404 if the ride does not exist, 403 if the caller is not the
///   owning driver
#[put("/rides/{ride_id}/status")]
async fn put_ride_status(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<i64>,
    body: web::Json<RideStatusUpdateBody>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let ride = services::ride::update_ride_status(
        pg_pool,
        path.into_inner(),
        claims.user_id,
        &body.status,
    )
    .await?;
    Success::ok(ride)
}
