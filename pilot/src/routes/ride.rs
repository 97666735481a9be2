use actix_web::{HttpResponse, Responder, get, post, web};

use crate::{
    db::DbPool,
    dtos::ride::{AcceptBody, CancelBody, RideRequestBody, StatusBody, UserRidesQuery},
    error::{ApiError, Res},
    services,
};

fn require(field: Option<String>) -> Res<String> {
    field.ok_or_else(|| ApiError::BadRequest("Missing required fields".to_string()))
}

fn lock_conn(pool: &DbPool) -> Res<std::sync::MutexGuard<'_, rusqlite::Connection>> {
    pool.0
        .lock()
        .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))
}

/// Creates a new ride request and quotes the fare.
#[post("/request")]
async fn post_request_ride(
    body: web::Json<RideRequestBody>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let body = body.into_inner();
    let rider_id = require(body.rider_id)?;
    let pickup = require(body.pickup)?;
    let destination = require(body.destination)?;

    let conn = lock_conn(&pool)?;
    let (ride_id, fare) = services::ride::request_ride(&conn, &rider_id, &pickup, &destination)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "ride_id": ride_id,
        "fare": fare,
    })))
}

/// Pending rides for drivers to pick from.
#[get("/available")]
async fn get_available_rides(pool: web::Data<DbPool>) -> Res<impl Responder> {
    let conn = lock_conn(&pool)?;
    let rides = services::ride::available_rides(&conn)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "rides": rides })))
}

/// Driver accepts a ride; 404 for unknown ride ids.
#[post("/accept")]
async fn post_accept_ride(
    body: web::Json<AcceptBody>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let body = body.into_inner();
    let ride_id = require(body.ride_id)?;
    let driver_id = require(body.driver_id)?;

    let conn = lock_conn(&pool)?;
    services::ride::accept_ride(&conn, &ride_id, &driver_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// Overwrites a ride's status string.
#[post("/status")]
async fn post_update_status(
    body: web::Json<StatusBody>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let body = body.into_inner();
    let ride_id = require(body.ride_id)?;
    let status = require(body.status)?;

    let conn = lock_conn(&pool)?;
    services::ride::update_status(&conn, &ride_id, &status)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// A user's ride history, role-dependent join.
#[get("/my")]
async fn get_my_rides(
    query: web::Query<UserRidesQuery>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let query = query.into_inner();
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("Missing user_id".to_string()))?;
    let role = query.role.unwrap_or_else(|| "rider".to_string());

    let conn = lock_conn(&pool)?;
    let rides = services::ride::rides_for_user(&conn, &user_id, &role)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "rides": rides })))
}

/// Live rides for the polling client.
#[get("/updates")]
async fn get_ride_updates(
    query: web::Query<UserRidesQuery>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let query = query.into_inner();
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("Missing user_id".to_string()))?;
    let role = query.role.unwrap_or_else(|| "rider".to_string());

    let conn = lock_conn(&pool)?;
    let rides = services::ride::ride_updates(&conn, &user_id, &role)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "rides": rides })))
}

/// Rider cancels their own ride; 403 for anyone else.
#[post("/cancel")]
async fn post_cancel_ride(
    body: web::Json<CancelBody>,
    pool: web::Data<DbPool>,
) -> Res<impl Responder> {
    let body = body.into_inner();
    let ride_id = require(body.ride_id)?;
    let user_id = require(body.user_id)?;

    let conn = lock_conn(&pool)?;
    services::ride::cancel_ride(&conn, &ride_id, &user_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
