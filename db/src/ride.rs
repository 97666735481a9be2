use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{dtos::ride::RideCreateRequest, models::ride::Ride};

pub async fn insert_ride<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: RideCreateRequest,
) -> Res<Ride> {
    sqlx::query_as::<_, Ride>(
        r#"
        INSERT INTO rides (
            driver_id, pickup_location, dropoff_location,
            pickup_latitude, pickup_longitude, dropoff_latitude, dropoff_longitude,
            status, price, seats_available, departure_time
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(data.driver_id)
    .bind(data.pickup_location)
    .bind(data.dropoff_location)
    .bind(data.pickup_latitude)
    .bind(data.pickup_longitude)
    .bind(data.dropoff_latitude)
    .bind(data.dropoff_longitude)
    .bind(data.status)
    .bind(data.price)
    .bind(data.seats_available)
    .bind(data.departure_time)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_rides<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    skip: i64,
    limit: i64,
) -> Res<Vec<Ride>> {
    sqlx::query_as::<_, Ride>("SELECT * FROM rides ORDER BY id OFFSET $1 LIMIT $2")
        .bind(skip)
        .bind(limit)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_ride_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    ride_id: i64,
) -> Res<Option<Ride>> {
    sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = $1")
        .bind(ride_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn update_ride_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    ride_id: i64,
    status: &str,
) -> Res<Ride> {
    sqlx::query_as::<_, Ride>(
        "UPDATE rides SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(ride_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
