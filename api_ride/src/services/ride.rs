use common::error::{AppError, Res};
use db::{dtos::ride::RideCreateRequest, models::ride::Ride};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::ride::RideCreateBody;

/// New rides always start out pending.
const INITIAL_STATUS: &str = "pending";

pub async fn create_ride(pool: &PgPool, driver_id: Uuid, body: RideCreateBody) -> Res<Ride> {
    db::ride::insert_ride(
        pool,
        RideCreateRequest {
            driver_id,
            pickup_location: body.pickup_location,
            dropoff_location: body.dropoff_location,
            pickup_latitude: body.pickup_latitude,
            pickup_longitude: body.pickup_longitude,
            dropoff_latitude: body.dropoff_latitude,
            dropoff_longitude: body.dropoff_longitude,
            price: body.price,
            seats_available: body.seats_available,
            departure_time: body.departure_time,
            status: INITIAL_STATUS.to_string(),
        },
    )
    .await
}

pub async fn list_rides(pool: &PgPool, skip: i64, limit: i64) -> Res<Vec<Ride>> {
    db::ride::list_rides(pool, skip, limit).await
}

pub async fn get_ride(pool: &PgPool, ride_id: i64) -> Res<Ride> {
    db::ride::get_ride_by_id(pool, ride_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))
}

fn ensure_owned_by(ride: &Ride, caller_id: Uuid) -> Res<()> {
    if ride.driver_id != caller_id {
        return Err(AppError::Forbidden(
            "Not authorized to update this ride".to_string(),
        ));
    }
    Ok(())
}

/// Stores the supplied status string verbatim. Only the owning driver may
/// update a ride; the status value itself is not validated.
pub async fn update_ride_status(
    pool: &PgPool,
    ride_id: i64,
    caller_id: Uuid,
    status: &str,
) -> Res<Ride> {
    let ride = get_ride(pool, ride_id).await?;
    ensure_owned_by(&ride, caller_id)?;
    db::ride::update_ride_status(pool, ride_id, status).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ride_owned_by(driver_id: Uuid) -> Ride {
        Ride {
            id: 1,
            driver_id,
            pickup_location: "Central Station".to_string(),
            dropoff_location: "Airport".to_string(),
            pickup_latitude: 52.52,
            pickup_longitude: 13.40,
            dropoff_latitude: 52.36,
            dropoff_longitude: 13.50,
            status: INITIAL_STATUS.to_string(),
            price: 24.5,
            seats_available: 3,
            departure_time: Utc::now(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn only_the_owning_driver_may_update_status() {
        let driver = Uuid::new_v4();
        let ride = ride_owned_by(driver);
        assert!(ensure_owned_by(&ride, driver).is_ok());
        assert!(matches!(
            ensure_owned_by(&ride, Uuid::new_v4()),
            Err(AppError::Forbidden(_))
        ));
    }
}
