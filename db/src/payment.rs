use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::payment::PaymentCreateRequest, models::payment::Payment};

pub async fn insert_payment<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: PaymentCreateRequest,
) -> Res<Payment> {
    sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (payment_id, user_id, ride_id, amount, memo, metadata, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.payment_id)
    .bind(data.user_id)
    .bind(data.ride_id)
    .bind(data.amount)
    .bind(data.memo)
    .bind(data.metadata)
    .bind(data.status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_payment_by_payment_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_id: Uuid,
) -> Res<Option<Payment>> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE payment_id = $1")
        .bind(payment_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn set_payment_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_id: Uuid,
    status: &str,
) -> Res<Payment> {
    sqlx::query_as::<_, Payment>(
        "UPDATE payments SET status = $2, updated_at = now() WHERE payment_id = $1 RETURNING *",
    )
    .bind(payment_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn complete_payment<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_id: Uuid,
    txid: &str,
) -> Res<Payment> {
    sqlx::query_as::<_, Payment>(
        r#"
        UPDATE payments
        SET status = 'completed', txid = $2, updated_at = now()
        WHERE payment_id = $1
        RETURNING *
        "#,
    )
    .bind(payment_id)
    .bind(txid)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
