use common::{
    error::{AppError, Res},
    password,
};
use db::{dtos::user::UserCreateRequest, models::user::User};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::RegisterRequest;

pub async fn exists_user_by_username(pool: &PgPool, username: &str) -> Res<bool> {
    db::user::exists_user_by_username(pool, username).await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Hashes the supplied password and inserts the user row.
pub async fn create_user_with_credentials(pool: &PgPool, data: &RegisterRequest) -> Res<User> {
    let password_hash = password::hash_password(&data.password)?;
    db::user::insert_user(
        pool,
        UserCreateRequest {
            username: data.username.clone(),
            password_hash,
            role: data.role.clone().unwrap_or_else(|| "rider".to_string()),
        },
    )
    .await
}
