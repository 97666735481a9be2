use common::{
    error::{AppError, Res},
    password,
};
use db::models::user::User;
use sqlx::PgPool;

use crate::dtos::auth::LoginRequest;

/// Authenticates an existing user.
/// If the user does not exist, returns 400.
/// If the password does not match the stored hash, returns 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let user = db::user::get_user_by_username(pool, &login_data.username)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("User with this username does not exist".to_string())
        })?;

    let is_valid = password::verify_password(&login_data.password, &user.password_hash)?;

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
