use actix_web::{HttpResponse, Responder, post, web};
use uuid::Uuid;

use crate::{
    db::DbPool,
    dtos::ride::LoginBody,
    error::{ApiError, Res},
    services,
};

/// Simulated network login. Missing fields fall back to generated defaults
/// so the demo client can log in with an empty body.
#[post("/login")]
async fn post_login(body: web::Json<LoginBody>, pool: web::Data<DbPool>) -> Res<impl Responder> {
    let body = body.into_inner();
    let pi_username = body
        .pi_username
        .unwrap_or_else(|| format!("pi_user_{}", &Uuid::new_v4().simple().to_string()[..8]));
    let name = body.name.unwrap_or_else(|| "Pi User".to_string());
    let role = body.role.unwrap_or_else(|| "rider".to_string());

    let conn = pool
        .0
        .lock()
        .map_err(|_| ApiError::Internal("database lock poisoned".to_string()))?;
    let user = services::auth::login_or_create(&conn, &pi_username, &name, &role)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "user": user,
    })))
}
