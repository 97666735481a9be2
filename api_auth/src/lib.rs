use actix_web::web::{self};

use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}

pub mod routes {
    pub mod auth;
    pub mod user;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
        .service(routes::user::get_me)
}

/// Bearer-token middleware validating JWTs signed with `secret`.
/// Register and login stay public; everything else under /api requires a token.
pub fn auth_middleware(secret: String) -> AuthMiddleware {
    AuthMiddleware::new(secret)
}
