//! Self-contained prototype backend over an embedded SQLite file.
//!
//! This surface predates the ORM-backed service and is kept as an
//! independent demo: no authentication, identity travels as a plain request
//! field, and the store is a single `rusqlite` connection behind a mutex.

use actix_web::web::{self};

pub mod db;
pub mod error;
pub mod models;

pub mod routes {
    pub mod auth;
    pub mod ride;
}

pub mod services {
    pub mod auth;
    pub mod ride;
}

mod dtos {
    pub(crate) mod ride;
}

pub fn mount_api() -> actix_web::Scope {
    web::scope("/api")
        .service(routes::auth::post_login)
        .service(
            web::scope("/rides")
                .service(routes::ride::post_request_ride)
                .service(routes::ride::get_available_rides)
                .service(routes::ride::post_accept_ride)
                .service(routes::ride::post_update_status)
                .service(routes::ride::get_my_rides)
                .service(routes::ride::get_ride_updates)
                .service(routes::ride::post_cancel_ride),
        )
}
