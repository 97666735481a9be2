use actix_web::web::{self};

pub mod routes {
    pub mod ride;
}

mod services {
    pub(crate) mod ride;
}

mod dtos {
    pub(crate) mod ride;
}

pub fn mount_rides() -> actix_web::Scope {
    web::scope("/ride")
        .service(routes::ride::post_create_ride)
        .service(routes::ride::get_rides)
        .service(routes::ride::get_ride)
        .service(routes::ride::put_ride_status)
}
