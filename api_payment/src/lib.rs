use actix_web::web::{self};

pub mod routes {
    pub mod payment;
}

mod services {
    pub(crate) mod payment;
}

mod dtos {
    pub(crate) mod payment;
}

mod models {
    pub(crate) mod status;
}

pub fn mount_payments() -> actix_web::Scope {
    web::scope("/payment")
        .service(routes::payment::post_initiate)
        .service(routes::payment::post_approve)
        .service(routes::payment::post_complete)
}
