mod cors;

use actix_web::{
    App, HttpResponse, HttpServer, Responder, get,
    web::{self},
};
use common::env_config::Config;

/// Liveness root for load balancers and the demo client.
#[get("/")]
async fn get_root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "OpenRide backend is running!" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    HttpServer::new(move || {
        let secret = config_data.jwt_config.secret.clone();
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(logger::middleware()) // 3rd
            .wrap(api_auth::auth_middleware(secret)) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(get_root)
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_ride::mount_rides())
                    .service(api_payment::mount_payments()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn root_reports_liveness() {
        let app = test::init_service(App::new().service(get_root)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "OpenRide backend is running!");
    }
}
