use std::env;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use pilot::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    logger::setup().expect("Failed to set up logger");

    let db_path = PathBuf::from(env::var("PILOT_DB").unwrap_or_else(|_| "openride.db".to_string()));
    let host = env::var("PILOT_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PILOT_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let pool = web::Data::new(db::init_db(&db_path).expect("Failed to open database"));

    HttpServer::new(move || {
        App::new()
            .app_data(pool.clone())
            .wrap(logger::middleware())
            .wrap(Cors::permissive())
            .service(pilot::mount_api())
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
