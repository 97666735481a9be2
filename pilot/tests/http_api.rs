use actix_web::{App, test, web};
use serde_json::{Value, json};

use pilot::db;

async fn spawn_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let pool = web::Data::new(db::init_db_in_memory().expect("in-memory database"));
    test::init_service(App::new().app_data(pool).service(pilot::mount_api())).await
}

async fn login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    pi_username: &str,
    name: &str,
    role: &str,
) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "pi_username": pi_username, "name": name, "role": role }))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    assert_eq!(body["success"], json!(true));
    body["user"].clone()
}

#[actix_web::test]
async fn request_then_list_available() {
    let app = spawn_app().await;
    let rider = login(&app, "pi_alice", "Alice", "rider").await;
    assert!(rider["created_at"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/rides/request")
        .set_json(json!({
            "rider_id": rider["id"],
            "pickup": "Main St",
            "destination": "Airport"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    let ride_id = body["ride_id"].as_str().unwrap().to_string();
    assert!(body["fare"].as_f64().unwrap() >= 10.0);

    let req = test::TestRequest::get()
        .uri("/api/rides/available")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rides = body["rides"].as_array().unwrap();
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0]["id"], json!(ride_id));
    assert_eq!(rides[0]["rider_name"], json!("Alice"));
}

#[actix_web::test]
async fn request_with_missing_fields_is_a_bad_request() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/api/rides/request")
        .set_json(json!({ "pickup": "Main St" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);
}

#[actix_web::test]
async fn accept_unknown_ride_is_not_found() {
    let app = spawn_app().await;
    let driver = login(&app, "pi_bob", "Bob", "driver").await;

    let req = test::TestRequest::post()
        .uri("/api/rides/accept")
        .set_json(json!({ "ride_id": "no-such-ride", "driver_id": driver["id"] }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}

#[actix_web::test]
async fn cancel_by_stranger_is_forbidden() {
    let app = spawn_app().await;
    let rider = login(&app, "pi_alice", "Alice", "rider").await;
    let other = login(&app, "pi_mallory", "Mallory", "rider").await;

    let req = test::TestRequest::post()
        .uri("/api/rides/request")
        .set_json(json!({
            "rider_id": rider["id"],
            "pickup": "A",
            "destination": "B"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ride_id = body["ride_id"].clone();

    let req = test::TestRequest::post()
        .uri("/api/rides/cancel")
        .set_json(json!({ "ride_id": ride_id, "user_id": other["id"] }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 403);
}

#[actix_web::test]
async fn my_rides_requires_user_id() {
    let app = spawn_app().await;

    let req = test::TestRequest::get().uri("/api/rides/my").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);
}
