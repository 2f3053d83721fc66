mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use common::{engine, FakeGenerator, FakeGeocoder};
use enroute::api::DynAPI;
use enroute::server::router;
use hyper::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let api = Arc::new(engine(Arc::new(FakeGeocoder::india()), FakeGenerator::Failing)) as DynAPI;
    router(api)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn place_names(view: &Value) -> Vec<String> {
    view["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn places_endpoint_returns_view() {
    let app = test_app();

    let (status, view) = call(
        &app,
        "POST",
        "/places",
        Some(json!({
            "userSelection": {
                "source": {"label": "Mumbai"},
                "location": {"label": "Delhi"}
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["isLoading"], json!(false));
    assert!(view["error"].is_null());
    assert_eq!(place_names(&view), vec!["Udaipur", "Jaipur", "Ajmer"]);
    assert_eq!(view["places"][0]["coordinates"]["latitude"], json!(24.5854));
}

#[tokio::test]
async fn missing_destination_is_reported_in_the_view() {
    let app = test_app();

    let (status, view) = call(&app, "POST", "/places", Some(json!({"source": "Mumbai"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["error"], json!("Source or destination is missing"));
    assert!(view["places"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn geocode_endpoint() {
    let app = test_app();

    let (status, body) = call(&app, "GET", "/geocode?address=Agra", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"latitude": 27.1767, "longitude": 78.0081}));

    let (status, body) = call(&app, "GET", "/geocode?address=Atlantis", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(100));
}

#[tokio::test]
async fn session_flow() {
    let app = test_app();

    let (status, created) = call(&app, "POST", "/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/sessions/{}/trip", id),
        Some(json!({"source": "Kolkata", "destination": "Delhi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut view = Value::Null;
    for _ in 0..100 {
        let (_, current) = call(&app, "GET", &format!("/sessions/{}", id), None).await;
        if current["isLoading"] == json!(false) {
            view = current;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(place_names(&view).len(), 5);
}

#[tokio::test]
async fn deleted_session_is_no_longer_found() {
    let app = test_app();

    let (_, created) = call(&app, "POST", "/sessions", None).await;
    let uri = format!("/sessions/{}", created["id"].as_str().unwrap());

    let (status, removed) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], created["id"]);

    let (status, _) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_session_is_bad_request() {
    let app = test_app();

    let (status, body) = call(
        &app,
        "GET",
        "/sessions/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid input"));
}
