#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use rps_arena::config::Config;
use rps_arena::game::GameStore;
use rps_arena::messages::{ErrorResponse, GameResponse};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestServer {
    base_url: String,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let app = rps_arena::app_with_config(Arc::new(GameStore::new()), &Config::default());
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn create_request(name: &str) -> Request<Body> {
    json_request("POST", "/api/rpsgame", json!({ "name": name }))
}

pub fn join_request(id: i64, name: &str) -> Request<Body> {
    json_request("PATCH", &format!("/api/rpsgame/{id}/join"), json!({ "name": name }))
}

pub fn move_request(id: i64, name: &str, player_move: &str) -> Request<Body> {
    json_request(
        "PATCH",
        &format!("/api/rpsgame/{id}/move"),
        json!({ "name": name, "move": player_move }),
    )
}

pub fn get_request(id: i64) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/rpsgame/{id}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a successful game response and decode it
pub async fn expect_game(response: Response<Body>) -> GameResponse {
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

/// Assert an error status and return the error message
pub async fn expect_error(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    read_json::<ErrorResponse>(response).await.message
}
