mod common;

use common::*;
use rps_arena::game::{GameState, Move};
use rps_arena::messages::GameResponse;
use serde_json::json;

#[tokio::test]
async fn full_game_over_http() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();

    let game: GameResponse = client
        .post(server.url("/api/rpsgame"))
        .json(&json!({ "name": "Alice" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(game.state, GameState::WaitingForPlayer);
    let id = game.id;

    let game: GameResponse = client
        .patch(server.url(&format!("/api/rpsgame/{id}/join")))
        .json(&json!({ "name": "Bob" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(game.player2.as_deref(), Some("Bob"));

    for (name, player_move) in [("Alice", "Paper"), ("Bob", "Scissors")] {
        let response = client
            .patch(server.url(&format!("/api/rpsgame/{id}/move")))
            .json(&json!({ "name": name, "move": player_move }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let game: GameResponse = client
        .get(server.url(&format!("/api/rpsgame/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(game.player1_move, Some(Move::Paper));
    assert_eq!(game.player2_move, Some(Move::Scissors));
    assert_eq!(game.state, GameState::Completed);
    assert_eq!(game.winner.as_deref(), Some("Bob"));
}

#[tokio::test]
async fn concurrent_games_get_unique_ids() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();

    let requests = (0..20).map(|i| {
        let client = client.clone();
        let url = server.url("/api/rpsgame");
        tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "name": format!("player{i}") }))
                .send()
                .await
                .unwrap()
                .json::<GameResponse>()
                .await
                .unwrap()
                .id
        })
    });

    let mut ids = Vec::new();
    for handle in requests.collect::<Vec<_>>() {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn error_statuses_reach_the_client() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/rpsgame/404"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Game with ID '404' was not found");
}
