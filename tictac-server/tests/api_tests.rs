//! Integration tests for tictac-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tictac_server::{create_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new());
    create_router(&config, state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn post_raw(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();
    let (status, json) = get(&app, "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "alpha-beta");
    assert_eq!(json["board_size"], 3);
    assert_eq!(json["game_active"], false);
    assert_eq!(json["game_outcome"], Value::Null);
}

#[tokio::test]
async fn test_status_tracks_game() {
    let app = test_app();
    post(&app, "/api/game/start", json!({ "player_side": "O" })).await;

    let (_, json) = get(&app, "/api/status").await;
    assert_eq!(json["game_active"], true);
    assert_eq!(json["game_outcome"], "Undetermined");
}

#[tokio::test]
async fn test_board_endpoint() {
    let app = test_app();
    let (status, json) = get(&app, "/api/board").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"], 3);
    assert_eq!(json["lines"].as_array().unwrap().len(), 8);
    assert_eq!(json["lines"][0], json!([[0, 0], [0, 1], [0, 2]]));
    assert_eq!(json["line_names"][7], "anti-diagonal");
}

#[tokio::test]
async fn test_analyze_open_board() {
    let app = test_app();
    let (status, json) = post(&app, "/api/analyze", json!({ "board": "XX./OO./..." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["board"], "XX.OO....");
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["legal_moves"].as_array().unwrap().len(), 5);
    assert_eq!(json["legal_moves"][0], json!({ "row": 0, "col": 2 }));
    assert_eq!(json["winner"], Value::Null);
    assert_eq!(json["terminal"], false);
    assert_eq!(json["outcome"], "Undetermined");
    assert!(json.get("utility").is_none());
}

#[tokio::test]
async fn test_analyze_finished_board() {
    let app = test_app();
    let (status, json) = post(&app, "/api/analyze", json!({ "board": "XXXOO...." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["winner"], "X");
    assert_eq!(json["terminal"], true);
    assert_eq!(json["outcome"], "XWins");
    assert_eq!(json["utility"], 1);
}

#[tokio::test]
async fn test_best_move_endpoint() {
    let app = test_app();
    let (status, json) = post(&app, "/api/best-move", json!({ "board": "XX.OO...." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["best_move"], json!({ "row": 0, "col": 2 }));
    assert_eq!(json["value"], 1);
    assert!(json["nodes"].as_u64().unwrap() > 1);
}

#[tokio::test]
async fn test_best_move_empty_board() {
    let app = test_app();
    let (status, json) = post(&app, "/api/best-move", json!({ "board": "........." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["best_move"], json!({ "row": 0, "col": 0 }));
    assert_eq!(json["value"], 0);
}

#[tokio::test]
async fn test_best_move_on_terminal_board() {
    let app = test_app();
    let (status, json) = post(&app, "/api/best-move", json!({ "board": "XOXXOOOXX" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["best_move"], Value::Null);
    assert_eq!(json["value"], 0);
}

#[tokio::test]
async fn test_malformed_board_rejected() {
    let app = test_app();
    let (status, _) = post(&app, "/api/best-move", json!({ "board": "XX" })).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_game_inactive_by_default() {
    let app = test_app();
    let (status, json) = get(&app, "/api/game/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["active"], false);

    let (status, json) = post(&app, "/api/game/move", json!({ "row": 0, "col": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "no game in progress");
}

#[tokio::test]
async fn test_game_human_plays_x() {
    let app = test_app();
    let (status, json) = post(&app, "/api/game/start", json!({ "player_side": "X" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["active"], true);
    assert_eq!(json["board"], ".........");
    assert_eq!(json["human_to_move"], true);

    // Human takes the center, engine answers immediately
    let (status, json) = post(&app, "/api/game/move", json!({ "row": 1, "col": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["history"].as_array().unwrap().len(), 2);
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["human_to_move"], true);
}

#[tokio::test]
async fn test_game_engine_opens_when_human_plays_o() {
    let app = test_app();
    let (status, json) = post(&app, "/api/game/start", json!({ "player_side": "O" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["human"], "O");
    assert_eq!(json["history"], json!([{ "row": 0, "col": 0 }]));
    assert_eq!(json["board"], "X........");
    assert_eq!(json["human_to_move"], true);
}

#[tokio::test]
async fn test_game_start_rejects_unknown_side() {
    let app = test_app();
    let (status, json) = post(&app, "/api/game/start", json!({ "player_side": "Z" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid start request"));

    // No session was created
    let (_, json) = get(&app, "/api/game/state").await;
    assert_eq!(json["active"], false);
}

#[tokio::test]
async fn test_game_start_rejects_malformed_json() {
    let app = test_app();
    let (status, _) = post_raw(&app, "/api/game/start", "{\"player_side\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_game_start_empty_body_human_plays_x() {
    let app = test_app();
    let (status, json) = post_raw(&app, "/api/game/start", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["human"], "X");
    assert_eq!(json["board"], ".........");
}

#[tokio::test]
async fn test_game_rejects_occupied_cell() {
    let app = test_app();
    post(&app, "/api/game/start", json!({ "player_side": "O" })).await;

    let (status, json) = post(&app, "/api/game/move", json!({ "row": 0, "col": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "cell (0, 0) is already occupied");

    // Board unchanged
    let (_, json) = get(&app, "/api/game/state").await;
    assert_eq!(json["board"], "X........");
}

#[tokio::test]
async fn test_game_rejects_out_of_bounds() {
    let app = test_app();
    post(&app, "/api/game/start", json!({})).await;

    let (status, json) = post(&app, "/api/game/move", json!({ "row": 3, "col": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "move (3, 0) is outside the 3x3 board");
}

#[tokio::test]
async fn test_engine_self_play_through_api_draws() {
    let app = test_app();
    post(&app, "/api/game/start", json!({ "player_side": "X" })).await;

    let mut last = Value::Null;
    for _ in 0..9 {
        let (status, json) = post(&app, "/api/game/ai-move", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        last = json;
    }

    assert_eq!(last["outcome"], "Draw");

    let (status, json) = post(&app, "/api/game/ai-move", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "game is already over");
}
