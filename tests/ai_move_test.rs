//! Black-box tests for the move arbitration endpoint.

mod common;

use serde_json::{json, Value};
use shakmaty::{san::San, Chess};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
// Final position of the fool's mate; the side to move is checkmated.
const FOOLS_MATE_FEN: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

#[tokio::test]
async fn returns_a_legal_move_for_the_start_position() {
    let base = common::spawn_server().await;

    let resp = common::client()
        .post(format!("{base}/api/ai-move"))
        .json(&json!({ "fen": START_FEN }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    let san_str = body["move"].as_str().expect("move field");

    // The returned token must resolve to a legal move at the start
    // position.
    let pos = Chess::default();
    let san: San = san_str.parse().expect("parseable SAN");
    san.to_move(&pos)
        .unwrap_or_else(|_| panic!("server returned illegal move {san_str}"));
}

#[tokio::test]
async fn mated_position_is_a_bad_request_without_a_move() {
    let base = common::spawn_server().await;

    let resp = common::client()
        .post(format!("{base}/api/ai-move"))
        .json(&json!({ "fen": FOOLS_MATE_FEN }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(body.get("move").is_none());
}

#[tokio::test]
async fn unparseable_fen_is_a_server_error_without_a_move() {
    let base = common::spawn_server().await;

    let resp = common::client()
        .post(format!("{base}/api/ai-move"))
        .json(&json!({ "fen": "definitely not a fen" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(body.get("move").is_none());
}

#[tokio::test]
async fn health_check_responds() {
    let base = common::spawn_server().await;

    let resp = common::client()
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
}
