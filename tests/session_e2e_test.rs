//! End-to-end tests: the session controller driving the HTTP arbiter.

mod common;

use std::time::Duration;

use game_session::{GameSession, Phase, RemoteArbiter};
use shakmaty::{Color, Position};

#[tokio::test]
async fn start_applies_the_opponents_first_move() {
    let base = common::spawn_server().await;
    let provider = RemoteArbiter::new(&base);

    let mut session = GameSession::with_pacing(Duration::ZERO);
    session.start();
    let initial = session.fen();

    session.opponent_turn(&provider).await.unwrap();

    // One ply deeper, human to move.
    assert_eq!(session.phase(), Phase::AwaitingPlayer);
    assert_ne!(session.fen(), initial);
    assert_eq!(session.position().turn(), Color::Black);
}

#[tokio::test]
async fn full_turn_cycle_alternates_sides() {
    let base = common::spawn_server().await;
    let provider = RemoteArbiter::new(&base);

    let mut session = GameSession::with_pacing(Duration::ZERO);
    session.start();
    session.opponent_turn(&provider).await.unwrap();

    // Reply with any currently legal move.
    let legals = session.position().legal_moves();
    let reply = legals.iter().next().expect("black has legal moves");
    let from = reply.from().expect("normal move");
    let to = reply.to();
    assert!(session.try_player_move(from, to));
    assert_eq!(session.phase(), Phase::AwaitingOpponent);

    session.opponent_turn(&provider).await.unwrap();

    // No game can end this early; it is the player's move again.
    assert_eq!(session.phase(), Phase::AwaitingPlayer);
    assert_eq!(session.position().turn(), Color::Black);
}
