//! Terminal front-end for the arbitration service.
//!
//! Connects to a running server (base URL as the first argument,
//! `http://localhost:8000` by default), starts a game with the machine
//! as White, and reads player moves as square pairs, e.g. `e7e5`.
//! Promotions default to a queen.

use std::io::{self, BufRead, Write};

use game_session::{GameResult, GameSession, Phase, RemoteArbiter};
use shakmaty::{Color, File, Position, Rank, Square};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let provider = RemoteArbiter::new(&base_url);

    let mut session = GameSession::new();
    session.start();
    println!("Game started. The machine plays White; you play Black.");

    loop {
        match session.phase() {
            Phase::AwaitingOpponent => {
                println!("Opponent is thinking...");
                if let Err(e) = session.opponent_turn(&provider).await {
                    eprintln!("Opponent turn failed: {e}");
                    std::process::exit(1);
                }
                print_board(&session);
            }
            Phase::AwaitingPlayer => {
                let Some((from, to)) = read_move() else {
                    continue;
                };
                if !session.try_player_move(from, to) {
                    println!("Illegal move, try again.");
                }
            }
            Phase::GameOver | Phase::NotStarted => break,
        }
    }

    match session.result() {
        Some(GameResult::Win(Color::White)) => println!("Checkmate. The machine wins."),
        Some(GameResult::Win(Color::Black)) => println!("Checkmate. You win!"),
        Some(GameResult::Draw) => println!("Draw."),
        None => {}
    }
}

fn read_move() -> Option<(Square, Square)> {
    print!("Your move (e.g. e7e5): ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let text: String = line.split_whitespace().collect();
    if text.len() != 4 {
        println!("Enter a move as two squares, e.g. e7e5.");
        return None;
    }

    match (text[..2].parse(), text[2..4].parse()) {
        (Ok(from), Ok(to)) => Some((from, to)),
        _ => {
            println!("Could not read that move.");
            None
        }
    }
}

fn print_board(session: &GameSession) {
    let board = session.position().board();
    for rank in (0..8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let glyph = board.piece_at(square).map(|p| p.char()).unwrap_or('.');
            print!("{glyph} ");
        }
        println!();
    }
    println!("  a b c d e f g h");
}
