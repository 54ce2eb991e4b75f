//! Session controller for a human-vs-machine chess game.
//!
//! Owns the authoritative board state for one game, enforces strict
//! alternating turns, and drives the automated opponent through a
//! [`MoveProvider`]. Board rendering and input capture live elsewhere;
//! this crate is only the state machine.

pub mod provider;
pub mod remote;
pub mod session;

pub use provider::{MoveProvider, ProviderError};
pub use remote::RemoteArbiter;
pub use session::{GameResult, GameSession, Phase, SessionError};
