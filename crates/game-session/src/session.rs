//! Turn-taking state machine for one human-vs-machine game.

use std::time::Duration;

use shakmaty::{
    fen::Fen, san::San, uci::UciMove, CastlingMode, Chess, Color, EnPassantMode, Move, Position,
    Role, Square,
};

use crate::provider::{MoveProvider, ProviderError};

/// Delay before each opponent move, purely for perceived pacing.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Where the session is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingPlayer,
    AwaitingOpponent,
    GameOver,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Checkmate; the winner is the side that delivered it.
    Win(Color),
    /// Stalemate, insufficient material, or any other drawn terminal
    /// condition the engine recognizes. Sub-cases are not distinguished.
    Draw,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid position: {0}")]
    BadPosition(String),

    #[error("session is not awaiting an opponent move")]
    NotOpponentsTurn,

    /// The provider broke its guaranteed-legality contract. Fatal for
    /// the session rather than a silently dropped turn.
    #[error("arbiter contract violated: {0}")]
    ContractViolation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Authoritative state for one human-vs-machine game.
///
/// Single owner of the position. Every mutation happens in response to
/// a discrete event (start, piece drop, provider response) and runs to
/// completion before the next one; at most one opponent request is
/// outstanding because player input is rejected outside
/// [`Phase::AwaitingPlayer`].
pub struct GameSession {
    position: Chess,
    phase: Phase,
    result: Option<GameResult>,
    thinking: bool,
    pacing: Duration,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_pacing(DEFAULT_PACING)
    }

    pub fn with_pacing(pacing: Duration) -> Self {
        GameSession {
            position: Chess::default(),
            phase: Phase::NotStarted,
            result: None,
            thinking: false,
            pacing,
        }
    }

    /// Resume from an arbitrary position; `phase` says whose turn it is.
    pub fn from_fen(fen: &str, phase: Phase) -> Result<Self, SessionError> {
        let position = fen
            .parse::<Fen>()
            .map_err(|e| SessionError::BadPosition(e.to_string()))?
            .into_position(CastlingMode::Standard)
            .map_err(|e| SessionError::BadPosition(e.to_string()))?;
        Ok(GameSession {
            position,
            phase,
            result: None,
            thinking: false,
            pacing: DEFAULT_PACING,
        })
    }

    pub fn set_pacing(&mut self, pacing: Duration) {
        self.pacing = pacing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// True while an opponent request is in flight.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Reset to the initial position and hand the first move to the
    /// opponent. The driver is expected to run `opponent_turn` next.
    pub fn start(&mut self) {
        self.position = Chess::default();
        self.result = None;
        self.thinking = false;
        self.phase = Phase::AwaitingOpponent;
        tracing::info!("session started, opponent to move");
    }

    /// Request one move from the provider and apply it.
    ///
    /// `NoLegalMoves` from the provider is the terminal condition for
    /// the side to move and runs the usual game-over check. A transport
    /// failure is surfaced and leaves the phase unchanged so the driver
    /// can try again; player input stays disabled meanwhile.
    pub async fn opponent_turn<P: MoveProvider>(&mut self, provider: &P) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingOpponent {
            return Err(SessionError::NotOpponentsTurn);
        }

        self.thinking = true;
        tokio::time::sleep(self.pacing).await;
        let outcome = provider.ai_move(&self.fen()).await;
        self.thinking = false;

        let san_str = match outcome {
            Ok(san) => san,
            Err(ProviderError::NoLegalMoves) => {
                if !self.check_terminal() {
                    return Err(SessionError::ContractViolation(
                        "provider reported no legal moves in a live position".into(),
                    ));
                }
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("opponent move unavailable: {e}");
                return Err(e.into());
            }
        };

        let mv = san_str
            .trim()
            .parse::<San>()
            .map_err(|e| SessionError::ContractViolation(format!("unparseable move {san_str:?}: {e}")))?
            .to_move(&self.position)
            .map_err(|e| SessionError::ContractViolation(format!("illegal move {san_str:?}: {e}")))?;

        self.position.play_unchecked(mv);
        tracing::debug!(san = %san_str, "opponent move applied");

        if !self.check_terminal() {
            self.phase = Phase::AwaitingPlayer;
        }
        Ok(())
    }

    /// Attempt a human move. Returns whether it was accepted; a
    /// rejection leaves the session untouched.
    pub fn try_player_move(&mut self, from: Square, to: Square) -> bool {
        if self.phase != Phase::AwaitingPlayer {
            tracing::debug!(%from, %to, phase = ?self.phase, "player move rejected: not player's turn");
            return false;
        }

        let mv = match self.resolve_player_move(from, to) {
            Some(mv) => mv,
            None => {
                tracing::debug!(%from, %to, "player move rejected: illegal");
                return false;
            }
        };

        self.position.play_unchecked(mv);
        tracing::debug!(%from, %to, "player move applied");

        if !self.check_terminal() {
            self.phase = Phase::AwaitingOpponent;
        }
        true
    }

    /// Resolve a from/to pair against the current position, defaulting
    /// promotions to a queen.
    fn resolve_player_move(&self, from: Square, to: Square) -> Option<Move> {
        let plain = UciMove::Normal {
            from,
            to,
            promotion: None,
        };
        if let Ok(mv) = plain.to_move(&self.position) {
            return Some(mv);
        }
        let promoting = UciMove::Normal {
            from,
            to,
            promotion: Some(Role::Queen),
        };
        promoting.to_move(&self.position).ok()
    }

    /// Evaluate terminal conditions on the current position. On
    /// checkmate the winner is the side that just moved; every other
    /// game-over condition is recorded as a draw.
    fn check_terminal(&mut self) -> bool {
        if !self.position.is_game_over() {
            return false;
        }
        let result = if self.position.is_checkmate() {
            GameResult::Win(!self.position.turn())
        } else {
            GameResult::Draw
        };
        tracing::info!(?result, "game over");
        self.result = Some(result);
        self.phase = Phase::GameOver;
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
