//! Move arbitration: turn an external suggestion (or the lack of one)
//! into a guaranteed legal move.
//!
//! The arbitration contract never fails outward for recoverable causes:
//! a missing, malformed, illegal, or failed suggestion is absorbed by a
//! uniformly random pick from the legal move set. Exactly one request
//! is made per call; there is no retry and no arbiter-level timeout.

use async_trait::async_trait;
use rand::Rng;
use shakmaty::{fen::Fen, san::San, CastlingMode, Chess, Position};

/// External text-generation collaborator.
#[async_trait]
pub trait MoveSuggester: Send + Sync {
    /// Issue a single bounded-length generation request.
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArbiterError {
    /// The position is terminal; interpretation is left to the caller.
    #[error("no legal moves in position")]
    NoLegalMoves,

    #[error("invalid position: {0}")]
    BadPosition(String),
}

/// Outcome of the suggestion phase, before any dice are rolled.
enum Arbitration {
    /// The suggested move is a byte-exact member of the legal set.
    Suggested(String),
    /// No usable suggestion; pick at random from these.
    Fallback(Vec<String>),
}

pub struct Arbiter<S> {
    suggester: Option<S>,
}

impl<S: MoveSuggester> Arbiter<S> {
    /// `None` means no credential is configured; the arbiter then never
    /// touches the network and always picks at random.
    pub fn new(suggester: Option<S>) -> Self {
        Arbiter { suggester }
    }

    /// Select one legal SAN move for the side to move in `fen`.
    pub async fn select_move(&self, fen: &str) -> Result<String, ArbiterError> {
        match self.arbitrate(fen).await? {
            Arbitration::Suggested(san) => Ok(san),
            Arbitration::Fallback(legal) => Ok(random_move(&legal, &mut rand::thread_rng())),
        }
    }

    /// [`Self::select_move`] with an injected randomness source, so the
    /// fallback path is deterministic under test.
    pub async fn select_move_with_rng<R: Rng + Send>(
        &self,
        fen: &str,
        rng: &mut R,
    ) -> Result<String, ArbiterError> {
        match self.arbitrate(fen).await? {
            Arbitration::Suggested(san) => Ok(san),
            Arbitration::Fallback(legal) => Ok(random_move(&legal, rng)),
        }
    }

    /// Enumerate the legal set and run the single suggestion attempt.
    async fn arbitrate(&self, fen: &str) -> Result<Arbitration, ArbiterError> {
        let pos: Chess = fen
            .parse::<Fen>()
            .map_err(|e| ArbiterError::BadPosition(e.to_string()))?
            .into_position(CastlingMode::Standard)
            .map_err(|e| ArbiterError::BadPosition(e.to_string()))?;

        let legal = legal_sans(&pos);
        if legal.is_empty() {
            return Err(ArbiterError::NoLegalMoves);
        }

        let suggester = match &self.suggester {
            Some(s) => s,
            None => {
                tracing::debug!("no suggestion service configured, picking at random");
                return Ok(Arbitration::Fallback(legal));
            }
        };

        let prompt = build_prompt(fen, &legal);
        let candidate = match suggester.complete(&prompt).await {
            Ok(text) => text.split_whitespace().next().map(|t| t.to_string()),
            Err(e) => {
                tracing::warn!("suggestion request failed, falling back to random: {e}");
                None
            }
        };

        match candidate {
            Some(san) if legal.contains(&san) => {
                tracing::debug!(%san, "suggestion accepted");
                Ok(Arbitration::Suggested(san))
            }
            Some(san) => {
                tracing::debug!(%san, "suggested move not in legal set, falling back to random");
                Ok(Arbitration::Fallback(legal))
            }
            None => Ok(Arbitration::Fallback(legal)),
        }
    }
}

/// All legal moves from `pos` in SAN, recomputed fresh every call and
/// never cached across positions.
fn legal_sans(pos: &Chess) -> Vec<String> {
    pos.legal_moves()
        .iter()
        .map(|mv| San::from_move(pos, *mv).to_string())
        .collect()
}

fn random_move<R: Rng>(legal: &[String], rng: &mut R) -> String {
    legal[rng.gen_range(0..legal.len())].clone()
}

/// Prompt sent to the text-generation service: the position, the full
/// legal set, and a demand for exactly one token of output.
fn build_prompt(fen: &str, legal: &[String]) -> String {
    format!(
        "You are a weak chess engine playing a casual game. The current position is: {fen}\n\n\
         Available legal moves: {}\n\n\
         Choose ONE move from the list above. Answer with only the chosen move, no explanation.",
        legal.join(", ")
    )
}
