use async_trait::async_trait;

/// Failure modes of a move provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The position has no legal moves. This is the terminal
    /// "checkmate or stalemate" condition, not a fault.
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The provider could not be reached or answered with an error.
    #[error("move provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of moves for the automated side.
///
/// Implementations must only return moves that are legal in the given
/// position; the session treats a violation of that contract as fatal.
#[async_trait]
pub trait MoveProvider: Send + Sync {
    /// Produce one SAN move for the side to move in `fen`.
    async fn ai_move(&self, fen: &str) -> Result<String, ProviderError>;
}
