use std::sync::Arc;

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::arbiter::Arbiter;
use crate::clients::openrouter::OpenRouterClient;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct AiMoveRequest {
    pub fen: String,
}

#[derive(Serialize)]
pub struct AiMoveResponse {
    #[serde(rename = "move")]
    pub san: String,
}

/// POST /api/ai-move
/// Pick one legal move for the side to move in the supplied position.
/// 400 when the position has no legal moves, 500 when it cannot be
/// parsed.
pub async fn ai_move(
    Extension(arbiter): Extension<Arc<Arbiter<OpenRouterClient>>>,
    Json(req): Json<AiMoveRequest>,
) -> Result<Json<AiMoveResponse>, AppError> {
    let san = arbiter.select_move(&req.fen).await?;
    Ok(Json(AiMoveResponse { san }))
}
