//! Routes for dice notation.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use randforge_core::error::RandomError;
use randforge_dice::{TermRoll, compile};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Most dice a single request may roll.
pub const MAX_DICE_PER_ROLL: u64 = 10_000;

/// Request body for POST /roll.
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Dice notation, e.g. `4d6-1l` or `2d8+3`.
    pub notation: String,
}

/// Response body for POST /roll.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// The notation in canonical form.
    pub notation: String,
    /// Final total.
    pub total: i64,
    /// Smallest total the notation can produce.
    pub minimum: i64,
    /// Largest total the notation can produce.
    pub maximum: i64,
    /// Every die rolled, grouped by term.
    pub terms: Vec<TermRoll>,
}

/// POST /roll
#[instrument(skip(state, request), fields(notation = %request.notation))]
async fn roll(
    State(state): State<AppState>,
    Json(request): Json<RollRequest>,
) -> Result<Json<RollResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling dice roll");

    let expression = compile(&request.notation)?;
    if expression.dice_count() > MAX_DICE_PER_ROLL {
        return Err(RandomError::invalid(format!(
            "notation rolls {} dice; at most {MAX_DICE_PER_ROLL} are allowed per request",
            expression.dice_count()
        ))
        .into());
    }

    let roll = state.with_engine(|engine| expression.roll(engine))?;

    info!(%correlation_id, total = roll.total, "rolled dice");

    Ok(Json(RollResponse {
        notation: expression.to_string(),
        total: roll.total,
        minimum: expression.minimum(),
        maximum: expression.maximum(),
        terms: roll.terms,
    }))
}

/// Returns the router for dice notation.
pub fn router() -> Router<AppState> {
    Router::new().route("/roll", post(roll))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use randforge_test_support::ScriptedEngine;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_roll(state: AppState, notation: &str) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let body = serde_json::json!({ "notation": notation });
        let request = Request::builder()
            .method("POST")
            .uri("/roll")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_roll_returns_total_and_breakdown() {
        // Arrange
        let state = AppState::new(ScriptedEngine::new(vec![0, 0, 0, 0]));

        // Act
        let (status, json) = post_roll(state, "4d6-1l-1").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["notation"], "4d6dl-1");
        assert_eq!(json["total"], 2);
        assert_eq!(json["minimum"], 2);
        assert_eq!(json["maximum"], 17);
        assert_eq!(json["terms"][0]["dice"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_too_many_dice_returns_400() {
        let state = AppState::new(ScriptedEngine::new(Vec::new()));

        let (status, json) = post_roll(state, "10001d6").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
    }
}
