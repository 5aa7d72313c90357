//! Routes for ranges, unit values, chances, weighted picks and shuffles.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use randforge_core::bounds::Bounds;
use randforge_sampling::{chance, range, shuffle, unit, weighted};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /range.
#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
    /// Which bounds are included. Defaults to half-open.
    #[serde(default)]
    pub bounds: Bounds,
}

/// Request body for POST /unit.
#[derive(Debug, Deserialize)]
pub struct UnitRequest {
    /// Which of 0 and 1 may be returned. Defaults to half-open.
    #[serde(default)]
    pub bounds: Bounds,
}

/// Request body for POST /chance.
#[derive(Debug, Deserialize)]
pub struct ChanceRequest {
    /// Probability of `true`, in `[0, 1]`.
    pub probability: f64,
}

/// Request body for POST /weighted.
#[derive(Debug, Deserialize)]
pub struct WeightedRequest {
    /// Nonnegative weights; at least one must be positive.
    pub weights: Vec<f64>,
}

/// Request body for POST /shuffle.
#[derive(Debug, Deserialize)]
pub struct ShuffleRequest {
    /// Arbitrary JSON values to reorder.
    pub items: Vec<Value>,
    /// Produce a single cycle instead of a uniform permutation.
    #[serde(default)]
    pub cyclic: bool,
}

/// Response body carrying one sampled value.
#[derive(Debug, Serialize)]
pub struct ValueResponse<T> {
    /// The sampled value.
    pub value: T,
}

/// Response body for POST /weighted.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    /// The selected index.
    pub index: usize,
}

/// Response body for POST /shuffle.
#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    /// The reordered items.
    pub items: Vec<Value>,
}

/// POST /range
#[instrument(skip(state))]
async fn sample_range(
    State(state): State<AppState>,
    Json(request): Json<RangeRequest>,
) -> Result<Json<ValueResponse<i64>>, ApiError> {
    let value = state.with_engine(|engine| range::range(engine, request.min, request.max, request.bounds))??;
    debug!(value, "sampled range");
    Ok(Json(ValueResponse { value }))
}

/// POST /unit
#[instrument(skip(state))]
async fn sample_unit(
    State(state): State<AppState>,
    Json(request): Json<UnitRequest>,
) -> Result<Json<ValueResponse<f64>>, ApiError> {
    let value = state.with_engine(|engine| unit::unit_f64(engine, request.bounds))?;
    debug!(value, "sampled unit value");
    Ok(Json(ValueResponse { value }))
}

/// POST /chance
#[instrument(skip(state))]
async fn sample_chance(
    State(state): State<AppState>,
    Json(request): Json<ChanceRequest>,
) -> Result<Json<ValueResponse<bool>>, ApiError> {
    let probability = chance::Probability::double(request.probability)?;
    let value = state.with_engine(|engine| chance::chance(engine, probability))?;
    debug!(value, "sampled chance");
    Ok(Json(ValueResponse { value }))
}

/// POST /weighted
#[instrument(skip(state, request), fields(entries = request.weights.len()))]
async fn sample_weighted(
    State(state): State<AppState>,
    Json(request): Json<WeightedRequest>,
) -> Result<Json<IndexResponse>, ApiError> {
    let table = weighted::WeightedIndexTable::new(&request.weights)?;
    let index = state.with_engine(|engine| table.sample(engine))?;
    debug!(index, "selected weighted index");
    Ok(Json(IndexResponse { index }))
}

/// POST /shuffle
#[instrument(skip(state, request), fields(items = request.items.len(), cyclic = request.cyclic))]
async fn shuffle_items(
    State(state): State<AppState>,
    Json(request): Json<ShuffleRequest>,
) -> Result<Json<ShuffleResponse>, ApiError> {
    let ShuffleRequest { mut items, cyclic } = request;
    state.with_engine(|engine| {
        if cyclic {
            shuffle::cyclic_shuffle(engine, &mut items);
        } else {
            shuffle::shuffle(engine, &mut items);
        }
    })?;
    Ok(Json(ShuffleResponse { items }))
}

/// Returns the router for sampling.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/range", post(sample_range))
        .route("/unit", post(sample_unit))
        .route("/chance", post(sample_chance))
        .route("/weighted", post(sample_weighted))
        .route("/shuffle", post(shuffle_items))
}
