use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;

use crate::AppState;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::query::{self, DecodeError, TypedQuery};
use crate::shape::{DISCORD_CHAR_BUDGET, ShapeTag, cap_to_budget, shape};

fn run(state: &AppState, decoded: Result<TypedQuery, DecodeError>) -> Result<Json<Value>, ApiError> {
    let q = decoded.map_err(|e| ApiError::from_decode(e, state.engine.as_ref(), "en"))?;
    let discord_safe = matches!(&q, TypedQuery::Name(name) if name.discord_safe);
    let out = dispatch(state.engine.as_ref(), &q)?;
    let mut value = shape(out, ShapeTag::Raw);
    if discord_safe {
        value = cap_to_budget(value, DISCORD_CHAR_BUDGET);
    }
    Ok(Json(value))
}

pub async fn name_single(
    State(state): State<AppState>,
    Path((n, s, dialect)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(&state, query::decode_name_single(&n, &s, &dialect, false))
}

pub async fn name_single_discord(
    State(state): State<AppState>,
    Path((n, s, dialect)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(&state, query::decode_name_single(&n, &s, &dialect, true))
}

pub async fn name_full(
    State(state): State<AppState>,
    Path((ending, n, s1, s2, s3, dialect)): Path<(String, String, String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(
        &state,
        query::decode_name_full(&ending, &n, &s1, &s2, &s3, &dialect, false),
    )
}

pub async fn name_full_discord(
    State(state): State<AppState>,
    Path((ending, n, s1, s2, s3, dialect)): Path<(String, String, String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(
        &state,
        query::decode_name_full(&ending, &n, &s1, &s2, &s3, &dialect, true),
    )
}

pub async fn name_alu(
    State(state): State<AppState>,
    Path((n, s, nm, am, dialect)): Path<(String, String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(
        &state,
        query::decode_name_alu(&n, &s, &nm, &am, &dialect, false),
    )
}

pub async fn name_alu_discord(
    State(state): State<AppState>,
    Path((n, s, nm, am, dialect)): Path<(String, String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    run(
        &state,
        query::decode_name_alu(&n, &s, &nm, &am, &dialect, true),
    )
}
