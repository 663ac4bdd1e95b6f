use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;

use crate::AppState;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::query;
use crate::shape::{ShapeTag, shape};

/// Na'vi numeral word to number.
pub async fn navi_to_number(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(state.engine.as_ref(), &query::decode_navi_to_number(&word))?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}

/// Number (any integer base) to Na'vi numeral word.
pub async fn number_to_navi(
    State(state): State<AppState>,
    Path(num): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_number_to_navi(&num)
        .map_err(|e| ApiError::from_decode(e, state.engine.as_ref(), "en"))?;
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}
