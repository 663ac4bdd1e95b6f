use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;

use crate::AppState;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::query;
use crate::shape::{ShapeTag, shape};

/// Forward search with full affix analysis, grouped per input token.
pub async fn search(
    State(state): State<AppState>,
    Path(nav): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(state.engine.as_ref(), &query::decode_search(&nav, true))?;
    Ok(Json(shape(out, ShapeTag::TwoDimensional)))
}

/// Forward search without derivational-affix analysis. Kept for
/// latency-sensitive callers such as profanity filters.
pub async fn search_simple(
    State(state): State<AppState>,
    Path(nav): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(state.engine.as_ref(), &query::decode_search(&nav, false))?;
    Ok(Json(shape(out, ShapeTag::TwoDimensional)))
}

pub async fn search_reverse(
    State(state): State<AppState>,
    Path((lang, local)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(
        state.engine.as_ref(),
        &query::decode_reverse_search(&lang, &local),
    )?;
    Ok(Json(shape(out, ShapeTag::TwoDimensional)))
}

/// Flattened result shim for clients that predate grouping.
pub async fn search_1d(
    State(state): State<AppState>,
    Path(nav): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(state.engine.as_ref(), &query::decode_search(&nav, true))?;
    Ok(Json(shape(out, ShapeTag::OneDimensional)))
}

pub async fn search_1d_reverse(
    State(state): State<AppState>,
    Path((lang, local)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(
        state.engine.as_ref(),
        &query::decode_reverse_search(&lang, &local),
    )?;
    Ok(Json(shape(out, ShapeTag::OneDimensional)))
}

/// Either-direction search; the Na'vi reading wins on ambiguity.
pub async fn search_bidirectional(
    State(state): State<AppState>,
    Path((lang, words)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let out = dispatch(
        state.engine.as_ref(),
        &query::decode_bidirectional(&lang, &words),
    )?;
    Ok(Json(shape(out, ShapeTag::TwoDimensional)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BundledEngine;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Arc::new(BundledEngine::new()), crate::Config::default())
    }

    #[tokio::test]
    async fn search_returns_grouped_results() {
        let state = test_state();
        let result = search(State(state), Path("taron tute".to_string())).await;
        let value = result.unwrap().0;
        let groups = value.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].is_array());
    }

    #[tokio::test]
    async fn search_1d_returns_flat_results() {
        let state = test_state();
        let result = search_1d(State(state), Path("taron tute".to_string())).await;
        let value = result.unwrap().0;
        let words = value.as_array().unwrap();
        assert!(words.iter().all(|w| w.is_object()));
    }

    #[tokio::test]
    async fn unknown_word_is_no_results() {
        let state = test_state();
        let result = search(State(state), Path("xyzzy".to_string())).await;
        assert!(matches!(result, Err(ApiError::NoResults)));
    }

    #[tokio::test]
    async fn simple_search_skips_affix_analysis() {
        let state = test_state();
        // aytute resolves only through affix stripping
        let full = search(State(test_state()), Path("aytute".to_string())).await;
        assert!(full.is_ok());
        let simple = search_simple(State(state), Path("aytute".to_string())).await;
        assert!(matches!(simple, Err(ApiError::NoResults)));
    }

    #[tokio::test]
    async fn bidirectional_falls_back_to_reverse() {
        let state = test_state();
        let result =
            search_bidirectional(State(state), Path(("en".to_string(), "hunt".to_string()))).await;
        assert!(result.is_ok());
    }
}
