use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde_json::Value;

use super::ListParams;
use crate::AppState;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::query;
use crate::shape::{ShapeTag, shape};

pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_list("", params.digraph_token());
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}

pub async fn list_filtered(
    State(state): State<AppState>,
    Path(args): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_list(&args, params.digraph_token());
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}

pub async fn random(
    State(state): State<AppState>,
    Path(n): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_random(&n, "", params.digraph_token())
        .map_err(|e| ApiError::from_decode(e, state.engine.as_ref(), "en"))?;
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}

pub async fn random_filtered(
    State(state): State<AppState>,
    Path((n, args)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_random(&n, &args, params.digraph_token())
        .map_err(|e| ApiError::from_decode(e, state.engine.as_ref(), "en"))?;
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
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
    async fn list_all_returns_every_entry() {
        let state = test_state();
        let expected = state.engine.dict_len();
        let value = list_all(State(state), Query(ListParams::default()))
            .await
            .unwrap()
            .0;
        assert_eq!(value.as_array().unwrap().len(), expected);
    }

    #[tokio::test]
    async fn filtered_list_narrows_results() {
        let state = test_state();
        let value = list_filtered(
            State(state),
            Path("pos is adj.".to_string()),
            Query(ListParams::default()),
        )
        .await
        .unwrap()
        .0;
        let words = value.as_array().unwrap();
        assert!(!words.is_empty());
        assert!(
            words
                .iter()
                .all(|w| w["PartOfSpeech"].as_str() == Some("adj."))
        );
    }

    #[tokio::test]
    async fn impossible_filter_is_no_results() {
        let state = test_state();
        let result = list_filtered(
            State(state),
            Path("word starts qqq".to_string()),
            Query(ListParams::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NoResults)));
    }

    #[tokio::test]
    async fn malformed_random_count_names_the_token() {
        let state = test_state();
        let result = random(
            State(state),
            Path("abc".to_string()),
            Query(ListParams::default()),
        )
        .await;
        match result {
            Err(ApiError::InvalidInput(message)) => assert!(message.contains("abc")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn random_with_filters_respects_count() {
        let state = test_state();
        let value = random_filtered(
            State(state),
            Path(("3".to_string(), "pos is n.".to_string())),
            Query(ListParams::default()),
        )
        .await
        .unwrap()
        .0;
        assert!(value.as_array().unwrap().len() <= 3);
    }
}
