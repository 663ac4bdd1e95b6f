use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;

use crate::AppState;
use crate::dispatch::dispatch;
use crate::error::ApiError;
use crate::query;
use crate::shape::{DISCORD_CHAR_BUDGET, ShapeTag, cap_to_budget, shape};

/// The fixed lenition table. Static content, already wire-shaped.
pub async fn lenition(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let table: Value = serde_json::from_str(state.engine.lenition_table())
        .map_err(|e| ApiError::Engine(e.to_string()))?;
    Ok(Json(table))
}

pub async fn validity(
    State(state): State<AppState>,
    Path((lang, words)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_validity(&lang, &words, false);
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(shape(out, ShapeTag::Raw)))
}

pub async fn validity_discord(
    State(state): State<AppState>,
    Path((lang, words)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let q = query::decode_validity(&lang, &words, true);
    let out = dispatch(state.engine.as_ref(), &q)?;
    Ok(Json(cap_to_budget(
        shape(out, ShapeTag::Raw),
        DISCORD_CHAR_BUDGET,
    )))
}

pub async fn homonyms(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::json!(state.engine.homonyms())))
}

pub async fn oddballs(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::json!(state.engine.oddballs())))
}

pub async fn multi_ipa(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::json!(state.engine.multi_ipa())))
}

pub async fn phoneme_distros(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::json!(state.engine.phoneme_distros(&lang))))
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
    async fn lenition_table_matches_the_engine() {
        let value = lenition(State(test_state())).await.unwrap().0;
        assert_eq!(value["kx"], "k");
        assert_eq!(value["ts"], "s");
    }

    #[tokio::test]
    async fn validity_reports_per_word() {
        let value = validity(
            State(test_state()),
            Path(("en".to_string(), "taron bdg".to_string())),
        )
        .await
        .unwrap()
        .0;
        let lines: Vec<&str> = value.as_str().unwrap().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("valid"));
        assert!(lines[1].contains("not valid"));
    }

    #[tokio::test]
    async fn reports_are_grouped() {
        let value = homonyms(State(test_state())).await.unwrap().0;
        assert!(value.as_array().unwrap().iter().all(Value::is_array));

        let value = phoneme_distros(State(test_state()), Path("en".to_string()))
            .await
            .unwrap()
            .0;
        assert!(value.get("nuclei").is_some());
    }
}
