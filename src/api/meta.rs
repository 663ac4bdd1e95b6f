use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::{ApiError, Message};
use crate::routes;

/// The self-describing endpoint catalog, rendered against the configured
/// public root on every request.
pub async fn endpoints(State(state): State<AppState>) -> Json<Value> {
    Json(routes::catalog(&state.config.web_root))
}

pub async fn version(State(state): State<AppState>) -> Json<Value> {
    Json(json!(&*state.version))
}

/// Dictionary size as an English sentence (the pre-localization original).
pub async fn total_words(State(state): State<AppState>) -> Json<Message> {
    Json(Message::new(state.engine.dict_len_sentence("en")))
}

/// Dictionary size as a localized sentence.
pub async fn total_words_localized(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Json<Message> {
    Json(Message::new(state.engine.dict_len_sentence(&lang)))
}

/// Dictionary size as a bare integer, for callers that count rather than
/// display.
pub async fn word_count(State(state): State<AppState>) -> Json<usize> {
    Json(state.engine.dict_len())
}

/// Reload the dictionary. Not serialized against in-flight queries; a
/// failure surfaces as a 500 with a static message.
pub async fn update(State(state): State<AppState>) -> Result<Json<Message>, ApiError> {
    tracing::info!("dictionary reload requested");
    state
        .engine
        .reload()
        .map_err(|e| ApiError::Engine(e.to_string()))?;
    tracing::info!("dictionary reloaded, {} entries", state.engine.dict_len());
    Ok(Json(Message::new("dictionary updated")))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "fwew-api",
        "version": state.version.api_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BundledEngine, DictionaryEngine, EngineError};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Arc::new(BundledEngine::new()), crate::Config::default())
    }

    #[tokio::test]
    async fn version_reports_all_three_components() {
        let value = version(State(test_state())).await.0;
        assert_eq!(value["APIVersion"], crate::API_VERSION);
        assert!(value["FwewVersion"].as_str().unwrap().contains('.'));
        assert!(value.get("DictVersion").is_some());
    }

    #[tokio::test]
    async fn word_count_variants_agree() {
        let state = test_state();
        let scalar = word_count(State(state.clone())).await.0;
        let sentence = total_words(State(state.clone())).await.0;
        assert!(sentence.message.contains(&scalar.to_string()));

        let localized = total_words_localized(State(state), Path("de".to_string()))
            .await
            .0;
        assert!(localized.message.contains(&scalar.to_string()));
        assert!(localized.message.contains("Wörterbuch"));
    }

    #[tokio::test]
    async fn update_reports_success() {
        let response = update(State(test_state())).await.unwrap().0;
        assert_eq!(response.message, "dictionary updated");
    }

    /// Engine stub whose reload always fails, for the 500 path.
    struct BrokenReload(BundledEngine);

    impl DictionaryEngine for BrokenReload {
        fn translate_from_navi(&self, t: &str, c: bool) -> crate::engine::GroupedWords {
            self.0.translate_from_navi(t, c)
        }
        fn translate_to_navi(&self, t: &str, l: &str) -> crate::engine::GroupedWords {
            self.0.translate_to_navi(t, l)
        }
        fn list(
            &self,
            f: &[String],
            d: crate::query::DigraphMode,
        ) -> Result<Vec<crate::engine::Word>, EngineError> {
            self.0.list(f, d)
        }
        fn random(
            &self,
            n: usize,
            f: &[String],
            d: crate::query::DigraphMode,
        ) -> Result<Vec<crate::engine::Word>, EngineError> {
            self.0.random(n, f, d)
        }
        fn navi_to_number(&self, w: &str) -> Result<u16, EngineError> {
            self.0.navi_to_number(w)
        }
        fn number_to_navi(&self, v: u16) -> Result<String, EngineError> {
            self.0.number_to_navi(v)
        }
        fn single_names(&self, c: usize, s: u8, d: crate::query::Dialect) -> String {
            self.0.single_names(c, s, d)
        }
        fn full_names(
            &self,
            e: crate::query::NameEnding,
            c: usize,
            s: [u8; 3],
            d: crate::query::Dialect,
        ) -> String {
            self.0.full_names(e, c, s, d)
        }
        fn alu_names(
            &self,
            c: usize,
            s: u8,
            nm: crate::query::NounMode,
            am: crate::query::AdjectiveMode,
            d: crate::query::Dialect,
        ) -> String {
            self.0.alu_names(c, s, nm, am, d)
        }
        fn validity(&self, c: &str, l: &str) -> String {
            self.0.validity(c, l)
        }
        fn homonyms(&self) -> crate::engine::GroupedWords {
            self.0.homonyms()
        }
        fn oddballs(&self) -> crate::engine::GroupedWords {
            self.0.oddballs()
        }
        fn multi_ipa(&self) -> crate::engine::GroupedWords {
            self.0.multi_ipa()
        }
        fn phoneme_distros(&self, l: &str) -> crate::engine::PhonemeDistros {
            self.0.phoneme_distros(l)
        }
        fn lenition_table(&self) -> &'static str {
            self.0.lenition_table()
        }
        fn dict_len(&self) -> usize {
            self.0.dict_len()
        }
        fn dict_len_sentence(&self, l: &str) -> String {
            self.0.dict_len_sentence(l)
        }
        fn reload(&self) -> Result<(), EngineError> {
            Err(EngineError::ReloadFailed("dictionary file missing".to_string()))
        }
        fn text(&self, k: &str, l: &str) -> String {
            self.0.text(k, l)
        }
        fn version(&self) -> crate::engine::EngineVersion {
            self.0.version()
        }
    }

    #[tokio::test]
    async fn failed_reload_is_an_engine_error() {
        let state = AppState::new(
            Arc::new(BrokenReload(BundledEngine::new())),
            crate::Config::default(),
        );
        let result = update(State(state)).await;
        assert!(matches!(result, Err(ApiError::Engine(_))));
    }
}
