pub mod api;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod query;
pub mod routes;
pub mod shape;

pub use config::Config;
pub use error::{ApiError, Message};

use std::sync::Arc;

use serde::Serialize;

use crate::engine::DictionaryEngine;

/// Version of the HTTP layer itself. The engine and dictionary build are
/// reported separately by the engine.
pub const API_VERSION: &str = "6.1.0";

/// Read-only version report, constructed once at startup and shared by every
/// request for the lifetime of the process.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    #[serde(rename = "APIVersion")]
    pub api_version: String,
    #[serde(rename = "FwewVersion")]
    pub fwew_version: String,
    #[serde(rename = "DictVersion")]
    pub dict_build: String,
}

impl VersionInfo {
    pub fn new(engine: &dyn DictionaryEngine) -> Self {
        let v = engine.version();
        Self {
            api_version: API_VERSION.to_string(),
            fwew_version: v.semver(),
            dict_build: v.dict_build,
        }
    }
}

/// Shared application state. Everything here is initialized before the
/// listener starts and never mutated afterwards; the engine manages its own
/// interior state (dictionary reload) behind the trait.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn DictionaryEngine>,
    pub config: Arc<Config>,
    pub version: Arc<VersionInfo>,
}

impl AppState {
    pub fn new(engine: Arc<dyn DictionaryEngine>, config: Config) -> Self {
        let version = VersionInfo::new(engine.as_ref());
        Self {
            engine,
            config: Arc::new(config),
            version: Arc::new(version),
        }
    }
}
