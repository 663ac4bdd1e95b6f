//! HTTP handlers, one module per resource family. Handlers stay thin:
//! decode path segments into a typed query, dispatch to the engine, shape
//! the result. All real decisions live in `query`, `dispatch`, and `shape`.

pub mod list;
pub mod meta;
pub mod names;
pub mod number;
pub mod phonology;
pub mod search;

use serde::Deserialize;

/// Optional query-string knobs shared by list/random routes. The digraph
/// token decodes totally; absent or garbled input means strict.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub checkdigraphs: Option<String>,
}

impl ListParams {
    pub fn digraph_token(&self) -> &str {
        self.checkdigraphs.as_deref().unwrap_or("")
    }
}
