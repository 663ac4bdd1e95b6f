//! Query dispatch: one typed query in, exactly one engine invocation out.
//! No business logic lives here beyond variant selection, the Na'vi-first
//! fallback for bidirectional search, and the empty-result policy (a
//! well-formed query that matches nothing is an error, not an empty 200).

use serde::Serialize;

use crate::engine::{DictionaryEngine, GroupedWords, Word};
use crate::error::ApiError;
use crate::query::{NameQuery, NameStyle, TypedQuery};

/// Numeral conversion result, both directions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NumberResult {
    pub name: String,
    /// Canonical `0o`-prefixed octal representation.
    pub octal: String,
    pub decimal: String,
}

impl NumberResult {
    fn new(name: String, value: u16) -> Self {
        Self {
            name,
            octal: format!("{:#o}", value),
            decimal: value.to_string(),
        }
    }
}

/// Raw engine output before response shaping.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    /// Grouped word results (one group per token / sense cluster).
    Grouped(GroupedWords),
    /// Naturally flat word results (list, random).
    Flat(Vec<Word>),
    Number(NumberResult),
    /// Newline-separated generated names or validity verdicts.
    Lines(String),
}

fn all_empty(groups: &GroupedWords) -> bool {
    groups.iter().all(|g| g.is_empty())
}

fn non_empty(groups: GroupedWords) -> Result<EngineOutput, ApiError> {
    if all_empty(&groups) {
        Err(ApiError::NoResults)
    } else {
        Ok(EngineOutput::Grouped(groups))
    }
}

/// Map a typed query to its single engine entry point.
pub fn dispatch(engine: &dyn DictionaryEngine, query: &TypedQuery) -> Result<EngineOutput, ApiError> {
    match query {
        TypedQuery::Search {
            word,
            check_affixes,
        } => non_empty(engine.translate_from_navi(word, *check_affixes)),

        TypedQuery::ReverseSearch {
            language_code,
            localized_text,
        } => non_empty(engine.translate_to_navi(localized_text, language_code)),

        TypedQuery::Bidirectional {
            language_code,
            text,
        } => {
            // Na'vi direction wins on ambiguity.
            let forward = engine.translate_from_navi(text, true);
            if !all_empty(&forward) {
                return Ok(EngineOutput::Grouped(forward));
            }
            non_empty(engine.translate_to_navi(text, language_code))
        }

        TypedQuery::List {
            filter_terms,
            digraph_mode,
        } => {
            let words = engine.list(filter_terms, *digraph_mode)?;
            if words.is_empty() {
                return Err(ApiError::NoResults);
            }
            Ok(EngineOutput::Flat(words))
        }

        TypedQuery::Random {
            count,
            filter_terms,
            digraph_mode,
        } => {
            let words = engine.random(*count, filter_terms, *digraph_mode)?;
            if words.is_empty() {
                return Err(ApiError::NoResults);
            }
            Ok(EngineOutput::Flat(words))
        }

        TypedQuery::NaviToNumber { word } => {
            let value = engine.navi_to_number(word)?;
            Ok(EngineOutput::Number(NumberResult::new(word.clone(), value)))
        }

        TypedQuery::NumberToNavi { value } => {
            let word = engine.number_to_navi(*value)?;
            Ok(EngineOutput::Number(NumberResult::new(word, *value)))
        }

        TypedQuery::Name(name) => dispatch_name(engine, name),

        TypedQuery::Validity {
            candidate,
            language_code,
            ..
        } => {
            let report = engine.validity(candidate, language_code);
            if report.is_empty() {
                return Err(ApiError::NoResults);
            }
            Ok(EngineOutput::Lines(report))
        }
    }
}

fn dispatch_name(engine: &dyn DictionaryEngine, name: &NameQuery) -> Result<EngineOutput, ApiError> {
    let lines = match name.style {
        NameStyle::Single => engine.single_names(name.count, name.syllables[0], name.dialect),
        NameStyle::Full => {
            engine.full_names(name.ending, name.count, name.syllables, name.dialect)
        }
        NameStyle::Alu => engine.alu_names(
            name.count,
            name.syllables[0],
            name.noun_mode,
            name.adjective_mode,
            name.dialect,
        ),
    };
    if lines.is_empty() {
        return Err(ApiError::NoResults);
    }
    Ok(EngineOutput::Lines(lines))
}
