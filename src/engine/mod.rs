//! Seam to the dictionary engine collaborator.
//!
//! The HTTP layer consumes the engine exclusively through the
//! [`DictionaryEngine`] trait as `Arc<dyn DictionaryEngine>`: pure functions
//! over strings returning structured word/name/validity results. The engine
//! is assumed safe for concurrent invocation; `reload` mutates engine-owned
//! state and is deliberately not serialized against in-flight queries
//! (callers may observe transient staleness across a reload, never
//! corruption).

pub mod bundled;
pub mod names;
pub mod numbers;
pub mod phonology;
pub mod text;

pub use bundled::BundledEngine;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::enums::{AdjectiveMode, Dialect, DigraphMode, NameEnding, NounMode};

/// One dictionary entry as it crosses the wire. Field names keep the
/// PascalCase shape every client generation has consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Word {
    #[serde(rename = "ID")]
    pub id: u32,
    pub navi: String,
    #[serde(rename = "IPA")]
    pub ipa: String,
    pub part_of_speech: String,
    /// Dotted syllable breakdown, e.g. `ta.ron`.
    pub syllables: String,
    /// 1-based index of the stressed syllable.
    pub stressed: u8,
    /// Language code to gloss.
    pub translations: BTreeMap<String, String>,
    pub affixes: Affixes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Affixes {
    pub prefixes: Vec<String>,
    pub infixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub lenition: Vec<String>,
}

impl Affixes {
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
            && self.infixes.is_empty()
            && self.suffixes.is_empty()
            && self.lenition.is_empty()
    }
}

/// Search results grouped by homograph cluster: one inner list per input
/// token / lexical sense.
pub type GroupedWords = Vec<Vec<Word>>;

/// Phoneme frequency report keyed by (localized) category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PhonemeDistros(pub BTreeMap<String, BTreeMap<String, usize>>);

#[derive(Debug, Clone)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub dict_build: String,
}

impl EngineVersion {
    pub fn semver(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no results")]
    NoResults,

    #[error("number out of range: {0}")]
    OutOfRange(i64),

    #[error("dictionary reload failed: {0}")]
    ReloadFailed(String),
}

/// The dictionary engine contract. Everything is pure over `&self`; `reload`
/// is the single administrative mutation.
pub trait DictionaryEngine: Send + Sync {
    /// Forward search, grouped per input token. `check_affixes = false`
    /// skips derivational-affix analysis (the historical "simple" search).
    fn translate_from_navi(&self, text: &str, check_affixes: bool) -> GroupedWords;

    /// Reverse search: localized text to Na'vi entries, grouped per token.
    fn translate_to_navi(&self, localized: &str, language_code: &str) -> GroupedWords;

    fn list(&self, filters: &[String], digraph_mode: DigraphMode)
        -> Result<Vec<Word>, EngineError>;

    fn random(
        &self,
        count: usize,
        filters: &[String],
        digraph_mode: DigraphMode,
    ) -> Result<Vec<Word>, EngineError>;

    fn navi_to_number(&self, word: &str) -> Result<u16, EngineError>;

    fn number_to_navi(&self, value: u16) -> Result<String, EngineError>;

    /// One generated name per line.
    fn single_names(&self, count: usize, syllables: u8, dialect: Dialect) -> String;

    fn full_names(
        &self,
        ending: NameEnding,
        count: usize,
        syllables: [u8; 3],
        dialect: Dialect,
    ) -> String;

    fn alu_names(
        &self,
        count: usize,
        syllables: u8,
        noun_mode: NounMode,
        adjective_mode: AdjectiveMode,
        dialect: Dialect,
    ) -> String;

    /// Per-word phonotactic verdicts, one line per candidate word,
    /// localized.
    fn validity(&self, candidate: &str, language_code: &str) -> String;

    fn homonyms(&self) -> GroupedWords;

    /// Dictionary entries that break the language's own phonotactics
    /// (loanwords, proper names).
    fn oddballs(&self) -> GroupedWords;

    /// Entries with more than one attested pronunciation.
    fn multi_ipa(&self) -> GroupedWords;

    fn phoneme_distros(&self, language_code: &str) -> PhonemeDistros;

    /// The fixed lenition table, already in wire form.
    fn lenition_table(&self) -> &'static str;

    fn dict_len(&self) -> usize;

    fn dict_len_sentence(&self, language_code: &str) -> String;

    /// Re-read the dictionary. May race with concurrent lookups.
    fn reload(&self) -> Result<(), EngineError>;

    /// Localized UI/error text lookup by message key.
    fn text(&self, key: &str, language_code: &str) -> String;

    fn version(&self) -> EngineVersion;
}
