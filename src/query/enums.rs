//! Mode-token resolvers. Every enumeration here is total over arbitrary
//! input: unknown tokens resolve to the documented default rather than
//! failing. That permissive policy is applied uniformly, and it is the only
//! place a "silently ignored" input exists in this layer.
//!
//! Synonym tables live here so new spellings can be added without touching
//! dispatch.

use serde::Serialize;

/// Na'vi dialect selector for name generation and phonology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dialect {
    /// Interdialect / "common" forms, the default.
    Interdialect,
    Forest,
    Reef,
}

impl Dialect {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "forest" => Dialect::Forest,
            "reef" => Dialect::Reef,
            _ => Dialect::Interdialect,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Dialect::Interdialect => 0,
            Dialect::Forest => 1,
            Dialect::Reef => 2,
        }
    }
}

/// Tri-state policy for multi-character sound units (ts, ng, px, ...) during
/// filtering: strict treats them as single phonemes, tolerant accepts either
/// reading, ignore treats them as plain letter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DigraphMode {
    Tolerant,
    Strict,
    Ignore,
}

impl DigraphMode {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "maybe" => DigraphMode::Tolerant,
            "false" => DigraphMode::Ignore,
            _ => DigraphMode::Strict,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            DigraphMode::Tolerant => 0,
            DigraphMode::Strict => 1,
            DigraphMode::Ignore => 2,
        }
    }
}

/// What stands in the noun slot of an "X alu Y" name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NounMode {
    /// Random pick between the concrete modes.
    Any,
    /// No noun at all; distinct from `Any`.
    None,
    /// A plain dictionary noun, the default.
    Normal,
    /// An agent noun derived from a verb ("verb-er").
    VerbEr,
}

impl NounMode {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "any" => NounMode::Any,
            "none" | "no noun" => NounMode::None,
            "verb-er" => NounMode::VerbEr,
            "something" | "normal noun" => NounMode::Normal,
            _ => NounMode::Normal,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            NounMode::Any => -1,
            NounMode::None => 0,
            NounMode::Normal => 1,
            NounMode::VerbEr => 2,
        }
    }
}

/// What qualifies the noun of an "X alu Y" name. `Any` (-1) means "pick a
/// concrete mode at random"; `None` (0) is the concrete no-qualifier code and
/// the default for unknown tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdjectiveMode {
    Any,
    None,
    Normal,
    GenitiveNoun,
    OriginNoun,
    ActiveParticiple,
    PassiveParticiple,
    VerbEr,
}

impl AdjectiveMode {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "any" => AdjectiveMode::Any,
            "something" | "normal adjective" => AdjectiveMode::Normal,
            "genitive noun" => AdjectiveMode::GenitiveNoun,
            "origin noun" => AdjectiveMode::OriginNoun,
            "participle verb" | "active participle verb" => AdjectiveMode::ActiveParticiple,
            "passive participle verb" => AdjectiveMode::PassiveParticiple,
            "verb-er" => AdjectiveMode::VerbEr,
            _ => AdjectiveMode::None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            AdjectiveMode::Any => -1,
            AdjectiveMode::None => 0,
            AdjectiveMode::Normal => 2,
            AdjectiveMode::GenitiveNoun => 3,
            AdjectiveMode::OriginNoun => 4,
            AdjectiveMode::ActiveParticiple => 5,
            AdjectiveMode::PassiveParticiple => 6,
            AdjectiveMode::VerbEr => 7,
        }
    }
}

/// Ending of a generated full name: child-of suffix, son or daughter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NameEnding {
    Son,
    Daughter,
}

impl NameEnding {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "'ite" | "ite" | "daughter" => NameEnding::Daughter,
            _ => NameEnding::Son,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            NameEnding::Son => "'itan",
            NameEnding::Daughter => "'ite",
        }
    }
}
