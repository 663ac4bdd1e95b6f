//! Parameter decoding: loosely-typed path segments in, typed queries out.
//!
//! Decoding is pure shape/type validation; it never touches the dictionary
//! engine. Construction fails closed: if any required field cannot be
//! parsed, the whole query is rejected with the offending token preserved
//! for the error message.

pub mod enums;

pub use enums::{AdjectiveMode, Dialect, DigraphMode, NameEnding, NounMode};

/// Largest value the numeral system can express (five octal digits).
pub const MAX_NUMBER: u16 = 0o77777;

/// Caps for name generation, matching the engine's limits.
const MAX_NAMES: usize = 50;
const MAX_NAME_SYLLABLES: u8 = 4;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A count/syllable segment that is not a plain decimal integer.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// A numeral-lookup segment that is not an integer in any accepted base,
    /// or is out of the numeral system's range.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

/// One request, fully typed. Exactly one variant is active per request, and
/// every mode token has already been resolved to its closed enum; no raw
/// mode strings survive past this point.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedQuery {
    Search {
        word: String,
        /// `false` selects the "simple" search that skips derivational-affix
        /// analysis, kept for latency-sensitive callers.
        check_affixes: bool,
    },
    ReverseSearch {
        language_code: String,
        localized_text: String,
    },
    /// Free text in either direction; Na'vi-to-local is tried first.
    Bidirectional {
        language_code: String,
        text: String,
    },
    List {
        filter_terms: Vec<String>,
        digraph_mode: DigraphMode,
    },
    Random {
        count: usize,
        filter_terms: Vec<String>,
        digraph_mode: DigraphMode,
    },
    NaviToNumber {
        word: String,
    },
    NumberToNavi {
        value: u16,
    },
    Name(NameQuery),
    Validity {
        candidate: String,
        language_code: String,
        discord_safe: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Single,
    Full,
    Alu,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameQuery {
    pub style: NameStyle,
    pub count: usize,
    /// Syllable counts for up to three name parts; `Single` and `Alu` use
    /// only the first.
    pub syllables: [u8; 3],
    pub dialect: Dialect,
    pub ending: NameEnding,
    pub noun_mode: NounMode,
    pub adjective_mode: AdjectiveMode,
    pub discord_safe: bool,
}

/// Strict decimal parse for counts and syllable counts.
fn parse_decimal(raw: &str) -> Result<i64, DecodeError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidDecimal(raw.to_string()))
}

/// Base-aware integer parse for the numeral reverse lookup: `0x`/`0X` hex,
/// `0o`/`0O` and leading-zero octal, `0b` binary, plain decimal.
pub fn parse_any_base(raw: &str) -> Result<u16, DecodeError> {
    let token = raw.trim();
    let err = || DecodeError::InvalidInteger(raw.to_string());

    let (digits, radix) = match token.as_bytes() {
        [b'0', b'x' | b'X', rest @ ..] if !rest.is_empty() => (&token[2..], 16),
        [b'0', b'o' | b'O', rest @ ..] if !rest.is_empty() => (&token[2..], 8),
        [b'0', b'b' | b'B', rest @ ..] if !rest.is_empty() => (&token[2..], 2),
        [b'0', rest @ ..] if !rest.is_empty() => (&token[1..], 8),
        _ => (token, 10),
    };

    let value = u32::from_str_radix(digits, radix).map_err(|_| err())?;
    if value > MAX_NUMBER as u32 {
        return Err(err());
    }
    Ok(value as u16)
}

/// Split a list-valued segment into terms. A documented accommodation: the
/// two-character sequence ", " collapses to "," first, so comma-and-space
/// separated attribute lists decode identically to space-only ones.
pub fn split_terms(raw: &str) -> Vec<String> {
    let normalized = raw.replace(", ", ",");
    normalized
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn decode_search(word: &str, check_affixes: bool) -> TypedQuery {
    TypedQuery::Search {
        word: word.to_string(),
        check_affixes,
    }
}

pub fn decode_reverse_search(lang: &str, local: &str) -> TypedQuery {
    TypedQuery::ReverseSearch {
        language_code: lang.to_string(),
        localized_text: local.to_string(),
    }
}

pub fn decode_bidirectional(lang: &str, text: &str) -> TypedQuery {
    TypedQuery::Bidirectional {
        language_code: lang.to_string(),
        text: text.to_string(),
    }
}

pub fn decode_list(args: &str, digraph_token: &str) -> TypedQuery {
    TypedQuery::List {
        filter_terms: split_terms(args),
        digraph_mode: DigraphMode::from_token(digraph_token),
    }
}

pub fn decode_random(
    count: &str,
    args: &str,
    digraph_token: &str,
) -> Result<TypedQuery, DecodeError> {
    let n = parse_decimal(count)?;
    if n < 1 {
        return Err(DecodeError::InvalidDecimal(count.to_string()));
    }
    Ok(TypedQuery::Random {
        count: n as usize,
        filter_terms: split_terms(args),
        digraph_mode: DigraphMode::from_token(digraph_token),
    })
}

pub fn decode_navi_to_number(word: &str) -> TypedQuery {
    TypedQuery::NaviToNumber {
        word: word.to_string(),
    }
}

pub fn decode_number_to_navi(raw: &str) -> Result<TypedQuery, DecodeError> {
    Ok(TypedQuery::NumberToNavi {
        value: parse_any_base(raw)?,
    })
}

fn parse_count(raw: &str) -> Result<usize, DecodeError> {
    let n = parse_decimal(raw)?;
    if n < 1 {
        return Err(DecodeError::InvalidDecimal(raw.to_string()));
    }
    Ok((n as usize).min(MAX_NAMES))
}

fn parse_syllables(raw: &str) -> Result<u8, DecodeError> {
    let n = parse_decimal(raw)?;
    if n < 1 {
        return Err(DecodeError::InvalidDecimal(raw.to_string()));
    }
    Ok(n.min(MAX_NAME_SYLLABLES as i64) as u8)
}

pub fn decode_name_single(
    count: &str,
    syllables: &str,
    dialect: &str,
    discord_safe: bool,
) -> Result<TypedQuery, DecodeError> {
    Ok(TypedQuery::Name(NameQuery {
        style: NameStyle::Single,
        count: parse_count(count)?,
        syllables: [parse_syllables(syllables)?, 0, 0],
        dialect: Dialect::from_token(dialect),
        ending: NameEnding::Son,
        noun_mode: NounMode::Normal,
        adjective_mode: AdjectiveMode::None,
        discord_safe,
    }))
}

#[allow(clippy::too_many_arguments)]
pub fn decode_name_full(
    ending: &str,
    count: &str,
    s1: &str,
    s2: &str,
    s3: &str,
    dialect: &str,
    discord_safe: bool,
) -> Result<TypedQuery, DecodeError> {
    Ok(TypedQuery::Name(NameQuery {
        style: NameStyle::Full,
        count: parse_count(count)?,
        syllables: [
            parse_syllables(s1)?,
            parse_syllables(s2)?,
            parse_syllables(s3)?,
        ],
        dialect: Dialect::from_token(dialect),
        ending: NameEnding::from_token(ending),
        noun_mode: NounMode::Normal,
        adjective_mode: AdjectiveMode::None,
        discord_safe,
    }))
}

pub fn decode_name_alu(
    count: &str,
    syllables: &str,
    noun_mode: &str,
    adjective_mode: &str,
    dialect: &str,
    discord_safe: bool,
) -> Result<TypedQuery, DecodeError> {
    Ok(TypedQuery::Name(NameQuery {
        style: NameStyle::Alu,
        count: parse_count(count)?,
        syllables: [parse_syllables(syllables)?, 0, 0],
        dialect: Dialect::from_token(dialect),
        ending: NameEnding::Son,
        noun_mode: NounMode::from_token(noun_mode),
        adjective_mode: AdjectiveMode::from_token(adjective_mode),
        discord_safe,
    }))
}

pub fn decode_validity(lang: &str, words: &str, discord_safe: bool) -> TypedQuery {
    TypedQuery::Validity {
        candidate: words.to_string(),
        language_code: lang.to_string(),
        discord_safe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_space_lists_decode_like_space_only() {
        assert_eq!(
            split_terms("term1, term2 term3"),
            vec!["term1,term2".to_string(), "term3".to_string()]
        );
        assert_eq!(
            split_terms("term1,term2 term3"),
            vec!["term1,term2".to_string(), "term3".to_string()]
        );
    }

    #[test]
    fn split_terms_drops_empty_tokens() {
        assert_eq!(split_terms(""), Vec::<String>::new());
        assert_eq!(split_terms("  a  b "), vec!["a", "b"]);
    }

    #[test]
    fn any_base_parsing() {
        assert_eq!(parse_any_base("15"), Ok(15));
        assert_eq!(parse_any_base("017"), Ok(15));
        assert_eq!(parse_any_base("0o17"), Ok(15));
        assert_eq!(parse_any_base("0xF"), Ok(15));
        assert_eq!(parse_any_base("0b1111"), Ok(15));
        assert_eq!(parse_any_base("0"), Ok(0));
        assert_eq!(parse_any_base("32767"), Ok(MAX_NUMBER));
    }

    #[test]
    fn any_base_rejections_keep_the_token() {
        assert_eq!(
            parse_any_base("abc"),
            Err(DecodeError::InvalidInteger("abc".to_string()))
        );
        assert_eq!(
            parse_any_base("32768"),
            Err(DecodeError::InvalidInteger("32768".to_string()))
        );
        assert_eq!(
            parse_any_base("-1"),
            Err(DecodeError::InvalidInteger("-1".to_string()))
        );
        assert_eq!(
            parse_any_base("08"),
            Err(DecodeError::InvalidInteger("08".to_string()))
        );
    }

    #[test]
    fn random_count_must_be_decimal() {
        assert!(decode_random("8", "", "").is_ok());
        assert_eq!(
            decode_random("abc", "", ""),
            Err(DecodeError::InvalidDecimal("abc".to_string()))
        );
        assert_eq!(
            decode_random("0", "", ""),
            Err(DecodeError::InvalidDecimal("0".to_string()))
        );
    }

    #[test]
    fn name_counts_are_clamped_not_rejected() {
        let q = decode_name_single("500", "9", "forest", false).unwrap();
        match q {
            TypedQuery::Name(name) => {
                assert_eq!(name.count, 50);
                assert_eq!(name.syllables[0], 4);
                assert_eq!(name.dialect, Dialect::Forest);
            }
            other => panic!("unexpected query: {:?}", other),
        }
    }

    #[test]
    fn alu_query_resolves_both_modes() {
        let q = decode_name_alu("4", "2", "verb-er", "genitive noun", "reef", true).unwrap();
        match q {
            TypedQuery::Name(name) => {
                assert_eq!(name.noun_mode, NounMode::VerbEr);
                assert_eq!(name.adjective_mode, AdjectiveMode::GenitiveNoun);
                assert!(name.discord_safe);
            }
            other => panic!("unexpected query: {:?}", other),
        }
    }
}
