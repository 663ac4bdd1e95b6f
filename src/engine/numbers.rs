//! Na'vi numeral composition and parsing.
//!
//! The numeral system is octal-positional: digit morphemes combine with
//! power words (vol = 8, zam = 64, vozam = 512, zazam = 4096) as prefixes,
//! and the units digit attaches as a suffix. Composition and parsing are
//! exact inverses over the full range 0..=32767 (five octal digits).

use super::EngineError;

/// Standalone digit words 0..=7.
const DIGITS: [&str; 8] = ["kew", "'aw", "mune", "pxey", "tsìng", "mrr", "pukap", "kinä"];

/// Multiplier prefixes for power words, indexed by digit (1 takes none).
const PREFIXES: [&str; 8] = ["", "", "me", "pxe", "tsì", "mrr", "pu", "ki"];

/// Units-digit suffix forms.
const SUFFIXES: [&str; 8] = ["", "aw", "mun", "pey", "sìng", "mrr", "fu", "hin"];

/// Power words for 8^1..=8^4, highest first.
const POWERS: [(u32, &str); 4] = [(4, "zazam"), (3, "vozam"), (2, "zam"), (1, "vol")];

pub const MAX: u16 = 0o77777;

/// Compose the canonical word for `value`.
pub fn number_to_navi(value: u16) -> Result<String, EngineError> {
    if value > MAX {
        return Err(EngineError::OutOfRange(value as i64));
    }
    let n = value as u32;
    if n < 8 {
        return Ok(DIGITS[n as usize].to_string());
    }

    let mut word = String::new();
    for &(power, power_word) in &POWERS {
        let digit = ((n >> (3 * power)) & 0o7) as usize;
        if digit > 0 {
            word.push_str(PREFIXES[digit]);
            word.push_str(power_word);
        }
    }
    let units = (n & 0o7) as usize;
    if units > 0 {
        word.push_str(SUFFIXES[units]);
    }
    Ok(word)
}

/// Parse a numeral word back to its value. Only canonical compositions are
/// accepted; anything else is a no-result.
pub fn navi_to_number(word: &str) -> Result<u16, EngineError> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(EngineError::NoResults);
    }

    // Standalone digits, including zero.
    if let Some(d) = DIGITS.iter().position(|&d| d == normalized) {
        return Ok(d as u16);
    }

    let mut rest = normalized.as_str();
    let mut total: u32 = 0;
    let mut consumed_power = false;

    for &(power, power_word) in &POWERS {
        let mut digit = 0usize;
        let mut block_len = 0usize;
        for d in (1..=7).rev() {
            let block = format!("{}{}", PREFIXES[d], power_word);
            if rest.starts_with(&block) {
                digit = d;
                block_len = block.len();
                break;
            }
        }
        if digit > 0 {
            total += (digit as u32) << (3 * power);
            rest = &rest[block_len..];
            consumed_power = true;
        }
    }

    if !consumed_power {
        return Err(EngineError::NoResults);
    }

    if !rest.is_empty() {
        match SUFFIXES.iter().position(|&s| !s.is_empty() && s == rest) {
            Some(units) => total += units as u32,
            None => return Err(EngineError::NoResults),
        }
    }

    if total > MAX as u32 {
        return Err(EngineError::NoResults);
    }
    Ok(total as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_digit_words() {
        assert_eq!(number_to_navi(0).unwrap(), "kew");
        assert_eq!(number_to_navi(1).unwrap(), "'aw");
        assert_eq!(number_to_navi(7).unwrap(), "kinä");
    }

    #[test]
    fn composed_numbers() {
        assert_eq!(number_to_navi(8).unwrap(), "vol");
        assert_eq!(number_to_navi(9).unwrap(), "volaw");
        assert_eq!(number_to_navi(16).unwrap(), "mevol");
        assert_eq!(number_to_navi(0o100).unwrap(), "zam");
        assert_eq!(number_to_navi(0o777).unwrap(), "kizamkivolhin");
        assert_eq!(number_to_navi(32767).unwrap(), "kizazamkivozamkizamkivolhin");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(navi_to_number("").is_err());
        assert!(navi_to_number("tute").is_err());
        assert!(navi_to_number("volvol").is_err());
        assert!(navi_to_number("awvol").is_err());
    }

    #[test]
    fn round_trip_whole_range() {
        for n in 0..=MAX {
            let word = number_to_navi(n).unwrap();
            assert_eq!(
                navi_to_number(&word).unwrap(),
                n,
                "round trip failed for {} ({})",
                n,
                word
            );
        }
    }
}
