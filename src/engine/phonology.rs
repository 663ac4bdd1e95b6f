//! Phoneme tokenization, syllable validation, and the lenition table.

/// Multi-character sound units, longest-match first.
pub const DIGRAPHS: [&str; 11] = [
    "aw", "ay", "ew", "ey", "kx", "px", "tx", "ng", "ts", "ll", "rr",
];

const VOWELS: [&str; 7] = ["a", "ä", "e", "i", "ì", "o", "u"];
const DIPHTHONGS: [&str; 4] = ["aw", "ay", "ew", "ey"];
const PSEUDOVOWELS: [&str; 2] = ["ll", "rr"];

const CONSONANTS: [&str; 20] = [
    "p", "t", "k", "px", "tx", "kx", "'", "f", "s", "h", "v", "z", "ts", "m", "n", "ng", "r", "l",
    "w", "y",
];

/// Consonants that may close a syllable.
const CODAS: [&str; 12] = ["p", "t", "k", "px", "tx", "kx", "m", "n", "ng", "r", "l", "'"];

/// First members of permitted onset clusters.
const CLUSTER_HEADS: [&str; 3] = ["f", "s", "ts"];

/// Second members of permitted onset clusters.
const CLUSTER_TAILS: [&str; 12] = ["p", "t", "k", "px", "tx", "kx", "m", "n", "ng", "r", "l", "w"];

/// The fixed lenition table, served verbatim since the first generation.
pub const LENITION_TABLE: &str = r#"{"kx":"k","px":"p","tx":"t","k":"h","p":"f","t":"s","ts":"s","'":"(disappears, except before ll or rr)"}"#;

/// Tokenize a romanized word into phonemes with digraphs as single units.
/// Returns `None` when a character outside the inventory is hit.
pub fn phonemes(word: &str) -> Option<Vec<String>> {
    let lower = word.to_lowercase();
    let mut tokens = Vec::new();
    let mut rest = lower.as_str();

    'outer: while !rest.is_empty() {
        for d in DIGRAPHS {
            if rest.starts_with(d) {
                tokens.push(d.to_string());
                rest = &rest[d.len()..];
                continue 'outer;
            }
        }
        let c = rest.chars().next().unwrap();
        let single = c.to_string();
        if VOWELS.contains(&single.as_str()) || CONSONANTS.contains(&single.as_str()) {
            tokens.push(single);
            rest = &rest[c.len_utf8()..];
        } else {
            return None;
        }
    }
    Some(tokens)
}

fn is_nucleus(token: &str) -> bool {
    VOWELS.contains(&token)
        || DIPHTHONGS.contains(&token)
        || PSEUDOVOWELS.contains(&token)
}

fn is_consonant(token: &str) -> bool {
    CONSONANTS.contains(&token)
}

fn is_coda(token: &str) -> bool {
    CODAS.contains(&token)
}

fn is_cluster(first: &str, second: &str) -> bool {
    CLUSTER_HEADS.contains(&first) && CLUSTER_TAILS.contains(&second)
}

/// Whether the phoneme sequence splits into well-formed syllables:
/// (C)(C)V(C) with only the permitted onset clusters and codas.
/// Backtracks, since codas and following onsets compete for consonants.
fn syllabify(tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    // onset: zero, one, or a permitted two-consonant cluster
    let onsets: &[usize] = &[2, 1, 0];
    for &onset in onsets {
        if onset == 2
            && !(tokens.len() > 2 && is_cluster(&tokens[0], &tokens[1]) && is_nucleus(&tokens[2]))
        {
            continue;
        }
        if onset == 1 && !(tokens.len() > 1 && is_consonant(&tokens[0]) && is_nucleus(&tokens[1])) {
            continue;
        }
        if onset == 0 && !is_nucleus(&tokens[0]) {
            continue;
        }
        let after_nucleus = onset + 1;

        // without coda
        if syllabify(&tokens[after_nucleus..]) {
            return true;
        }
        // with coda (pseudovowels take none)
        if !PSEUDOVOWELS.contains(&tokens[onset].as_str())
            && tokens.len() > after_nucleus
            && is_coda(&tokens[after_nucleus])
            && syllabify(&tokens[after_nucleus + 1..])
        {
            return true;
        }
    }
    false
}

/// Full phonotactic check for a single word.
pub fn valid_word(word: &str) -> bool {
    match phonemes(word) {
        Some(tokens) if !tokens.is_empty() => syllabify(&tokens),
        _ => false,
    }
}

/// Classify each phoneme of `word` into onset/nucleus/coda-ish buckets for
/// the distribution report. Positions are approximated from the token
/// stream: nuclei are exact, a consonant directly after a nucleus counts as
/// a coda when it may close a syllable.
pub fn classify(word: &str) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    let Some(tokens) = phonemes(word) else {
        return out;
    };
    let mut previous_was_nucleus = false;
    for token in tokens {
        if is_nucleus(&token) {
            out.push(("nuclei", token));
            previous_was_nucleus = true;
        } else if previous_was_nucleus && is_coda(&token) {
            out.push(("codas", token));
            previous_was_nucleus = false;
        } else {
            out.push(("onsets", token));
            previous_was_nucleus = false;
        }
    }
    out
}

/// Check whether `needle` occurs in `haystack` aligned to phoneme
/// boundaries (strict digraph handling).
pub fn contains_aligned(haystack: &str, needle: &str) -> bool {
    let (Some(h), Some(n)) = (phonemes(haystack), phonemes(needle)) else {
        return false;
    };
    if n.is_empty() {
        return true;
    }
    h.windows(n.len()).any(|w| w == n.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_digraphs_as_units() {
        assert_eq!(
            phonemes("tskxe").unwrap(),
            vec!["ts", "kx", "e"]
        );
        assert_eq!(phonemes("ngay").unwrap(), vec!["ng", "ay"]);
        assert!(phonemes("abc").is_none()); // b and c are not in the inventory
    }

    #[test]
    fn validates_ordinary_words() {
        assert!(valid_word("taron"));
        assert!(valid_word("kaltxì"));
        assert!(valid_word("skxawng"));
        assert!(valid_word("krr"));
        assert!(valid_word("eywa"));
    }

    #[test]
    fn rejects_unpronounceable_words() {
        assert!(!valid_word(""));
        assert!(!valid_word("tawtus")); // s cannot close a syllable
        assert!(!valid_word("tpot")); // tp is not a permitted onset
        assert!(!valid_word("bdg"));
    }

    #[test]
    fn aligned_containment_respects_digraphs() {
        // "ng" inside "ngay" is one phoneme, so a bare "n" never aligns
        assert!(contains_aligned("ngay", "ng"));
        assert!(!contains_aligned("ngay", "n"));
        assert!(contains_aligned("taron", "ron"));
    }
}
