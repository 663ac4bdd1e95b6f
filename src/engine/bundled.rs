//! Reference engine implementation with a small embedded lexicon. Keeps the
//! crate runnable end to end and gives the test suite a live collaborator;
//! a production deployment swaps in the full dictionary behind the same
//! trait.

use std::collections::BTreeMap;
use std::sync::RwLock;

use rand::seq::SliceRandom;

use super::{
    Affixes, DictionaryEngine, EngineError, EngineVersion, GroupedWords, PhonemeDistros, Word,
    names, numbers, phonology, text,
};
use crate::query::enums::{AdjectiveMode, Dialect, DigraphMode, NameEnding, NounMode};

pub struct BundledEngine {
    lexicon: RwLock<Vec<Word>>,
    version: EngineVersion,
}

impl Default for BundledEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BundledEngine {
    pub fn new() -> Self {
        Self {
            lexicon: RwLock::new(seed_lexicon()),
            version: EngineVersion {
                major: 5,
                minor: 23,
                patch: 1,
                dict_build: "2025-08-01".to_string(),
            },
        }
    }

    fn lexicon(&self) -> Vec<Word> {
        self.lexicon.read().expect("lexicon lock poisoned").clone()
    }
}

fn word(
    id: u32,
    navi: &str,
    ipa: &str,
    pos: &str,
    syllables: &str,
    stressed: u8,
    glosses: &[(&str, &str)],
) -> Word {
    Word {
        id,
        navi: navi.to_string(),
        ipa: ipa.to_string(),
        part_of_speech: pos.to_string(),
        syllables: syllables.to_string(),
        stressed,
        translations: glosses
            .iter()
            .map(|(lang, gloss)| (lang.to_string(), gloss.to_string()))
            .collect(),
        affixes: Affixes::default(),
    }
}

fn seed_lexicon() -> Vec<Word> {
    vec![
        word(1, "kaltxì", "kal.ˈtʼɪ", "intj.", "kal.txì", 2, &[
            ("en", "hello"), ("de", "hallo"), ("fr", "bonjour"), ("nl", "hallo"),
        ]),
        word(2, "taron", "ˈta.ɾon", "vtr.", "ta.ron", 1, &[
            ("en", "hunt"), ("de", "jagen"), ("fr", "chasser"), ("nl", "jagen"),
        ]),
        word(3, "tute", "ˈtu.tɛ", "n.", "tu.te", 1, &[
            ("en", "person"), ("de", "Person"), ("fr", "personne"), ("nl", "persoon"),
        ]),
        word(4, "tìftia", "tɪ.ˈfti.a", "n.", "tì.fti.a", 2, &[
            ("en", "study"), ("de", "Studium"), ("fr", "étude"),
        ]),
        word(5, "kifkey", "ki.ˈfkɛj", "n.", "ki.fkey", 2, &[
            ("en", "world"), ("de", "Welt"), ("fr", "monde"), ("nl", "wereld"),
        ]),
        word(6, "skxawng", "ˈskʼawŋ", "n.", "skxawng", 1, &[
            ("en", "moron"), ("de", "Trottel"), ("fr", "idiot"),
        ]),
        word(7, "ngay", "ˈŋaj", "adj.", "ngay", 1, &[
            ("en", "true"), ("de", "wahr"), ("fr", "vrai"), ("nl", "waar"),
        ]),
        word(8, "apxa", "a.ˈpʼa", "adj.", "a.pxa", 2, &[
            ("en", "large"), ("de", "groß"), ("fr", "grand"),
        ]),
        word(9, "krr", "ˈkr̩ː", "n.", "krr", 1, &[
            ("en", "time"), ("de", "Zeit"), ("fr", "temps"), ("nl", "tijd"),
        ]),
        word(10, "au", "ˈa.u", "n.", "a.u", 1, &[
            ("en", "drum"), ("de", "Trommel"), ("fr", "tambour"),
        ]),
        word(11, "au", "ˈa.u", "intj.", "a.u", 1, &[
            ("en", "exclamation of consternation"), ("de", "Ausruf der Bestürzung"),
        ]),
        word(12, "eywa", "ˈɛj.wa", "prop.n.", "ey.wa", 1, &[
            ("en", "Eywa, the world spirit"), ("de", "Eywa, der Weltengeist"),
        ]),
        word(13, "omum", "o.ˈmum", "vtr.", "o.mum", 2, &[
            ("en", "know"), ("de", "wissen"), ("fr", "savoir"), ("nl", "weten"),
        ]),
        word(14, "fpìl", "ˈfpɪl", "vtr.", "fpìl", 1, &[
            ("en", "think"), ("de", "denken"), ("fr", "penser"),
        ]),
        word(15, "tìng", "ˈtɪŋ", "vtr.", "tìng", 1, &[
            ("en", "give"), ("de", "geben"), ("fr", "donner"), ("nl", "geven"),
        ]),
        word(16, "lor", "ˈloɾ", "adj.", "lor", 1, &[
            ("en", "beautiful"), ("de", "schön"), ("fr", "beau"), ("nl", "mooi"),
        ]),
        word(17, "ikran", "ˈik.ɾan", "n.", "ik.ran", 1, &[
            ("en", "banshee"), ("de", "Banshee"), ("fr", "banshee"),
        ]),
        word(18, "uturu", "u.ˈtu.ɾu", "n.", "u.tu.ru", 2, &[
            ("en", "refuge"), ("de", "Zuflucht"), ("fr", "refuge"),
        ]),
        word(19, "tsun", "ˈt͡sun", "vim.", "tsun", 1, &[
            ("en", "can, be able"), ("de", "können"), ("fr", "pouvoir"),
        ]),
        word(20, "txon", "ˈtʼon", "n.", "txon", 1, &[
            ("en", "night"), ("de", "Nacht"), ("fr", "nuit"), ("nl", "nacht"),
        ]),
        // attested with two pronunciations
        word(21, "tskxe", "ˈt͡skʼɛ or t͡s.ˈkʼɛ", "n.", "tskxe", 1, &[
            ("en", "rock, stone"), ("de", "Stein"), ("fr", "pierre"),
        ]),
        word(22, "menari", "mɛ.ˈna.ɾi or ˈmɛ.na.ɾi", "n.", "me.na.ri", 2, &[
            ("en", "eyes (dual)"), ("de", "Augen (Dual)"),
        ]),
        // loanwords
        word(23, "tsyänel", "ˈt͡sjæ.nɛl", "n.", "tsyä.nel", 1, &[
            ("en", "channel (loan)"), ("de", "Kanal (Lehnwort)"),
        ]),
        word(24, "Kerìsmìsì", "kɛ.ɾɪs.mɪ.sɪ", "prop.n.", "Ke.rìs.mì.sì", 2, &[
            ("en", "Christmas (loan)"), ("de", "Weihnachten (Lehnwort)"),
        ]),
        word(25, "fwew", "ˈfwɛw", "vtr.", "fwew", 1, &[
            ("en", "seek, look for"), ("de", "suchen"), ("fr", "chercher"),
        ]),
        word(26, "payoang", "paj.ˈo.aŋ", "n.", "pay.o.ang", 2, &[
            ("en", "fish"), ("de", "Fisch"), ("fr", "poisson"), ("nl", "vis"),
        ]),
    ]
}

/// Strippable derivational prefixes, longest first.
const PREFIXES: [&str; 9] = ["tsay", "fray", "fne", "tsa", "fra", "ay", "me", "fì", "tì"];

/// Strippable case/derivational suffixes, longest first.
const SUFFIXES: [&str; 12] = [
    "tsyìp", "ìri", "eyä", "yä", "ìl", "it", "ti", "ru", "ur", "ä", "l", "t",
];

/// Reverse lenition: lenited first phoneme to possible originals.
const UNLENITE: [(&str, &[&str]); 6] = [
    ("h", &["k"]),
    ("f", &["p"]),
    ("s", &["t", "ts"]),
    ("k", &["kx"]),
    ("p", &["px"]),
    ("t", &["tx"]),
];

fn match_token(lexicon: &[Word], token: &str, check_affixes: bool) -> Vec<Word> {
    let needle = token.to_lowercase();
    let mut out: Vec<Word> = lexicon
        .iter()
        .filter(|w| w.navi.to_lowercase() == needle)
        .cloned()
        .collect();

    if !check_affixes {
        return out;
    }

    // Candidate root forms after peeling at most one prefix and one suffix,
    // with optional reverse lenition on the bare stem.
    let mut candidates: Vec<(String, Affixes)> = Vec::new();
    let mut stems: Vec<(String, Option<String>)> = vec![(needle.clone(), None)];
    for p in PREFIXES {
        if let Some(stripped) = needle.strip_prefix(p) {
            if !stripped.is_empty() {
                stems.push((stripped.to_string(), Some(p.to_string())));
            }
        }
    }
    for (stem, prefix) in stems {
        candidates.push((
            stem.clone(),
            Affixes {
                prefixes: prefix.iter().cloned().collect(),
                ..Default::default()
            },
        ));
        for s in SUFFIXES {
            if let Some(stripped) = stem.strip_suffix(s) {
                if !stripped.is_empty() {
                    candidates.push((
                        stripped.to_string(),
                        Affixes {
                            prefixes: prefix.iter().cloned().collect(),
                            suffixes: vec![s.to_string()],
                            ..Default::default()
                        },
                    ));
                }
            }
        }
    }
    // reverse lenition applies only when something was peeled off the front
    let mut lenited: Vec<(String, Affixes)> = Vec::new();
    for (stem, affixes) in &candidates {
        if affixes.prefixes.is_empty() {
            continue;
        }
        for (soft, originals) in UNLENITE {
            if let Some(tail) = stem.strip_prefix(soft) {
                for original in originals {
                    let mut restored = Affixes {
                        lenition: vec![format!("{}→{}", original, soft)],
                        ..affixes.clone()
                    };
                    restored.lenition.sort();
                    lenited.push((format!("{}{}", original, tail), restored));
                }
            }
        }
    }
    candidates.extend(lenited);

    for (stem, affixes) in candidates {
        if affixes.is_empty() {
            continue;
        }
        for w in lexicon.iter().filter(|w| w.navi.to_lowercase() == stem) {
            let mut hit = w.clone();
            hit.affixes = affixes.clone();
            if !out.iter().any(|existing| {
                existing.id == hit.id && existing.affixes == hit.affixes
            }) {
                out.push(hit);
            }
        }
    }
    out
}

/// One filter expression: `subject condition operand`, e.g. `word starts tì`.
/// Triples are separated by a literal `and` term. Unrecognized triples are
/// skipped with a warning.
fn apply_filters(
    mut words: Vec<Word>,
    filters: &[String],
    digraph_mode: DigraphMode,
) -> Vec<Word> {
    let terms: Vec<&String> = filters.iter().filter(|t| t.as_str() != "and").collect();
    for triple in terms.chunks(3) {
        let [subject, condition, operand] = triple else {
            if !triple.is_empty() {
                tracing::warn!("dangling filter terms ignored: {:?}", triple);
            }
            continue;
        };
        let operand = operand.to_lowercase();
        words.retain(|w| {
            let navi = w.navi.to_lowercase();
            match (subject.as_str(), condition.as_str()) {
                ("word", "is") => navi == operand,
                ("word", "starts") => navi.starts_with(&operand),
                ("word", "ends") => navi.ends_with(&operand),
                ("word", "has") => match digraph_mode {
                    DigraphMode::Strict => phonology::contains_aligned(&navi, &operand),
                    DigraphMode::Tolerant => {
                        navi.contains(&operand) || phonology::contains_aligned(&navi, &operand)
                    }
                    DigraphMode::Ignore => navi.contains(&operand),
                },
                ("pos", "is") => w.part_of_speech == operand,
                ("pos", "has") => w.part_of_speech.contains(&operand),
                ("syllables", op @ ("=" | "<" | ">" | "<=" | ">=")) => {
                    let n = w.syllables.split('.').count();
                    match operand.parse::<usize>() {
                        Ok(target) => match op {
                            "=" => n == target,
                            "<" => n < target,
                            ">" => n > target,
                            "<=" => n <= target,
                            _ => n >= target,
                        },
                        Err(_) => true,
                    }
                }
                _ => {
                    tracing::warn!("unrecognized filter: {} {} {}", subject, condition, operand);
                    true
                }
            }
        });
    }
    words
}

impl DictionaryEngine for BundledEngine {
    fn translate_from_navi(&self, input: &str, check_affixes: bool) -> GroupedWords {
        let lexicon = self.lexicon();
        input
            .split_whitespace()
            .map(|token| match_token(&lexicon, token, check_affixes))
            .collect()
    }

    fn translate_to_navi(&self, localized: &str, language_code: &str) -> GroupedWords {
        let lexicon = self.lexicon();
        localized
            .split_whitespace()
            .map(|token| {
                let needle = token.to_lowercase();
                lexicon
                    .iter()
                    .filter(|w| {
                        w.translations
                            .get(language_code)
                            .or_else(|| w.translations.get("en"))
                            .map(|gloss| {
                                gloss
                                    .to_lowercase()
                                    .split(|c: char| !c.is_alphanumeric())
                                    .any(|part| part == needle)
                            })
                            .unwrap_or(false)
                    })
                    .cloned()
                    .collect()
            })
            .collect()
    }

    fn list(
        &self,
        filters: &[String],
        digraph_mode: DigraphMode,
    ) -> Result<Vec<Word>, EngineError> {
        Ok(apply_filters(self.lexicon(), filters, digraph_mode))
    }

    fn random(
        &self,
        count: usize,
        filters: &[String],
        digraph_mode: DigraphMode,
    ) -> Result<Vec<Word>, EngineError> {
        let filtered = apply_filters(self.lexicon(), filters, digraph_mode);
        let mut rng = rand::thread_rng();
        let mut sample: Vec<Word> = filtered
            .choose_multiple(&mut rng, count.min(filtered.len()))
            .cloned()
            .collect();
        sample.shuffle(&mut rng);
        Ok(sample)
    }

    fn navi_to_number(&self, word: &str) -> Result<u16, EngineError> {
        numbers::navi_to_number(word)
    }

    fn number_to_navi(&self, value: u16) -> Result<String, EngineError> {
        numbers::number_to_navi(value)
    }

    fn single_names(&self, count: usize, syllables: u8, dialect: Dialect) -> String {
        let mut rng = rand::thread_rng();
        names::single_names(count, syllables, dialect, &mut rng)
    }

    fn full_names(
        &self,
        ending: NameEnding,
        count: usize,
        syllables: [u8; 3],
        dialect: Dialect,
    ) -> String {
        let mut rng = rand::thread_rng();
        names::full_names(ending, count, syllables, dialect, &mut rng)
    }

    fn alu_names(
        &self,
        count: usize,
        syllables: u8,
        noun_mode: NounMode,
        adjective_mode: AdjectiveMode,
        dialect: Dialect,
    ) -> String {
        let mut rng = rand::thread_rng();
        names::alu_names(
            &self.lexicon(),
            count,
            syllables,
            noun_mode,
            adjective_mode,
            dialect,
            &mut rng,
        )
    }

    fn validity(&self, candidate: &str, language_code: &str) -> String {
        candidate
            .split_whitespace()
            .map(|token| {
                let key = if phonology::valid_word(token) {
                    "validWord"
                } else {
                    "invalidWord"
                };
                text::text(key, language_code).replace("{word}", token)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn homonyms(&self) -> GroupedWords {
        let lexicon = self.lexicon();
        let mut by_spelling: BTreeMap<String, Vec<Word>> = BTreeMap::new();
        for w in lexicon {
            by_spelling.entry(w.navi.to_lowercase()).or_default().push(w);
        }
        by_spelling
            .into_values()
            .filter(|group| group.len() > 1)
            .collect()
    }

    fn oddballs(&self) -> GroupedWords {
        self.lexicon()
            .into_iter()
            .filter(|w| !phonology::valid_word(&w.navi))
            .map(|w| vec![w])
            .collect()
    }

    fn multi_ipa(&self) -> GroupedWords {
        self.lexicon()
            .into_iter()
            .filter(|w| w.ipa.contains(" or "))
            .map(|w| vec![w])
            .collect()
    }

    fn phoneme_distros(&self, language_code: &str) -> PhonemeDistros {
        let mut categories: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for w in self.lexicon() {
            for (category, phoneme) in phonology::classify(&w.navi) {
                *categories
                    .entry(text::text(category, language_code))
                    .or_default()
                    .entry(phoneme)
                    .or_default() += 1;
            }
        }
        PhonemeDistros(categories)
    }

    fn lenition_table(&self) -> &'static str {
        phonology::LENITION_TABLE
    }

    fn dict_len(&self) -> usize {
        self.lexicon.read().expect("lexicon lock poisoned").len()
    }

    fn dict_len_sentence(&self, language_code: &str) -> String {
        text::text("dictSize", language_code).replace("{number}", &self.dict_len().to_string())
    }

    fn reload(&self) -> Result<(), EngineError> {
        let fresh = seed_lexicon();
        let mut lexicon = self
            .lexicon
            .write()
            .map_err(|_| EngineError::ReloadFailed("lexicon lock poisoned".to_string()))?;
        *lexicon = fresh;
        Ok(())
    }

    fn text(&self, key: &str, language_code: &str) -> String {
        text::text(key, language_code)
    }

    fn version(&self) -> EngineVersion {
        self.version.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_search_groups_per_token() {
        let engine = BundledEngine::new();
        let groups = engine.translate_from_navi("taron tute", true);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].navi, "taron");
        assert_eq!(groups[1][0].navi, "tute");
    }

    #[test]
    fn unknown_token_yields_empty_group() {
        let engine = BundledEngine::new();
        let groups = engine.translate_from_navi("zzz", true);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
    }

    #[test]
    fn affix_analysis_finds_prefixed_forms() {
        let engine = BundledEngine::new();
        // ay+tute with no lenition applied
        let groups = engine.translate_from_navi("aytute", true);
        assert!(groups[0].iter().any(|w| w.navi == "tute"));
        // the simple search must not
        let simple = engine.translate_from_navi("aytute", false);
        assert!(simple[0].is_empty());
    }

    #[test]
    fn affix_analysis_reverses_lenition() {
        let engine = BundledEngine::new();
        // ay+sute <- lenited tute
        let groups = engine.translate_from_navi("aysute", true);
        let hit = groups[0].iter().find(|w| w.navi == "tute").expect("tute");
        assert_eq!(hit.affixes.prefixes, vec!["ay".to_string()]);
        assert!(!hit.affixes.lenition.is_empty());
    }

    #[test]
    fn reverse_search_matches_glosses() {
        let engine = BundledEngine::new();
        let groups = engine.translate_to_navi("hunt", "en");
        assert!(groups[0].iter().any(|w| w.navi == "taron"));
        let de = engine.translate_to_navi("jagen", "de");
        assert!(de[0].iter().any(|w| w.navi == "taron"));
    }

    #[test]
    fn list_filters_by_pos_and_prefix() {
        let engine = BundledEngine::new();
        let nouns = engine
            .list(&["pos".into(), "is".into(), "n.".into()], DigraphMode::Strict)
            .unwrap();
        assert!(!nouns.is_empty());
        assert!(nouns.iter().all(|w| w.part_of_speech == "n."));

        let t_words = engine
            .list(
                &[
                    "word".into(), "starts".into(), "t".into(),
                    "and".into(),
                    "pos".into(), "is".into(), "vtr.".into(),
                ],
                DigraphMode::Strict,
            )
            .unwrap();
        assert!(t_words.iter().all(|w| w.navi.starts_with('t')));
        assert!(t_words.iter().any(|w| w.navi == "taron"));
    }

    #[test]
    fn strict_digraph_filtering_excludes_partial_matches() {
        let engine = BundledEngine::new();
        // "ngay" contains phoneme ng, never a bare n
        let strict = engine
            .list(
                &["word".into(), "has".into(), "n".into()],
                DigraphMode::Strict,
            )
            .unwrap();
        assert!(!strict.iter().any(|w| w.navi == "ngay"));
        let ignore = engine
            .list(
                &["word".into(), "has".into(), "n".into()],
                DigraphMode::Ignore,
            )
            .unwrap();
        assert!(ignore.iter().any(|w| w.navi == "ngay"));
    }

    #[test]
    fn random_sampling_respects_count() {
        let engine = BundledEngine::new();
        let sample = engine.random(5, &[], DigraphMode::Strict).unwrap();
        assert_eq!(sample.len(), 5);
        let everything = engine.random(10_000, &[], DigraphMode::Strict).unwrap();
        assert_eq!(everything.len(), engine.dict_len());
    }

    #[test]
    fn homonyms_and_reports() {
        let engine = BundledEngine::new();
        let homonyms = engine.homonyms();
        assert!(homonyms.iter().any(|g| g[0].navi == "au" && g.len() == 2));

        let oddballs = engine.oddballs();
        assert!(oddballs.iter().any(|g| g[0].navi == "tsyänel"));
        assert!(!oddballs.iter().any(|g| g[0].navi == "taron"));

        let multi = engine.multi_ipa();
        assert!(multi.iter().any(|g| g[0].navi == "tskxe"));
    }

    #[test]
    fn validity_lines_are_localized() {
        let engine = BundledEngine::new();
        let report = engine.validity("taron bdg", "en");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "taron is valid Na'vi");
        assert_eq!(lines[1], "bdg is not valid Na'vi");

        let german = engine.validity("taron", "de");
        assert_eq!(german, "taron ist gültiges Na'vi");
    }

    #[test]
    fn dict_len_sentence_embeds_the_count() {
        let engine = BundledEngine::new();
        let sentence = engine.dict_len_sentence("en");
        assert!(sentence.contains(&engine.dict_len().to_string()));
    }

    #[test]
    fn reload_succeeds_and_keeps_the_dictionary() {
        let engine = BundledEngine::new();
        let before = engine.dict_len();
        engine.reload().unwrap();
        assert_eq!(engine.dict_len(), before);
    }
}
