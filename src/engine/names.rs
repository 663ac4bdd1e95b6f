//! Random name generation: single names, full (family) names, and the
//! "X alu Y" style that attaches a dictionary noun with an optional
//! qualifier.

use rand::Rng;
use rand::seq::SliceRandom;

use super::Word;
use crate::query::enums::{AdjectiveMode, Dialect, NameEnding, NounMode};

const ONSETS: [&str; 24] = [
    "t", "n", "k", "l", "s", "m", "p", "r", "y", "w", "'", "h", "f", "v", "z", "ts", "tx", "px",
    "kx", "ng", "sk", "fk", "tsk", "sl",
];

const NUCLEI: [&str; 11] = ["a", "ä", "e", "i", "ì", "o", "u", "aw", "ay", "ew", "ey"];

const CODAS: [&str; 9] = ["p", "t", "k", "m", "n", "ng", "r", "l", "'"];

fn onset(dialect: Dialect, rng: &mut impl Rng) -> String {
    let raw = *ONSETS.choose(rng).unwrap_or(&"t");
    // Reef speakers voice the ejectives.
    if dialect == Dialect::Reef {
        match raw {
            "px" => return "b".to_string(),
            "tx" => return "d".to_string(),
            "kx" => return "g".to_string(),
            _ => {}
        }
    }
    raw.to_string()
}

fn syllable(dialect: Dialect, final_syllable: bool, rng: &mut impl Rng) -> String {
    let mut s = onset(dialect, rng);
    s.push_str(NUCLEI.choose(rng).unwrap_or(&"a"));
    // Codas are sparse, and only the last syllable of a part takes one here
    // to keep generated names pronounceable.
    if final_syllable && rng.gen_bool(0.4) {
        s.push_str(CODAS.choose(rng).unwrap_or(&""));
    }
    s
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One name part of `syllables` syllables.
pub fn name_part(syllables: u8, dialect: Dialect, rng: &mut impl Rng) -> String {
    let count = syllables.clamp(1, 4);
    let mut part = String::new();
    for i in 0..count {
        part.push_str(&syllable(dialect, i + 1 == count, rng));
    }
    capitalize(&part)
}

pub fn single_names(count: usize, syllables: u8, dialect: Dialect, rng: &mut impl Rng) -> String {
    (0..count)
        .map(|_| name_part(syllables, dialect, rng))
        .collect::<Vec<_>>()
        .join("\n")
}

/// "First te Family Parent'itan" style names.
pub fn full_names(
    ending: NameEnding,
    count: usize,
    syllables: [u8; 3],
    dialect: Dialect,
    rng: &mut impl Rng,
) -> String {
    (0..count)
        .map(|_| {
            format!(
                "{} te {} {}{}",
                name_part(syllables[0], dialect, rng),
                name_part(syllables[1], dialect, rng),
                name_part(syllables[2], dialect, rng),
                ending.suffix()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pick_by_pos<'a>(lexicon: &'a [Word], prefix: &str, rng: &mut impl Rng) -> Option<&'a Word> {
    let candidates: Vec<&Word> = lexicon
        .iter()
        .filter(|w| w.part_of_speech.starts_with(prefix))
        .collect();
    candidates.choose(rng).copied()
}

/// Active/passive participle: infix after the onset of the first syllable.
fn participle(verb: &str, infix: &str) -> String {
    let vowels = ['a', 'ä', 'e', 'i', 'ì', 'o', 'u'];
    match verb.find(|c| vowels.contains(&c)) {
        Some(idx) => format!("{}{}{}", &verb[..idx], infix, &verb[idx..]),
        None => verb.to_string(),
    }
}

fn genitive(noun: &str) -> String {
    let ends_in_vowel = noun
        .chars()
        .last()
        .map(|c| ['a', 'ä', 'e', 'i', 'ì', 'o', 'u'].contains(&c))
        .unwrap_or(false);
    if ends_in_vowel {
        format!("{}yä", noun)
    } else {
        format!("{}ä", noun)
    }
}

fn noun_for(lexicon: &[Word], mode: NounMode, rng: &mut impl Rng) -> Option<String> {
    match mode {
        NounMode::None => None,
        NounMode::Normal => pick_by_pos(lexicon, "n.", rng).map(|w| w.navi.clone()),
        NounMode::VerbEr => pick_by_pos(lexicon, "v", rng).map(|w| format!("{}yu", w.navi)),
        NounMode::Any => {
            let concrete = if rng.gen_bool(0.5) {
                NounMode::Normal
            } else {
                NounMode::VerbEr
            };
            noun_for(lexicon, concrete, rng)
        }
    }
}

fn qualifier_for(lexicon: &[Word], mode: AdjectiveMode, rng: &mut impl Rng) -> Option<String> {
    match mode {
        AdjectiveMode::None => None,
        AdjectiveMode::Normal => pick_by_pos(lexicon, "adj.", rng).map(|w| format!("a{}", w.navi)),
        AdjectiveMode::GenitiveNoun => {
            pick_by_pos(lexicon, "n.", rng).map(|w| genitive(&w.navi))
        }
        AdjectiveMode::OriginNoun => {
            pick_by_pos(lexicon, "n.", rng).map(|w| format!("ta {}", w.navi))
        }
        AdjectiveMode::ActiveParticiple => {
            pick_by_pos(lexicon, "v", rng).map(|w| format!("a{}", participle(&w.navi, "us")))
        }
        AdjectiveMode::PassiveParticiple => {
            pick_by_pos(lexicon, "v", rng).map(|w| format!("a{}", participle(&w.navi, "awn")))
        }
        AdjectiveMode::VerbEr => pick_by_pos(lexicon, "v", rng).map(|w| format!("{}yu", w.navi)),
        AdjectiveMode::Any => {
            let concrete = [
                AdjectiveMode::Normal,
                AdjectiveMode::GenitiveNoun,
                AdjectiveMode::OriginNoun,
                AdjectiveMode::ActiveParticiple,
                AdjectiveMode::PassiveParticiple,
                AdjectiveMode::VerbEr,
            ];
            qualifier_for(lexicon, *concrete.choose(rng).unwrap(), rng)
        }
    }
}

/// "Name alu noun qualifier" style names.
pub fn alu_names(
    lexicon: &[Word],
    count: usize,
    syllables: u8,
    noun_mode: NounMode,
    adjective_mode: AdjectiveMode,
    dialect: Dialect,
    rng: &mut impl Rng,
) -> String {
    (0..count)
        .map(|_| {
            let name = name_part(syllables, dialect, rng);
            let Some(noun) = noun_for(lexicon, noun_mode, rng) else {
                return name;
            };
            match qualifier_for(lexicon, adjective_mode, rng) {
                Some(q) => format!("{} alu {} {}", name, noun, q),
                None => format!("{} alu {}", name, noun),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
