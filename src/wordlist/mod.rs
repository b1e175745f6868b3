// src/wordlist/mod.rs
//! Targeted wordlist generation engine.
//!
//! Expands a handful of personal facts into candidate passwords through
//! tokenization, date-fragment extraction, morphological variation, pairwise
//! combination, optional leetspeak substitution and optional year affixing.
//! The expansion steps run in a fixed order; later steps iterate over the
//! working set produced by earlier ones, so the order is part of the
//! observable contract.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::WordlistOptions;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("No usable input: provide a name, birthdate, pet name or custom word")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, WordlistError>;

const LEETSPEAK_MAP: &[(char, char)] = &[
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
    ('l', '1'),
];

/// Output length bounds; words outside [3, 50] chars are dropped.
const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 50;

/// The combination step only looks at this many base words.
const COMBINATION_WINDOW: usize = 5;

/// Year affixing uses this many entries from the front of the year table.
const YEAR_WINDOW: usize = 20;

/// First calendar year in the year table.
const FIRST_YEAR: i32 = 1950;

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(r"\w+").expect("Could not compile regex");
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("Could not compile regex");

    /// Date shapes tried in order: D/M/Y, Y/M/D, two-digit-year D/M/Y and
    /// zero-padded D/M/Y, with `/`, `-` or `.` separators.
    static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})").expect("Could not compile regex"),
        Regex::new(r"(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})").expect("Could not compile regex"),
        Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2})").expect("Could not compile regex"),
        Regex::new(r"(\d{2})[/\-.](\d{2})[/\-.](\d{4})").expect("Could not compile regex"),
    ];
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphabetic())
}

pub struct WordlistGenerator {
    common_years: Vec<String>,
}

impl WordlistGenerator {
    /// Build a generator whose year table spans 1950 through nine years past
    /// the current calendar year. The table is fixed for the generator's
    /// lifetime.
    pub fn new() -> Self {
        Self::with_current_year(Utc::now().year())
    }

    /// Same as [`WordlistGenerator::new`] but with an injected current year,
    /// so tests are not tied to the wall clock.
    pub fn with_current_year(current_year: i32) -> Self {
        let mut common_years = Vec::new();
        for year in FIRST_YEAR..=(current_year + 9) {
            let full = year.to_string();
            let short = full[full.len() - 2..].to_string();
            common_years.push(full);
            common_years.push(short);
        }
        Self { common_years }
    }

    /// Lowercased word tokens of at least two characters.
    pub fn clean_input(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|word| word.chars().count() >= 2)
            .collect()
    }

    /// Candidate fragments from a free-form date string.
    ///
    /// The first matching date shape contributes its groups (when at least
    /// two characters long), the concatenation of all groups, of the first
    /// two, and of the last two. Every maximal digit run in the raw string is
    /// added independently. Fragments come back deduplicated in sorted order
    /// so downstream windows are reproducible.
    pub fn parse_date(&self, date_string: &str) -> Vec<String> {
        let mut fragments = BTreeSet::new();

        for pattern in DATE_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(date_string) {
                let groups: Vec<&str> = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .collect();

                for group in &groups {
                    if group.len() >= 2 {
                        fragments.insert(group.to_string());
                    }
                }
                fragments.insert(groups.concat());
                if groups.len() >= 2 {
                    fragments.insert(format!("{}{}", groups[0], groups[1]));
                }
                if groups.len() >= 3 {
                    fragments.insert(format!("{}{}", groups[1], groups[2]));
                }
                break;
            }
        }

        for run in DIGIT_RUN.find_iter(date_string) {
            fragments.insert(run.as_str().to_string());
        }

        fragments.into_iter().collect()
    }

    /// Morphological variations of a base word: the word itself, Capitalized,
    /// UPPERCASED, and for words longer than three characters the word minus
    /// its last and minus its first character.
    pub fn generate_variations(&self, word: &str) -> Vec<String> {
        let mut variations = BTreeSet::new();

        variations.insert(word.to_string());
        variations.insert(capitalize(word));
        variations.insert(word.to_uppercase());

        let chars: Vec<char> = word.chars().collect();
        if chars.len() > 3 {
            variations.insert(chars[..chars.len() - 1].iter().collect());
            variations.insert(chars[1..].iter().collect());
        }

        variations.into_iter().collect()
    }

    /// Leetspeak variants: the original, the fully substituted form, and one
    /// partial per mapped character with only its first occurrence replaced.
    pub fn apply_leetspeak(&self, word: &str) -> Vec<String> {
        let mut variations = BTreeSet::new();
        variations.insert(word.to_string());

        let mut full = word.to_string();
        for (plain, leet) in LEETSPEAK_MAP {
            full = full.replace(*plain, &leet.to_string());
        }
        variations.insert(full);

        for (plain, leet) in LEETSPEAK_MAP {
            if word.contains(*plain) {
                variations.insert(word.replacen(*plain, &leet.to_string(), 1));
            }
        }

        variations.into_iter().collect()
    }

    /// Every ordered pair of distinct positions, as `w1+w2` and
    /// `w1+Capitalize(w2)`. Positions, not values: a duplicated word still
    /// pairs with its twin.
    pub fn combine_words(&self, words: &[String]) -> Vec<String> {
        let mut combinations = Vec::new();

        for (i, first) in words.iter().enumerate() {
            for (j, second) in words.iter().enumerate() {
                if i == j {
                    continue;
                }
                combinations.push(format!("{}{}", first, second));
                combinations.push(format!("{}{}", first, capitalize(second)));
            }
        }

        combinations
    }

    /// Expand the request into a sorted, deduplicated candidate list bounded
    /// to words of 3 to 50 characters. Returns an empty list when no base
    /// words can be extracted.
    pub fn generate(&self, options: &WordlistOptions) -> Vec<String> {
        let mut base_words: Vec<String> = Vec::new();
        base_words.extend(self.clean_input(&options.name));
        base_words.extend(self.clean_input(&options.pet_names));
        base_words.extend(self.clean_input(&options.custom_words));
        if !options.birthdate.is_empty() {
            base_words.extend(self.parse_date(&options.birthdate));
        }

        if base_words.is_empty() {
            return Vec::new();
        }

        let mut words: HashSet<String> = HashSet::new();
        for word in &base_words {
            words.insert(word.clone());
            words.extend(self.generate_variations(word));
        }

        if base_words.len() > 1 {
            let window = &base_words[..base_words.len().min(COMBINATION_WINDOW)];
            words.extend(self.combine_words(window));
        }

        if options.include_leetspeak {
            let alphabetic: Vec<String> = words
                .iter()
                .filter(|word| is_alphabetic_word(word))
                .cloned()
                .collect();
            for word in alphabetic {
                words.extend(self.apply_leetspeak(&word));
            }
        }

        if options.include_years {
            let snapshot: Vec<String> = words.iter().cloned().collect();
            let years = &self.common_years[..self.common_years.len().min(YEAR_WINDOW)];
            for word in snapshot {
                for year in years {
                    words.insert(format!("{}{}", word, year));
                    words.insert(format!("{}{}", year, word));
                }
            }
        }

        let mut wordlist: Vec<String> = words
            .into_iter()
            .filter(|word| {
                let len = word.chars().count();
                (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
            })
            .collect();
        wordlist.sort();
        wordlist
    }
}

/// Write a generated list as newline-delimited text.
pub fn save_wordlist(path: &Path, words: &[String]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(words.join("\n").as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> WordlistGenerator {
        WordlistGenerator::with_current_year(2020)
    }

    fn options(name: &str, birthdate: &str, pets: &str, custom: &str) -> WordlistOptions {
        WordlistOptions {
            name: name.to_string(),
            birthdate: birthdate.to_string(),
            pet_names: pets.to_string(),
            custom_words: custom.to_string(),
            include_leetspeak: false,
            include_years: false,
        }
    }

    #[test]
    fn year_table_spans_1950_through_current_plus_nine() {
        let gen = WordlistGenerator::with_current_year(2000);
        assert_eq!(gen.common_years.first().map(String::as_str), Some("1950"));
        assert_eq!(gen.common_years[1], "50");
        assert_eq!(gen.common_years.last().map(String::as_str), Some("09"));
        assert_eq!(gen.common_years.len(), (2009 - 1950 + 1) * 2);
    }

    #[test]
    fn clean_input_tokenizes_and_drops_short_tokens() {
        let tokens = generator().clean_input("John O'Brien-Smith 42 a");
        assert_eq!(tokens, vec!["john", "brien", "smith", "42"]);
    }

    #[test]
    fn clean_input_of_empty_text_is_empty() {
        assert!(generator().clean_input("").is_empty());
        assert!(generator().clean_input("  !!! ").is_empty());
    }

    #[test]
    fn parse_date_extracts_groups_and_concatenations() {
        let fragments = generator().parse_date("12/05/1990");
        for expected in ["12", "05", "1990", "12051990", "1205", "051990"] {
            assert!(fragments.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn parse_date_stops_at_the_first_matching_shape() {
        // Y/M/D only matches the second pattern; its groups drive the
        // concatenations.
        let fragments = generator().parse_date("1990-05-12");
        assert!(fragments.contains(&"199005".to_string()));
        assert!(fragments.contains(&"0512".to_string()));
    }

    #[test]
    fn parse_date_collects_loose_digit_runs() {
        let fragments = generator().parse_date("born 1990 maybe 07");
        assert_eq!(fragments, vec!["07", "1990"]);
    }

    #[test]
    fn variations_cover_case_and_trimmed_forms() {
        let variations = generator().generate_variations("maxwell");
        for expected in ["maxwell", "Maxwell", "MAXWELL", "maxwel", "axwell"] {
            assert!(variations.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(variations.len(), 5);
    }

    #[test]
    fn short_words_skip_trimmed_variations() {
        let variations = generator().generate_variations("max");
        assert_eq!(variations, vec!["MAX", "Max", "max"]);
    }

    #[test]
    fn leetspeak_produces_full_and_single_partials() {
        let variants = generator().apply_leetspeak("pass");
        for expected in ["pass", "p@$$", "p@ss", "pa$s"] {
            assert!(variants.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn combinations_pair_distinct_positions_both_ways() {
        let words = vec!["max".to_string(), "rex".to_string()];
        let combos = generator().combine_words(&words);
        assert_eq!(combos, vec!["maxrex", "maxRex", "rexmax", "rexMax"]);
    }

    #[test]
    fn duplicate_values_at_distinct_positions_still_pair() {
        let words = vec!["max".to_string(), "max".to_string()];
        let combos = generator().combine_words(&words);
        assert_eq!(combos.len(), 4);
        assert!(combos.contains(&"maxmax".to_string()));
        assert!(combos.contains(&"maxMax".to_string()));
    }

    #[test]
    fn empty_request_generates_nothing() {
        let words = generator().generate(&options("", "", "", ""));
        assert!(words.is_empty());
    }

    #[test]
    fn single_name_expands_to_case_variants() {
        let words = generator().generate(&options("Max", "", "", ""));
        for expected in ["max", "Max", "MAX"] {
            assert!(words.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(words.iter().all(|w| {
            let len = w.chars().count();
            (3..=50).contains(&len)
        }));
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let mut opts = options("Max Anna", "12/05/1990", "Rex", "hunter");
        opts.include_leetspeak = true;
        let words = generator().generate(&opts);
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "{:?} not strictly sorted", pair);
        }
    }

    #[test]
    fn name_tokens_combine_with_each_other() {
        let words = generator().generate(&options("anna max", "", "", ""));
        for expected in ["annamax", "annaMax", "maxanna", "maxAnna"] {
            assert!(words.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn years_only_grow_the_output() {
        let base = options("Max", "", "Rex", "");
        let without = generator().generate(&base);

        let mut with_years = base.clone();
        with_years.include_years = true;
        let with = generator().generate(&with_years);

        assert!(with.len() > without.len());
        for word in &without {
            assert!(with.contains(word), "{word} lost when years enabled");
        }
        // First 20 table entries reach 1959; affixed forms from that window
        // show up on both sides.
        assert!(with.contains(&"max1950".to_string()));
        assert!(with.contains(&"50max".to_string()));
    }

    #[test]
    fn leetspeak_applies_to_combined_words_too() {
        let mut opts = options("anna max", "", "", "");
        opts.include_leetspeak = true;
        let words = generator().generate(&opts);
        // "annamax" fully substituted: a->@.
        assert!(words.contains(&"@nn@m@x".to_string()));
    }

    #[test]
    fn length_bounds_hold_under_heavy_expansion() {
        let mut opts = options(
            "maximilian alexandrovich",
            "31.12.1985",
            "rex bella",
            "wintersport",
        );
        opts.include_leetspeak = true;
        opts.include_years = true;
        let words = generator().generate(&opts);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| {
            let len = w.chars().count();
            (3..=50).contains(&len)
        }));
    }

    #[test]
    fn saved_wordlist_is_newline_delimited() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wordlist.txt");
        let words = vec!["alpha".to_string(), "beta".to_string()];
        save_wordlist(&path, &words).expect("save");
        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "alpha\nbeta");
    }
}
