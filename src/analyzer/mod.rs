// src/analyzer/mod.rs
//! Password strength scoring engine.
//!
//! Stateless: every method takes `&self` and reads only fixed tables, so a
//! single analyzer can be shared freely across threads.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::models::{PasswordAnalysis, PatternKind, PatternMatch, StrengthTier};

/// ASCII punctuation set used for alphabet classification (32 symbols).
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "abc123", "password123",
    "admin", "letmein", "welcome", "monkey", "1234567890", "login",
    "guest", "hello", "welcome123", "admin123", "root", "test",
];

lazy_static! {
    /// Ascending three-digit runs.
    static ref NUMERIC_SEQUENCE: Regex =
        Regex::new("012|123|234|345|456|567|678|789|890").expect("Could not compile regex");

    /// Ascending three-letter runs.
    static ref ALPHA_SEQUENCE: Regex = Regex::new(
        "abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|lmn|mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz",
    )
    .expect("Could not compile regex");

    /// Three-key runs along QWERTY keyboard rows.
    static ref KEYBOARD_RUN: Regex = Regex::new(
        "qwe|wer|ert|rty|tyu|yui|uio|iop|asd|sdf|dfg|fgh|ghj|hjk|jkl|zxc|xcv|cvb|vbn|bnm",
    )
    .expect("Could not compile regex");
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Three or more identical characters in a row.
fn has_repeated_run(text: &str) -> bool {
    let mut run = 1;
    let mut chars = text.chars();
    if let Some(mut prev) = chars.next() {
        for curr in chars {
            if curr == prev {
                run += 1;
                if run >= 3 {
                    return true;
                }
            } else {
                run = 1;
            }
            prev = curr;
        }
    }
    false
}

pub struct PasswordAnalyzer;

impl PasswordAnalyzer {
    pub fn new() -> Self {
        PasswordAnalyzer
    }

    /// Entropy estimate in bits: password length times log2 of the combined
    /// size of the character alphabets actually present.
    ///
    /// Classification is ASCII-oriented: non-ASCII letters contribute to the
    /// length but widen no alphabet, so internationalized passwords get a
    /// conservative (possibly zero) estimate.
    pub fn calculate_entropy(&self, password: &str) -> f64 {
        if password.is_empty() {
            return 0.0;
        }

        let mut charset_size = 0u32;
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            charset_size += 26;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            charset_size += 26;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            charset_size += 10;
        }
        if password.chars().any(is_punctuation) {
            charset_size += PUNCTUATION.len() as u32;
        }

        if charset_size == 0 {
            return 0.0;
        }

        password.chars().count() as f64 * (charset_size as f64).log2()
    }

    /// Detect structural weaknesses in the case-folded password.
    ///
    /// Each family reports at most once, in the fixed order repeat,
    /// sequence, keyboard, common. Membership in the common-password list is
    /// checked independently of the run tables.
    pub fn check_common_patterns(&self, password: &str) -> Vec<PatternMatch> {
        let lowered = password.to_lowercase();
        let mut patterns_found = Vec::new();

        if has_repeated_run(&lowered) {
            patterns_found.push(PatternMatch {
                kind: PatternKind::Repeat,
                description: "Repeated characters".to_string(),
            });
        }
        if NUMERIC_SEQUENCE.is_match(&lowered) || ALPHA_SEQUENCE.is_match(&lowered) {
            patterns_found.push(PatternMatch {
                kind: PatternKind::Sequence,
                description: "Sequential characters".to_string(),
            });
        }
        if KEYBOARD_RUN.is_match(&lowered) {
            patterns_found.push(PatternMatch {
                kind: PatternKind::Keyboard,
                description: "Keyboard patterns".to_string(),
            });
        }
        if COMMON_PASSWORDS.contains(&lowered.as_str()) {
            patterns_found.push(PatternMatch {
                kind: PatternKind::Common,
                description: "Common password".to_string(),
            });
        }

        patterns_found
    }

    /// Number of distinct characters after case folding.
    fn char_variety(&self, password: &str) -> usize {
        password.to_lowercase().chars().collect::<HashSet<_>>().len()
    }

    /// Composite score: additive length/charset/entropy/variety bonuses
    /// minus 5 per detected weak-pattern family, clamped to [0, 100].
    pub fn calculate_score(&self, password: &str) -> u8 {
        let mut score: i32 = 0;
        let length = password.chars().count();

        if length >= 8 {
            score += 10;
        }
        if length >= 12 {
            score += 10;
        }
        if length >= 16 {
            score += 10;
        }

        if password.chars().any(|c| c.is_ascii_lowercase()) {
            score += 5;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 5;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 5;
        }
        if password.chars().any(is_punctuation) {
            score += 10;
        }

        let entropy = self.calculate_entropy(password);
        if entropy >= 50.0 {
            score += 15;
        } else if entropy >= 35.0 {
            score += 10;
        } else if entropy >= 25.0 {
            score += 5;
        }

        let patterns = self.check_common_patterns(password);
        score -= patterns.len() as i32 * 5;

        let variety = self.char_variety(password) as f64;
        if variety >= length as f64 * 0.8 {
            score += 10;
        } else if variety >= length as f64 * 0.6 {
            score += 5;
        }

        score.clamp(0, 100) as u8
    }

    /// Remediation advice in fixed priority order; entries are not
    /// deduplicated, several can fire for the same password.
    pub fn get_suggestions(&self, password: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        let length = password.chars().count();

        if length < 8 {
            suggestions.push("Use at least 8 characters".to_string());
        }
        if length < 12 {
            suggestions.push("Consider using 12 or more characters for better security".to_string());
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            suggestions.push("Add lowercase letters".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            suggestions.push("Add uppercase letters".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            suggestions.push("Add numbers".to_string());
        }
        if !password.chars().any(is_punctuation) {
            suggestions.push("Add special characters (!@#$%^&*)".to_string());
        }

        if !self.check_common_patterns(password).is_empty() {
            suggestions.push("Avoid common patterns and repeated characters".to_string());
        }
        if COMMON_PASSWORDS.contains(&password.to_lowercase().as_str()) {
            suggestions.push("Avoid common passwords".to_string());
        }

        if (self.char_variety(password) as f64) < length as f64 * 0.6 {
            suggestions.push("Use a wider variety of characters".to_string());
        }

        suggestions
    }

    /// Informational SHA-256 digest over the UTF-8 bytes, lowercase hex.
    pub fn sha256_hex(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Analyze a password. Total over all string inputs: the empty password
    /// gets the floor result, everything else a full analysis.
    pub fn analyze(&self, password: &str) -> PasswordAnalysis {
        if password.is_empty() {
            return PasswordAnalysis {
                score: 0,
                strength: StrengthTier::for_score(0).into(),
                entropy: 0.0,
                patterns: Vec::new(),
                suggestions: vec!["Please enter a password to analyze".to_string()],
                sha256_hash: None,
            };
        }

        let score = self.calculate_score(password);
        let entropy = (self.calculate_entropy(password) * 100.0).round() / 100.0;

        PasswordAnalysis {
            score,
            strength: StrengthTier::for_score(score).into(),
            entropy,
            patterns: self.check_common_patterns(password),
            suggestions: self.get_suggestions(password),
            sha256_hash: Some(self.sha256_hex(password)),
        }
    }
}
