// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Qualitative strength band over the composite 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    pub const ALL: [StrengthTier; 5] = [
        StrengthTier::VeryWeak,
        StrengthTier::Weak,
        StrengthTier::Fair,
        StrengthTier::Good,
        StrengthTier::Strong,
    ];

    /// Inclusive score range covered by this tier. Ranges are contiguous
    /// and together cover all of [0, 100].
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            StrengthTier::VeryWeak => (0, 25),
            StrengthTier::Weak => (26, 45),
            StrengthTier::Fair => (46, 65),
            StrengthTier::Good => (66, 85),
            StrengthTier::Strong => (86, 100),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Badge color hint used by web frontends.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "danger",
            StrengthTier::Weak => "warning",
            StrengthTier::Fair => "info",
            StrengthTier::Good => "primary",
            StrengthTier::Strong => "success",
        }
    }

    /// Map a composite score to the tier whose range contains it.
    pub fn for_score(score: u8) -> StrengthTier {
        for tier in StrengthTier::ALL {
            let (min, max) = tier.score_range();
            if score >= min && score <= max {
                return tier;
            }
        }
        // Scores are clamped to [0, 100], so the loop always returns.
        StrengthTier::VeryWeak
    }
}

/// Strength tier together with its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthRating {
    pub level: StrengthTier,
    pub label: String,
    pub color: String,
    pub min_score: u8,
    pub max_score: u8,
}

impl From<StrengthTier> for StrengthRating {
    fn from(tier: StrengthTier) -> Self {
        let (min_score, max_score) = tier.score_range();
        Self {
            level: tier,
            label: tier.label().to_string(),
            color: tier.color().to_string(),
            min_score,
            max_score,
        }
    }
}

/// Structural weakness family detected in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Repeat,
    Sequence,
    Keyboard,
    Common,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatternMatch {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub description: String,
}

/// Full result of a password strength analysis.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysis {
    pub score: u8,
    pub strength: StrengthRating,
    /// Estimated entropy in bits, rounded to two decimal places.
    pub entropy: f64,
    pub patterns: Vec<PatternMatch>,
    pub suggestions: Vec<String>,
    /// Informational SHA-256 digest of the password. Not set for empty input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_hash: Option<String>,
}

/// Inputs for targeted wordlist generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WordlistOptions {
    pub name: String,
    pub birthdate: String,
    pub pet_names: String,
    pub custom_words: String,
    pub include_leetspeak: bool,
    pub include_years: bool,
}

impl WordlistOptions {
    /// True when no text field carries any input.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.birthdate.trim().is_empty()
            && self.pet_names.trim().is_empty()
            && self.custom_words.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_score_space() {
        for score in 0..=100u8 {
            let matching = StrengthTier::ALL
                .iter()
                .filter(|tier| {
                    let (min, max) = tier.score_range();
                    score >= min && score <= max
                })
                .count();
            assert_eq!(matching, 1, "score {} matched {} tiers", score, matching);
        }
    }

    #[test]
    fn tier_lookup_hits_band_edges() {
        assert_eq!(StrengthTier::for_score(0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::for_score(25), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::for_score(26), StrengthTier::Weak);
        assert_eq!(StrengthTier::for_score(45), StrengthTier::Weak);
        assert_eq!(StrengthTier::for_score(46), StrengthTier::Fair);
        assert_eq!(StrengthTier::for_score(65), StrengthTier::Fair);
        assert_eq!(StrengthTier::for_score(66), StrengthTier::Good);
        assert_eq!(StrengthTier::for_score(85), StrengthTier::Good);
        assert_eq!(StrengthTier::for_score(86), StrengthTier::Strong);
        assert_eq!(StrengthTier::for_score(100), StrengthTier::Strong);
    }

    #[test]
    fn rating_carries_display_metadata() {
        let rating = StrengthRating::from(StrengthTier::Fair);
        assert_eq!(rating.label, "Fair");
        assert_eq!(rating.color, "info");
        assert_eq!((rating.min_score, rating.max_score), (46, 65));
    }

    #[test]
    fn options_emptiness_ignores_whitespace() {
        let mut options = WordlistOptions::default();
        assert!(options.is_empty());

        options.pet_names = "   ".to_string();
        assert!(options.is_empty());

        options.name = "Max".to_string();
        assert!(!options.is_empty());
    }
}
