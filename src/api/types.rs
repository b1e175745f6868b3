// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{PasswordAnalysis, WordlistOptions};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Analysis result (only present on success)
    pub analysis: Option<PasswordAnalysis>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct WordlistRequest {
    /// Target's name(s)
    pub name: Option<String>,
    /// Birthdate in D/M/Y, Y/M/D or two-digit-year form
    pub birthdate: Option<String>,
    /// Pet name(s)
    pub pet_names: Option<String>,
    /// Additional custom words
    pub custom_words: Option<String>,
    /// Apply leetspeak substitutions (default: false)
    pub include_leetspeak: Option<bool>,
    /// Append and prepend common years (default: false)
    pub include_years: Option<bool>,
}

impl WordlistRequest {
    pub fn into_options(self) -> WordlistOptions {
        WordlistOptions {
            name: self.name.unwrap_or_default().trim().to_string(),
            birthdate: self.birthdate.unwrap_or_default().trim().to_string(),
            pet_names: self.pet_names.unwrap_or_default().trim().to_string(),
            custom_words: self.custom_words.unwrap_or_default().trim().to_string(),
            include_leetspeak: self.include_leetspeak.unwrap_or(false),
            include_years: self.include_years.unwrap_or(false),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct WordlistResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated candidate words, sorted and deduplicated
    pub words: Vec<String>,
    /// Number of words generated
    pub count: usize,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
