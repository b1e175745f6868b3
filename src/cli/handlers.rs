// src/cli/handlers.rs
use std::path::Path;

use anyhow::Result;
use console::style;

use crate::analyzer::PasswordAnalyzer;
use crate::models::WordlistOptions;
use crate::wordlist::{self, WordlistError, WordlistGenerator};

// Handlers for CLI commands
pub fn handle_analyze(password: &str, json: bool) -> Result<()> {
    let analyzer = PasswordAnalyzer::new();
    let analysis = analyzer.analyze(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "Score:    {}/100 ({})",
        style(analysis.score).bold(),
        analysis.strength.label
    );
    println!("Entropy:  {} bits", analysis.entropy);
    if let Some(hash) = &analysis.sha256_hash {
        println!("SHA-256:  {}", hash);
    }

    if !analysis.patterns.is_empty() {
        println!("\n{}", style("Weak patterns detected:").yellow());
        for pattern in &analysis.patterns {
            println!("  • {}", pattern.description);
        }
    }

    if !analysis.suggestions.is_empty() {
        println!("\n{}", style("Suggestions:").cyan());
        for suggestion in &analysis.suggestions {
            println!("  • {}", suggestion);
        }
    }

    Ok(())
}

pub fn handle_wordlist(options: &WordlistOptions, output: Option<&str>) -> Result<()> {
    if options.is_empty() {
        return Err(WordlistError::EmptyInput.into());
    }

    let generator = WordlistGenerator::new();
    let words = generator.generate(options);
    log::info!("Generated {} candidate words", words.len());

    match output {
        Some(path) => {
            wordlist::save_wordlist(Path::new(path), &words)?;
            println!("✅ Wrote {} words to {}", words.len(), path);
        }
        None => {
            for word in &words {
                println!("{}", word);
            }
        }
    }

    Ok(())
}
