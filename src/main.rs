use clap::Parser;
use std::io;
use std::path::Path;

mod analyzer;
mod api;
mod cli;
mod models;
mod wordlist;

use crate::cli::{Args, CliCommand};
use crate::models::WordlistOptions;

fn to_io_error(e: anyhow::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    match args.command {
        Some(CliCommand::Analyze { password, json }) => {
            cli::handlers::handle_analyze(&password, json).map_err(to_io_error)
        }
        Some(CliCommand::Wordlist {
            name,
            birthdate,
            pet_names,
            custom_words,
            leetspeak,
            years,
            output,
        }) => {
            let options = WordlistOptions {
                name: name.unwrap_or_default(),
                birthdate: birthdate.unwrap_or_default(),
                pet_names: pet_names.unwrap_or_default(),
                custom_words: custom_words.unwrap_or_default(),
                include_leetspeak: leetspeak,
                include_years: years,
            };
            cli::handlers::handle_wordlist(&options, output.as_deref()).map_err(to_io_error)
        }
        Some(CliCommand::Serve) | None => {
            log::info!("🔎 Starting PassAudit - Password Strength Auditor & Wordlist Generator");
            api::start_server(args.port).await
        }
    }
}
