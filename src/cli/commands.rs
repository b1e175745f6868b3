// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the raw JSON analysis
        #[arg(long)]
        json: bool,
    },

    /// Generate a targeted wordlist from personal facts
    Wordlist {
        /// Target name(s)
        #[arg(long)]
        name: Option<String>,

        /// Birthdate (e.g. 12/05/1990)
        #[arg(long)]
        birthdate: Option<String>,

        /// Pet name(s)
        #[arg(long)]
        pet_names: Option<String>,

        /// Additional custom words
        #[arg(long)]
        custom_words: Option<String>,

        /// Apply leetspeak substitutions
        #[arg(long)]
        leetspeak: bool,

        /// Append and prepend common years
        #[arg(long)]
        years: bool,

        /// Write the list to a file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Run the API server
    Serve,
}
