// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API server port
    #[arg(long, short, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Command to execute (starts the API server when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
