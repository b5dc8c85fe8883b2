//! Command line interface
//!
//! - `serve`: run the HTTP API
//! - `ask`: answer one question and print the JSON record

pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

/// Tutor Gateway - grounded answers to mathematics questions
#[derive(Parser)]
#[command(name = "tutor-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Answer a single question and print the result as JSON
    Ask(ask::AskArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from(["tutor-gateway", "ask", "Solve 2x = 6", "--top-k", "5"])
            .unwrap();

        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.question, "Solve 2x = 6");
                assert_eq!(args.top_k, Some(5));
            }
            Command::Serve => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["tutor-gateway", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }
}
