//! Command Line Interface
//!
//! `alltz` with no arguments opens the dashboard; the subcommands answer
//! one-shot queries against the city registry.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "alltz",
    version,
    about = "Terminal timezone viewer with a scrubbable shared timeline",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every city in the registry with its zone and current offset
    List,

    /// Show the current local time in a city
    Time {
        /// City name, alias, or IANA identifier (e.g. "Tokyo", "NYC")
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Show timezone details for a city, including the next DST transition
    Zone {
        /// City name, alias, or IANA identifier
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },
}

impl Command {
    /// Join a multi-word city argument back into one query string
    pub fn city_query(parts: &[String]) -> String {
        parts.join(" ")
    }
}
