//! CLI for the LinkTime Machine snapshot jumper.

mod commands;
mod launcher;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_lang, run_open, run_panel, run_search};

/// Product name shown in the panel header and notification titles.
pub const PRODUCT_NAME: &str = "LinkTime Machine";

/// Top-level CLI for the LinkTime Machine snapshot jumper.
#[derive(Debug, Parser)]
#[command(name = "ltm")]
#[command(about = "LTM: jump from any URL to its latest Wayback Machine snapshot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL and open its latest snapshot in the default browser.
    Open {
        /// Page URL or bare domain (e.g. `example.com`).
        url: String,
    },

    /// Look up a URL and print the outcome with the capture date.
    Search {
        /// Page URL or bare domain.
        url: String,

        /// Print the archived URL instead of opening the browser.
        #[arg(long)]
        no_open: bool,
    },

    /// Interactive lookup panel reading one URL per line.
    Panel {
        /// Current page URL offered to `:page` (default: $LTM_PAGE_URL).
        #[arg(long, value_name = "URL")]
        page_url: Option<String>,
    },

    /// Show the supported languages or set the interface language.
    Lang {
        /// Language code to persist (e.g. `en`); omit to list.
        code: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to emit completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Open { url } => run_open(&url)?,
            CliCommand::Search { url, no_open } => run_search(&url, no_open)?,
            CliCommand::Panel { page_url } => run_panel(page_url)?,
            CliCommand::Lang { code } => run_lang(code.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
