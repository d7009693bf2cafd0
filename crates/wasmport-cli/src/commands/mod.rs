//! CLI subcommand implementations.

pub mod completions;
pub mod convert;
pub mod inspect;

use clap::ValueEnum;

/// Output format for inspection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// Machine-readable JSON.
    Json,
}
