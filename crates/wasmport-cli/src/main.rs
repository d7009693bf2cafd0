//! Wasmport CLI.
//!
//! Command-line interface for inspecting WebAssembly module interfaces
//! and converting `.wasm` files into ES module wrappers.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `inspect` - Print a module's import/export surface
//! - `convert` - Generate an ES module loader for a `.wasm` file
//! - `completions` - Generate shell completions

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

pub use commands::OutputFormat;

/// Convert WebAssembly modules into ES module wrappers.
#[derive(Parser, Debug)]
#[command(name = "wasmport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a module's import/export surface.
    ///
    /// # Examples
    ///
    /// ```bash
    /// wasmport inspect pkg/adder.wasm
    /// wasmport inspect pkg/adder.wasm --format json
    /// ```
    Inspect {
        /// Path to the WebAssembly binary
        file: PathBuf,

        /// Output format (text, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate an ES module loader for a `.wasm` file.
    ///
    /// By default the module is converted in asynchronous mode: the
    /// binary is copied next to the output and the loader fetches it via
    /// streaming instantiation. With `--sync` the binary is embedded
    /// inline as base64 and instantiated eagerly.
    ///
    /// # Examples
    ///
    /// ```bash
    /// wasmport convert pkg/adder.wasm
    /// wasmport convert pkg/adder.wasm -o dist/adder.js
    /// wasmport convert pkg/adder.wasm --sync
    /// ```
    Convert {
        /// Path to the WebAssembly binary
        file: PathBuf,

        /// Output path for the generated ES module
        /// (default: the input path with a .js extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Embed the binary inline and instantiate synchronously
        #[arg(long)]
        sync: bool,

        /// Directory for the emitted binary asset in async mode
        /// (default: the output's directory)
        #[arg(long)]
        asset_dir: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { file, format } => commands::inspect::run(&file, format).await,
        Commands::Convert {
            file,
            output,
            sync,
            asset_dir,
        } => commands::convert::run(&file, output, sync, asset_dir).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd);
            Ok(())
        }
    }
}

/// Initializes logging infrastructure.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_inspect() {
        let cli = Cli::parse_from(["wasmport", "inspect", "a.wasm"]);
        assert!(matches!(cli.command, Commands::Inspect { .. }));
    }

    #[test]
    fn test_cli_parsing_inspect_json() {
        let cli = Cli::parse_from(["wasmport", "inspect", "a.wasm", "--format", "json"]);
        if let Commands::Inspect { format, .. } = cli.command {
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("expected Inspect command");
        }
    }

    #[test]
    fn test_cli_parsing_convert_defaults() {
        let cli = Cli::parse_from(["wasmport", "convert", "a.wasm"]);
        if let Commands::Convert {
            file,
            output,
            sync,
            asset_dir,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("a.wasm"));
            assert_eq!(output, None);
            assert!(!sync);
            assert_eq!(asset_dir, None);
        } else {
            panic!("expected Convert command");
        }
    }

    #[test]
    fn test_cli_parsing_convert_sync_with_output() {
        let cli = Cli::parse_from(["wasmport", "convert", "a.wasm", "--sync", "-o", "out.js"]);
        if let Commands::Convert { output, sync, .. } = cli.command {
            assert!(sync);
            assert_eq!(output, Some(PathBuf::from("out.js")));
        } else {
            panic!("expected Convert command");
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::parse_from(["wasmport", "completions", "zsh"]);
        assert!(matches!(cli.command, Commands::Completions { .. }));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["wasmport", "--verbose", "inspect", "a.wasm"]);
        assert!(cli.verbose);
    }
}
