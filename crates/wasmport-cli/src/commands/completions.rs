//! `wasmport completions` - generate shell completion scripts.

use clap::Command;
use clap_complete::Shell;

/// Writes a completion script for the requested shell to stdout.
pub fn run(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
}
