//! Shell completion scripts.
//!
//! Generates completion scripts that can be installed to enable
//! tab-completion of lastpage's options:
//!
//! ```text
//! lastpage --completions bash > ~/.local/share/bash-completion/completions/lastpage
//! lastpage --completions zsh > ~/.zfunc/_lastpage
//! lastpage --completions fish > ~/.config/fish/completions/lastpage.fish
//! ```

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Writes the completion script for `shell` to `out`.
///
/// Called from main.rs, which builds the `Command` from the `Cli` struct.
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    generate(shell, cmd, "lastpage", out);
}
