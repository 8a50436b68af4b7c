//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell` and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::QuickTaskError;

const BIN_NAME: &str = "quicktask";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `QuickTaskError::InvalidArgument` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, QuickTaskError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| QuickTaskError::InvalidArgument(format!("completion script is not UTF-8: {e}")))
}

/// Installation instructions for the completion script of `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(quicktask completions bash)

# Or save to a file:
quicktask completions bash > /usr/local/etc/bash_completion.d/quicktask
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
quicktask completions zsh > ~/.zsh/completions/_quicktask
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
quicktask completions fish > ~/.config/fish/completions/quicktask.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
quicktask completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
quicktask completions elvish > ~/.elvish/lib/quicktask.elv

# Then add to ~/.elvish/rc.elv:
use quicktask
"
        .to_string(),

        _ => format!("No installation instructions for {shell}\n"),
    }
}
