//! Shell completions command.

use clap_complete::Shell;

use crate::error::QuickTaskError;
use crate::features::shell::{completion_install_instructions, generate_completions};

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, instructions: bool) -> Result<String, QuickTaskError> {
    if instructions {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_flag() {
        let out = completions(Shell::Fish, true).unwrap();
        assert!(out.contains("~/.config/fish/completions"));

        let script = completions(Shell::Fish, false).unwrap();
        assert!(script.contains("complete -c quicktask"));
    }
}
