use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::SortKey;
use crate::features::nlp::Priority;

#[derive(Parser, Debug)]
#[command(name = "quicktask")]
#[command(about = "Turn plain-English sentences and meeting notes into structured tasks")]
#[command(long_about = "quicktask - natural language task extraction

Reads a one-line task description or a whole meeting transcript and pulls
out titles, assignees, due dates and priorities. Everything runs locally
with deterministic pattern rules.

QUICK START:
  quicktask parse \"Finish landing page by tomorrow 5pm for Aman p1\"
  quicktask minutes notes.txt
  cat notes.txt | quicktask minutes --sort due
  quicktask stats notes.txt

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quicktask <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Reference moment for relative dates
    ///
    /// Accepts "YYYY-MM-DD HH:MM", "YYYY-MM-DD" or RFC 3339.
    /// Defaults to the current local time.
    #[arg(long, global = true, value_name = "DATETIME")]
    pub now: Option<String>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a single task sentence
    ///
    /// Extracts a priority, an assignee and a due date, and leaves the
    /// rest as the title. Words are joined with spaces, so quoting is
    /// optional.
    ///
    /// # Examples
    ///
    ///   quicktask parse "Finish landing page by tomorrow 5pm for Aman p1"
    ///   quicktask p call Rajeev before friday 11am
    ///   quicktask parse "review budget next monday" -o json
    ///
    /// # Supported Patterns
    ///
    ///   Priority:   p1..p4, priority 2, urgent, critical, high priority
    ///   Dates:      today, tomorrow, friday, next monday, 20th June, 6/20
    ///   Times:      5pm, 10:30am
    ///   Assignee:   for Aman, assign to Sam, Rajeev should ..., Kim by ...
    #[command(alias = "p")]
    Parse {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Extract action items from a meeting transcript
    ///
    /// Splits the transcript into sentences and keeps those that assign
    /// work to a named person. Reads stdin when FILE is omitted or "-".
    ///
    /// # Examples
    ///
    ///   quicktask minutes standup.txt
    ///   quicktask m standup.txt --assignee Aman
    ///   pbpaste | quicktask minutes --sort due --desc
    #[command(alias = "m")]
    Minutes(MinutesArgs),

    /// Summarize the action items of a transcript
    ///
    /// Counts tasks per priority and per assignee, and how many are
    /// overdue or due within the next week.
    ///
    /// # Examples
    ///
    ///   quicktask stats standup.txt
    ///   quicktask stats standup.txt -o json
    Stats {
        /// Transcript file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   quicktask completions zsh > ~/.zsh/completions/_quicktask
    ///   quicktask completions bash --instructions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Print installation instructions instead of the script
        #[arg(long)]
        instructions: bool,
    },
}

/// Arguments for the `minutes` command.
#[derive(Args, Debug, Default)]
pub struct MinutesArgs {
    /// Transcript file; stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Only tasks for this person (case-insensitive)
    #[arg(long)]
    pub assignee: Option<String>,

    /// Only tasks with this priority (P1..P4)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Only tasks whose title or assignee contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort the list; transcript order when omitted
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_joins_words() {
        let cli = Cli::try_parse_from(["quicktask", "parse", "call", "Sam", "tomorrow"]).unwrap();
        match cli.command {
            Commands::Parse { text } => assert_eq!(text.join(" "), "call Sam tomorrow"),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_minutes_flags() {
        let cli = Cli::try_parse_from([
            "quicktask",
            "m",
            "notes.txt",
            "--priority",
            "p1",
            "--sort",
            "due",
            "--desc",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Minutes(args) => {
                assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
                assert_eq!(args.priority, Some(Priority::P1));
                assert_eq!(args.sort, Some(SortKey::Due));
                assert!(args.desc);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quicktask",
            "parse",
            "ship it",
            "--now",
            "2025-01-15 09:30",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.now.as_deref(), Some("2025-01-15 09:30"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_requires_text() {
        assert!(Cli::try_parse_from(["quicktask", "parse"]).is_err());
    }
}
