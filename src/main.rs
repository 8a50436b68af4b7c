use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use quicktask::cli::args::{Cli, Commands};
use quicktask::cli::{commands, reference_time};
use quicktask::config::Config;

const LOG_ENV: &str = "QUICKTASK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("loading configuration")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let now = reference_time(cli.now.as_deref())?;
    tracing::debug!(%now, ?format, "starting");

    let output = match cli.command {
        Commands::Parse { text } => commands::parse(&text, now, format)?,
        Commands::Minutes(args) => commands::minutes(&args, &config.minutes, now, format)
            .context("extracting action items")?,
        Commands::Stats { file } => {
            commands::stats(file.as_deref(), now, format).context("summarizing action items")?
        }
        Commands::Completions { shell, instructions } => {
            commands::completions(shell, instructions)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
