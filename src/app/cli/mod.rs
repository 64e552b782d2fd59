//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::api::{self, MatchOutcome, RunOptions, TableKind};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "lessonbot")]
#[command(version)]
#[command(about = "Build lesson plans step by step and generate them with Gemini", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: .lessonbot/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive lesson wizard
    #[clap(visible_alias = "r")]
    Run {
        /// Show the assembled prompt instead of calling the model
        #[arg(long)]
        dry_run: bool,
        /// Write the final lesson plan to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Secrets file holding GEMINI_API_KEY (default: .lessonbot/secrets.toml)
        #[arg(long)]
        secrets: Option<PathBuf>,
    },
    /// Find the first recommendation whose keyword appears in the text
    #[clap(visible_alias = "m")]
    Match {
        /// Free text to search
        text: String,
        /// Table to search
        #[arg(short, long, value_enum, default_value_t = TableArg::Recommendations)]
        table: TableArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TableArg {
    Recommendations,
    Problem,
}

impl From<TableArg> for TableKind {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::Recommendations => TableKind::Recommendations,
            TableArg::Problem => TableKind::ProblemRecommendations,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Run { dry_run, output, secrets } => {
            let options = RunOptions { config: cli.config, secrets, dry_run, output };
            run_wizard(&options)
        }
        Commands::Match { text, table } => run_match(&text, table.into(), cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn,lessonbot=info",
        1 => "info,lessonbot=debug",
        _ => "debug,lessonbot=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_wizard(options: &RunOptions) -> Result<(), AppError> {
    let summary = api::run_wizard(options)?;

    if summary.lessons_generated > 0 {
        println!("✅ Generated {} lesson plan(s)", summary.lessons_generated);
        if let Some(path) = &options.output {
            println!("  Saved to {}", path.display());
        }
    }
    Ok(())
}

fn run_match(text: &str, table: TableKind, config: Option<PathBuf>) -> Result<(), AppError> {
    match api::match_keyword(text, table, config.as_deref())? {
        MatchOutcome::Matched { columns, row } => {
            for column in &columns {
                println!("{}: {}", column, row.get(column).unwrap_or_default());
            }
        }
        MatchOutcome::NoMatch => println!("No matching recommendation found."),
        MatchOutcome::DataUnavailable { missing } => {
            println!(
                "🚨 Recommendation data is unavailable: {} was not found.",
                missing.display()
            );
        }
    }
    Ok(())
}
