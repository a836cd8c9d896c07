//! Command line front end for figconv.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use figconv::config::AppConfig;
use figconv::{Converter, FormatKind, LoadOutcome, SaveOutcome, Session};

#[derive(Parser)]
#[command(name = "figconv")]
#[command(about = "Convert figure records between TXT, JSON and XML", long_about = None)]
struct Cli {
    /// Set a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load files and list the figures they contain
    #[command(arg_required_else_help = true)]
    Show {
        /// Files to load, in order
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,
    },

    /// Load files and save every figure found into one output file
    #[command(arg_required_else_help = true)]
    Convert {
        /// Files to load, in order
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Destination file; its extension selects the format
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// List supported formats
    Formats,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path).unwrap_or_else(|err| {
            eprintln!("Failed to load configuration {}: {}", path.display(), err);
            process::exit(1);
        }),
        None => AppConfig::default(),
    };

    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        config.log_level.raised(cli.verbose).to_level_filter()
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let ok = match &cli.command {
        Commands::Show { inputs } => {
            let mut session = Session::with_converter(Converter::from_config(&config));
            let ok = load_all(&mut session, inputs);
            for (idx, figure) in session.figures().iter().enumerate() {
                println!("{:>4}. {}", idx + 1, figure);
            }
            ok
        }
        Commands::Convert { inputs, output } => {
            let mut session = Session::with_converter(Converter::from_config(&config));
            let loaded = load_all(&mut session, inputs);
            let saved = report_save(output, &session.save(output));
            loaded && saved
        }
        Commands::Formats => {
            for kind in FormatKind::all() {
                println!(".{:<6} {}", kind.extension(), kind.codec().display_name());
            }
            true
        }
    };

    if !ok {
        process::exit(1);
    }
}

/// Load every input into the session, reporting each outcome.
/// Returns false if any load failed.
fn load_all(session: &mut Session, inputs: &[PathBuf]) -> bool {
    let mut ok = true;
    for input in inputs {
        let outcome = session.load(input);
        ok &= report_load(input, &outcome);
    }
    ok
}

fn report_load(path: &Path, outcome: &LoadOutcome) -> bool {
    match outcome {
        LoadOutcome::Loaded { format, figures } => {
            println!(
                "{}: loaded {} figures ({})",
                path.display(),
                figures.len(),
                format
            );
            true
        }
        LoadOutcome::Empty { format } => {
            println!("{}: no figures found ({})", path.display(), format);
            true
        }
        LoadOutcome::Partial {
            format,
            figures,
            error,
        } => {
            eprintln!(
                "{}: loaded {} figures before error ({}): {}",
                path.display(),
                figures.len(),
                format,
                error
            );
            false
        }
        LoadOutcome::Failed(error) => {
            eprintln!("{}: {}", path.display(), error);
            false
        }
    }
}

fn report_save(path: &Path, outcome: &SaveOutcome) -> bool {
    match outcome {
        SaveOutcome::Saved { format, count, .. } => {
            println!("{}: saved {} figures ({})", path.display(), count, format);
            true
        }
        SaveOutcome::NothingToSave => {
            println!("{}: nothing to save", path.display());
            true
        }
        SaveOutcome::Failed(error) => {
            eprintln!("{}: {}", path.display(), error);
            false
        }
    }
}
