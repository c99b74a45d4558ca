//! Name Suggest - command-line entrypoint.
//!
//! Loads configuration, initializes logging, seeds the prefix index and then
//! answers one query or runs an interactive suggestion prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use name_suggest_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use name_suggest_lib::error::{set_error_reporter, SuggestError, SuggestResult, TracingErrorReporter};
use name_suggest_lib::host::{PromptInput, SuggestionHost};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "name_suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Seed file with the names to index (overrides the configured path)
    #[clap(short, long, value_parser)]
    seed: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every suggestion for a single query (capped by suggest.max_results if set)
    Search {
        /// Query text
        query: String,
    },

    /// Read queries from stdin and print suggestions for each
    Interactive,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> SuggestResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SuggestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads configuration and brings up logging and error reporting.
fn start(config_loader: &ConfigLoader) -> SuggestResult<AppConfig> {
    let config = config_loader.load()?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    Ok(config)
}

/// Builds the host and seeds it from the command line or configured seed file.
fn build_host(config: &AppConfig, seed_override: Option<PathBuf>) -> SuggestionHost {
    let mut host = SuggestionHost::new(config.suggest.clone());

    match seed_override.or_else(|| config.seed.path.clone()) {
        Some(path) => {
            let format = config.seed.format_for(&path);
            host.seed_from_path(&path, format, &config.seed.json_field);
        }
        None => info!("No seed file configured, starting with an empty index"),
    }

    host
}

fn print_suggestions<W: Write>(out: &mut W, suggestions: &[String], numbered: bool) -> io::Result<()> {
    for (i, suggestion) in suggestions.iter().enumerate() {
        if numbered {
            writeln!(out, "{i:>3}  {suggestion}")?;
        } else {
            writeln!(out, "{suggestion}")?;
        }
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Prompt loop: each line is a query, `:N` selects suggestion N, `:q` exits.
fn run_interactive(host: &SuggestionHost) -> SuggestResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut last: Vec<String> = Vec::new();

    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;

        let query = match PromptInput::parse(&line) {
            PromptInput::Quit => break,
            PromptInput::Query(query) => query,
            PromptInput::Select(n) => match SuggestionHost::select(&last, n) {
                Some(selected) => {
                    writeln!(out, "{selected}")?;
                    selected
                }
                None => {
                    writeln!(out, "no suggestion {n}")?;
                    prompt(&mut out)?;
                    continue;
                }
            },
            PromptInput::Unknown(command) => {
                writeln!(out, "unknown command :{command}")?;
                prompt(&mut out)?;
                continue;
            }
        };

        last = host.suggest(&query);
        print_suggestions(&mut out, &last, true)?;
        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> SuggestResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Interactive) {
        Command::GenConfig { output } => {
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SuggestError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
        Command::Validate => {
            config_loader.load()?;
            println!("Configuration is valid");
            Ok(())
        }
        Command::Search { query } => {
            let config = start(&config_loader)?;
            let host = build_host(&config, args.seed);

            let stdout = io::stdout();
            print_suggestions(&mut stdout.lock(), &host.suggest(&query), false)?;
            Ok(())
        }
        Command::Interactive => {
            let config = start(&config_loader)?;
            let host = build_host(&config, args.seed);

            info!(names = host.index().len(), "Ready for queries");
            run_interactive(&host)
        }
    }
}
