// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use entitle::app_config::{Config, LogLevel};
use entitle::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a document and suggest a title
    Suggest {
        /// Input document to analyze
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,
    },

    /// Analyze a document and rename it with the suggested title
    Rename {
        /// Input document to analyze and rename
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Show what would be renamed without actually renaming
        #[arg(long)]
        dry_run: bool,

        /// Overwrite an existing target file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions for entitle
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// entitle - AI-powered document title suggester
///
/// Analyzes a document (plain text or PDF), asks a generative model for a
/// concise title, and optionally renames the file with the result.
#[derive(Parser, Debug)]
#[command(name = "entitle")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered document title suggester and renamer")]
#[command(long_about = "entitle extracts the text of a document and asks a generative model for a
concise, filename-safe title.

EXAMPLES:
    entitle suggest invoice.pdf                 # Print a suggested title
    entitle rename invoice.pdf                  # Rename the file in place
    entitle rename --dry-run invoice.pdf        # Show the rename without doing it
    entitle -s - suggest notes.txt              # Use '-' as the word separator
    entitle --no-include-date suggest notes.txt # Skip the date in the title
    entitle completions bash > entitle.bash     # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json in the working directory or from the
    per-user config directory. Command-line flags override config file values;
    the API key can also be set via the ENTITLE_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "ENTITLE_API_KEY", global = true)]
    api_key: Option<String>,

    /// Model name to use
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Include an extracted date in the title
    #[arg(long, global = true, conflicts_with = "no_include_date")]
    include_date: bool,

    /// Do not include a date in the title
    #[arg(long, global = true)]
    no_include_date: bool,

    /// Date format to use in the title
    #[arg(short, long, global = true)]
    date_format: Option<String>,

    /// Separator character for the title
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    separator: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "entitle", &mut std::io::stdout());
            Ok(())
        }
        Commands::Suggest { ref input_file } => {
            let input_file = input_file.clone();
            let controller = build_controller(&cli)?;
            controller.suggest(&input_file).await
        }
        Commands::Rename {
            ref input_file,
            dry_run,
            yes,
        } => {
            let input_file = input_file.clone();
            let controller = build_controller(&cli)?;
            controller.rename(&input_file, dry_run, yes).await
        }
    }
}

/// Resolve the configuration and build the controller
fn build_controller(cli: &CommandLineOptions) -> Result<Controller> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration and apply CLI overrides
    let mut config = Config::discover(cli.config.as_deref())?;

    if let Some(api_key) = &cli.api_key {
        config.api_key = api_key.clone();
    }

    if let Some(model) = &cli.model {
        config.model = model.clone();
    }

    if cli.no_include_date {
        config.include_date = false;
    } else if cli.include_date {
        config.include_date = true;
    }

    if let Some(date_format) = &cli.date_format {
        config.date_format = date_format.clone();
    }

    if let Some(separator) = &cli.separator {
        config.separator = separator.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    Controller::with_config(config)
}
