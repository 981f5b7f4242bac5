// LogTally CLI - Command-line interface for severity tallying

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use logtally_core::{parse_bool, AnalyzeError, Analyzer, Config, Settings, Tally};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logtally")]
#[command(about = "Count ERROR, WARNING and INFO lines in a log", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the log file (reads standard input when empty) [env: LOG_FILE]
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<String>,

    /// Report threshold: ERROR, WARNING or INFO [env: LOG_LEVEL]
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also write the report to a file [env: OUTPUT_TO_FILE]
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_flag_bool
    )]
    output_to_file: Option<bool>,

    /// Report file path (default: default_report.txt) [env: REPORT_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    report_file: Option<String>,

    /// Print debug diagnostics to standard error
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze log file or stdin
    Analyze,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
            output_to_file: self.output_to_file,
            report_file: self.report_file.clone(),
        }
    }
}

fn parse_flag_bool(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("invalid boolean value '{}'", value))
}

fn init_tracing(verbose: bool) {
    // Diagnostics go to stderr; stdout carries only the report.
    let filter = if verbose {
        EnvFilter::new("logtally=debug,logtally_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn analyze(settings: Settings) -> Result<Tally, AnalyzeError> {
    let config = Config::from_env(settings)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Analyzer::new(config).run(stdin.lock(), &mut stdout)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Analyze) => match analyze(cli.settings()) {
            Ok(tally) => {
                info!(lines = tally.lines, "Analysis complete");
                Ok(())
            }
            Err(e) => {
                debug!("Analysis failed: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(e.exit_code());
            }
        },
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
