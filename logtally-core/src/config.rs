use crate::classifier::Category;
use crate::error::AnalyzeError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report path used when file output is requested without a path.
pub const DEFAULT_REPORT_PATH: &str = "default_report.txt";

pub const ENV_LOG_FILE: &str = "LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_OUTPUT_TO_FILE: &str = "OUTPUT_TO_FILE";
pub const ENV_REPORT_PATH: &str = "REPORT_PATH";

/// Severity bound for the report. Includes its own category and every more
/// severe one, ERROR being the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Threshold {
    Error,
    Warning,
    Info,
}

impl Threshold {
    pub fn admits(&self, category: Category) -> bool {
        match category {
            Category::Error => true,
            Category::Warning => *self >= Threshold::Warning,
            Category::Info => *self >= Threshold::Info,
            Category::None => false,
        }
    }
}

impl std::str::FromStr for Threshold {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Threshold::Error),
            "WARNING" => Ok(Threshold::Warning),
            "INFO" => Ok(Threshold::Info),
            _ => Err(AnalyzeError::ConfigInvalid(format!(
                "log level must be one of ERROR, WARNING, INFO (got {:?})",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Threshold::Error => write!(f, "ERROR"),
            Threshold::Warning => write!(f, "WARNING"),
            Threshold::Info => write!(f, "INFO"),
        }
    }
}

/// Parses the textual booleans accepted for `OUTPUT_TO_FILE`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Raw values as supplied on the command line. `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub output_to_file: Option<bool>,
    pub report_file: Option<String>,
}

/// Resolved run configuration. Built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input_path: Option<PathBuf>,
    pub threshold: Option<Threshold>,
    pub emit_to_file: bool,
    pub report_path: Option<PathBuf>,
}

impl Config {
    /// Resolves settings against the process environment.
    pub fn from_env(settings: Settings) -> Result<Self, AnalyzeError> {
        Self::resolve(settings, |key| env::var(key).ok())
    }

    /// Layers flag > environment > default. Empty strings count as absent.
    pub fn resolve<F>(settings: Settings, lookup: F) -> Result<Self, AnalyzeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let log_file = non_empty(settings.log_file).or_else(|| env(ENV_LOG_FILE));
        let log_level = non_empty(settings.log_level).or_else(|| env(ENV_LOG_LEVEL));
        let report_file = non_empty(settings.report_file).or_else(|| env(ENV_REPORT_PATH));

        let emit_to_file = match settings.output_to_file {
            Some(flag) => flag,
            None => match env(ENV_OUTPUT_TO_FILE) {
                Some(raw) => parse_bool(&raw).ok_or_else(|| {
                    AnalyzeError::ConfigInvalid(format!(
                        "{} must be a boolean (got {:?})",
                        ENV_OUTPUT_TO_FILE, raw
                    ))
                })?,
                None => false,
            },
        };

        let threshold: Option<Threshold> = log_level
            .as_deref()
            .map(str::parse::<Threshold>)
            .transpose()?;

        let config = Config {
            input_path: log_file.map(PathBuf::from),
            threshold,
            emit_to_file,
            report_path: report_file.map(PathBuf::from),
        };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Destination of the report file, falling back to `default_report.txt`.
    pub fn report_path(&self) -> &Path {
        self.report_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_REPORT_PATH))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
