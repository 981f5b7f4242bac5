// LogTally Library - Core severity tallying functionality
//
// This library classifies log lines by severity keyword, tallies them and
// renders a threshold-filtered report. The CLI binary is a thin layer over it.

pub mod classifier;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod tally;

pub use classifier::{classify, Category};
pub use config::{parse_bool, Config, Settings, Threshold, DEFAULT_REPORT_PATH};
pub use driver::{Analyzer, Phase};
pub use error::AnalyzeError;
pub use input::{InputConfig, InputSource, LineReader};
pub use output::route;
pub use report::Report;
pub use tally::{tally, Tally};
