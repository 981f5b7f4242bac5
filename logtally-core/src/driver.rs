use crate::config::Config;
use crate::error::AnalyzeError;
use crate::input::{InputConfig, InputSource};
use crate::output::route;
use crate::report::Report;
use crate::tally::{tally, Tally};
use std::io::{Read, Write};
use tracing::{debug, info};

/// Lifecycle of a single run. Any failure jumps straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Announcing,
    Reading,
    Reporting,
    Done,
}

pub struct Analyzer {
    config: Config,
    input_config: InputConfig,
    phase: Phase,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            input_config: InputConfig::default(),
            phase: Phase::Idle,
        }
    }

    pub fn with_input_config(mut self, input_config: InputConfig) -> Self {
        self.input_config = input_config;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the pipeline once: announce, tally the input, then route the report.
    ///
    /// `stdin` is read only when no input path is configured. Progress lines
    /// and the console report go to `stdout`.
    pub fn run<R, W>(&mut self, stdin: R, stdout: &mut W) -> Result<Tally, AnalyzeError>
    where
        R: Read,
        W: Write,
    {
        let result = self.run_phases(stdin, stdout);
        self.enter(Phase::Done);
        if let Err(e) = &result {
            debug!("Run failed: {}", e);
        }
        result
    }

    fn run_phases<R, W>(&mut self, stdin: R, stdout: &mut W) -> Result<Tally, AnalyzeError>
    where
        R: Read,
        W: Write,
    {
        let source = InputSource::from_path(self.config.input_path.as_ref());
        info!("Analyzing {}", source.describe());

        self.enter(Phase::Announcing);
        writeln!(stdout, "Analyzing...").map_err(AnalyzeError::OutputFailed)?;
        if matches!(source, InputSource::Stdin) {
            writeln!(stdout, "Reading from standard input...").map_err(AnalyzeError::OutputFailed)?;
        }
        stdout.flush().map_err(AnalyzeError::OutputFailed)?;

        self.enter(Phase::Reading);
        let counts = {
            let reader = source.open(stdin, &self.input_config)?;
            tally(reader, &self.input_config)?
        };

        self.enter(Phase::Reporting);
        let report = Report::project(&counts, self.config.threshold);
        route(&report, &self.config, stdout)?;

        Ok(counts)
    }

    fn enter(&mut self, phase: Phase) {
        debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
