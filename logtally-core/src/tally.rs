use crate::classifier::{classify, Category};
use crate::error::AnalyzeError;
use crate::input::{InputConfig, LineReader};
use std::io::BufRead;
use tracing::debug;

/// Running counters for one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    /// Every line seen, matched or not.
    pub lines: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        self.lines += 1;
        match category {
            Category::Error => self.errors += 1,
            Category::Warning => self.warnings += 1,
            Category::Info => self.infos += 1,
            Category::None => {}
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Error => self.errors,
            Category::Warning => self.warnings,
            Category::Info => self.infos,
            Category::None => self
                .lines
                .saturating_sub(self.errors + self.warnings + self.infos),
        }
    }
}

/// Classifies every line of `reader` until end-of-stream. Any read failure
/// discards the partial counts.
pub fn tally<R: BufRead>(reader: R, config: &InputConfig) -> Result<Tally, AnalyzeError> {
    let mut lines = LineReader::new(reader, config);
    let mut tally = Tally::new();

    while let Some(line) = lines.next_line()? {
        tally.record(classify(line));
    }

    debug!(
        lines = tally.lines,
        errors = tally.errors,
        warnings = tally.warnings,
        infos = tally.infos,
        "Finished tallying input"
    );
    Ok(tally)
}
