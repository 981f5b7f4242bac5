use crate::classifier::Category;
use crate::config::Threshold;
use crate::tally::Tally;
use std::io::{self, Write};

pub const REPORT_HEADER: &str = "Analysis Results:";

/// Report label order, most severe first.
const ORDER: [Category; 3] = [Category::Error, Category::Warning, Category::Info];

/// Counts selected by a threshold, always in ERROR, WARNING, INFO order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(Category, usize)>,
}

impl Report {
    /// Keeps the prefix of ERROR, WARNING, INFO that the threshold admits.
    /// No threshold yields an empty report.
    pub fn project(tally: &Tally, threshold: Option<Threshold>) -> Self {
        let entries = match threshold {
            Some(threshold) => ORDER
                .iter()
                .filter(|category| threshold.admits(**category))
                .map(|category| (*category, tally.count(*category)))
                .collect(),
            None => Vec::new(),
        };
        Self { entries }
    }

    pub fn entries(&self) -> &[(Category, usize)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one `LABEL: COUNT` line per entry.
    pub fn write_labels<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (category, count) in &self.entries {
            writeln!(out, "{}: {}", category, count)?;
        }
        Ok(())
    }

    /// Console form: the header line followed by the labels.
    pub fn write_console<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", REPORT_HEADER)?;
        self.write_labels(out)
    }
}
