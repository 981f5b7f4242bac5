use crate::config::Config;
use crate::error::AnalyzeError;
use crate::report::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes the report to the console and, when configured, to the report file.
///
/// The console summary is always produced first, so a report file that cannot
/// be created leaves the console output intact and surfaces `SinkOpenFailed`.
pub fn route<W: Write>(report: &Report, config: &Config, stdout: &mut W) -> Result<(), AnalyzeError> {
    report
        .write_console(stdout)
        .map_err(AnalyzeError::OutputFailed)?;

    if config.emit_to_file {
        let path = config.report_path();
        write_report_file(report, path)?;
        writeln!(stdout, "Results written to {}", path.display()).map_err(AnalyzeError::OutputFailed)?;
    }

    stdout.flush().map_err(AnalyzeError::OutputFailed)
}

/// Creates or truncates `path` and writes the label lines without a header.
/// The handle is closed before this returns.
pub fn write_report_file(report: &Report, path: &Path) -> Result<(), AnalyzeError> {
    let file = File::create(path).map_err(|source| {
        debug!("Failed to create report file {}: {}", path.display(), source);
        AnalyzeError::SinkOpenFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut writer = BufWriter::new(file);
    report
        .write_labels(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(AnalyzeError::OutputFailed)?;

    info!("Report written to {}", path.display());
    Ok(())
}
