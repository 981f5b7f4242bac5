use crate::error::AnalyzeError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use tracing::debug;

pub enum InputSource {
    Stdin,
    File(PathBuf),
}

pub struct InputConfig {
    pub buffer_size: usize,
    /// Longest accepted line, terminator excluded.
    pub max_line_len: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // 8KB buffer for efficient reading
            max_line_len: 64 * 1024 * 1024,
        }
    }
}

impl InputSource {
    pub fn from_path(path: Option<&PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        }
    }

    /// Opens the source for buffered reading. `stdin` is only consumed for
    /// `InputSource::Stdin`. A file handle lives exactly as long as the
    /// returned reader.
    pub fn open<'a, R>(
        &self,
        stdin: R,
        config: &InputConfig,
    ) -> Result<Box<dyn BufRead + 'a>, AnalyzeError>
    where
        R: Read + 'a,
    {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::with_capacity(config.buffer_size, stdin))),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| {
                    debug!("Failed to open {}: {}", path.display(), source);
                    AnalyzeError::InputOpenFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                debug!("Opened log file {}", path.display());
                Ok(Box::new(BufReader::with_capacity(config.buffer_size, file)))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Splits a byte stream into lines on `\n`, dropping the terminator and one
/// trailing `\r`. A final line without terminator is still yielded.
pub struct LineReader<R> {
    reader: R,
    max_line_len: usize,
    line_number: usize,
    line_buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, config: &InputConfig) -> Self {
        Self {
            reader,
            max_line_len: config.max_line_len,
            line_number: 0,
            line_buffer: Vec::new(),
        }
    }

    pub fn next_line(&mut self) -> Result<Option<&[u8]>, AnalyzeError> {
        self.line_buffer.clear();

        // Room for the longest admissible line plus "\r\n"; anything that
        // fills this without a newline is over the limit.
        let limit = self.max_line_len.saturating_add(2) as u64;
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.line_buffer)
            .map_err(AnalyzeError::ReadFailed)?;
        if read == 0 {
            return Ok(None); // EOF
        }
        self.line_number += 1;

        if self.line_buffer.last() == Some(&b'\n') {
            self.line_buffer.pop();
        }
        if self.line_buffer.last() == Some(&b'\r') {
            self.line_buffer.pop();
        }

        if self.line_buffer.len() > self.max_line_len {
            return Err(AnalyzeError::ReadTooLong {
                line: self.line_number,
                limit: self.max_line_len,
            });
        }
        Ok(Some(self.line_buffer.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn collect(input: &[u8], config: &InputConfig) -> Result<Vec<Vec<u8>>, AnalyzeError> {
        let mut reader = LineReader::new(Cursor::new(input.to_vec()), config);
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line()? {
            lines.push(line.to_vec());
        }
        Ok(lines)
    }

    #[test]
    fn test_splits_on_newline_and_crlf() {
        let lines = collect(b"one\ntwo\r\nthree", &InputConfig::default()).unwrap();
        assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let lines = collect(b"\n\nx\n", &InputConfig::default()).unwrap();
        assert_eq!(lines, vec![Vec::new(), Vec::new(), b"x".to_vec()]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(collect(b"", &InputConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_line_at_limit_is_accepted() {
        let config = InputConfig {
            max_line_len: 4,
            ..InputConfig::default()
        };
        let lines = collect(b"abcd\r\nefgh\nijkl", &config).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_oversize_line_fails() {
        let config = InputConfig {
            max_line_len: 4,
            ..InputConfig::default()
        };
        let err = collect(b"ok\nabcdefghij\nok\n", &config).unwrap_err();
        assert!(matches!(err, AnalyzeError::ReadTooLong { line: 2, limit: 4 }));

        let err = collect(b"abcde", &config).unwrap_err();
        assert!(matches!(err, AnalyzeError::ReadTooLong { line: 1, .. }));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_io_error_becomes_read_failed() {
        let mut reader = LineReader::new(BufReader::new(FailingReader), &InputConfig::default());
        assert!(matches!(reader.next_line(), Err(AnalyzeError::ReadFailed(_))));
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let source = InputSource::File(dir.path().join("absent.log"));
        let result = source.open(io::empty(), &InputConfig::default());
        assert!(matches!(result, Err(AnalyzeError::InputOpenFailed { .. })));
    }
}
