//! # Input Source
//!
//! Amounts come either from the command line (one amount per run) or from a
//! pipe on stdin (one amount per numeric line). The mode is decided once at
//! startup and never re-checked.

use crate::classify::parse_amount;
use std::io::{self, BufRead};

/// How the program was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Amount, if any, is a positional argument
    Arguments,
    /// Amounts are streamed one per line from stdin
    Piped,
}

impl InputMode {
    /// Piped only when stdin is a named pipe; a terminal or a redirected file
    /// leaves the program in argument mode.
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdin) {
            return Self::Arguments;
        }
        if stdin_is_fifo() {
            Self::Piped
        } else {
            Self::Arguments
        }
    }

}

#[cfg(unix)]
fn stdin_is_fifo() -> bool {
    use std::os::unix::fs::FileTypeExt;

    std::fs::metadata("/dev/stdin")
        .map(|meta| meta.file_type().is_fifo())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn stdin_is_fifo() -> bool {
    true
}

/// Yields the amounts to convert
pub enum AmountSource<R: BufRead> {
    /// A single amount taken from the arguments
    Argument(Option<f64>),
    /// Numeric lines from a stream; other lines, including ones that are not
    /// valid UTF-8, are skipped
    Stream(io::Split<R>),
}

impl<R: BufRead> AmountSource<R> {
    pub fn argument(amount: f64) -> Self {
        Self::Argument(Some(amount))
    }

    pub fn stream(reader: R) -> Self {
        Self::Stream(reader.split(b'\n'))
    }
}

impl<R: BufRead> Iterator for AmountSource<R> {
    type Item = io::Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Argument(amount) => amount.take().map(Ok),
            Self::Stream(lines) => loop {
                let bytes = match lines.next()? {
                    Ok(bytes) => bytes,
                    Err(e) => return Some(Err(e)),
                };
                let Ok(line) = std::str::from_utf8(&bytes) else {
                    tracing::trace!("Skipping non-UTF-8 input line {:?}", bytes);
                    continue;
                };
                match parse_amount(line.trim()) {
                    Some(amount) => return Some(Ok(amount)),
                    None => tracing::trace!("Skipping non-numeric input line {:?}", line),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn argument_source_should_yield_once() {
        let amounts: Vec<f64> = AmountSource::<Cursor<&[u8]>>::argument(2.5)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(amounts, vec![2.5]);
    }

    #[test]
    fn stream_source_should_skip_non_numeric_lines() {
        let input = Cursor::new("1\n2\nhello\n3\n");
        let amounts: Vec<f64> = AmountSource::stream(input)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn stream_source_should_trim_lines() {
        let input = Cursor::new("  10 \r\n\n\t0.5\nusd\n");
        let amounts: Vec<f64> = AmountSource::stream(input)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(amounts, vec![10.0, 0.5]);
    }

    #[test]
    fn stream_source_should_skip_invalid_utf8_lines() {
        let input = Cursor::new(&b"1\n\xff\n\xfe\xff 5\n2\n"[..]);
        let amounts: Vec<f64> = AmountSource::stream(input)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(amounts, vec![1.0, 2.0]);
    }

    #[test]
    fn empty_stream_should_yield_nothing() {
        let mut source = AmountSource::stream(Cursor::new(""));
        assert!(source.next().is_none());
    }
}
