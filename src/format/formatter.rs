//! Per-argument processing for certificate and key files.

use super::literal::format_text;
use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name suffixes that are transcribed.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".crt", ".pem", ".key"];

/// Printed for arguments that are neither accepted nor skipped.
pub const UNSUPPORTED_WARNING: &str = "Pass file with extension (*.crt) (*.pem) or (*.key) only!";

/// How an argument is treated, decided purely from its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Ends in `.crt`, `.pem` or `.key`.
    Accepted,
    /// Ends in `.py`; ignored without output.
    Script,
    /// Anything else; produces a warning.
    Unsupported,
}

/// Classify an argument by case-sensitive suffix.
pub fn classify(arg: &str) -> ArgKind {
    if ACCEPTED_EXTENSIONS.iter().any(|ext| arg.ends_with(ext)) {
        ArgKind::Accepted
    } else if arg.ends_with(".py") {
        ArgKind::Script
    } else {
        ArgKind::Unsupported
    }
}

/// Read `path` and return its quoted lines.
///
/// Fails with [`Error::FileRead`] naming the path if the file is missing,
/// unreadable or not valid UTF-8.
pub fn format_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format_text(&text))
}

/// Counts gathered over one [`Formatter::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files that were transcribed.
    pub formatted: Vec<PathBuf>,
    /// Total quoted lines written.
    pub lines: usize,
    /// Arguments rejected with a warning.
    pub unsupported: Vec<String>,
    /// Arguments ignored silently.
    pub skipped: Vec<String>,
}

/// Writes transcriptions and warnings to an output sink.
///
/// Each accepted file produces a label line, one quoted line per source
/// line, and a blank separator line.
pub struct Formatter<W> {
    out: W,
}

impl<W: Write> Formatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Process one argument, returning how it was classified.
    pub fn process(&mut self, arg: &str) -> Result<(ArgKind, usize)> {
        let kind = classify(arg);
        let written = match kind {
            ArgKind::Accepted => {
                // Read before printing the label so a failed read emits nothing.
                let lines = format_file(Path::new(arg))?;
                self.write_block(arg, &lines)?;
                lines.len()
            }
            ArgKind::Script => {
                tracing::debug!(arg, "skipping script argument");
                0
            }
            ArgKind::Unsupported => {
                tracing::debug!(arg, "unsupported extension");
                writeln!(self.out, "{UNSUPPORTED_WARNING}").map_err(Error::Output)?;
                0
            }
        };
        Ok((kind, written))
    }

    /// Process arguments in order, stopping at the first read failure.
    pub fn run<I, S>(&mut self, args: I) -> Result<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = Summary::default();
        for arg in args {
            let arg = arg.as_ref();
            let (kind, written) = self.process(arg)?;
            match kind {
                ArgKind::Accepted => {
                    summary.formatted.push(PathBuf::from(arg));
                    summary.lines += written;
                }
                ArgKind::Script => summary.skipped.push(arg.to_string()),
                ArgKind::Unsupported => summary.unsupported.push(arg.to_string()),
            }
        }
        self.out.flush().map_err(Error::Output)?;
        Ok(summary)
    }

    fn write_block(&mut self, arg: &str, lines: &[String]) -> Result<()> {
        writeln!(self.out, "String format of {arg} file:").map_err(Error::Output)?;
        for line in lines {
            writeln!(self.out, "{line}").map_err(Error::Output)?;
        }
        writeln!(self.out).map_err(Error::Output)
    }
}
