//! format-cert - Print certificate and key files as C string literals.

use anyhow::{Context, Result};
use clap::Parser;
use dps_tools::{default_filter, init_tracing, Formatter};
use std::io::{self, BufRead, Write};

/// Convert .crt/.pem/.key files into quoted C string lines
#[derive(Parser)]
#[command(name = "format-cert")]
#[command(version, about = "Convert certificate/key files into C string literals", long_about = None)]
struct Cli {
    /// Files to convert, processed in order
    #[arg(required = true)]
    files: Vec<String>,

    /// Wait for Enter before exiting
    #[arg(long)]
    wait: bool,

    /// Log skipped and rejected arguments to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Shown by `--wait` before blocking on standard input.
const WAIT_PROMPT: &str = "Enter any key to exit...";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.verbose));
    run(&cli, &mut io::stdout().lock(), &mut io::stdin().lock())
}

/// Format every file argument into `out`, then optionally wait on `input`.
///
/// A read failure is returned after the wait so an interactive user sees
/// it before the terminal closes.
fn run(cli: &Cli, out: &mut impl Write, input: &mut impl BufRead) -> Result<()> {
    let result = Formatter::new(&mut *out).run(&cli.files);

    if cli.wait {
        write!(out, "{WAIT_PROMPT}")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }

    let summary = result.context("formatting stopped")?;
    tracing::debug!(
        files = summary.formatted.len(),
        lines = summary.lines,
        unsupported = summary.unsupported.len(),
        "done"
    );
    Ok(())
}
