//! Terminal rendering of build summaries and query reports.

use crate::index::BuildSummary;
use crate::query::QueryReport;
use clap::ValueEnum;
use std::fmt;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
            ColorMode::Never => f.write_str("never"),
        }
    }
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Print the build summary block shown once the index is ready.
pub fn print_summary(summary: &BuildSummary, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Concordance index")?;
    stdout.reset()?;

    writeln!(stdout, "File:               {}", summary.file.display())?;
    writeln!(stdout, "Backend:            {}", summary.backend)?;
    writeln!(stdout, "Lines:              {}", summary.line_count)?;
    writeln!(stdout, "Unique words:       {}", summary.unique_words)?;
    if let Some(height) = summary.tree_height {
        writeln!(stdout, "Tree height:        {}", height)?;
    }
    writeln!(stdout, "Build comparisons:  {}", summary.comparisons)?;

    Ok(())
}

/// Print one query report: the match lines with highlighted line numbers,
/// or a not-found notice, followed by the comparison count.
pub fn print_report(report: &QueryReport, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);

    if report.found {
        let hits = report.hit_count.unwrap_or(0);
        write!(stdout, "{} occurrences of ", hits)?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "'{}'", report.word)?;
        stdout.reset()?;
        writeln!(stdout, " on the following lines:")?;

        for line in &report.matches {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(stdout, "{:05}", line.line_number)?;
            stdout.reset()?;
            writeln!(stdout, ": {}", line.text)?;
        }
    } else {
        write!(stdout, "Word ")?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "'{}'", report.word)?;
        stdout.reset()?;
        writeln!(stdout, " not found.")?;
    }

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stdout, "comparisons")?;
    stdout.reset()?;
    writeln!(stdout, ": {}", report.comparisons)?;

    Ok(())
}
