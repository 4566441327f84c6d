// ABOUTME: Console reporting for workflow validation runs
// ABOUTME: Defines the reporter seam and the line-oriented console implementation

pub mod formatter;

use std::io::{self, Write};
use std::path::Path;

use self::formatter::TextFormatter;
use crate::engine::RunSummary;
use crate::parser::ValidationReport;

/// Receives progress and results while workflow files are checked
pub trait Reporter {
    fn run_started(&mut self, title: &str) -> io::Result<()>;

    fn file_started(&mut self, path: &Path) -> io::Result<()>;

    fn file_skipped(&mut self, path: &Path) -> io::Result<()>;

    fn file_report(&mut self, path: &Path, report: &ValidationReport) -> io::Result<()>;

    fn summary(&mut self, summary: &RunSummary) -> io::Result<()>;

    fn finished(&mut self, passed: bool) -> io::Result<()>;
}

pub struct ConsoleReporter<W: Write> {
    out: W,
    formatter: TextFormatter,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            formatter: TextFormatter::new(),
        }
    }

    pub fn with_formatter(mut self, formatter: TextFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: Vec<String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, title: &str) -> io::Result<()> {
        let lines = self.formatter.header(title);
        self.emit(lines)
    }

    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        let lines = self.formatter.file_started(path);
        self.emit(lines)
    }

    fn file_skipped(&mut self, path: &Path) -> io::Result<()> {
        let lines = self.formatter.file_skipped(path);
        self.emit(lines)
    }

    fn file_report(&mut self, path: &Path, report: &ValidationReport) -> io::Result<()> {
        let lines = self.formatter.file_report(path, report);
        self.emit(lines)
    }

    fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let lines = self.formatter.summary(summary);
        self.emit(lines)
    }

    fn finished(&mut self, passed: bool) -> io::Result<()> {
        let mut lines = vec![String::new()];
        lines.extend(self.formatter.verdict(passed));
        self.emit(lines)
    }
}
