#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Severity attached to a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

/// A single human-readable diagnostics line.
///
/// This is plain data so a sink can keep it around, render it later, or forward it to a logger.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub level: Level,
    pub message: Cow<'static, str>,
}

impl Report {
    pub fn new(level: Level, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warn(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Level::Warn, message)
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Level::Error, message)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// The "report a message" capability engines depend on.
pub trait Diagnostics {
    fn report(&mut self, report: Report);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, report: Report) {
        (**self).report(report);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    fn report(&mut self, report: Report) {
        (**self).report(report);
    }
}

/// Drops every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&mut self, _report: Report) {}
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VecDiagnostics {
    pub reports: Vec<Report>,
}

impl VecDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Report> + '_ {
        self.reports.iter().filter(move |r| r.level == level)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.reports.iter().any(|r| r.message.contains(needle))
    }
}

impl Diagnostics for VecDiagnostics {
    fn report(&mut self, report: Report) {
        self.reports.push(report);
    }
}

/// Forwards reports to the `tracing` macro matching their level.
///
/// Events are recorded under the `reef_core::diagnostics` target with a `source` field naming the
/// reporting engine, so filter with e.g. `RUST_LOG=reef_core::diagnostics=info`.
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    source: &'static str,
}

impl TracingDiagnostics {
    pub fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::new("reef")
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, report: Report) {
        let source = self.source;
        let message = report.message.as_ref();
        match report.level {
            Level::Debug => tracing::debug!(source, "{message}"),
            Level::Info => tracing::info!(source, "{message}"),
            Level::Warn => tracing::warn!(source, "{message}"),
            Level::Error => tracing::error!(source, "{message}"),
        }
    }
}
