//! Diagnostic reporting for the conversion services
//!
//! The parser and the writer never log through global state directly. Each is
//! handed a [`DiagnosticSink`] and reports informational and warning messages
//! through it, so tests can observe exactly what a run reported.

use std::sync::Mutex;
use tracing::{error, info, warn};

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

/// A single reported message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Destination for diagnostics raised during a conversion
pub trait DiagnosticSink: Send + Sync {
    /// Record a diagnostic
    fn report(&self, level: DiagnosticLevel, message: &str);

    fn info(&self, message: &str) {
        self.report(DiagnosticLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(DiagnosticLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(DiagnosticLevel::Error, message);
    }
}

/// Sink that forwards every diagnostic to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Info => info!("{}", message),
            DiagnosticLevel::Warning => warn!("{}", message),
            DiagnosticLevel::Error => error!("{}", message),
        }
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics recorded so far, in order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.level == level)
            .map(|d| d.message)
            .collect()
    }

    /// Check if any warning was recorded
    pub fn has_warnings(&self) -> bool {
        !self.messages(DiagnosticLevel::Warning).is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        let diagnostic = Diagnostic {
            level,
            message: message.to_string(),
        };
        match self.diagnostics.lock() {
            Ok(mut guard) => guard.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
