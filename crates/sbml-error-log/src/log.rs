//! Accumulating diagnostic sinks.

use std::io;

use crate::error::{Severity, XmlError, XmlErrorCode};

/// Anything that can receive diagnostics.
///
/// Producers only ever append; they never read back from the sink.
pub trait DiagnosticSink {
    /// Append one diagnostic record.
    fn add(&mut self, error: XmlError);
}

impl DiagnosticSink for Vec<XmlError> {
    fn add(&mut self, error: XmlError) {
        self.push(error);
    }
}

/// How an [`XmlErrorLog`] treats incoming warnings and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityOverride {
    /// Records are logged with their own severity.
    #[default]
    Disabled,
    /// Records are dropped.
    DontLog,
    /// Warnings and errors are logged as warnings.
    Warning,
    /// Warnings and errors are logged as errors.
    Error,
}

/// A log that accumulates diagnostics across a whole document read.
///
/// Diagnostics collected here never abort processing; callers decide
/// afterwards whether the result is usable (see [`XmlErrorLog::has_errors`]).
///
/// # Example
///
/// ```rust
/// use sbml_error_log::{DiagnosticSink, XmlError, XmlErrorCode, XmlErrorLog};
///
/// let mut log = XmlErrorLog::new();
/// log.add(XmlError::new(XmlErrorCode::XmlBadNumber, "", 1, 1));
///
/// assert_eq!(log.num_errors(), 1);
/// assert!(log.contains(XmlErrorCode::XmlBadNumber));
/// ```
#[derive(Debug, Default, Clone)]
pub struct XmlErrorLog {
    errors: Vec<XmlError>,
    severity_override: SeverityOverride,
}

impl XmlErrorLog {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            severity_override: SeverityOverride::Disabled,
        }
    }

    pub fn severity_override(&self) -> SeverityOverride {
        self.severity_override
    }

    pub fn set_severity_override(&mut self, severity_override: SeverityOverride) {
        self.severity_override = severity_override;
    }

    pub fn is_severity_overridden(&self) -> bool {
        self.severity_override != SeverityOverride::Disabled
    }

    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The `n`-th record, in arrival order.
    pub fn error(&self, n: usize) -> Option<&XmlError> {
        self.errors.get(n)
    }

    pub fn errors(&self) -> &[XmlError] {
        &self.errors
    }

    /// Take all records, leaving the log empty.
    pub fn take_errors(&mut self) -> Vec<XmlError> {
        std::mem::take(&mut self.errors)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn contains(&self, code: XmlErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Remove the first record with `code`, returning it.
    pub fn remove(&mut self, code: XmlErrorCode) -> Option<XmlError> {
        let pos = self.errors.iter().position(|e| e.code == code)?;
        Some(self.errors.remove(pos))
    }

    pub fn num_failures_with_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Check if any errors or fatal errors (not warnings) have been collected.
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| matches!(e.severity, Severity::Error | Severity::Fatal))
    }

    /// All records rendered one per line.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for err in &self.errors {
            result.push_str(&err.to_text());
            result.push('\n');
        }
        result
    }

    pub fn print_errors(&self, out: &mut impl io::Write) -> io::Result<()> {
        out.write_all(self.to_text().as_bytes())
    }
}

impl DiagnosticSink for XmlErrorLog {
    fn add(&mut self, mut error: XmlError) {
        let overridable = matches!(error.severity, Severity::Warning | Severity::Error);

        match self.severity_override {
            SeverityOverride::Disabled => {}
            SeverityOverride::DontLog => {
                tracing::trace!(code = error.code.id(), "Dropping diagnostic");
                return;
            }
            SeverityOverride::Warning if overridable => error.severity = Severity::Warning,
            SeverityOverride::Error if overridable => error.severity = Severity::Error,
            SeverityOverride::Warning | SeverityOverride::Error => {}
        }

        tracing::debug!(
            code = error.code.id(),
            severity = error.severity.as_str(),
            line = error.line,
            column = error.column,
            "Logging diagnostic"
        );
        self.errors.push(error);
    }
}
