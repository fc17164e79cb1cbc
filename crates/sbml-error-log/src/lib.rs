//! Diagnostic records and error logs for SBML XML processing.
//!
//! Readers of XML content routinely meet recoverable problems: a required
//! attribute is absent, a number does not parse, a prefix is unbound. None of
//! these should abort a read. Instead, each is recorded as an [`XmlError`] and
//! appended to a [`DiagnosticSink`], usually an [`XmlErrorLog`] that collects
//! everything found in one document.
//!
//! # Overview
//!
//! - [`XmlError`]: one diagnostic, with a stable [`XmlErrorCode`], message,
//!   [`Severity`], [`Category`], line and column
//! - [`catalog`]: the embedded table of default messages and severities
//! - [`DiagnosticSink`]: the single "append a record" capability producers need
//! - [`XmlErrorLog`]: the accumulating sink, with an optional
//!   [`SeverityOverride`]

pub mod catalog;
pub mod error;
pub mod log;

pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info};
pub use error::{Category, Severity, UnknownErrorCode, XmlError, XmlErrorCode};
pub use log::{DiagnosticSink, SeverityOverride, XmlErrorLog};
