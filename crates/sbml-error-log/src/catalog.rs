//! Error code catalog and lookup.
//!
//! This module maps numeric error ids (like `1016`) to their metadata: short
//! and long message, default severity and category.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Category, Severity, XmlErrorCode};

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Short title for the error
    pub short_message: String,

    /// Full message used as the first line of a diagnostic
    pub message: String,

    /// Severity assigned unless the caller or the log overrides it
    pub severity: Severity,

    pub category: Category,
}

/// Global error catalog, loaded lazily from JSON embedded at compile time.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid. This should only happen during
/// development if someone manually edits the catalog incorrectly.
pub static ERROR_CATALOG: Lazy<HashMap<u32, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON - this is a bug in sbml-error-log")
});

static FALLBACK: Lazy<ErrorCodeInfo> = Lazy::new(|| ErrorCodeInfo {
    short_message: "Unknown error".to_string(),
    message: "Unrecognized error encountered internally.".to_string(),
    severity: Severity::Fatal,
    category: Category::Internal,
});

/// Look up error code information by numeric id.
///
/// Returns `None` if the id is not in the catalog.
///
/// # Example
///
/// ```
/// use sbml_error_log::catalog::get_error_info;
///
/// let info = get_error_info(1015).unwrap();
/// assert_eq!(info.short_message, "Missing required attribute");
/// ```
pub fn get_error_info(id: u32) -> Option<&'static ErrorCodeInfo> {
    ERROR_CATALOG.get(&id)
}

/// Catalog entry for a code, falling back to the `UnknownError` entry.
pub fn info_for(code: XmlErrorCode) -> &'static ErrorCodeInfo {
    get_error_info(code.id())
        .or_else(|| get_error_info(XmlErrorCode::UnknownError.id()))
        .unwrap_or(&FALLBACK)
}
