//! Error types for attribute operations and start-tag reading.

use sbml_error_log::{XmlError, XmlErrorCode};
use thiserror::Error;

/// Result type alias for start-tag reading.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a structural operation on an attribute or namespace set.
///
/// These are returned to the caller and never logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperationError {
    /// A required argument was unusable (an empty local name, or a reserved
    /// prefix bound to the wrong namespace).
    #[error("invalid object: a required argument was unusable")]
    InvalidObject,

    /// No entry exists at the given position, or none matches the given key.
    #[error("index exceeds size: no matching entry")]
    IndexExceedsSize,
}

/// Errors that can occur while turning a start tag into attributes.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// XML syntax error from quick-xml.
    #[error("XML syntax error: {message}")]
    XmlSyntax {
        message: String,
        /// Byte offset where the error occurred.
        position: Option<u64>,
    },

    /// A prefix on the element or an attribute has no namespace binding.
    #[error("Unbound namespace prefix '{prefix}' on '{qname}'")]
    UnboundPrefix { prefix: String, qname: String },

    /// A reserved prefix (`xml` or `xmlns`) was declared with a value it
    /// cannot take.
    #[error("Reserved prefix '{prefix}' cannot be bound to '{uri}'")]
    ReservedPrefix { prefix: String, uri: String },

    /// A qualified name with an empty prefix or local part, such as `:a`.
    #[error("Misplaced colon in '{qname}'")]
    BadColon { qname: String },

    /// The input held no start tag.
    #[error("No start tag found")]
    NoStartTag,
}

impl Error {
    /// Convert this error to a diagnostic record.
    pub fn to_diagnostic(&self) -> XmlError {
        match self {
            Error::XmlSyntax { message, position } => {
                let details = match position {
                    Some(pos) => format!("{} (at byte offset {})", message, pos),
                    None => message.clone(),
                };
                XmlError::new(XmlErrorCode::BadlyFormedXml, details, 0, 0)
            }

            Error::UnboundPrefix { prefix, qname } => XmlError::new(
                XmlErrorCode::BadXmlPrefix,
                format!("The prefix '{}' of '{}' is not bound to a namespace.", prefix, qname),
                0,
                0,
            ),

            Error::ReservedPrefix { prefix, uri } => XmlError::new(
                XmlErrorCode::BadXmlPrefixValue,
                format!("The reserved prefix '{}' cannot be bound to '{}'.", prefix, uri),
                0,
                0,
            ),

            Error::BadColon { qname } => XmlError::new(
                XmlErrorCode::XmlBadColon,
                format!("The name '{}' has an empty prefix or local part.", qname),
                0,
                0,
            ),

            Error::NoStartTag => XmlError::new(
                XmlErrorCode::XmlContentEmpty,
                "No start tag was found in the input.",
                0,
                0,
            ),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlSyntax {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax {
            message: format!("Attribute error: {}", err),
            position: None,
        }
    }
}
