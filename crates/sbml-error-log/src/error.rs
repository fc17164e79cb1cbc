//! Diagnostic records produced while reading and writing XML.
//!
//! An [`XmlError`] carries a stable numeric [`XmlErrorCode`], a message
//! assembled from the error catalog plus caller-supplied details, a
//! [`Severity`], a [`Category`], and the line/column it applies to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational; processing is unaffected
    Info,
    /// Something looks wrong but processing can continue
    Warning,
    /// The content is invalid
    Error,
    /// Processing cannot meaningfully continue
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which layer a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A problem inside the library itself
    Internal,
    /// A problem reported by the operating system (files, memory, network)
    System,
    /// A problem with the XML content
    Xml,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Internal => "Internal",
            Category::System => "System",
            Category::Xml => "XML content",
        }
    }
}

/// Returned when converting an id that has no [`XmlErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode(pub u32);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown XML error code {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

macro_rules! error_codes {
    ($($(#[$meta:meta])* $variant:ident = $id:literal,)*) => {
        /// Stable numeric identifiers for XML diagnostics.
        ///
        /// Ids are shared with the embedded error catalog and never change
        /// once published.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        #[repr(u32)]
        pub enum XmlErrorCode {
            $($(#[$meta])* $variant = $id,)*
        }

        impl XmlErrorCode {
            /// Every known code, in ascending id order.
            pub const ALL: &'static [XmlErrorCode] = &[$(XmlErrorCode::$variant,)*];

            /// The numeric id of this code.
            pub fn id(self) -> u32 {
                self as u32
            }

            /// Look up a code by its numeric id.
            pub fn from_id(id: u32) -> Option<Self> {
                match id {
                    $($id => Some(XmlErrorCode::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

error_codes! {
    UnknownError = 0,
    OutOfMemory = 1,
    FileUnreadable = 2,
    FileUnwritable = 3,
    FileOperationError = 4,
    NetworkAccessError = 5,
    InternalParserError = 101,
    UnrecognizedParserCode = 102,
    TranscoderError = 103,
    MissingXmlDecl = 1001,
    MissingXmlEncoding = 1002,
    BadXmlDecl = 1003,
    BadXmlDoctype = 1004,
    InvalidCharInXml = 1005,
    BadlyFormedXml = 1006,
    UnclosedXmlToken = 1007,
    InvalidXmlConstruct = 1008,
    XmlTagMismatch = 1009,
    DuplicateXmlAttribute = 1010,
    UndefinedXmlEntity = 1011,
    BadProcessingInstruction = 1012,
    BadXmlPrefix = 1013,
    BadXmlPrefixValue = 1014,
    /// A required attribute has no entry on the element.
    MissingXmlRequiredAttribute = 1015,
    /// An attribute value does not parse as the requested datatype.
    XmlAttributeTypeMismatch = 1016,
    XmlBadUtf8Content = 1017,
    MissingXmlAttributeValue = 1018,
    BadXmlAttributeValue = 1019,
    BadXmlAttribute = 1020,
    UnrecognizedXmlElement = 1021,
    BadXmlComment = 1022,
    BadXmlDeclLocation = 1023,
    XmlUnexpectedEof = 1024,
    BadXmlIdValue = 1025,
    BadXmlIdRef = 1026,
    UninterpretableXmlContent = 1027,
    BadXmlDocumentStructure = 1028,
    InvalidAfterXmlContent = 1029,
    XmlExpectedQuotedString = 1030,
    XmlEmptyValueNotPermitted = 1031,
    XmlBadNumber = 1032,
    XmlBadColon = 1033,
    MissingXmlElements = 1034,
    XmlContentEmpty = 1035,
}

impl From<XmlErrorCode> for u32 {
    fn from(code: XmlErrorCode) -> Self {
        code.id()
    }
}

impl TryFrom<u32> for XmlErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        XmlErrorCode::from_id(id).ok_or(UnknownErrorCode(id))
    }
}

/// A single diagnostic record.
///
/// # Example
///
/// ```
/// use sbml_error_log::{Severity, XmlError, XmlErrorCode};
///
/// let err = XmlError::new(
///     XmlErrorCode::MissingXmlRequiredAttribute,
///     "The compartment attribute 'id' is required.",
///     4,
///     12,
/// );
/// assert_eq!(err.severity, Severity::Error);
/// assert!(err.message.ends_with("is required."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlError {
    pub code: XmlErrorCode,

    /// Catalog message, followed by the caller's details on a new line
    pub message: String,

    pub short_message: String,

    pub severity: Severity,

    pub category: Category,

    /// Line number, 0 when unknown
    pub line: u32,

    /// Column number, 0 when unknown
    pub column: u32,
}

impl XmlError {
    /// Create a record whose severity and category come from the catalog.
    pub fn new(code: XmlErrorCode, details: impl AsRef<str>, line: u32, column: u32) -> Self {
        let info = catalog::info_for(code);
        let details = details.as_ref();

        let message = if details.is_empty() {
            info.message.clone()
        } else {
            format!("{}\n{}", info.message, details)
        };

        Self {
            code,
            message,
            short_message: info.short_message.clone(),
            severity: info.severity,
            category: info.category,
            line,
            column,
        }
    }

    /// Replace the catalog severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    /// Render as `line L: (NNNNN [Severity]) message`.
    pub fn to_text(&self) -> String {
        format!(
            "line {}: ({:05} [{}]) {}",
            self.line,
            self.code.id(),
            self.severity,
            self.message
        )
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "code": self.code.id(),
            "severity": self.severity.as_str(),
            "category": self.category.as_str(),
            "shortMessage": self.short_message,
            "message": self.message,
            "line": self.line,
            "column": self.column,
        })
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl std::error::Error for XmlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ids_round_trip() {
        for code in XmlErrorCode::ALL {
            assert_eq!(XmlErrorCode::from_id(code.id()), Some(*code));
        }
        assert_eq!(XmlErrorCode::from_id(9999), None);
    }

    #[test]
    fn test_attribute_codes_have_stable_ids() {
        assert_eq!(XmlErrorCode::MissingXmlRequiredAttribute.id(), 1015);
        assert_eq!(XmlErrorCode::XmlAttributeTypeMismatch.id(), 1016);
    }

    #[test]
    fn test_message_without_details() {
        let err = XmlError::new(XmlErrorCode::BadXmlPrefix, "", 0, 0);
        assert_eq!(err.message, "Invalid or undefined XML namespace prefix.");
        assert_eq!(err.short_message, "Bad XML prefix");
        assert_eq!(err.category, Category::Xml);
    }

    #[test]
    fn test_message_with_details() {
        let err = XmlError::new(XmlErrorCode::XmlAttributeTypeMismatch, "bad value", 2, 5);
        assert_eq!(
            err.message,
            "Data type mismatch in the value of an XML attribute.\nbad value"
        );
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_catalog_severity_and_override() {
        let err = XmlError::new(XmlErrorCode::OutOfMemory, "", 0, 0);
        assert!(err.is_fatal());
        assert_eq!(err.category, Category::System);

        let err = err.with_severity(Severity::Warning);
        assert!(err.is_warning());
    }

    #[test]
    fn test_to_text() {
        let err = XmlError::new(XmlErrorCode::MissingXmlRequiredAttribute, "", 7, 1);
        insta::assert_snapshot!(
            err.to_text(),
            @"line 7: (01015 [Error]) Missing a required XML attribute."
        );
    }

    #[test]
    fn test_to_json() {
        let err = XmlError::new(XmlErrorCode::XmlBadNumber, "", 3, 9);
        let json = err.to_json();
        assert_eq!(json["code"], 1032);
        assert_eq!(json["severity"], "Error");
        assert_eq!(json["line"], 3);
        assert_eq!(json["column"], 9);
    }

    #[test]
    fn test_serde_uses_numeric_code() {
        let err = XmlError::new(XmlErrorCode::DuplicateXmlAttribute, "", 1, 1);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 1010);

        let back: XmlError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
