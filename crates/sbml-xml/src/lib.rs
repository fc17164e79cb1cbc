//! Attribute handling for SBML-style XML.
//!
//! This crate models the attributes of one XML start tag as an ordered set of
//! `(name, uri, prefix) = value` entries. It is the layer that sits between an
//! XML reader and the model objects that consume attribute values.
//!
//! # Overview
//!
//! The main types are:
//! - [`XmlTriple`]: A qualified name; equality ignores the prefix
//! - [`XmlAttributes`]: The ordered attribute set of one element
//! - [`XmlNamespaces`]: The `xmlns` declarations of one element
//! - [`TextEmitter`]: Where attribute sets are serialized to
//!
//! # Example
//!
//! ```rust
//! use sbml_xml::{AttributeText, ReadOptions, XmlAttributes};
//! use sbml_error_log::{XmlErrorCode, XmlErrorLog};
//!
//! let mut attrs = XmlAttributes::new();
//! attrs.add("id", "c").unwrap();
//! attrs.add("value", "2.3").unwrap();
//! attrs.add("units", "second").unwrap();
//!
//! let mut log = XmlErrorLog::new();
//! let mut value = 0.0_f64;
//! assert!(attrs.read_into("value", &mut value, Some(&mut log), ReadOptions::default()));
//! assert_eq!(value, 2.3);
//!
//! let mut missing = 0.0_f64;
//! assert!(!attrs.read_into("missing", &mut missing, Some(&mut log), ReadOptions::required()));
//! assert!(log.contains(XmlErrorCode::MissingXmlRequiredAttribute));
//!
//! assert_eq!(AttributeText::render(&attrs), r#"id="c" value="2.3" units="second""#);
//! ```
//!
//! # Reading start tags
//!
//! [`parse_start_tag`] and [`read_start_tag`] build attribute sets from
//! quick-xml, resolving prefixes against the namespaces in scope:
//!
//! ```rust
//! use sbml_xml::parse_start_tag;
//!
//! let tag = parse_start_tag(r#"<p xml:lang="en" id="a"/>"#).unwrap();
//! assert_eq!(tag.attributes.prefixed_name_at(0), "xml:lang");
//! assert_eq!(tag.attributes.value("id"), "a");
//! ```

pub mod attributes;
pub mod error;
pub mod namespaces;
pub mod parser;
pub mod read;
pub mod triple;
pub mod write;

pub use attributes::{XmlAttribute, XmlAttributes};
pub use error::{Error, OperationError, Result};
pub use namespaces::{NamespaceDecl, XML_NAMESPACE, XMLNS_NAMESPACE, XmlNamespaces};
pub use parser::{StartTag, parse_start_tag, parse_start_tag_with_log, read_start_tag};
pub use read::{AttributeKey, AttributeValue, DataType, Lexed, ReadFailure, ReadOptions};
pub use triple::XmlTriple;
pub use write::{AttributeName, AttributeText, StartTagEmitter, TextEmitter};
