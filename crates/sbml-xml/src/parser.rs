//! Building attribute sets from quick-xml start tags.
//!
//! This is the parser side of [`XmlAttributes`]: attributes are added one by
//! one, in document order, exactly as a SAX-style reader would. Namespace
//! declarations are split out into an [`XmlNamespaces`] and prefixes are
//! resolved to URIs. Beyond prefix binding, the content is trusted.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use sbml_error_log::DiagnosticSink;

use crate::attributes::XmlAttributes;
use crate::error::{Error, Result};
use crate::namespaces::{XML_NAMESPACE, XmlNamespaces};
use crate::triple::XmlTriple;

/// One start tag: element name, namespace declarations and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StartTag {
    pub name: XmlTriple,
    pub namespaces: XmlNamespaces,
    pub attributes: XmlAttributes,
}

impl StartTag {
    /// Declarations visible to this element's children: the parent scope
    /// with this tag's own declarations layered on top.
    pub fn scope(&self, parent: Option<&XmlNamespaces>) -> XmlNamespaces {
        let mut scope = parent.cloned().unwrap_or_default();
        for decl in &self.namespaces {
            // own declarations were accepted once already
            let _ = scope.add(decl.uri(), decl.prefix());
        }
        scope
    }
}

/// Read the first start (or empty-element) tag in `content`.
///
/// # Example
///
/// ```rust
/// use sbml_xml::parse_start_tag;
///
/// let tag = parse_start_tag(r#"<parameter id="k1" value="0.5" constant="true"/>"#).unwrap();
/// assert_eq!(tag.name.name(), "parameter");
/// assert_eq!(tag.attributes.len(), 3);
/// assert_eq!(tag.attributes.read::<f64>("value"), Ok(0.5));
/// ```
///
/// # Errors
///
/// Returns an error if the markup before or in the tag is malformed, if a
/// prefix is unbound or empty, if a reserved prefix is misdeclared, or if
/// there is no start tag at all.
pub fn parse_start_tag(content: &str) -> Result<StartTag> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => return read_start_tag(&e, None),
            Ok(Event::Eof) => return Err(Error::NoStartTag),
            Ok(_) => {
                // Skip declarations, comments, text and processing instructions
            }
            Err(e) => {
                return Err(Error::XmlSyntax {
                    message: e.to_string(),
                    position: Some(reader.error_position()),
                });
            }
        }
    }
}

/// Like [`parse_start_tag`], but failures are logged to `log` instead of
/// being returned.
pub fn parse_start_tag_with_log(content: &str, log: &mut dyn DiagnosticSink) -> Option<StartTag> {
    match parse_start_tag(content) {
        Ok(tag) => Some(tag),
        Err(err) => {
            log.add(err.to_diagnostic());
            None
        }
    }
}

/// Build a [`StartTag`] from a quick-xml event.
///
/// Prefixes resolve against the tag's own declarations first, then `parent`,
/// then the built-in `xml` prefix. Unprefixed attributes are in no namespace.
pub fn read_start_tag(e: &BytesStart<'_>, parent: Option<&XmlNamespaces>) -> Result<StartTag> {
    let mut raw = Vec::new();
    for attr_result in e.attributes() {
        let attr = attr_result?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(|err| Error::XmlSyntax {
            message: format!("Invalid attribute value: {}", err),
            position: None,
        })?;
        raw.push((key, value.into_owned()));
    }

    let mut namespaces = XmlNamespaces::new();
    for (key, value) in &raw {
        let prefix = match split_name(key)? {
            (None, "xmlns") => "",
            (Some("xmlns"), prefix) => prefix,
            _ => continue,
        };
        if prefix == "xmlns" {
            return Err(reserved(prefix, value));
        }
        namespaces
            .add(value, prefix)
            .map_err(|_| reserved(prefix, value))?;
    }

    let qname = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let name = match split_name(&qname)? {
        (Some(prefix), local) => {
            let uri = resolve(prefix, &namespaces, parent).ok_or_else(|| unbound(prefix, &qname))?;
            XmlTriple::new(local, uri, prefix)
        }
        (None, local) => {
            let uri = resolve("", &namespaces, parent).unwrap_or_default();
            XmlTriple::new(local, uri, "")
        }
    };

    let mut attributes = XmlAttributes::new();
    attributes.set_element_name(name.name());
    for (key, value) in &raw {
        match split_name(key)? {
            (None, "xmlns") | (Some("xmlns"), _) => {}
            (Some(prefix), local) => {
                let uri = resolve(prefix, &namespaces, parent).ok_or_else(|| unbound(prefix, key))?;
                attributes.add_ns(local, value, &uri, prefix).map_err(|_| Error::XmlSyntax {
                    message: format!("Attribute '{}' has an empty local name", key),
                    position: None,
                })?;
            }
            (None, local) => {
                attributes.add(local, value).map_err(|_| Error::XmlSyntax {
                    message: "Attribute with an empty name".to_string(),
                    position: None,
                })?;
            }
        }
    }

    tracing::debug!(
        element = %name,
        attributes = attributes.len(),
        namespaces = namespaces.len(),
        "Read start tag"
    );

    Ok(StartTag {
        name,
        namespaces,
        attributes,
    })
}

/// Split `prefix:local`. Both parts must be non-empty when a colon is present.
fn split_name(qname: &str) -> Result<(Option<&str>, &str)> {
    match qname.split_once(':') {
        Some((prefix, local)) if prefix.is_empty() || local.is_empty() => Err(Error::BadColon {
            qname: qname.to_string(),
        }),
        Some((prefix, local)) => Ok((Some(prefix), local)),
        None => Ok((None, qname)),
    }
}

fn resolve(prefix: &str, own: &XmlNamespaces, parent: Option<&XmlNamespaces>) -> Option<String> {
    own.uri_for_prefix(prefix)
        .or_else(|| parent.and_then(|p| p.uri_for_prefix(prefix)))
        .or_else(|| (prefix == "xml").then_some(XML_NAMESPACE))
        .map(str::to_string)
}

fn reserved(prefix: &str, uri: &str) -> Error {
    Error::ReservedPrefix {
        prefix: prefix.to_string(),
        uri: uri.to_string(),
    }
}

fn unbound(prefix: &str, qname: &str) -> Error {
    Error::UnboundPrefix {
        prefix: prefix.to_string(),
        qname: qname.to_string(),
    }
}
