//! Writing attribute sets back out as text.
//!
//! [`XmlAttributes::write`] walks the set in stored order and makes exactly
//! one [`TextEmitter::write_attribute`] call per entry. Nothing is reordered,
//! filtered or deduplicated here; quoting and escaping belong to the emitter.

use std::convert::Infallible;

use quick_xml::escape::escape;
use quick_xml::events::BytesStart;

use crate::attributes::XmlAttributes;
use crate::triple::XmlTriple;

/// How an attribute name reaches the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeName<'a> {
    /// An attribute without prefix.
    Local(&'a str),
    /// A prefixed attribute, to be rendered `prefix:name`.
    Qualified(&'a XmlTriple),
}

impl AttributeName<'_> {
    /// The name as it appears in markup.
    pub fn qualified(&self) -> String {
        match self {
            AttributeName::Local(name) => name.to_string(),
            AttributeName::Qualified(triple) => triple.prefixed_name(),
        }
    }
}

/// The sink that attribute sets are serialized into.
pub trait TextEmitter {
    type Error;

    fn write_attribute(&mut self, name: AttributeName<'_>, value: &str) -> Result<(), Self::Error>;
}

impl XmlAttributes {
    /// Emit every attribute, in stored order.
    ///
    /// Entries without a prefix are emitted by local name; prefixed entries
    /// are emitted with their full triple.
    pub fn write<E: TextEmitter>(&self, emitter: &mut E) -> Result<(), E::Error> {
        for attr in self {
            let name = if attr.prefix().is_empty() {
                AttributeName::Local(attr.name())
            } else {
                AttributeName::Qualified(attr.triple())
            };
            emitter.write_attribute(name, attr.value())?;
        }
        Ok(())
    }
}

/// Renders attributes as ` name="value"` text, space separated.
///
/// # Example
///
/// ```rust
/// use sbml_xml::{AttributeText, XmlAttributes};
///
/// let mut attrs = XmlAttributes::new();
/// attrs.add("id", "c").unwrap();
/// attrs.add("name", "a < b").unwrap();
///
/// assert_eq!(AttributeText::render(&attrs), r#"id="c" name="a &lt; b""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeText {
    text: String,
}

impl AttributeText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole attribute set.
    pub fn render(attrs: &XmlAttributes) -> String {
        let mut out = AttributeText::new();
        match attrs.write(&mut out) {
            Ok(()) => out.into_string(),
            Err(never) => match never {},
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl TextEmitter for AttributeText {
    type Error = Infallible;

    fn write_attribute(&mut self, name: AttributeName<'_>, value: &str) -> Result<(), Infallible> {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&name.qualified());
        self.text.push_str("=\"");
        self.text.push_str(&escape(value));
        self.text.push('"');
        Ok(())
    }
}

/// Pushes attributes onto a quick-xml start tag.
///
/// # Example
///
/// ```rust
/// use quick_xml::events::BytesStart;
/// use sbml_xml::{StartTagEmitter, XmlAttributes};
///
/// let mut attrs = XmlAttributes::new();
/// attrs.add("id", "c").unwrap();
///
/// let mut start = BytesStart::new("compartment");
/// attrs.write(&mut StartTagEmitter::new(&mut start)).unwrap();
/// assert_eq!(&*start, br#"compartment id="c""#.as_slice());
/// ```
#[derive(Debug)]
pub struct StartTagEmitter<'a, 'b> {
    start: &'a mut BytesStart<'b>,
}

impl<'a, 'b> StartTagEmitter<'a, 'b> {
    pub fn new(start: &'a mut BytesStart<'b>) -> Self {
        Self { start }
    }
}

impl TextEmitter for StartTagEmitter<'_, '_> {
    type Error = Infallible;

    fn write_attribute(&mut self, name: AttributeName<'_>, value: &str) -> Result<(), Infallible> {
        let qname = name.qualified();
        self.start.push_attribute((qname.as_str(), value));
        Ok(())
    }
}
