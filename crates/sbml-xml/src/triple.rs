//! Qualified names: local name, namespace URI and prefix.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The name of an attribute, element or namespace declaration.
///
/// Identity is the pair (local name, namespace URI). The prefix only matters
/// when the name is written back out, so two triples that differ only in
/// prefix compare equal.
///
/// No lexical validation happens here; any three strings are accepted.
///
/// # Example
///
/// ```rust
/// use sbml_xml::XmlTriple;
///
/// let a = XmlTriple::new("id", "http://www.sbml.org/sbml/level3/version1/core", "");
/// let b = XmlTriple::new("id", "http://www.sbml.org/sbml/level3/version1/core", "sbml");
///
/// assert_eq!(a, b);
/// assert_eq!(b.prefixed_name(), "sbml:id");
/// ```
#[derive(Debug, Clone, Default, Eq)]
pub struct XmlTriple {
    name: String,
    uri: String,
    prefix: String,
}

impl XmlTriple {
    pub fn new(name: impl Into<String>, uri: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            prefix: prefix.into(),
        }
    }

    /// A triple with no namespace and no prefix.
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(name, "", "")
    }

    /// Split a `uri<sep>name[<sep>prefix]` string.
    ///
    /// A string without `sep` is taken to be just a local name.
    pub fn from_triplet(triplet: &str, sep: char) -> Self {
        let mut parts = triplet.splitn(3, sep);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(uri), Some(name), prefix) => Self::new(name, uri, prefix.unwrap_or("")),
            _ => Self::local(triplet),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `prefix:name`, or just `name` when there is no prefix.
    pub fn prefixed_name(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.prefix, self.name)
        }
    }

    /// True when all three parts are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.uri.is_empty() && self.prefix.is_empty()
    }

    /// Does this triple name the attribute `name` in namespace `uri`?
    pub fn matches(&self, name: &str, uri: &str) -> bool {
        self.name == name && self.uri == uri
    }
}

impl PartialEq for XmlTriple {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name, &other.uri)
    }
}

impl Hash for XmlTriple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.uri.hash(state);
    }
}

impl fmt::Display for XmlTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefix.is_empty() {
            write!(f, "{}:", self.prefix)?;
        }
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let t = XmlTriple::new("annotation", "http://example.org/ns", "ex");
        assert_eq!(t.name(), "annotation");
        assert_eq!(t.uri(), "http://example.org/ns");
        assert_eq!(t.prefix(), "ex");
        assert!(!t.is_empty());
    }

    #[test]
    fn test_prefixed_name() {
        assert_eq!(XmlTriple::local("id").prefixed_name(), "id");
        assert_eq!(
            XmlTriple::new("resource", "http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf")
                .prefixed_name(),
            "rdf:resource"
        );
    }

    #[test]
    fn test_equality_ignores_prefix() {
        let a = XmlTriple::new("x", "http://a", "p");
        let b = XmlTriple::new("x", "http://a", "q");
        let c = XmlTriple::new("x", "http://b", "p");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, XmlTriple::local("x"));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(XmlTriple::new("x", "http://a", "p"));
        set.insert(XmlTriple::new("x", "http://a", "q"));
        set.insert(XmlTriple::new("x", "http://b", "p"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(XmlTriple::default().is_empty());
        assert!(!XmlTriple::new("", "", "p").is_empty());
    }

    #[test]
    fn test_from_triplet() {
        let t = XmlTriple::from_triplet("http://www.w3.org/1999/xhtml html h", ' ');
        assert_eq!(t.uri(), "http://www.w3.org/1999/xhtml");
        assert_eq!(t.name(), "html");
        assert_eq!(t.prefix(), "h");

        let t = XmlTriple::from_triplet("http://a|x", '|');
        assert_eq!(t.uri(), "http://a");
        assert_eq!(t.name(), "x");
        assert_eq!(t.prefix(), "");

        let t = XmlTriple::from_triplet("plain", ' ');
        assert_eq!(t.name(), "plain");
        assert_eq!(t.uri(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(XmlTriple::new("lang", "", "xml").to_string(), "xml:lang");
        assert_eq!(XmlTriple::local("units").to_string(), "units");
    }
}
