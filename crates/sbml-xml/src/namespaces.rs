//! Namespace declarations carried by a start tag.

use crate::error::OperationError;
use crate::triple::XmlTriple;
use crate::write::{AttributeName, TextEmitter};

/// The namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// The namespace of `xmlns` declarations themselves.
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// One `xmlns` or `xmlns:prefix` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    prefix: String,
    uri: String,
}

impl NamespaceDecl {
    /// The declared prefix; empty for a default namespace.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Ordered namespace declarations, at most one per prefix.
///
/// # Example
///
/// ```rust
/// use sbml_xml::XmlNamespaces;
///
/// let mut ns = XmlNamespaces::new();
/// ns.add("http://www.sbml.org/sbml/level3/version2/core", "").unwrap();
/// ns.add("http://www.w3.org/1998/Math/MathML", "math").unwrap();
///
/// assert_eq!(ns.uri_for_prefix("math"), Some("http://www.w3.org/1998/Math/MathML"));
/// assert!(ns.has_uri("http://www.sbml.org/sbml/level3/version2/core"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNamespaces {
    decls: Vec<NamespaceDecl>,
}

impl XmlNamespaces {
    pub fn new() -> Self {
        Self { decls: Vec::new() }
    }

    /// Declare `prefix` as bound to `uri`; an empty prefix is the default
    /// namespace. Redeclaring a prefix replaces its URI in place.
    pub fn add(&mut self, uri: &str, prefix: &str) -> Result<(), OperationError> {
        if prefix == "xml" && uri != XML_NAMESPACE {
            return Err(OperationError::InvalidObject);
        }

        match self.index_of_prefix(prefix) {
            Some(index) => self.decls[index].uri = uri.to_string(),
            None => self.decls.push(NamespaceDecl {
                prefix: prefix.to_string(),
                uri: uri.to_string(),
            }),
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<(), OperationError> {
        if index >= self.decls.len() {
            return Err(OperationError::IndexExceedsSize);
        }
        self.decls.remove(index);
        Ok(())
    }

    pub fn remove_prefix(&mut self, prefix: &str) -> Result<(), OperationError> {
        let index = self
            .index_of_prefix(prefix)
            .ok_or(OperationError::IndexExceedsSize)?;
        self.remove(index)
    }

    pub fn clear(&mut self) {
        self.decls.clear();
    }

    pub fn index_of_uri(&self, uri: &str) -> Option<usize> {
        self.decls.iter().position(|d| d.uri == uri)
    }

    pub fn index_of_prefix(&self, prefix: &str) -> Option<usize> {
        self.decls.iter().position(|d| d.prefix == prefix)
    }

    pub fn uri_at(&self, index: usize) -> &str {
        self.decls.get(index).map_or("", NamespaceDecl::uri)
    }

    pub fn prefix_at(&self, index: usize) -> &str {
        self.decls.get(index).map_or("", NamespaceDecl::prefix)
    }

    pub fn uri_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.index_of_prefix(prefix).map(|i| self.uri_at(i))
    }

    /// The prefix of the first declaration of `uri`.
    pub fn prefix_for_uri(&self, uri: &str) -> Option<&str> {
        self.index_of_uri(uri).map(|i| self.prefix_at(i))
    }

    pub fn has_uri(&self, uri: &str) -> bool {
        self.index_of_uri(uri).is_some()
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.index_of_prefix(prefix).is_some()
    }

    /// Is `prefix` bound to exactly `uri`?
    pub fn has_ns(&self, uri: &str, prefix: &str) -> bool {
        self.decls.iter().any(|d| d.uri == uri && d.prefix == prefix)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamespaceDecl> {
        self.decls.iter()
    }

    /// Emit the declarations as `xmlns` attributes, in stored order.
    pub fn write<E: TextEmitter>(&self, emitter: &mut E) -> Result<(), E::Error> {
        for decl in &self.decls {
            if decl.prefix.is_empty() {
                emitter.write_attribute(AttributeName::Local("xmlns"), &decl.uri)?;
            } else {
                let triple = XmlTriple::new(decl.prefix.as_str(), XMLNS_NAMESPACE, "xmlns");
                emitter.write_attribute(AttributeName::Qualified(&triple), &decl.uri)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a XmlNamespaces {
    type Item = &'a NamespaceDecl;
    type IntoIter = std::slice::Iter<'a, NamespaceDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
