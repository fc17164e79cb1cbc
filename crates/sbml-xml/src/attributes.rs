//! Ordered attribute sets keyed by qualified name.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sbml_error_log::{DiagnosticSink, XmlError};

use crate::error::OperationError;
use crate::triple::XmlTriple;

/// One attribute: its qualified name and raw string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    triple: XmlTriple,
    value: String,
}

impl XmlAttribute {
    pub fn new(triple: XmlTriple, value: impl Into<String>) -> Self {
        Self {
            triple,
            value: value.into(),
        }
    }

    pub fn triple(&self) -> &XmlTriple {
        &self.triple
    }

    pub fn name(&self) -> &str {
        self.triple.name()
    }

    pub fn uri(&self) -> &str {
        self.triple.uri()
    }

    pub fn prefix(&self) -> &str {
        self.triple.prefix()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The attributes of one XML start tag.
///
/// Entries keep their insertion order, which is the order they are written
/// back out in. At most one entry exists per (local name, namespace URI);
/// [`add`](Self::add) on an existing pair overwrites its value and prefix in
/// place. [`add_resource`](Self::add_resource) is the one operation that
/// appends duplicates.
///
/// Lookups are linear scans in stored order.
///
/// Positional accessors never fail: an out-of-range index yields an empty
/// string, so pair them with [`has_attribute_at`](Self::has_attribute_at)
/// when "absent" and "empty" must be told apart.
///
/// # Example
///
/// ```rust
/// use sbml_xml::XmlAttributes;
///
/// let mut attrs = XmlAttributes::new();
/// attrs.add("id", "c").unwrap();
/// attrs.add("units", "second").unwrap();
/// attrs.add("id", "cell").unwrap();
///
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.name_at(0), "id");
/// assert_eq!(attrs.value("id"), "cell");
/// assert_eq!(attrs.value_at(7), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmlAttributes {
    entries: Vec<XmlAttribute>,

    /// Name of the owning element, used only in diagnostic messages.
    element_name: String,

    /// Non-owning handle to a sink supplied by the caller.
    error_log: Option<Weak<RefCell<dyn DiagnosticSink>>>,
}

impl XmlAttributes {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            element_name: String::new(),
            error_log: None,
        }
    }

    /// Add an attribute with no namespace.
    pub fn add(&mut self, name: &str, value: &str) -> Result<(), OperationError> {
        self.add_ns(name, value, "", "")
    }

    /// Add an attribute, overwriting any entry with the same `name` and `uri`.
    ///
    /// An overwritten entry keeps its position but takes the new prefix.
    pub fn add_ns(
        &mut self,
        name: &str,
        value: &str,
        uri: &str,
        prefix: &str,
    ) -> Result<(), OperationError> {
        self.insert(XmlTriple::new(name, uri, prefix), value)
    }

    pub fn add_triple(&mut self, triple: &XmlTriple, value: &str) -> Result<(), OperationError> {
        self.insert(triple.clone(), value)
    }

    fn insert(&mut self, triple: XmlTriple, value: &str) -> Result<(), OperationError> {
        if triple.name().is_empty() {
            return Err(OperationError::InvalidObject);
        }

        match self.index_of_triple(&triple) {
            Some(index) => {
                tracing::trace!(
                    name = triple.name(),
                    uri = triple.uri(),
                    index,
                    "Overwriting attribute"
                );
                self.entries[index] = XmlAttribute::new(triple, value);
            }
            None => self.entries.push(XmlAttribute::new(triple, value)),
        }
        Ok(())
    }

    /// Append an attribute even if one with the same name already exists.
    ///
    /// Used for repeated attributes such as several `rdf:resource` values.
    pub fn add_resource(&mut self, name: &str, value: &str) -> Result<(), OperationError> {
        if name.is_empty() {
            return Err(OperationError::InvalidObject);
        }
        self.entries
            .push(XmlAttribute::new(XmlTriple::local(name), value));
        Ok(())
    }

    /// Remove the entry at `index`.
    pub fn remove_resource(&mut self, index: usize) -> Result<(), OperationError> {
        if index >= self.entries.len() {
            return Err(OperationError::IndexExceedsSize);
        }
        let removed = self.entries.remove(index);
        tracing::trace!(name = removed.name(), index, "Removed attribute");
        Ok(())
    }

    /// Remove the un-namespaced attribute `name`.
    pub fn remove(&mut self, name: &str) -> Result<(), OperationError> {
        self.remove_ns(name, "")
    }

    pub fn remove_ns(&mut self, name: &str, uri: &str) -> Result<(), OperationError> {
        let index = self
            .index_of_ns(name, uri)
            .ok_or(OperationError::IndexExceedsSize)?;
        self.remove_resource(index)
    }

    pub fn remove_triple(&mut self, triple: &XmlTriple) -> Result<(), OperationError> {
        self.remove_ns(triple.name(), triple.uri())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Position of the first entry whose local name is `name`, in any namespace.
    ///
    /// When several namespaces share the local name, the smallest index wins.
    /// The tie-break is kept for compatibility; it is an open ambiguity, not a
    /// contract. Prefer [`index_of_ns`](Self::index_of_ns) when the namespace
    /// is known.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|a| a.name() == name)
    }

    pub fn index_of_ns(&self, name: &str, uri: &str) -> Option<usize> {
        self.entries.iter().position(|a| a.triple.matches(name, uri))
    }

    pub fn index_of_triple(&self, triple: &XmlTriple) -> Option<usize> {
        self.index_of_ns(triple.name(), triple.uri())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Synonym for [`len`](Self::len).
    pub fn num_attributes(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&XmlAttribute> {
        self.entries.get(index)
    }

    pub fn name_at(&self, index: usize) -> &str {
        self.get(index).map_or("", XmlAttribute::name)
    }

    pub fn prefix_at(&self, index: usize) -> &str {
        self.get(index).map_or("", XmlAttribute::prefix)
    }

    pub fn prefixed_name_at(&self, index: usize) -> String {
        self.get(index)
            .map(|a| a.triple.prefixed_name())
            .unwrap_or_default()
    }

    pub fn uri_at(&self, index: usize) -> &str {
        self.get(index).map_or("", XmlAttribute::uri)
    }

    pub fn value_at(&self, index: usize) -> &str {
        self.get(index).map_or("", XmlAttribute::value)
    }

    pub fn triple_at(&self, index: usize) -> Option<&XmlTriple> {
        self.get(index).map(XmlAttribute::triple)
    }

    /// Value of the first attribute named `name` in any namespace, or `""`.
    pub fn value(&self, name: &str) -> &str {
        self.index_of(name).map_or("", |i| self.value_at(i))
    }

    pub fn value_ns(&self, name: &str, uri: &str) -> &str {
        self.index_of_ns(name, uri).map_or("", |i| self.value_at(i))
    }

    pub fn value_triple(&self, triple: &XmlTriple) -> &str {
        self.index_of_triple(triple).map_or("", |i| self.value_at(i))
    }

    pub fn has_attribute_at(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    /// Is there an un-namespaced attribute `name`?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.has_attribute_ns(name, "")
    }

    pub fn has_attribute_ns(&self, name: &str, uri: &str) -> bool {
        self.index_of_ns(name, uri).is_some()
    }

    pub fn has_attribute_triple(&self, triple: &XmlTriple) -> bool {
        self.index_of_triple(triple).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, XmlAttribute> {
        self.entries.iter()
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn set_element_name(&mut self, name: impl Into<String>) {
        self.element_name = name.into();
    }

    /// Attach a log that typed reads fall back to when none is passed.
    ///
    /// Only a weak handle is kept: the set never keeps the log alive, and a
    /// log that has been dropped is treated as absent.
    pub fn set_error_log<S: DiagnosticSink + 'static>(&mut self, log: &Rc<RefCell<S>>) {
        let log: Rc<RefCell<dyn DiagnosticSink>> = log.clone();
        self.error_log = Some(Rc::downgrade(&log));
    }

    pub fn clear_error_log(&mut self) {
        self.error_log = None;
    }

    /// True when an attached log is set and still alive.
    pub fn has_error_log(&self) -> bool {
        self.error_log
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Deliver `error` to the explicit sink, else to the attached log.
    ///
    /// Returns false when no sink was reachable.
    pub(crate) fn log_error(
        &self,
        explicit: Option<&mut dyn DiagnosticSink>,
        error: XmlError,
    ) -> bool {
        if let Some(sink) = explicit {
            sink.add(error);
            return true;
        }

        let Some(log) = self.error_log.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        match log.try_borrow_mut() {
            Ok(mut sink) => {
                sink.add(error);
                true
            }
            Err(_) => {
                tracing::warn!(
                    code = error.code.id(),
                    "Attached error log is already borrowed; diagnostic dropped"
                );
                false
            }
        }
    }

    /// Whether a diagnostic would reach any sink.
    pub(crate) fn can_log(&self, explicit: bool) -> bool {
        explicit || self.has_error_log()
    }
}

impl PartialEq for XmlAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a XmlAttributes {
    type Item = &'a XmlAttribute;
    type IntoIter = std::slice::Iter<'a, XmlAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect with the [`add`](XmlAttributes::add_triple) overwrite rule.
/// Entries with an empty local name are skipped.
impl FromIterator<(XmlTriple, String)> for XmlAttributes {
    fn from_iter<I: IntoIterator<Item = (XmlTriple, String)>>(iter: I) -> Self {
        let mut attrs = XmlAttributes::new();
        for (triple, value) in iter {
            let _ = attrs.insert(triple, &value);
        }
        attrs
    }
}
