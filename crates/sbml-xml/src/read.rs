//! Typed reads of attribute values.
//!
//! Every typed read follows the same protocol, whatever the target type:
//!
//! 1. Resolve the key to an entry. No entry means *missing*.
//! 2. For non-string types, trim XML whitespace. An empty result also counts
//!    as missing.
//! 3. Lex the trimmed text with the type's rules. Failure is a *type
//!    mismatch*.
//!
//! [`XmlAttributes::read`] reports the outcome as a `Result` and never logs.
//! [`XmlAttributes::read_into`] wraps it: on success it assigns the output and
//! returns true; on a mismatch it logs [`XmlAttributeTypeMismatch`]; on a
//! missing *required* attribute it logs [`MissingXmlRequiredAttribute`].
//!
//! Number parsing never consults the process locale: `"3.31"` is three point
//! three one everywhere, and `"3,31"` is always a mismatch.
//!
//! [`XmlAttributeTypeMismatch`]: sbml_error_log::XmlErrorCode::XmlAttributeTypeMismatch
//! [`MissingXmlRequiredAttribute`]: sbml_error_log::XmlErrorCode::MissingXmlRequiredAttribute

use std::fmt;

use sbml_error_log::{DiagnosticSink, XmlError, XmlErrorCode};

use crate::attributes::XmlAttributes;
use crate::triple::XmlTriple;

/// The datatype family named in a type-mismatch diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Boolean,
    Double,
    Integer,
    String,
}

impl DataType {
    fn requirement(self) -> &'static str {
        match self {
            DataType::Boolean => {
                "must have a value of either \"true\" or \"false\" (all lowercase).  \
                 The numbers \"1\" (true) and \"0\" (false) are also allowed, but not \
                 preferred.  For more information, see: \
                 http://www.w3.org/TR/xmlschema-2/#boolean."
            }
            DataType::Double => {
                "must be a double (decimal number).  To represent infinity use \"INF\", \
                 negative infinity use \"-INF\", and not-a-number use \"NaN\".  For more \
                 information, see: http://www.w3.org/TR/xmlschema-2/#double."
            }
            DataType::Integer => {
                "must be an integer (whole number).  For more information, see: \
                 http://www.w3.org/TR/xmlschema-2/#integer."
            }
            DataType::String => "must be a string.",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataType::Boolean => "boolean",
            DataType::Double => "double",
            DataType::Integer => "integer",
            DataType::String => "string",
        };
        f.write_str(s)
    }
}

/// Result of lexing one raw attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexed<T> {
    Value(T),
    /// Nothing left after trimming.
    Empty,
    Mismatch,
}

/// A type that attribute values can be read into.
///
/// Implemented for `bool`, `f64`, `i64`, `i32`, `u32` and `String`.
pub trait AttributeValue: Sized {
    const DATA_TYPE: DataType;

    /// Lex a raw (untrimmed) attribute value.
    fn lex(raw: &str) -> Lexed<Self>;
}

/// Trim the XML whitespace characters (space, tab, CR, LF).
fn trim_xml(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

fn lex_trimmed<T>(raw: &str, f: impl FnOnce(&str) -> Option<T>) -> Lexed<T> {
    let trimmed = trim_xml(raw);
    if trimmed.is_empty() {
        return Lexed::Empty;
    }
    match f(trimmed) {
        Some(value) => Lexed::Value(value),
        None => Lexed::Mismatch,
    }
}

impl AttributeValue for bool {
    const DATA_TYPE: DataType = DataType::Boolean;

    fn lex(raw: &str) -> Lexed<Self> {
        lex_trimmed(raw, |s| match s {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        })
    }
}

/// Is `s` a decimal floating-point literal: `[+-]? (d+ [. d*] | . d+) ([eE] [+-]? d+)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut mantissa = digits(&mut i);
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        mantissa += digits(&mut i);
    }
    if mantissa == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

impl AttributeValue for f64 {
    const DATA_TYPE: DataType = DataType::Double;

    /// Decimal literals plus the exact tokens `INF`, `-INF` and `NaN`.
    ///
    /// Literals that overflow to infinity are a mismatch. Literals that
    /// underflow are accepted as the nearest representable value, subnormal
    /// or zero (`1e-400` reads as `0.0`).
    fn lex(raw: &str) -> Lexed<Self> {
        lex_trimmed(raw, |s| match s {
            "INF" => Some(f64::INFINITY),
            "-INF" => Some(f64::NEG_INFINITY),
            "NaN" => Some(f64::NAN),
            _ if is_decimal_literal(s) => s.parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        })
    }
}

impl AttributeValue for i64 {
    const DATA_TYPE: DataType = DataType::Integer;

    fn lex(raw: &str) -> Lexed<Self> {
        lex_trimmed(raw, |s| s.parse::<i64>().ok())
    }
}

impl AttributeValue for i32 {
    const DATA_TYPE: DataType = DataType::Integer;

    /// Out-of-range values are narrowed, not rejected.
    fn lex(raw: &str) -> Lexed<Self> {
        match i64::lex(raw) {
            Lexed::Value(v) => Lexed::Value(v as i32),
            Lexed::Empty => Lexed::Empty,
            Lexed::Mismatch => Lexed::Mismatch,
        }
    }
}

impl AttributeValue for u32 {
    const DATA_TYPE: DataType = DataType::Integer;

    /// Negative values are a mismatch; large ones are narrowed.
    fn lex(raw: &str) -> Lexed<Self> {
        match i64::lex(raw) {
            Lexed::Value(v) if v >= 0 => Lexed::Value(v as u32),
            Lexed::Value(_) | Lexed::Mismatch => Lexed::Mismatch,
            Lexed::Empty => Lexed::Empty,
        }
    }
}

impl AttributeValue for String {
    const DATA_TYPE: DataType = DataType::String;

    /// Taken verbatim, including surrounding whitespace and the empty string.
    fn lex(raw: &str) -> Lexed<Self> {
        Lexed::Value(raw.to_string())
    }
}

/// Which attribute a typed read targets.
#[derive(Debug, Clone, Copy)]
pub enum AttributeKey<'a> {
    /// A position, with the name to use in diagnostics.
    Index { index: usize, name: &'a str },
    /// The first attribute with this local name, in any namespace.
    Name(&'a str),
    /// The attribute with this local name and namespace URI.
    Triple(&'a XmlTriple),
}

impl AttributeKey<'_> {
    fn resolve(&self, attrs: &XmlAttributes) -> Option<usize> {
        match *self {
            AttributeKey::Index { index, .. } => attrs.has_attribute_at(index).then_some(index),
            AttributeKey::Name(name) => attrs.index_of(name),
            AttributeKey::Triple(triple) => attrs.index_of_triple(triple),
        }
    }

    /// The name used in diagnostic messages.
    pub fn display_name(&self) -> String {
        match *self {
            AttributeKey::Index { name, .. } | AttributeKey::Name(name) => name.to_string(),
            AttributeKey::Triple(triple) => triple.prefixed_name(),
        }
    }
}

impl<'a> From<&'a str> for AttributeKey<'a> {
    fn from(name: &'a str) -> Self {
        AttributeKey::Name(name)
    }
}

impl<'a> From<&'a XmlTriple> for AttributeKey<'a> {
    fn from(triple: &'a XmlTriple) -> Self {
        AttributeKey::Triple(triple)
    }
}

impl<'a> From<(usize, &'a str)> for AttributeKey<'a> {
    fn from((index, name): (usize, &'a str)) -> Self {
        AttributeKey::Index { index, name }
    }
}

/// Per-read settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Log a missing-attribute diagnostic when the key has no entry.
    pub required: bool,
    /// Line reported in diagnostics.
    pub line: u32,
    /// Column reported in diagnostics.
    pub column: u32,
}

impl ReadOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

/// Why a typed read produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailure {
    /// No entry, or a non-string value that was empty after trimming.
    Missing,
    /// The value does not lex as the requested type.
    TypeMismatch(DataType),
}

impl XmlAttributes {
    /// Read the value at `key` as `T`, without logging anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sbml_xml::{ReadFailure, XmlAttributes};
    ///
    /// let mut attrs = XmlAttributes::new();
    /// attrs.add("size", " 2.5 ").unwrap();
    ///
    /// assert_eq!(attrs.read::<f64>("size"), Ok(2.5));
    /// assert_eq!(attrs.read::<i64>("nope"), Err(ReadFailure::Missing));
    /// ```
    pub fn read<'k, T: AttributeValue>(
        &self,
        key: impl Into<AttributeKey<'k>>,
    ) -> Result<T, ReadFailure> {
        let key = key.into();
        let index = key.resolve(self).ok_or(ReadFailure::Missing)?;

        match T::lex(self.value_at(index)) {
            Lexed::Value(value) => Ok(value),
            Lexed::Empty => Err(ReadFailure::Missing),
            Lexed::Mismatch => Err(ReadFailure::TypeMismatch(T::DATA_TYPE)),
        }
    }

    /// Read the value at `key` into `value`, logging problems.
    ///
    /// Returns true and assigns `value` only on success; otherwise `value` is
    /// left untouched. Diagnostics go to `log` when given, else to the log
    /// attached with [`set_error_log`](Self::set_error_log), else nowhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sbml_error_log::XmlErrorLog;
    /// use sbml_xml::{ReadOptions, XmlAttributes};
    ///
    /// let mut attrs = XmlAttributes::new();
    /// attrs.add("constant", "yes").unwrap();
    ///
    /// let mut log = XmlErrorLog::new();
    /// let mut constant = false;
    /// let ok = attrs.read_into("constant", &mut constant, Some(&mut log), ReadOptions::default());
    ///
    /// assert!(!ok);
    /// assert_eq!(log.num_errors(), 1);
    /// ```
    pub fn read_into<'k, T: AttributeValue>(
        &self,
        key: impl Into<AttributeKey<'k>>,
        value: &mut T,
        log: Option<&mut dyn DiagnosticSink>,
        options: ReadOptions,
    ) -> bool {
        let key = key.into();

        let error = match self.read::<T>(key) {
            Ok(parsed) => {
                *value = parsed;
                return true;
            }
            Err(ReadFailure::TypeMismatch(data_type)) => {
                self.attribute_type_error(&key.display_name(), data_type, options)
            }
            Err(ReadFailure::Missing) if options.required => {
                self.attribute_required_error(&key.display_name(), options)
            }
            Err(ReadFailure::Missing) => return false,
        };

        if self.can_log(log.is_some()) {
            tracing::debug!(
                element = self.element_name(),
                attribute = %key.display_name(),
                code = error.code.id(),
                "Attribute read failed"
            );
        }
        self.log_error(log, error);
        false
    }

    fn element_prefix(&self) -> String {
        if self.element_name().is_empty() {
            String::new()
        } else {
            format!("{} ", self.element_name())
        }
    }

    fn attribute_type_error(&self, name: &str, data_type: DataType, options: ReadOptions) -> XmlError {
        let message = format!(
            "The {}{} attribute {}",
            self.element_prefix(),
            name,
            data_type.requirement()
        );
        XmlError::new(
            XmlErrorCode::XmlAttributeTypeMismatch,
            message,
            options.line,
            options.column,
        )
    }

    fn attribute_required_error(&self, name: &str, options: ReadOptions) -> XmlError {
        let message = format!("The {}attribute '{}' is required.", self.element_prefix(), name);
        XmlError::new(
            XmlErrorCode::MissingXmlRequiredAttribute,
            message,
            options.line,
            options.column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbml_error_log::XmlErrorLog;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn attrs_with(name: &str, value: &str) -> XmlAttributes {
        let mut attrs = XmlAttributes::new();
        attrs.add(name, value).unwrap();
        attrs
    }

    fn read_logged<T: AttributeValue>(
        attrs: &XmlAttributes,
        name: &str,
        value: &mut T,
        required: bool,
    ) -> (bool, XmlErrorLog) {
        let mut log = XmlErrorLog::new();
        let options = ReadOptions {
            required,
            ..ReadOptions::default()
        };
        let ok = attrs.read_into(name, value, Some(&mut log), options);
        (ok, log)
    }

    // ==================== Lexer Tests ====================

    #[test]
    fn test_bool_tokens() {
        assert_eq!(bool::lex("true"), Lexed::Value(true));
        assert_eq!(bool::lex("false"), Lexed::Value(false));
        assert_eq!(bool::lex("1"), Lexed::Value(true));
        assert_eq!(bool::lex("0"), Lexed::Value(false));
        assert_eq!(bool::lex(" \ttrue\n"), Lexed::Value(true));
        assert_eq!(bool::lex("True"), Lexed::Mismatch);
        assert_eq!(bool::lex("yes"), Lexed::Mismatch);
        assert_eq!(bool::lex(""), Lexed::Empty);
        assert_eq!(bool::lex("   "), Lexed::Empty);
    }

    #[test]
    fn test_double_special_tokens() {
        assert_eq!(f64::lex("INF"), Lexed::Value(f64::INFINITY));
        assert_eq!(f64::lex(" -INF "), Lexed::Value(f64::NEG_INFINITY));
        assert!(matches!(f64::lex("NaN"), Lexed::Value(v) if v.is_nan()));
        assert_eq!(f64::lex("inf"), Lexed::Mismatch);
        assert_eq!(f64::lex("nan"), Lexed::Mismatch);
        assert_eq!(f64::lex("+INF"), Lexed::Mismatch);
        assert_eq!(f64::lex("Infinity"), Lexed::Mismatch);
    }

    #[test]
    fn test_double_literals() {
        assert_eq!(f64::lex("3.31"), Lexed::Value(3.31));
        assert_eq!(f64::lex("-0.5"), Lexed::Value(-0.5));
        assert_eq!(f64::lex("+2"), Lexed::Value(2.0));
        assert_eq!(f64::lex(".5"), Lexed::Value(0.5));
        assert_eq!(f64::lex("5."), Lexed::Value(5.0));
        assert_eq!(f64::lex("1e3"), Lexed::Value(1000.0));
        assert_eq!(f64::lex("6.022E+23"), Lexed::Value(6.022e23));
        assert_eq!(f64::lex("1e-2"), Lexed::Value(0.01));
    }

    #[test]
    fn test_double_rejects_partial_and_locale_forms() {
        // str::parse never reads the process locale, so no locale switch is needed
        assert_eq!(f64::lex("3,31"), Lexed::Mismatch);
        assert_eq!(f64::lex("2.3abc"), Lexed::Mismatch);
        assert_eq!(f64::lex("1e"), Lexed::Mismatch);
        assert_eq!(f64::lex("."), Lexed::Mismatch);
        assert_eq!(f64::lex("1 2"), Lexed::Mismatch);
        assert_eq!(f64::lex("0x10"), Lexed::Mismatch);
        assert_eq!(f64::lex("1e999"), Lexed::Mismatch);
    }

    #[test]
    fn test_double_underflow_is_accepted() {
        assert_eq!(f64::lex("1e-400"), Lexed::Value(0.0));
        assert_eq!(f64::lex("4.9e-324"), Lexed::Value(5e-324));
    }

    #[test]
    fn test_long_and_int() {
        assert_eq!(i64::lex(" -5 "), Lexed::Value(-5));
        assert_eq!(i64::lex("+7"), Lexed::Value(7));
        assert_eq!(i64::lex("12abc"), Lexed::Mismatch);
        assert_eq!(i64::lex("1.0"), Lexed::Mismatch);
        assert_eq!(i64::lex("99999999999999999999"), Lexed::Mismatch);

        // narrowing, not rejection
        assert_eq!(i32::lex("4294967297"), Lexed::Value(1));
        assert_eq!(i32::lex("-3"), Lexed::Value(-3));
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(u32::lex("42"), Lexed::Value(42));
        assert_eq!(u32::lex("0"), Lexed::Value(0));
        assert_eq!(u32::lex("-5"), Lexed::Mismatch);
        assert_eq!(u32::lex("x"), Lexed::Mismatch);
        assert_eq!(u32::lex(""), Lexed::Empty);
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(String::lex("  padded "), Lexed::Value("  padded ".to_string()));
        assert_eq!(String::lex(""), Lexed::Value(String::new()));
    }

    // ==================== Protocol Tests ====================

    #[test]
    fn test_read_double_success() {
        let attrs = attrs_with("value", "2.3");
        let mut x = 0.0;
        let (ok, log) = read_logged(&attrs, "value", &mut x, false);
        assert!(ok);
        assert_eq!(x, 2.3);
        assert!(log.is_empty());
    }

    #[test]
    fn test_missing_not_required_logs_nothing() {
        let attrs = attrs_with("value", "2.3");
        let mut x = 1.5;
        let (ok, log) = read_logged(&attrs, "missing", &mut x, false);
        assert!(!ok);
        assert_eq!(x, 1.5);
        assert!(log.is_empty());
    }

    #[test]
    fn test_missing_required_logs_once() {
        let attrs = attrs_with("value", "2.3");
        let mut x = 1.5;
        let (ok, log) = read_logged(&attrs, "missing", &mut x, true);
        assert!(!ok);
        assert_eq!(x, 1.5);
        assert_eq!(log.num_errors(), 1);
        assert_eq!(log.errors()[0].code, XmlErrorCode::MissingXmlRequiredAttribute);
        assert!(log.errors()[0].message.ends_with("The attribute 'missing' is required."));
    }

    #[test]
    fn test_mismatch_logged_regardless_of_required() {
        let attrs = attrs_with("constant", "yes");
        let mut b = true;
        for required in [false, true] {
            let (ok, log) = read_logged(&attrs, "constant", &mut b, required);
            assert!(!ok);
            assert!(b);
            assert_eq!(log.num_errors(), 1);
            assert_eq!(log.errors()[0].code, XmlErrorCode::XmlAttributeTypeMismatch);
        }
    }

    #[test]
    fn test_empty_bool_is_missing() {
        let attrs = attrs_with("constant", "  ");
        let mut b = true;

        let (ok, log) = read_logged(&attrs, "constant", &mut b, false);
        assert!(!ok);
        assert!(log.is_empty());

        let (ok, log) = read_logged(&attrs, "constant", &mut b, true);
        assert!(!ok);
        assert_eq!(log.errors()[0].code, XmlErrorCode::MissingXmlRequiredAttribute);
        assert!(b);
    }

    #[test]
    fn test_unsigned_rejects_negative_but_long_accepts() {
        let attrs = attrs_with("n", "-5");

        let mut u: u32 = 9;
        let (ok, log) = read_logged(&attrs, "n", &mut u, false);
        assert!(!ok);
        assert_eq!(u, 9);
        assert_eq!(log.errors()[0].code, XmlErrorCode::XmlAttributeTypeMismatch);

        let mut l: i64 = 0;
        let (ok, log) = read_logged(&attrs, "n", &mut l, false);
        assert!(ok);
        assert_eq!(l, -5);
        assert!(log.is_empty());
    }

    #[test]
    fn test_string_read_of_empty_value_succeeds() {
        let attrs = attrs_with("name", "");
        let mut s = "old".to_string();
        let (ok, log) = read_logged(&attrs, "name", &mut s, true);
        assert!(ok);
        assert_eq!(s, "");
        assert!(log.is_empty());

        let (ok, log) = read_logged(&attrs, "other", &mut s, true);
        assert!(!ok);
        assert_eq!(log.errors()[0].code, XmlErrorCode::MissingXmlRequiredAttribute);
    }

    #[test]
    fn test_type_mismatch_message_names_element_and_attribute() {
        let mut attrs = attrs_with("size", "big");
        attrs.set_element_name("compartment");
        let mut x = 0.0;
        let (_, log) = read_logged(&attrs, "size", &mut x, false);

        let message = &log.errors()[0].message;
        assert!(message.contains("The compartment size attribute must be a double"));
        assert!(message.contains("\"INF\""));
    }

    #[test]
    fn test_integer_and_boolean_messages() {
        let mut attrs = XmlAttributes::new();
        attrs.add("exponent", "two").unwrap();
        attrs.add("constant", "maybe").unwrap();

        let mut i: i32 = 0;
        let (_, log) = read_logged(&attrs, "exponent", &mut i, false);
        assert!(log.errors()[0].message.contains("The exponent attribute must be an integer"));

        let mut b = false;
        let (_, log) = read_logged(&attrs, "constant", &mut b, false);
        assert!(log.errors()[0].message.contains("either \"true\" or \"false\""));
    }

    #[test]
    fn test_required_message_with_element_name() {
        let mut attrs = XmlAttributes::new();
        attrs.set_element_name("species");
        let mut s = String::new();
        let (_, log) = read_logged(&attrs, "compartment", &mut s, true);
        assert!(
            log.errors()[0]
                .message
                .ends_with("The species attribute 'compartment' is required.")
        );
    }

    #[test]
    fn test_line_and_column_are_reported() {
        let attrs = XmlAttributes::new();
        let mut log = XmlErrorLog::new();
        let mut x = 0i64;
        attrs.read_into("n", &mut x, Some(&mut log), ReadOptions::required().at(12, 4));

        assert_eq!(log.errors()[0].line, 12);
        assert_eq!(log.errors()[0].column, 4);
    }

    #[test]
    fn test_index_key() {
        let mut attrs = XmlAttributes::new();
        attrs.add("a", "1").unwrap();
        attrs.add("b", "oops").unwrap();

        let mut x = 0i64;
        let mut log = XmlErrorLog::new();
        assert!(attrs.read_into((0usize, "a"), &mut x, Some(&mut log), ReadOptions::default()));
        assert_eq!(x, 1);

        assert!(!attrs.read_into((1usize, "bee"), &mut x, Some(&mut log), ReadOptions::default()));
        assert!(log.errors()[0].message.contains("The bee attribute"));

        assert!(!attrs.read_into((5usize, "gone"), &mut x, Some(&mut log), ReadOptions::required()));
        assert!(log.errors()[1].message.ends_with("attribute 'gone' is required."));
    }

    #[test]
    fn test_triple_key() {
        let mut attrs = XmlAttributes::new();
        attrs.add_ns("x", "1", "http://a", "p").unwrap();
        attrs.add_ns("x", "oops", "http://b", "q").unwrap();

        let a = XmlTriple::new("x", "http://a", "p");
        let b = XmlTriple::new("x", "http://b", "q");

        assert_eq!(attrs.read::<u32>(&a), Ok(1));
        assert_eq!(attrs.read::<u32>(&b), Err(ReadFailure::TypeMismatch(DataType::Integer)));

        let mut log = XmlErrorLog::new();
        let mut v = 0u32;
        attrs.read_into(&b, &mut v, Some(&mut log), ReadOptions::default());
        assert!(log.errors()[0].message.contains("The q:x attribute"));
    }

    #[test]
    fn test_no_sink_is_silent() {
        let attrs = attrs_with("n", "bad");
        let mut x = 0i64;
        assert!(!attrs.read_into("n", &mut x, None, ReadOptions::required()));
    }

    #[test]
    fn test_attached_log_is_used() {
        let log = Rc::new(RefCell::new(XmlErrorLog::new()));
        let mut attrs = attrs_with("n", "bad");
        attrs.set_error_log(&log);

        let mut x = 0i64;
        assert!(!attrs.read_into("n", &mut x, None, ReadOptions::default()));
        assert!(!attrs.read_into("m", &mut x, None, ReadOptions::required()));

        let log = log.borrow();
        assert_eq!(log.num_errors(), 2);
        assert_eq!(log.errors()[0].code, XmlErrorCode::XmlAttributeTypeMismatch);
        assert_eq!(log.errors()[1].code, XmlErrorCode::MissingXmlRequiredAttribute);
    }

    #[test]
    fn test_decimal_literal_grammar() {
        for ok in ["0", "1.", ".1", "-1.5e10", "+3E-2", "007"] {
            assert!(is_decimal_literal(ok), "{ok}");
        }
        for bad in ["", "+", "-.", "e5", "1e+", "1.2.3", "--1", "1_000"] {
            assert!(!is_decimal_literal(bad), "{bad}");
        }
    }
}
