// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoded terminal descriptions
//!
//! A [`Catalog`] holds the names and capabilities of one terminal as decoded
//! by [`crate::load`]. Standard capabilities are positional and addressed
//! through the enumerations in [`crate::capabilities`], extended ones are
//! keyed by name in [`ExtendedCapabilities`].

use std::collections::BTreeMap;

use crate::{
    capabilities::{BooleanCapability, NumericCapability, StringCapability},
    evaluate::{EvaluationError, Value, evaluate},
    tokenize::{ParameterToken, SyntaxError, tokenize},
};

/// Kind of a capability
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Boolean,
    Numeric,
    String,
}

/// A decoded capability value
///
/// String values carry the tokens of their parameterized template, extracted
/// once when the catalog is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityValue<T> {
    value: T,
    tokens: Result<Vec<ParameterToken>, SyntaxError>,
}

impl<T> CapabilityValue<T> {
    /// The decoded value
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl CapabilityValue<String> {
    /// Wrap a string capability, tokenizing it if it uses parameters
    ///
    /// A malformed template is kept with its syntax error rather than
    /// rejected, so that one bad string does not make a terminal unusable.
    #[must_use]
    pub fn template(value: String) -> Self {
        let tokens = if value.contains('%') {
            tokenize(&value)
        } else {
            Ok(Vec::new())
        };
        Self { value, tokens }
    }

    /// Tokens of the template, empty for strings without parameters
    pub fn tokens(&self) -> Result<&[ParameterToken], &SyntaxError> {
        self.tokens.as_deref()
    }

    /// Whether the string uses `%` parameters
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !matches!(&self.tokens, Ok(tokens) if tokens.is_empty())
    }

    /// Evaluate the template with the given arguments
    pub fn expand(&self, args: &[Value]) -> Result<String, EvaluationError> {
        match &self.tokens {
            Ok(tokens) => evaluate(&self.value, tokens, args),
            Err(error) => Err(EvaluationError::Syntax(error.clone())),
        }
    }

    /// The value as bytes ready to be sent to the terminal
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        to_bytes(&self.value)
    }
}

/// Non-standard capabilities keyed by name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtendedCapabilities {
    pub(crate) booleans: BTreeMap<String, bool>,
    pub(crate) numerics: BTreeMap<String, i32>,
    pub(crate) strings: BTreeMap<String, CapabilityValue<String>>,
}

impl ExtendedCapabilities {
    /// Whether a capability of any kind has this name
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.kind(name).is_some()
    }

    /// Kind of the capability with this name
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<CapabilityKind> {
        if self.booleans.contains_key(name) {
            Some(CapabilityKind::Boolean)
        } else if self.numerics.contains_key(name) {
            Some(CapabilityKind::Numeric)
        } else if self.strings.contains_key(name) {
            Some(CapabilityKind::String)
        } else {
            None
        }
    }

    /// Names of the capabilities of one kind, sorted
    #[must_use]
    pub fn get_names(&self, kind: CapabilityKind) -> Vec<&str> {
        match kind {
            CapabilityKind::Boolean => self.booleans.keys().map(String::as_str).collect(),
            CapabilityKind::Numeric => self.numerics.keys().map(String::as_str).collect(),
            CapabilityKind::String => self.strings.keys().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        self.booleans.get(name).copied()
    }

    #[must_use]
    pub fn get_numeric(&self, name: &str) -> Option<i32> {
        self.numerics.get(name).copied()
    }

    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<&CapabilityValue<String>> {
        self.strings.get(name)
    }

    /// Number of extended capabilities of all kinds
    #[must_use]
    pub fn count(&self) -> usize {
        self.booleans.len() + self.numerics.len() + self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Names and capabilities of one terminal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) names: Vec<String>,
    pub(crate) booleans: Vec<Option<bool>>,
    pub(crate) numerics: Vec<Option<i32>>,
    pub(crate) strings: Vec<Option<CapabilityValue<String>>>,
    pub(crate) extended: ExtendedCapabilities,
}

impl Catalog {
    /// Terminal names, canonical name first
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Primary name of the terminal, as used in `TERM`
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }

    /// Long description, the last name if there is more than one
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self.names.as_slice() {
            [_, .., last] => Some(last),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_boolean(&self, capability: BooleanCapability) -> Option<bool> {
        self.get_boolean_at(capability.index())
    }

    #[must_use]
    pub fn get_numeric(&self, capability: NumericCapability) -> Option<i32> {
        self.get_numeric_at(capability.index())
    }

    #[must_use]
    pub fn get_string(&self, capability: StringCapability) -> Option<&CapabilityValue<String>> {
        self.get_string_at(capability.index())
    }

    /// Boolean by position, absent past the end of the section
    #[must_use]
    pub fn get_boolean_at(&self, index: usize) -> Option<bool> {
        self.booleans.get(index).copied().flatten()
    }

    /// Number by position, absent past the end of the section
    #[must_use]
    pub fn get_numeric_at(&self, index: usize) -> Option<i32> {
        self.numerics.get(index).copied().flatten()
    }

    /// String by position, absent past the end of the section
    #[must_use]
    pub fn get_string_at(&self, index: usize) -> Option<&CapabilityValue<String>> {
        self.strings.get(index).and_then(Option::as_ref)
    }

    /// Boolean by short code, standard capabilities first, then extended ones
    #[must_use]
    pub fn get_boolean_by_code(&self, code: &str) -> Option<bool> {
        match BooleanCapability::from_code(code) {
            Some(capability) => self.get_boolean(capability),
            None => self.extended.get_boolean(code),
        }
    }

    /// Number by short code, standard capabilities first, then extended ones
    #[must_use]
    pub fn get_numeric_by_code(&self, code: &str) -> Option<i32> {
        match NumericCapability::from_code(code) {
            Some(capability) => self.get_numeric(capability),
            None => self.extended.get_numeric(code),
        }
    }

    /// String by short code, standard capabilities first, then extended ones
    #[must_use]
    pub fn get_string_by_code(&self, code: &str) -> Option<&CapabilityValue<String>> {
        match StringCapability::from_code(code) {
            Some(capability) => self.get_string(capability),
            None => self.extended.get_string(code),
        }
    }

    /// Present standard booleans in file order
    pub fn booleans(&self) -> impl Iterator<Item = (BooleanCapability, bool)> + '_ {
        self.booleans.iter().enumerate().filter_map(|(index, value)| {
            Some((BooleanCapability::from_index(index)?, (*value)?))
        })
    }

    /// Present standard numbers in file order
    pub fn numerics(&self) -> impl Iterator<Item = (NumericCapability, i32)> + '_ {
        self.numerics.iter().enumerate().filter_map(|(index, value)| {
            Some((NumericCapability::from_index(index)?, (*value)?))
        })
    }

    /// Present standard strings in file order
    pub fn strings(
        &self,
    ) -> impl Iterator<Item = (StringCapability, &CapabilityValue<String>)> + '_ {
        self.strings.iter().enumerate().filter_map(|(index, value)| {
            Some((StringCapability::from_index(index)?, value.as_ref()?))
        })
    }

    /// Non-standard capabilities
    #[must_use]
    pub const fn extended(&self) -> &ExtendedCapabilities {
        &self.extended
    }
}

/// Decode terminfo text, one byte per character
///
/// Bytes map to the characters with the same code point, so code page
/// graphics (as in the `acsc` string of some entries) are preserved.
pub(crate) fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Encode text for sending, the inverse of the decoding used for catalogs
///
/// Characters up to U+00FF become single bytes, anything above is sent as UTF-8.
#[must_use]
pub fn to_bytes(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(c) {
            Ok(byte) => bytes.push(byte),
            Err(_) => bytes.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
        }
    }
    bytes
}

#[cfg(test)]
mod test {
    use collection_literals::collection;

    use super::*;

    fn sample() -> Catalog {
        let extended = ExtendedCapabilities {
            booleans: collection!("AX".to_string() => true, "XT".to_string() => false),
            numerics: collection!("U8".to_string() => 1),
            strings: collection!(
                "Cs".to_string() => CapabilityValue::template("\x1b]12;%p1%s\x07".to_string()),
            ),
        };
        Catalog {
            names: vec!["test".to_string(), "test terminal".to_string()],
            booleans: vec![None, Some(true), Some(false)],
            numerics: vec![Some(80), None],
            strings: vec![
                None,
                None,
                None,
                None,
                None,
                Some(CapabilityValue::template("\x1b[H\x1b[2J".to_string())),
            ],
            extended,
        }
    }

    #[test]
    fn names() {
        let catalog = sample();
        assert_eq!(catalog.canonical_name(), "test");
        assert_eq!(catalog.description(), Some("test terminal"));

        let single = Catalog {
            names: vec!["single".to_string()],
            ..Catalog::default()
        };
        assert_eq!(single.canonical_name(), "single");
        assert_eq!(single.description(), None);
        assert_eq!(Catalog::default().canonical_name(), "");
    }

    #[test]
    fn standard_lookup() {
        let catalog = sample();
        assert_eq!(catalog.get_boolean(BooleanCapability::AutoLeftMargin), None);
        assert_eq!(catalog.get_boolean(BooleanCapability::AutoRightMargin), Some(true));
        assert_eq!(catalog.get_boolean(BooleanCapability::NoEscCtlc), Some(false));
        assert_eq!(catalog.get_numeric(NumericCapability::Columns), Some(80));
        assert_eq!(catalog.get_numeric(NumericCapability::InitTabs), None);
        assert_eq!(
            catalog
                .get_string(StringCapability::ClearScreen)
                .map(CapabilityValue::value)
                .map(String::as_str),
            Some("\x1b[H\x1b[2J")
        );
    }

    #[test]
    fn absent_past_end() {
        let catalog = sample();
        assert_eq!(catalog.get_boolean(BooleanCapability::BackspacesWithBs), None);
        assert_eq!(catalog.get_numeric(NumericCapability::MaxColors), None);
        assert!(catalog.get_string(StringCapability::CursorAddress).is_none());
        assert_eq!(catalog.get_boolean_at(usize::MAX), None);
        assert_eq!(catalog.get_numeric_at(1000), None);
        assert!(catalog.get_string_at(1000).is_none());
    }

    #[test]
    fn lookup_by_code() {
        let catalog = sample();
        assert_eq!(catalog.get_boolean_by_code("am"), Some(true));
        assert_eq!(catalog.get_boolean_by_code("AX"), Some(true));
        assert_eq!(catalog.get_boolean_by_code("XT"), Some(false));
        assert_eq!(catalog.get_numeric_by_code("cols"), Some(80));
        assert_eq!(catalog.get_numeric_by_code("U8"), Some(1));
        assert!(catalog.get_string_by_code("clear").is_some());
        assert!(catalog.get_string_by_code("Cs").is_some());
        assert!(catalog.get_string_by_code("nope").is_none());
    }

    #[test]
    fn iterators() {
        let catalog = sample();
        assert_eq!(
            catalog.booleans().collect::<Vec<_>>(),
            vec![
                (BooleanCapability::AutoRightMargin, true),
                (BooleanCapability::NoEscCtlc, false)
            ]
        );
        assert_eq!(
            catalog.numerics().collect::<Vec<_>>(),
            vec![(NumericCapability::Columns, 80)]
        );
        assert_eq!(
            catalog
                .strings()
                .map(|(capability, _)| capability)
                .collect::<Vec<_>>(),
            vec![StringCapability::ClearScreen]
        );
    }

    #[test]
    fn extended() {
        let catalog = sample();
        let extended = catalog.extended();
        assert!(extended.exists("AX"));
        assert!(extended.exists("Cs"));
        assert!(!extended.exists("am"));
        assert_eq!(extended.kind("U8"), Some(CapabilityKind::Numeric));
        assert_eq!(extended.get_names(CapabilityKind::Boolean), vec!["AX", "XT"]);
        assert_eq!(extended.get_names(CapabilityKind::String), vec!["Cs"]);
        assert_eq!(extended.get_numeric("AX"), None);
        assert_eq!(extended.count(), 4);
        assert!(!extended.is_empty());
        assert!(ExtendedCapabilities::default().is_empty());
    }

    #[test]
    fn string_values() {
        let plain = CapabilityValue::template("\x1b[H".to_string());
        assert_eq!(plain.tokens(), Ok([].as_slice()));
        assert!(!plain.is_parameterized());
        assert_eq!(plain.expand(&[]), Ok("\x1b[H".to_string()));

        let cursor = CapabilityValue::template("\x1b[%i%p1%d;%p2%dH".to_string());
        assert_eq!(cursor.tokens().map(<[_]>::len), Ok(8));
        assert!(cursor.is_parameterized());
        assert_eq!(
            cursor.expand(&[Value::from(2), Value::from(3)]),
            Ok("\x1b[3;4H".to_string())
        );

        let broken = CapabilityValue::template("%p0".to_string());
        assert!(broken.tokens().is_err());
        assert!(broken.is_parameterized());
        assert!(matches!(
            broken.expand(&[]),
            Err(EvaluationError::Syntax(_))
        ));
    }

    #[test]
    fn byte_per_char() {
        let bytes = [b'+', 0x10, b',', 0xc4, b'-', 0xff];
        let text = decode(&bytes);
        assert_eq!(text.chars().count(), bytes.len());
        assert_eq!(text.chars().nth(3), Some('\u{c4}'));
        assert_eq!(to_bytes(&text), bytes);
        assert_eq!(to_bytes("\u{2500}"), "\u{2500}".as_bytes());
        assert_eq!(
            CapabilityValue::template(text).to_bytes(),
            bytes.to_vec()
        );
    }
}
