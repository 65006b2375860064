//! Current field values and the set of touched fields

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::schema::{FieldKind, FormSchema};

/// Value held by a single field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    /// Selected options in the order they were picked, without duplicates
    Selection(Vec<String>),
}

impl FieldValue {
    /// Default (empty) value for a field kind
    pub fn empty_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Boolean => FieldValue::Flag(false),
            FieldKind::MultiSelect { .. } => FieldValue::Selection(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Kind-appropriate emptiness: `""`, `false`, or no selection
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Flag(flag) => !flag,
            FieldValue::Selection(items) => items.is_empty(),
        }
    }

    /// Whether this value may be stored in a field of `kind`
    pub fn fits(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Flag(_), FieldKind::Boolean)
                | (FieldValue::Selection(_), FieldKind::MultiSelect { .. })
        ) || (matches!(self, FieldValue::Text(_)) && kind.is_textual())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            FieldValue::Selection(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Selection(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// Field name -> current value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<&'static str, FieldValue>,
}

impl FormValues {
    /// Every field of `schema` at its empty value
    pub fn defaults(schema: &FormSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|spec| (spec.name, FieldValue::empty_for(&spec.kind)))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    /// Text value of a field, `None` when absent or not textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_flag)
    }

    pub fn selection(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(FieldValue::as_selection)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builder-style setter used by tests and scripted sessions
    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value.into());
        self
    }
}

/// Fields the user has left at least once
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchedSet {
    fields: BTreeSet<&'static str>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the field was not touched before
    pub fn insert(&mut self, name: &'static str) -> bool {
        self.fields.insert(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::fields;

    #[test]
    fn test_defaults_cover_every_field() {
        let schema = FormSchema::driver_inquiry();
        let values = FormValues::defaults(&schema);
        assert_eq!(values.len(), schema.fields().len());
        assert_eq!(values.text(fields::FIRST_NAME), Some(""));
        assert_eq!(values.flag(fields::CONSENT), Some(false));
        assert_eq!(values.selection(fields::DESTINATIONS), Some(&[][..]));
    }

    #[test]
    fn test_emptiness_is_kind_specific() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(!FieldValue::Text("  ".into()).is_empty());
        assert!(FieldValue::Flag(false).is_empty());
        assert!(!FieldValue::Flag(true).is_empty());
        assert!(FieldValue::Selection(vec![]).is_empty());
    }

    #[test]
    fn test_value_fits_kind() {
        assert!(FieldValue::from("5").fits(&FieldKind::Number));
        assert!(FieldValue::from(true).fits(&FieldKind::Boolean));
        assert!(!FieldValue::from(true).fits(&FieldKind::Email));
        assert!(!FieldValue::from("x").fits(&FieldKind::MultiSelect { options: &[] }));
    }

    #[test]
    fn test_touched_set_is_idempotent() {
        let mut touched = TouchedSet::new();
        assert!(touched.insert(fields::EMAIL));
        assert!(!touched.insert(fields::EMAIL));
        assert_eq!(touched.len(), 1);
        assert!(touched.contains("email"));
    }
}
