//! Validation Engine
//!
//! `validate` is a pure function of the schema and the candidate values. It
//! never fails; violations are returned as an [`ErrorMap`] and an empty map
//! means the whole form is valid.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::schema::{Constraint, FieldKind, FieldSpec, FormSchema};
use super::values::{FieldValue, FormValues};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Why a single field does not validate
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0}")]
    Required(&'static str),

    #[error("Neplatný e-mail")]
    InvalidEmail,

    /// Not a number, or a number below `min`
    #[error("Minimální hodnota je {min}")]
    BelowMinimum { min: i64 },

    #[error("Musíte souhlasit se zpracováním osobních údajů")]
    ConsentRequired,
}

/// Field name -> violation, in schema order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(&'static str, FieldError)>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.entries
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, error)| error)
    }

    /// User-facing message for a field, if it is in violation
    pub fn message(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, error))
    }

    fn push(&mut self, field: &'static str, error: FieldError) {
        self.entries.push((field, error));
    }
}

/// Check every field of `schema` against `values`
pub fn validate(schema: &FormSchema, values: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for spec in schema.fields() {
        if let Some(error) = validate_field(spec, values.get(spec.name)) {
            errors.push(spec.name, error);
        }
    }
    errors
}

/// Check a single field; `None` means the value is acceptable
pub fn validate_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Option<FieldError> {
    let empty = value.map_or(true, FieldValue::is_empty);

    if spec.required && empty {
        return Some(FieldError::Required(spec.required_message));
    }

    let constraint = spec.constraint.as_ref()?;

    // A false flag is empty, yet it is exactly what consent has to reject.
    if empty && *constraint != Constraint::MustBeTrue {
        return None;
    }

    match (&spec.kind, constraint) {
        (FieldKind::Boolean, Constraint::MustBeTrue) => match value {
            Some(FieldValue::Flag(true)) => None,
            _ => Some(FieldError::ConsentRequired),
        },
        (FieldKind::Number, Constraint::MinValue(min)) => {
            match value.and_then(FieldValue::as_text).and_then(parse_number) {
                Some(number) if number >= *min as f64 => None,
                _ => Some(FieldError::BelowMinimum { min: *min }),
            }
        }
        (kind, Constraint::EmailFormat) if kind.is_textual() => {
            match value.and_then(FieldValue::as_text) {
                Some(text) if is_email(text) => None,
                _ => Some(FieldError::InvalidEmail),
            }
        }
        // Mismatched pairs are refused by `FormSchema::new`.
        _ => None,
    }
}

/// Finite decimal number, surrounding whitespace ignored
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|number| number.is_finite())
}

/// `local@domain.tld` shape; a dotless domain such as `localhost` is refused
pub fn is_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}
