//! Field Schema
//!
//! Declarative description of every field on the driver inquiry form. The
//! schema is built once, checked for duplicate names, and then only read.

use std::collections::HashSet;
use thiserror::Error;

/// Field names of the driver inquiry form.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const CONSENT: &str = "consent";
    pub const EXPERIENCE: &str = "experience";
    pub const START_DATE: &str = "startDate";
    pub const DESTINATIONS: &str = "destinations";
    pub const NOTE: &str = "note";
}

/// Options offered by the destinations multi-select.
pub const DESTINATION_OPTIONS: &[&str] = &["Španělsko"];

/// Kind of value a field holds
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; `multiline` only affects rendering
    Text { multiline: bool },
    Email,
    Phone,
    /// Decimal number typed as text
    Number,
    Boolean,
    /// Any subset of a fixed list of options
    MultiSelect { options: &'static [&'static str] },
}

impl FieldKind {
    pub fn text() -> Self {
        FieldKind::Text { multiline: false }
    }

    /// Whether values of this kind are edited as a string
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FieldKind::Text { .. } | FieldKind::Email | FieldKind::Phone | FieldKind::Number
        )
    }
}

/// Extra check applied to a non-empty value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Value must look like an e-mail address
    EmailFormat,
    /// Value must parse as a finite number not below the bound
    MinValue(i64),
    /// Value must be exactly `true`
    MustBeTrue,
}

/// One field of the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraint: Option<Constraint>,
    /// Message shown when a required field is left empty
    pub required_message: &'static str,
}

impl FieldSpec {
    /// Optional field without constraints
    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            constraint: None,
            required_message: "",
        }
    }

    /// Required field reporting `message` when left empty
    pub fn required(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            constraint: None,
            required_message: message,
        }
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Duplicate field name: {0}")]
    DuplicateField(&'static str),

    #[error("Constraint {constraint:?} cannot apply to field {field}")]
    ConstraintMismatch {
        field: &'static str,
        constraint: Constraint,
    },
}

/// Ordered, immutable list of field specs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.name) {
                return Err(SchemaError::DuplicateField(spec.name));
            }
            if let Some(constraint) = &spec.constraint {
                let fits = match constraint {
                    Constraint::EmailFormat => spec.kind.is_textual(),
                    Constraint::MinValue(_) => spec.kind == FieldKind::Number,
                    Constraint::MustBeTrue => spec.kind == FieldKind::Boolean,
                };
                if !fits {
                    return Err(SchemaError::ConstraintMismatch {
                        field: spec.name,
                        constraint: constraint.clone(),
                    });
                }
            }
        }
        Ok(Self { fields })
    }

    /// The C+E driver inquiry form
    pub fn driver_inquiry() -> Self {
        use fields::*;

        let fields = vec![
            FieldSpec::required(FIRST_NAME, "Jméno *", FieldKind::text(), "Jméno je povinné"),
            FieldSpec::required(LAST_NAME, "Příjmení *", FieldKind::text(), "Příjmení je povinné"),
            FieldSpec::optional(ADDRESS, "Adresa", FieldKind::text()),
            FieldSpec::required(PHONE, "Telefon *", FieldKind::Phone, "Telefon je povinný"),
            FieldSpec::required(EMAIL, "E-mail *", FieldKind::Email, "E-mail je povinný")
                .with_constraint(Constraint::EmailFormat),
            FieldSpec::optional(
                CONSENT,
                "Potvrzuji vlastnictví ŘP skupiny C+E",
                FieldKind::Boolean,
            )
            .with_constraint(Constraint::MustBeTrue),
            FieldSpec::required(
                EXPERIENCE,
                "Počet let praxe v MKD (C+E) *",
                FieldKind::Number,
                "Praxe je povinná",
            )
            .with_constraint(Constraint::MinValue(0)),
            FieldSpec::optional(START_DATE, "Možný termín nástupu", FieldKind::text()),
            FieldSpec::optional(
                DESTINATIONS,
                "Preferované destinace (možno vybrat více):",
                FieldKind::MultiSelect {
                    options: DESTINATION_OPTIONS,
                },
            ),
            FieldSpec::optional(
                NOTE,
                "Poznámka / Doplňující informace",
                FieldKind::Text { multiline: true },
            ),
        ];

        // Static field list, checked by `test_driver_inquiry_is_valid`.
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Position of a field in display order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::driver_inquiry()
    }
}
