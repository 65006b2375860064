//! Form State Controller
//!
//! Owns the values, touched set and derived errors of one mounted form.
//! Every value change recomputes the full [`ErrorMap`]; the field count is
//! small enough that diffing would buy nothing.
//!
//! ```text
//!   editing --submit--> submitting --acknowledge--> submitted --reset--> editing
//!      ^                    |
//!      +---- rejected ------+
//! ```

use thiserror::Error;
use tracing::{debug, info, warn};

use super::schema::{FieldKind, FieldSpec, FormSchema};
use super::submission::{Dialog, HandlerOutcome, SubmissionHandler};
use super::validation::{validate, ErrorMap, FieldError};
use super::values::{FieldValue, FormValues, TouchedSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Editing,
    /// Submission delivered, waiting for the user to acknowledge the dialog
    Submitting,
    /// Transient; the controller resets to `Editing` right away
    Submitted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Form is not editable while {0:?}")]
    NotEditing(ControllerState),

    #[error("A dialog is waiting for acknowledgement")]
    DialogPending,

    #[error("Value does not fit field {0}")]
    KindMismatch(&'static str),

    #[error("Field {0} is not a multi-select")]
    NotMultiSelect(&'static str),

    #[error("Field {field} has no option {option}")]
    UnknownOption { field: &'static str, option: String },
}

/// What happened to a submit request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; every error is now visible
    Rejected(ErrorMap),
    /// Delivered; the confirmation dialog is pending
    AwaitingAcknowledgement,
    /// The handler failed; values are kept and a failure dialog is pending
    Failed,
    /// A dialog from an earlier submit is still open
    Busy,
}

/// What `acknowledge` resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acknowledged {
    /// Confirmation closed and the form was reset
    Reset,
    /// Failure dialog closed; values untouched
    Dismissed,
    Nothing,
}

/// Everything the presentation layer needs after a state change
#[derive(Clone, Copy, Debug)]
pub struct FormSnapshot<'a> {
    pub values: &'a FormValues,
    pub touched: &'a TouchedSet,
    pub errors: &'a ErrorMap,
    pub state: ControllerState,
}

#[derive(Clone, Debug)]
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
    touched: TouchedSet,
    errors: ErrorMap,
    state: ControllerState,
    submit_attempted: bool,
    dialog: Option<Dialog>,
}

impl FormController {
    pub fn new(schema: FormSchema) -> Self {
        let values = FormValues::defaults(&schema);
        let errors = validate(&schema, &values);
        Self {
            schema,
            values,
            touched: TouchedSet::new(),
            errors,
            state: ControllerState::Editing,
            submit_attempted: false,
            dialog: None,
        }
    }

    pub fn driver_inquiry() -> Self {
        Self::new(FormSchema::driver_inquiry())
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Dialog waiting for the user, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            values: &self.values,
            touched: &self.touched,
            errors: &self.errors,
            state: self.state,
        }
    }

    /// Error to show for `field`: only once it was touched or a submit was tried
    pub fn visible_error(&self, field: &str) -> Option<&FieldError> {
        if self.submit_attempted || self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), ControllerError> {
        self.ensure_editing()?;
        let spec = self.spec(field)?;
        let name = spec.name;
        let value = value.into();
        if !value.fits(&spec.kind) {
            return Err(ControllerError::KindMismatch(name));
        }

        debug!(field = name, "Field value changed");
        self.values.set(name, value);
        self.revalidate();
        Ok(())
    }

    /// Flip a boolean field
    pub fn toggle_flag(&mut self, field: &str) -> Result<bool, ControllerError> {
        let spec = self.spec(field)?;
        let name = spec.name;
        if spec.kind != FieldKind::Boolean {
            return Err(ControllerError::KindMismatch(name));
        }
        let next = !self.values.flag(name).unwrap_or(false);
        self.set_value(name, next)?;
        Ok(next)
    }

    /// Returns `true` the first time a field is touched
    pub fn mark_touched(&mut self, field: &str) -> Result<bool, ControllerError> {
        self.ensure_editing()?;
        let name = self.spec(field)?.name;
        Ok(self.touched.insert(name))
    }

    /// Add `option` when absent, remove it when present.
    /// Returns whether the option is selected afterwards.
    pub fn toggle_multi_select(
        &mut self,
        field: &str,
        option: &str,
    ) -> Result<bool, ControllerError> {
        self.ensure_editing()?;
        let spec = self.spec(field)?;
        let name = spec.name;
        let FieldKind::MultiSelect { options } = spec.kind else {
            return Err(ControllerError::NotMultiSelect(name));
        };
        if !options.contains(&option) {
            return Err(ControllerError::UnknownOption {
                field: name,
                option: option.to_string(),
            });
        }

        let mut selection = self.values.selection(name).unwrap_or_default().to_vec();
        let selected = match selection.iter().position(|item| item == option) {
            Some(idx) => {
                selection.remove(idx);
                false
            }
            None => {
                selection.push(option.to_string());
                true
            }
        };

        debug!(field = name, option, selected, "Option toggled");
        self.values.set(name, FieldValue::Selection(selection));
        self.revalidate();
        Ok(selected)
    }

    pub fn submit<H>(&mut self, handler: &H) -> SubmitOutcome
    where
        H: SubmissionHandler + ?Sized,
    {
        if self.state != ControllerState::Editing || self.dialog.is_some() {
            warn!(state = ?self.state, "Submit ignored, dialog still open");
            return SubmitOutcome::Busy;
        }

        self.state = ControllerState::Submitting;
        self.submit_attempted = true;
        for name in self.schema.names() {
            self.touched.insert(name);
        }
        self.revalidate();

        if !self.errors.is_empty() {
            info!(errors = self.errors.len(), "Submit rejected by validation");
            self.state = ControllerState::Editing;
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        match handler.handle(&self.values) {
            HandlerOutcome::Delivered { dialog, .. } => {
                info!("Submission delivered, awaiting acknowledgement");
                self.dialog = Some(dialog);
                SubmitOutcome::AwaitingAcknowledgement
            }
            HandlerOutcome::Failed { dialog } => {
                self.dialog = Some(dialog);
                self.state = ControllerState::Editing;
                SubmitOutcome::Failed
            }
        }
    }

    /// Resolve the pending dialog
    pub fn acknowledge(&mut self) -> Acknowledged {
        let Some(dialog) = self.dialog.take() else {
            return Acknowledged::Nothing;
        };

        if dialog.is_confirmation() && self.state == ControllerState::Submitting {
            self.state = ControllerState::Submitted;
            self.reset();
            info!("Formulář byl resetován");
            Acknowledged::Reset
        } else {
            Acknowledged::Dismissed
        }
    }

    fn reset(&mut self) {
        self.values = FormValues::defaults(&self.schema);
        self.touched.clear();
        // Recomputed by the next mutation or submit
        self.errors = ErrorMap::new();
        self.submit_attempted = false;
        self.dialog = None;
        self.state = ControllerState::Editing;
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.schema, &self.values);
    }

    /// Input is accepted only while editing with no dialog open
    fn ensure_editing(&self) -> Result<(), ControllerError> {
        match self.state {
            ControllerState::Editing if self.dialog.is_some() => {
                Err(ControllerError::DialogPending)
            }
            ControllerState::Editing => Ok(()),
            other => Err(ControllerError::NotEditing(other)),
        }
    }

    fn spec(&self, field: &str) -> Result<&FieldSpec, ControllerError> {
        self.schema
            .field(field)
            .ok_or_else(|| ControllerError::UnknownField(field.to_string()))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::driver_inquiry()
    }
}
