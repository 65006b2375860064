//! Job-application intake form
//!
//! - `schema`: declarative field list
//! - `validation`: schema + values -> error map
//! - `controller`: values, touched set and submit state of one mounted form
//! - `submission`: output record, dialogs and the record sink seam

pub mod controller;
pub mod schema;
pub mod submission;
pub mod validation;
pub mod values;

pub use controller::{
    Acknowledged, ControllerError, ControllerState, FormController, FormSnapshot, SubmitOutcome,
};
pub use schema::{fields, Constraint, FieldKind, FieldSpec, FormSchema, SchemaError};
pub use submission::{
    Dialog, DialogKind, InquirySubmission, OutputRecord, RecordSink, SubmissionError,
    SubmissionHandler, TracingSink,
};
pub use validation::{validate, ErrorMap, FieldError};
pub use values::{FieldValue, FormValues, TouchedSet};
