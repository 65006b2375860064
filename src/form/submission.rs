//! Submission Handler
//!
//! Turns a validated value set into an [`OutputRecord`], hands it to a
//! [`RecordSink`] and produces the dialog shown to the user. Nothing here
//! talks to the network; a transmitting sink plugs in behind `RecordSink`
//! without touching the controller.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use super::schema::fields;
use super::values::{FieldValue, FormValues};

/// Placeholder for optional text left empty
pub const NOT_PROVIDED: &str = "Nevyplněno";
/// Placeholder for an empty destinations selection
pub const NO_DESTINATIONS: &str = "Žádné vybrané destinace";
/// Placeholder for an empty note
pub const NO_NOTE: &str = "Bez poznámky";

/// Log target of submitted records
pub const SUBMISSION_TARGET: &str = "mapler::submission";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing value for field {0}")]
    MissingValue(&'static str),

    #[error("Field {0} holds a value of the wrong kind")]
    KindMismatch(&'static str),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Submission-ready shape of the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub address: String,
    pub experience: String,
    pub start_date: String,
    pub destinations: String,
    pub note: String,
}

impl OutputRecord {
    pub fn from_values(values: &FormValues) -> Result<Self, SubmissionError> {
        let first_name = required_text(values, fields::FIRST_NAME)?;
        let last_name = required_text(values, fields::LAST_NAME)?;

        let destinations = match values.get(fields::DESTINATIONS) {
            None => NO_DESTINATIONS.to_string(),
            Some(FieldValue::Selection(items)) if items.is_empty() => NO_DESTINATIONS.to_string(),
            Some(FieldValue::Selection(items)) => items.join(", "),
            Some(_) => return Err(SubmissionError::KindMismatch(fields::DESTINATIONS)),
        };

        Ok(Self {
            from_name: format!("{} {}", first_name, last_name),
            from_email: required_text(values, fields::EMAIL)?.to_string(),
            phone: required_text(values, fields::PHONE)?.to_string(),
            address: optional_text(values, fields::ADDRESS, NOT_PROVIDED)?,
            experience: required_text(values, fields::EXPERIENCE)?.to_string(),
            start_date: optional_text(values, fields::START_DATE, NOT_PROVIDED)?,
            destinations,
            note: optional_text(values, fields::NOTE, NO_NOTE)?,
        })
    }

    /// JSON body for sinks that transmit the record
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn required_text<'a>(values: &'a FormValues, name: &'static str) -> Result<&'a str, SubmissionError> {
    match values.get(name) {
        None => Err(SubmissionError::MissingValue(name)),
        Some(FieldValue::Text(text)) => Ok(text.as_str()),
        Some(_) => Err(SubmissionError::KindMismatch(name)),
    }
}

fn optional_text(
    values: &FormValues,
    name: &'static str,
    placeholder: &str,
) -> Result<String, SubmissionError> {
    match values.get(name) {
        None => Ok(placeholder.to_string()),
        Some(FieldValue::Text(text)) if text.is_empty() => Ok(placeholder.to_string()),
        Some(FieldValue::Text(text)) => Ok(text.clone()),
        Some(_) => Err(SubmissionError::KindMismatch(name)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Confirmation,
    Failure,
}

/// Modal message with a single acknowledgement button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub button: String,
}

impl Dialog {
    /// Summary of every submitted value
    pub fn confirmation(record: &OutputRecord) -> Self {
        let message = format!(
            "Formulář byl úspěšně otestován!\n\nOdeslaná data:\n\
             Jméno: {}\n\
             Email: {}\n\
             Telefon: {}\n\
             Adresa: {}\n\
             Praxe: {} let\n\
             Nástup: {}\n\
             Destinace: {}\n\
             Poznámka: {}",
            record.from_name,
            record.from_email,
            record.phone,
            record.address,
            record.experience,
            record.start_date,
            record.destinations,
            record.note,
        );
        Self {
            kind: DialogKind::Confirmation,
            title: "Test odeslání".to_string(),
            message,
            button: "OK".to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: DialogKind::Failure,
            title: "Chyba".to_string(),
            message: "Při testování formuláře došlo k chybě.".to_string(),
            button: "OK".to_string(),
        }
    }

    pub fn is_confirmation(&self) -> bool {
        self.kind == DialogKind::Confirmation
    }
}

/// Destination of submitted records
pub trait RecordSink {
    fn deliver(&self, record: &OutputRecord) -> Result<(), SubmissionError>;
}

/// Writes each record as one structured event on [`SUBMISSION_TARGET`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn deliver(&self, record: &OutputRecord) -> Result<(), SubmissionError> {
        info!(
            target: SUBMISSION_TARGET,
            from_name = %record.from_name,
            from_email = %record.from_email,
            phone = %record.phone,
            address = %record.address,
            experience = %record.experience,
            start_date = %record.start_date,
            destinations = %record.destinations,
            note = %record.note,
            "ODESLANÁ DATA"
        );
        Ok(())
    }
}

/// Result of a submission, already converted for presentation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerOutcome {
    Delivered { record: OutputRecord, dialog: Dialog },
    Failed { dialog: Dialog },
}

pub trait SubmissionHandler {
    /// Build the record and run its side effects
    fn deliver(&self, values: &FormValues) -> Result<OutputRecord, SubmissionError>;

    /// Like `deliver`, but failures end here as a generic failure dialog.
    fn handle(&self, values: &FormValues) -> HandlerOutcome {
        match self.deliver(values) {
            Ok(record) => {
                let dialog = Dialog::confirmation(&record);
                HandlerOutcome::Delivered { record, dialog }
            }
            Err(e) => {
                error!(error = %e, "Chyba při testování formuláře");
                HandlerOutcome::Failed {
                    dialog: Dialog::failure(),
                }
            }
        }
    }
}

/// Handler for the driver inquiry: build the record, then hand it to the sink
#[derive(Clone, Debug, Default)]
pub struct InquirySubmission<S = TracingSink> {
    sink: S,
}

impl InquirySubmission<TracingSink> {
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: RecordSink> InquirySubmission<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: RecordSink> SubmissionHandler for InquirySubmission<S> {
    fn deliver(&self, values: &FormValues) -> Result<OutputRecord, SubmissionError> {
        let record = OutputRecord::from_values(values)?;
        self.sink.deliver(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::FormSchema;
    use std::cell::RefCell;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Default)]
    struct Recording(RefCell<Vec<OutputRecord>>);

    impl RecordSink for Recording {
        fn deliver(&self, record: &OutputRecord) -> Result<(), SubmissionError> {
            self.0.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    struct Unreachable;

    impl RecordSink for Unreachable {
        fn deliver(&self, _record: &OutputRecord) -> Result<(), SubmissionError> {
            Err(SubmissionError::Delivery("offline".to_string()))
        }
    }

    fn filled() -> FormValues {
        FormValues::defaults(&FormSchema::driver_inquiry())
            .with(fields::FIRST_NAME, "Jan")
            .with(fields::LAST_NAME, "Novák")
            .with(fields::PHONE, "123456789")
            .with(fields::EMAIL, "jan@example.com")
            .with(fields::EXPERIENCE, "5")
            .with(fields::CONSENT, true)
    }

    #[test]
    fn test_placeholders_for_empty_optionals() {
        let record = OutputRecord::from_values(&filled()).unwrap();
        assert_eq!(record.from_name, "Jan Novák");
        assert_eq!(record.address, "Nevyplněno");
        assert_eq!(record.start_date, "Nevyplněno");
        assert_eq!(record.destinations, "Žádné vybrané destinace");
        assert_eq!(record.note, "Bez poznámky");
    }

    #[test]
    fn test_selection_is_joined() {
        let mut values = filled();
        values.set(
            fields::DESTINATIONS,
            FieldValue::Selection(vec!["Španělsko".into(), "Itálie".into()]),
        );
        let record = OutputRecord::from_values(&values).unwrap();
        assert_eq!(record.destinations, "Španělsko, Itálie");
    }

    #[test]
    fn test_malformed_values_are_reported() {
        let mut values = filled();
        values.remove(fields::EMAIL);
        assert_eq!(
            OutputRecord::from_values(&values),
            Err(SubmissionError::MissingValue("email"))
        );

        let values = filled().with(fields::NOTE, true);
        assert_eq!(
            OutputRecord::from_values(&values),
            Err(SubmissionError::KindMismatch("note"))
        );
    }

    #[test]
    fn test_json_keeps_record_order() {
        let record = OutputRecord::from_values(&filled()).unwrap();
        let json = record.to_json().unwrap();
        let keys = [
            "from_name",
            "from_email",
            "phone",
            "address",
            "experience",
            "start_date",
            "destinations",
            "note",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(&format!("\"{}\"", key)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phone"], "123456789");
        assert_eq!(value["address"], "Nevyplněno");
    }

    #[test]
    fn test_confirmation_lists_every_value() {
        let record = OutputRecord::from_values(&filled()).unwrap();
        let dialog = Dialog::confirmation(&record);
        assert_eq!(dialog.title, "Test odeslání");
        assert!(dialog.message.starts_with("Formulář byl úspěšně otestován!"));
        assert!(dialog.message.contains("Jméno: Jan Novák"));
        assert!(dialog.message.contains("Praxe: 5 let"));
        assert!(dialog.message.contains("Adresa: Nevyplněno"));
        assert!(dialog.message.contains("Poznámka: Bez poznámky"));
        assert_eq!(dialog.button, "OK");
    }

    #[test]
    fn test_handler_delivers_to_sink() {
        let handler = InquirySubmission::with_sink(Recording::default());
        let outcome = handler.handle(&filled());
        assert!(matches!(outcome, HandlerOutcome::Delivered { ref dialog, .. } if dialog.is_confirmation()));
        assert_eq!(handler.sink().0.borrow().len(), 1);
    }

    #[test]
    fn test_handler_failure_becomes_dialog() {
        let handler = InquirySubmission::with_sink(Unreachable);
        let outcome = handler.handle(&filled());
        assert_eq!(
            outcome,
            HandlerOutcome::Failed {
                dialog: Dialog::failure()
            }
        );
    }

    #[test]
    fn test_tracing_sink_writes_one_record() {
        let record = OutputRecord::from_values(&filled()).unwrap();
        let (result, events) = capture(|| TracingSink.deliver(&record));

        assert!(result.is_ok());
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.get("message"), Some("ODESLANÁ DATA"));
        assert_eq!(event.get("from_name"), Some("Jan Novák"));
        assert_eq!(event.get("from_email"), Some("jan@example.com"));
        assert_eq!(event.get("phone"), Some("123456789"));
        assert_eq!(event.get("address"), Some("Nevyplněno"));
        assert_eq!(event.get("experience"), Some("5"));
        assert_eq!(event.get("start_date"), Some("Nevyplněno"));
        assert_eq!(event.get("destinations"), Some("Žádné vybrané destinace"));
        assert_eq!(event.get("note"), Some("Bez poznámky"));
    }

    #[test]
    fn test_record_logged_before_dialog() {
        let handler = InquirySubmission::new();
        let (outcome, events) = capture(|| handler.handle(&filled()));

        // Only the record event is on the submission target; the dialog
        // is built from the record the sink accepted.
        assert_eq!(events.len(), 1);
        let HandlerOutcome::Delivered { record, dialog } = outcome else {
            panic!("delivery failed");
        };
        assert_eq!(events[0].get("from_name"), Some(record.from_name.as_str()));
        assert_eq!(dialog, Dialog::confirmation(&record));
    }

    #[test]
    fn test_failed_record_is_not_logged() {
        let mut values = filled();
        values.remove(fields::PHONE);
        let (outcome, events) = capture(|| InquirySubmission::new().handle(&values));

        assert!(events.is_empty());
        assert_eq!(
            outcome,
            HandlerOutcome::Failed {
                dialog: Dialog::failure()
            }
        );
    }

    // Events on the submission target, field name -> formatted value

    #[derive(Debug, Default)]
    struct CapturedEvent(Vec<(String, String)>);

    impl CapturedEvent {
        fn get(&self, name: &str) -> Option<&str> {
            self.0
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl Visit for CapturedEvent {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<CapturedEvent>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != SUBMISSION_TARGET {
                return;
            }
            let mut captured = CapturedEvent::default();
            event.record(&mut captured);
            self.0.lock().unwrap().push(captured);
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
        let layer = Capture::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        let events = std::mem::take(&mut *layer.0.lock().unwrap());
        (result, events)
    }
}
