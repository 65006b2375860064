//! # Mapler - driver inquiry app shell
//!
//! A drawer-navigated app with four screens (Home, Form, Profile, Settings).
//! The form screen collects a C+E truck driver job inquiry, validates it on
//! the client and confirms the submission in a dialog; nothing is sent over
//! the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapler::form::{fields, FormController, InquirySubmission, SubmitOutcome};
//!
//! let mut form = FormController::driver_inquiry();
//! form.set_value(fields::FIRST_NAME, "Jan").unwrap();
//!
//! // Still missing required fields, so nothing is submitted.
//! let outcome = form.submit(&InquirySubmission::new());
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//! ```
//!
//! ## Layout
//!
//! - **form**: schema, validation, state controller and submission
//! - **navigation**: destinations, drawer menu and the shell owning the form
//! - **screens**: pure `state -> ScreenView` render functions
//! - **command** / **terminal**: text front-end on top of the shell
//! - **config** / **cli**: settings and arguments of the `mapler` binary

pub mod command;
pub mod form;
pub mod navigation;
pub mod screens;
pub mod terminal;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
