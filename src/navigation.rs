//! Navigation Shell
//!
//! Drawer menu with four destinations. The shell owns the form controller
//! for as long as the form screen is mounted: it is created when the form is
//! entered and dropped when the user navigates elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

use crate::form::{
    Acknowledged, ControllerError, FieldValue, FormController, InquirySubmission,
    SubmissionHandler, SubmitOutcome,
};
use crate::screens::{self, ScreenView};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Home,
    Form,
    Profile,
    Settings,
}

impl Destination {
    /// Drawer order
    pub const ALL: [Destination; 4] = [
        Destination::Home,
        Destination::Form,
        Destination::Profile,
        Destination::Settings,
    ];

    /// Route name used by the navigator
    pub fn route(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Form => "Form",
            Destination::Profile => "Profile",
            Destination::Settings => "Settings",
        }
    }

    /// Header and drawer title
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Home => "Domů",
            Destination::Form => "Formulář",
            Destination::Profile => "Profil",
            Destination::Settings => "Nastavení",
        }
    }

    /// Icon name; unfocused entries use the outline variant
    pub fn icon(&self, focused: bool) -> &'static str {
        match (self, focused) {
            (Destination::Home, true) => "home",
            (Destination::Home, false) => "home-outline",
            (Destination::Form, true) => "document-text",
            (Destination::Form, false) => "document-text-outline",
            (Destination::Profile, true) => "person",
            (Destination::Profile, false) => "person-outline",
            (Destination::Settings, true) => "settings",
            (Destination::Settings, false) => "settings-outline",
        }
    }

    /// URL path for browser front-ends
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Form => "/form",
            Destination::Profile => "/profile",
            Destination::Settings => "/settings",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown destination: {0}")]
pub struct UnknownDestination(pub String);

impl FromStr for Destination {
    type Err = UnknownDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|dest| dest.route().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDestination(s.to_string()))
    }
}

/// Colours of the header and drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub header_background: &'static str,
    pub header_tint: &'static str,
    pub drawer_active_tint: &'static str,
    pub drawer_inactive_tint: &'static str,
}

pub const THEME: Theme = Theme {
    header_background: "#f4511e",
    header_tint: "#fff",
    drawer_active_tint: "#f4511e",
    drawer_inactive_tint: "#666",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub destination: Destination,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Header, drawer and the current screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellView {
    pub header_title: &'static str,
    pub drawer_open: bool,
    pub menu: Vec<MenuItem>,
    pub screen: ScreenView,
}

/// Input directed at the mounted form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    SetValue { field: String, value: FieldValue },
    ToggleFlag(String),
    MarkTouched(String),
    ToggleOption { field: String, option: String },
    Submit,
    Acknowledge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Navigate(Destination),
    ToggleDrawer,
    CloseDrawer,
    Form(FormEvent),
}

/// Result of a dispatched event worth reporting to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Done,
    Submitted(SubmitOutcome),
    Acknowledged(Acknowledged),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("The form screen is not open")]
    FormNotMounted,

    #[error(transparent)]
    Form(#[from] ControllerError),
}

pub struct Shell<H = InquirySubmission> {
    current: Destination,
    drawer_open: bool,
    form: Option<FormController>,
    handler: H,
}

impl Shell<InquirySubmission> {
    pub fn with_defaults(initial: Destination) -> Self {
        Self::new(initial, InquirySubmission::new())
    }
}

impl<H: SubmissionHandler> Shell<H> {
    pub fn new(initial: Destination, handler: H) -> Self {
        let mut shell = Self {
            current: initial,
            drawer_open: false,
            form: None,
            handler,
        };
        shell.mount(initial);
        shell
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// The mounted form, if the form screen is showing
    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Switch screens; returns `false` when already there
    pub fn navigate(&mut self, destination: Destination) -> bool {
        self.drawer_open = false;
        if destination == self.current {
            return false;
        }

        if self.form.take().is_some() {
            debug!("Form screen unmounted, discarding its state");
        }
        info!(from = %self.current, to = %destination, "Navigating");
        self.current = destination;
        self.mount(destination);
        true
    }

    pub fn dispatch(&mut self, event: ShellEvent) -> Result<Reply, ShellError> {
        match event {
            ShellEvent::Navigate(destination) => {
                self.navigate(destination);
            }
            ShellEvent::ToggleDrawer => self.drawer_open = !self.drawer_open,
            ShellEvent::CloseDrawer => self.drawer_open = false,
            ShellEvent::Form(event) => return self.dispatch_form(event),
        }
        Ok(Reply::Done)
    }

    fn dispatch_form(&mut self, event: FormEvent) -> Result<Reply, ShellError> {
        let form = self.form.as_mut().ok_or(ShellError::FormNotMounted)?;
        match event {
            FormEvent::SetValue { field, value } => form.set_value(&field, value)?,
            FormEvent::ToggleFlag(field) => {
                form.toggle_flag(&field)?;
            }
            FormEvent::MarkTouched(field) => {
                form.mark_touched(&field)?;
            }
            FormEvent::ToggleOption { field, option } => {
                form.toggle_multi_select(&field, &option)?;
            }
            FormEvent::Submit => return Ok(Reply::Submitted(form.submit(&self.handler))),
            FormEvent::Acknowledge => return Ok(Reply::Acknowledged(form.acknowledge())),
        }
        Ok(Reply::Done)
    }

    pub fn render(&self) -> ShellView {
        let menu = Destination::ALL
            .into_iter()
            .map(|destination| {
                let active = destination == self.current;
                MenuItem {
                    destination,
                    label: destination.title(),
                    icon: destination.icon(active),
                    active,
                }
            })
            .collect();

        ShellView {
            header_title: self.current.title(),
            drawer_open: self.drawer_open,
            menu,
            screen: screens::render(self.current, self.form.as_ref()),
        }
    }

    fn mount(&mut self, destination: Destination) {
        if destination == Destination::Form {
            self.form = Some(FormController::driver_inquiry());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields;

    #[test]
    fn test_destination_parsing() {
        assert_eq!("form".parse::<Destination>(), Ok(Destination::Form));
        assert_eq!(" Settings ".parse::<Destination>(), Ok(Destination::Settings));
        assert_eq!(
            "inbox".parse::<Destination>(),
            Err(UnknownDestination("inbox".to_string()))
        );
    }

    #[test]
    fn test_icons_follow_focus() {
        assert_eq!(Destination::Form.icon(true), "document-text");
        assert_eq!(Destination::Form.icon(false), "document-text-outline");
    }

    #[test]
    fn test_form_mounts_and_unmounts() {
        let mut shell = Shell::with_defaults(Destination::Home);
        assert!(shell.form().is_none());

        assert!(shell.navigate(Destination::Form));
        shell
            .dispatch(ShellEvent::Form(FormEvent::SetValue {
                field: fields::FIRST_NAME.to_string(),
                value: "Jan".into(),
            }))
            .unwrap();
        assert_eq!(shell.form().unwrap().values().text(fields::FIRST_NAME), Some("Jan"));

        // Leaving discards the input, coming back starts fresh.
        shell.navigate(Destination::Profile);
        assert!(shell.form().is_none());
        shell.navigate(Destination::Form);
        assert_eq!(shell.form().unwrap().values().text(fields::FIRST_NAME), Some(""));
    }

    #[test]
    fn test_reselecting_keeps_form() {
        let mut shell = Shell::with_defaults(Destination::Form);
        shell
            .dispatch(ShellEvent::Form(FormEvent::ToggleFlag(fields::CONSENT.to_string())))
            .unwrap();
        assert!(!shell.navigate(Destination::Form));
        assert_eq!(shell.form().unwrap().values().flag(fields::CONSENT), Some(true));
    }

    #[test]
    fn test_form_events_need_form_screen() {
        let mut shell = Shell::with_defaults(Destination::Home);
        assert_eq!(
            shell.dispatch(ShellEvent::Form(FormEvent::Submit)),
            Err(ShellError::FormNotMounted)
        );
    }

    #[test]
    fn test_drawer_toggles_and_closes_on_navigation() {
        let mut shell = Shell::with_defaults(Destination::Home);
        shell.dispatch(ShellEvent::ToggleDrawer).unwrap();
        assert!(shell.drawer_open());
        shell.dispatch(ShellEvent::Navigate(Destination::Settings)).unwrap();
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_render_marks_active_entry() {
        let shell = Shell::with_defaults(Destination::Profile);
        let view = shell.render();
        assert_eq!(view.header_title, "Profil");
        let active: Vec<_> = view.menu.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].destination, Destination::Profile);
        assert_eq!(active[0].icon, "person");
        assert_eq!(view.menu[0].icon, "home-outline");
    }
}
