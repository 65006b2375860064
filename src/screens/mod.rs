//! Screen descriptions
//!
//! Every screen is a pure function from state to a [`ScreenView`]. Front-ends
//! (the terminal driver and the browser UI) only draw these descriptions and
//! route user input back as events; no screen keeps render state of its own.

pub mod form;
pub mod home;
pub mod info;

use crate::form::{Dialog, FormController};
use crate::navigation::Destination;

/// Keyboard hint for a text input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Keyboard {
    #[default]
    Default,
    Phone,
    Email,
    Numeric,
}

/// What a button does when pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Destination),
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputNode {
    pub field: &'static str,
    pub label: String,
    pub value: String,
    pub keyboard: Keyboard,
    pub multiline: bool,
    /// Visible error, already filtered by the display policy
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxNode {
    pub field: &'static str,
    /// Set for multi-select options, `None` for a boolean field
    pub option: Option<String>,
    pub label: String,
    pub checked: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Title(String),
    Subtitle(String),
    SectionTitle(String),
    Text(String),
    Input(InputNode),
    Checkbox(CheckboxNode),
    Button { label: String, action: Action },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Content centred on the screen
    #[default]
    Centered,
    /// Long content in a scroll view
    Scroll,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenView {
    pub layout: Layout,
    pub nodes: Vec<Node>,
    /// Modal dialog drawn over the screen
    pub dialog: Option<Dialog>,
}

impl ScreenView {
    pub fn centered(nodes: Vec<Node>) -> Self {
        Self {
            layout: Layout::Centered,
            nodes,
            dialog: None,
        }
    }

    /// First input or checkbox bound to `field`
    pub fn find_field(&self, field: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| match node {
            Node::Input(input) => input.field == field,
            Node::Checkbox(checkbox) => checkbox.field == field,
            _ => false,
        })
    }

    /// Messages of every visible field error, in display order
    pub fn visible_errors(&self) -> Vec<(&'static str, &str)> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Input(InputNode { field, error: Some(error), .. }) => {
                    Some((*field, error.as_str()))
                }
                Node::Checkbox(CheckboxNode { field, error: Some(error), .. }) => {
                    Some((*field, error.as_str()))
                }
                _ => None,
            })
            .collect()
    }
}

/// Render the screen for `destination`.
/// `form` is the mounted form controller, present only on the form screen.
pub fn render(destination: Destination, form: Option<&FormController>) -> ScreenView {
    match (destination, form) {
        (Destination::Home, _) => home::render(),
        (Destination::Form, Some(form)) => form::render(form),
        (Destination::Form, None) => ScreenView::default(),
        (Destination::Profile, _) => info::profile(),
        (Destination::Settings, _) => info::settings(),
    }
}
