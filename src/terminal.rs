//! Plain-text rendering of the shell for the terminal front-end

use std::fmt;

use crate::form::{Acknowledged, Dialog, SubmitOutcome};
use crate::navigation::{Reply, ShellView};
use crate::screens::{Action, Node, ScreenView};

pub fn render(view: &ShellView) -> String {
    ShellText(view).to_string()
}

/// Display adapter drawing a whole shell view as text
pub struct ShellText<'a>(pub &'a ShellView);

impl fmt::Display for ShellText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "==== {} ====", view.header_title)?;
        if view.drawer_open {
            for item in &view.menu {
                let marker = if item.active { '>' } else { ' ' };
                writeln!(f, " {} {} ({})", marker, item.label, item.destination.route())?;
            }
            writeln!(f, "----")?;
        }

        write_screen(f, &view.screen)
    }
}

fn write_screen(f: &mut fmt::Formatter<'_>, screen: &ScreenView) -> fmt::Result {
    for node in &screen.nodes {
        write_node(f, node)?;
    }
    match &screen.dialog {
        Some(dialog) => write_dialog(f, dialog),
        None => Ok(()),
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Title(text) => writeln!(f, "# {}", text),
        Node::Subtitle(text) => writeln!(f, "  {}", text),
        Node::SectionTitle(text) => writeln!(f, "\n{}", text),
        Node::Text(text) => writeln!(f, "{}", text),
        Node::Input(input) => {
            writeln!(f, "{} [{}]: {}", input.label, input.field, input.value)?;
            write_error(f, input.error.as_deref())
        }
        Node::Checkbox(checkbox) => {
            let mark = if checkbox.checked { 'x' } else { ' ' };
            writeln!(f, "[{}] {} [{}]", mark, checkbox.label, checkbox.field)?;
            write_error(f, checkbox.error.as_deref())
        }
        Node::Button { label, action } => match action {
            Action::Navigate(destination) => {
                writeln!(f, "\n<{}>  (go {})", label, destination.route())
            }
            Action::Submit => writeln!(f, "\n<{}>  (submit)", label),
        },
    }
}

fn write_error(f: &mut fmt::Formatter<'_>, error: Option<&str>) -> fmt::Result {
    match error {
        Some(error) => writeln!(f, "  ! {}", error),
        None => Ok(()),
    }
}

fn write_dialog(f: &mut fmt::Formatter<'_>, dialog: &Dialog) -> fmt::Result {
    writeln!(f, "\n+---- {} ----", dialog.title)?;
    for line in dialog.message.lines() {
        writeln!(f, "| {}", line)?;
    }
    writeln!(f, "+---- <{}> (ok)", dialog.button)
}

/// Short status line for a reply, if it deserves one
pub fn describe(reply: &Reply) -> Option<String> {
    match reply {
        Reply::Done => None,
        Reply::Submitted(SubmitOutcome::Rejected(errors)) => Some(format!(
            "Formulář obsahuje chyby ({}).",
            errors.len()
        )),
        Reply::Submitted(SubmitOutcome::Busy) => {
            Some("Nejprve potvrďte otevřený dialog.".to_string())
        }
        Reply::Submitted(_) => None,
        Reply::Acknowledged(Acknowledged::Reset) => Some("Formulář byl resetován.".to_string()),
        Reply::Acknowledged(_) => None,
    }
}
