//! Driver inquiry form screen

use super::{Action, CheckboxNode, InputNode, Keyboard, Layout, Node, ScreenView};
use crate::form::{FieldKind, FieldSpec, FormController};

pub const TITLE: &str = "Poptávka řidiče C+E";
pub const SUBTITLE: &str = "Mapler s.r.o.";
pub const SUBMIT_LABEL: &str = "Odeslat poptávku (TEST)";

pub fn render(form: &FormController) -> ScreenView {
    let mut nodes = vec![
        Node::Title(TITLE.to_string()),
        Node::Subtitle(SUBTITLE.to_string()),
    ];

    for spec in form.schema().fields() {
        render_field(form, spec, &mut nodes);
    }

    nodes.push(Node::Button {
        label: SUBMIT_LABEL.to_string(),
        action: Action::Submit,
    });

    ScreenView {
        layout: Layout::Scroll,
        nodes,
        dialog: form.dialog().cloned(),
    }
}

fn render_field(form: &FormController, spec: &FieldSpec, nodes: &mut Vec<Node>) {
    let values = form.values();
    let error = form.visible_error(spec.name).map(ToString::to_string);

    match &spec.kind {
        FieldKind::Boolean => nodes.push(Node::Checkbox(CheckboxNode {
            field: spec.name,
            option: None,
            label: spec.label.to_string(),
            checked: values.flag(spec.name).unwrap_or(false),
            error,
        })),
        FieldKind::MultiSelect { options } => {
            nodes.push(Node::SectionTitle(spec.label.to_string()));
            let selected = values.selection(spec.name).unwrap_or_default();
            for option in options.iter() {
                nodes.push(Node::Checkbox(CheckboxNode {
                    field: spec.name,
                    option: Some(option.to_string()),
                    label: option.to_string(),
                    checked: selected.iter().any(|item| item == option),
                    error: error.clone(),
                }));
            }
        }
        kind => {
            let keyboard = match kind {
                FieldKind::Phone => Keyboard::Phone,
                FieldKind::Email => Keyboard::Email,
                FieldKind::Number => Keyboard::Numeric,
                _ => Keyboard::Default,
            };
            nodes.push(Node::Input(InputNode {
                field: spec.name,
                label: spec.label.to_string(),
                value: values.text(spec.name).unwrap_or_default().to_string(),
                keyboard,
                multiline: matches!(kind, FieldKind::Text { multiline: true }),
                error,
            }));
        }
    }
}
