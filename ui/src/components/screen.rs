//! Screen renderer
//!
//! Draws the node list of a [`ScreenView`]. Nodes are keyed by the field they
//! bind, so inputs keep their DOM element (and focus) while the user types.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mapler::form::FieldValue;
use mapler::navigation::{Destination, FormEvent, ShellEvent, THEME};
use mapler::screens::{Action, Keyboard, Layout, Node, ScreenView};

use crate::AppState;

/// Route view; entering the route mounts `destination` in the shell
#[component]
pub fn Screen(destination: Destination) -> impl IntoView {
    let state = expect_context::<AppState>();

    Effect::new(move || {
        state.shell.update(|shell| {
            shell.navigate(destination);
        });
    });

    let screen = Memo::new(move |_| state.view.with(|view| view.screen.clone()));
    let layout = move || {
        screen.with(|screen| match screen.layout {
            Layout::Centered => "flex flex-col items-center justify-center h-full p-6",
            Layout::Scroll => "max-w-xl mx-auto p-6",
        })
    };

    view! {
        <div class=layout>
            <For
                each=move || {
                    screen.with(|screen| {
                        screen
                            .nodes
                            .iter()
                            .enumerate()
                            .map(|(index, node)| (index, node_key(node)))
                            .collect::<Vec<_>>()
                    })
                }
                key=|entry| entry.clone()
                children=move |(index, _)| view! { <NodeView screen=screen index=index/> }
            />
        </div>
    }
}

fn node_key(node: &Node) -> String {
    match node {
        Node::Title(text) => format!("title:{}", text),
        Node::Subtitle(text) => format!("subtitle:{}", text),
        Node::SectionTitle(text) => format!("section:{}", text),
        Node::Text(text) => format!("text:{}", text),
        Node::Input(input) => format!("input:{}", input.field),
        Node::Checkbox(checkbox) => format!(
            "checkbox:{}:{}",
            checkbox.field,
            checkbox.option.as_deref().unwrap_or_default()
        ),
        Node::Button { label, .. } => format!("button:{}", label),
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[component]
fn NodeView(screen: Memo<ScreenView>, index: usize) -> impl IntoView {
    let node = move || screen.with(|screen| screen.nodes.get(index).cloned());

    let Some(initial) = screen.with_untracked(|screen| screen.nodes.get(index).cloned()) else {
        return ().into_any();
    };

    match initial {
        Node::Title(text) => view! {
            <h2 class="text-2xl font-bold text-center mb-2">{text}</h2>
        }
        .into_any(),
        Node::Subtitle(text) => view! {
            <p class="text-center text-gray-500 mb-6">{text}</p>
        }
        .into_any(),
        Node::SectionTitle(text) => view! {
            <h3 class="font-semibold mt-4 mb-2">{text}</h3>
        }
        .into_any(),
        Node::Text(text) => view! { <p class="text-gray-700">{text}</p> }.into_any(),
        Node::Input(input) => {
            let value = move || match node() {
                Some(Node::Input(input)) => input.value,
                _ => String::new(),
            };
            let error = move || match node() {
                Some(Node::Input(input)) => input.error,
                _ => None,
            };
            view! {
                <TextInput
                    field=input.field
                    label=input.label
                    keyboard=input.keyboard
                    multiline=input.multiline
                    value=Signal::derive(value)
                    error=Signal::derive(error)
                />
            }
            .into_any()
        }
        Node::Checkbox(checkbox) => {
            let checked = move || matches!(node(), Some(Node::Checkbox(c)) if c.checked);
            let error = move || match node() {
                Some(Node::Checkbox(checkbox)) => checkbox.error,
                _ => None,
            };
            view! {
                <CheckboxInput
                    field=checkbox.field
                    option=checkbox.option
                    label=checkbox.label
                    checked=Signal::derive(checked)
                    error=Signal::derive(error)
                />
            }
            .into_any()
        }
        Node::Button { label, action } => view! { <ActionButton label=label action=action/> }.into_any(),
    }
}

// ============================================================================
// Text Input
// ============================================================================

#[component]
fn TextInput(
    field: &'static str,
    label: String,
    keyboard: Keyboard,
    multiline: bool,
    value: Signal<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_input = move |text: String| {
        state.dispatch(ShellEvent::Form(FormEvent::SetValue {
            field: field.to_string(),
            value: FieldValue::Text(text),
        }));
    };
    let on_blur = move || state.dispatch(ShellEvent::Form(FormEvent::MarkTouched(field.to_string())));

    let (input_type, input_mode) = match keyboard {
        Keyboard::Default => ("text", "text"),
        Keyboard::Phone => ("tel", "tel"),
        Keyboard::Email => ("email", "email"),
        // Plain text keeps unparsable input visible so validation can report it
        Keyboard::Numeric => ("text", "decimal"),
    };
    let base = "w-full px-3 py-2 bg-white border rounded focus:outline-none focus:ring-2 focus:ring-orange-500";

    let control = if multiline {
        view! {
            <textarea
                class=base
                rows="4"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:blur=move |_| on_blur()
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                inputmode=input_mode
                class=base
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:blur=move |_| on_blur()
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            <label class="block text-sm text-gray-700 mb-1">{label}</label>
            {control}
            {move || error.get().map(|message| view! {
                <p class="text-red-600 text-xs mt-1">{message}</p>
            })}
        </div>
    }
}

// ============================================================================
// Checkbox
// ============================================================================

/// Boolean field when `option` is `None`, otherwise one multi-select option
#[component]
fn CheckboxInput(
    field: &'static str,
    option: Option<String>,
    label: String,
    checked: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_change = move |_: leptos::ev::Event| {
        let event = match &option {
            Some(option) => FormEvent::ToggleOption {
                field: field.to_string(),
                option: option.clone(),
            },
            None => FormEvent::ToggleFlag(field.to_string()),
        };
        state.dispatch(ShellEvent::Form(event));
    };

    view! {
        <div class="mb-3">
            <label class="flex items-center gap-3 bg-white rounded p-3 cursor-pointer">
                <input type="checkbox" prop:checked=move || checked.get() on:change=on_change/>
                <span class="text-sm">{label}</span>
            </label>
            {move || error.get().map(|message| view! {
                <p class="text-red-600 text-xs mt-1 px-3">{message}</p>
            })}
        </div>
    }
}

// ============================================================================
// Button
// ============================================================================

#[component]
fn ActionButton(label: String, action: Action) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let on_click = move |_: leptos::ev::MouseEvent| match action {
        Action::Navigate(destination) => navigate(destination.path(), Default::default()),
        Action::Submit => state.dispatch(ShellEvent::Form(FormEvent::Submit)),
    };

    view! {
        <button
            class="w-full mt-4 px-4 py-3 rounded text-white font-semibold"
            style:background-color=THEME.header_background
            on:click=on_click
        >
            {label}
        </button>
    }
}
