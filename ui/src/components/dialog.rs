//! Modal dialog of the form screen

use leptos::prelude::*;
use mapler::form::DialogKind;
use mapler::navigation::{FormEvent, ShellEvent, THEME};

use crate::AppState;

/// Draws the dialog of the current screen, if any. Pressing the button
/// acknowledges it; a confirmation resets the form.
#[component]
pub fn DialogOverlay() -> impl IntoView {
    let state = expect_context::<AppState>();
    let dialog = Memo::new(move |_| state.view.with(|view| view.screen.dialog.clone()));

    move || {
        dialog.get().map(|dialog| {
            let failed = dialog.kind == DialogKind::Failure;
            view! {
                <div class="fixed inset-0 bg-black/40 flex items-center justify-center p-4">
                    <div class="bg-white rounded-lg shadow-lg p-6 max-w-md w-full">
                        <h3 class="text-lg font-bold mb-2" class:text-red-600=failed>
                            {dialog.title}
                        </h3>
                        <p class="whitespace-pre-line text-sm text-gray-700">{dialog.message}</p>
                        <div class="flex justify-end mt-4">
                            <button
                                class="px-4 py-2 rounded text-white font-semibold"
                                style:background-color=THEME.header_background
                                on:click=move |_| state.dispatch(ShellEvent::Form(FormEvent::Acknowledge))
                            >
                                {dialog.button}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
