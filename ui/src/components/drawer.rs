//! Header bar and drawer menu

use leptos::prelude::*;
use leptos_router::components::A;
use mapler::navigation::{MenuItem, ShellEvent, THEME};

use crate::AppState;

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header
            class="flex items-center gap-4 px-4 py-3 shadow"
            style:background-color=THEME.header_background
            style:color=THEME.header_tint
        >
            <button
                class="text-xl leading-none"
                title="Menu"
                on:click=move |_| state.dispatch(ShellEvent::ToggleDrawer)
            >
                "☰"
            </button>
            <h1 class="text-lg font-bold">
                {move || state.view.with(|view| view.header_title)}
            </h1>
        </header>
    }
}

#[component]
pub fn Drawer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let open = Memo::new(move |_| state.view.with(|view| view.drawer_open));

    view! {
        <aside
            class="w-64 bg-white border-r border-gray-200 p-4 flex-col"
            class:flex=move || open.get()
            class:hidden=move || !open.get()
        >
            <h2 class="text-xl font-bold mb-6" style:color=THEME.header_background>"Mapler"</h2>
            <nav class="space-y-1 flex-1">
                <For
                    each=move || state.view.with(|view| view.menu.clone())
                    key=|item| (item.destination, item.active)
                    children=move |item: MenuItem| view! { <MenuLink item=item/> }
                />
            </nav>
            <div class="text-xs text-gray-400 mt-4">"Mapler s.r.o."</div>
        </aside>
    }
}

#[component]
fn MenuLink(item: MenuItem) -> impl IntoView {
    let tint = if item.active {
        THEME.drawer_active_tint
    } else {
        THEME.drawer_inactive_tint
    };
    let weight = if item.active { "font-semibold" } else { "" };

    view! {
        <A
            href=item.destination.path()
            attr:class=format!("flex items-center gap-3 p-2 rounded hover:bg-gray-100 transition-colors {}", weight)
            attr:style=format!("color: {}", tint)
        >
            <span class="text-xs w-24 truncate opacity-60" data-icon=item.icon>{item.icon}</span>
            <span>{item.label}</span>
        </A>
    }
}
