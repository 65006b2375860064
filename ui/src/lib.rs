use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use mapler::navigation::{Destination, Shell, ShellEvent, ShellView};

mod components;

use components::dialog::DialogOverlay;
use components::drawer::{Drawer, Header};
use components::screen::Screen;

/// Shell state shared through context by every component
#[derive(Clone, Copy)]
pub struct AppState {
    pub shell: RwSignal<Shell>,
    pub view: Memo<ShellView>,
}

impl AppState {
    fn new(initial: Destination) -> Self {
        let shell = RwSignal::new(Shell::with_defaults(initial));
        let view = Memo::new(move |_| shell.with(|shell| shell.render()));
        Self { shell, view }
    }

    pub fn dispatch(&self, event: ShellEvent) {
        self.shell.update(|shell| match shell.dispatch(event) {
            Ok(reply) => log::debug!("{:?}", reply),
            Err(e) => log::warn!("Event rejected: {}", e),
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(Destination::Home);
    provide_context(state);

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                <Drawer/>

                <div class="flex-1 flex flex-col min-w-0">
                    <Header/>
                    <main class="flex-1 overflow-y-auto">
                        <Routes fallback=|| "Stránka nenalezena.">
                            <Route path=path!("/") view=|| view! { <Screen destination=Destination::Home/> }/>
                            <Route path=path!("/form") view=|| view! { <Screen destination=Destination::Form/> }/>
                            <Route path=path!("/profile") view=|| view! { <Screen destination=Destination::Profile/> }/>
                            <Route path=path!("/settings") view=|| view! { <Screen destination=Destination::Settings/> }/>
                        </Routes>
                    </main>
                </div>

                <DialogOverlay/>
            </div>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Submission records are logged through `tracing`, forwarded to the console
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
