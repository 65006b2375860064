//! Profile and settings screens, both placeholders for now

use super::{Node, ScreenView};

pub fn profile() -> ScreenView {
    placeholder("Profil", "Zde bude obsah profilu")
}

pub fn settings() -> ScreenView {
    placeholder("Nastavení", "Zde bude obsah nastavení")
}

fn placeholder(title: &str, body: &str) -> ScreenView {
    ScreenView::centered(vec![
        Node::Title(title.to_string()),
        Node::Text(body.to_string()),
    ])
}
