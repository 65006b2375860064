use super::{Action, Node, ScreenView};
use crate::navigation::Destination;

pub fn render() -> ScreenView {
    ScreenView::centered(vec![
        Node::Title("Vítejte v aplikaci".to_string()),
        Node::Button {
            label: "Přejít na formulář".to_string(),
            action: Action::Navigate(Destination::Form),
        },
    ])
}
