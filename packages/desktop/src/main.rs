use dioxus::prelude::*;

use ui::{AuthProvider, Route};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}
