use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod error;
mod markup;
mod nasheeds;
mod playback;
mod search;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Tranquil Finder" }
        document::Meta { name: "theme-color", content: "#2563eb" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
