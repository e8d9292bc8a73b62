use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use guidance::GuidanceConfig;
use ui::{AppProvider, AppShell};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    dioxus::launch(App);
}

/// The browser build has no config file and always runs with the defaults.
#[component]
fn App() -> Element {
    tracing::info!("starting web client");
    rsx! {
        AppProvider {
            config: GuidanceConfig::default(),
            AppShell {}
        }
    }
}
