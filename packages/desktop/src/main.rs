use std::path::PathBuf;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use guidance::GuidanceConfig;
use ui::{AppProvider, AppShell};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    let config = load_config();
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GuidanceConfig::filename()))
}

/// Read `career-corrector.toml` from the platform config directory.
///
/// A missing file means defaults. A malformed one is reported and ignored.
fn load_config() -> GuidanceConfig {
    let Some(path) = config_path() else {
        return GuidanceConfig::default();
    };
    let Ok(text) = std::fs::read_to_string(&path) else {
        return GuidanceConfig::default();
    };
    match GuidanceConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring config file: {e}");
            GuidanceConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<GuidanceConfig>();
    rsx! {
        AppProvider {
            config,
            AppShell {}
        }
    }
}
