//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod state;
pub use state::{dispatch, use_app_state, use_config, use_translate, AppProvider};

mod delay;
pub use delay::{scheduler, PlatformDelay};

mod appearance;
pub use appearance::apply_appearance;

mod header;
pub use header::Header;

mod sidebar;
pub use sidebar::AppSidebar;

mod shell;
pub use shell::AppShell;

pub mod views;
