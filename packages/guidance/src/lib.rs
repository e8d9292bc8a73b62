//! # Guidance — domain logic for Career Corrector
//!
//! Everything the application computes lives here, free of any UI dependency,
//! so the Dioxus frontends in `packages/ui` only render state and forward events.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`app`] | [`AppState`] and its pure reducer over [`Action`]s (login, logout, section change, preference change, account save). |
//! | [`section`] | The ten sidebar sections and the single-value [`ViewRouter`]. |
//! | [`user`] | The [`User`] record and its typed preference tree. |
//! | [`preferences`] | One-leaf preference updates ([`PreferenceChange`]) and the document classes they imply. |
//! | [`session`] | Credential check for the development login. |
//! | [`quiz`] | The linear [`QuizEngine`] and its fixed career matches. |
//! | [`responder`] | Keyword responder mapping free text to canned paragraphs. |
//! | [`chat`] | Append-only [`Conversation`] log for the assistant panel. |
//! | [`catalog`] | Static colleges, scholarships, FAQs and events plus the shared search filter. |
//! | [`dashboard`] | Static dashboard statistics and lists. |
//! | [`profile`] | Profile form state. |
//! | [`resume`] | Resume editor state. |
//! | [`i18n`] | Locale dictionaries and [`resolve`](i18n::resolve). |
//! | [`tasks`] | Cancellable delayed work used to simulate latency. |
//! | [`config`] | `career-corrector.toml` settings. |
//! | [`error`] | Error types. |

pub mod app;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod profile;
pub mod quiz;
pub mod responder;
pub mod resume;
pub mod section;
pub mod session;
pub mod tasks;
pub mod user;

pub use app::{Action, AppState};
pub use chat::{ChatMessage, Conversation, Sender};
pub use config::GuidanceConfig;
pub use error::{ConfigError, LoginError};
pub use i18n::Locale;
pub use preferences::PreferenceChange;
pub use quiz::{Advance, CareerMatch, QuizEngine, QuizQuestion};
pub use section::{Section, ViewRouter};
pub use tasks::{Delay, Immediate, Scheduler, TaskHandle};
#[cfg(not(target_arch = "wasm32"))]
pub use tasks::TokioDelay;
pub use user::User;
