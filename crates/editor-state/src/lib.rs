//! Admin editor state for Signage Studio
//!
//! This crate holds the state machine behind the back-office theme editor:
//!
//! - [`service`] - the explicit [`service::ThemeService`] the rest of the app
//!   reads the live theme from (get/set/subscribe/preview; no ambient
//!   context lookups)
//! - [`store`] - the [`store::ThemeStore`] persistence seam and its
//!   API-backed implementation
//! - [`history`] - the bounded, deduplicated history of applied themes
//! - [`editor`] - the [`editor::ThemeEditor`] session: draft buffer, preview
//!   mode, preset application, and the save flow

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod editor;
pub mod history;
pub mod service;
pub mod store;

pub use editor::{EditorError, ThemeEditor};
pub use history::ThemeHistory;
pub use service::ThemeService;
pub use store::{ApiThemeStore, StoreError, ThemeStore};
