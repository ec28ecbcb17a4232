//! Theming domain for Signage Studio
//!
//! This crate holds the pure theming model shared by the public site renderer
//! and the admin back-office editor:
//!
//! - [`color`] - HSL⇄hex conversion and the HSL triplet parser
//! - [`theme`] - the closed [`theme::Theme`] record and its color slots
//! - [`preset`] - named partial color schemes and the builtin catalog
//!
//! Everything here is synchronous and side-effect free; persistence and
//! editor state live in the `storage` and `editor-state` crates.
//!
//! # Example
//!
//! ```rust
//! use theme_core::color::hsl_to_hex;
//! use theme_core::preset::find_preset;
//! use theme_core::theme::{Theme, ThemeSlot};
//!
//! let theme = Theme::default();
//! let ocean = find_preset("Ocean Blue").unwrap();
//! let merged = ocean.apply(&theme);
//!
//! assert_eq!(merged.color(ThemeSlot::Primary), "210 100% 60%");
//! assert_eq!(hsl_to_hex(merged.color(ThemeSlot::Primary)).unwrap(), "#3399ff");
//! // Slots the preset does not name are untouched.
//! assert_eq!(merged.color(ThemeSlot::Background), theme.color(ThemeSlot::Background));
//! ```

pub mod color;
pub mod preset;
pub mod theme;

pub use color::{hex_to_hsl, hsl_to_hex, ColorError, Hsl};
pub use preset::{builtin_presets, find_preset, Preset};
pub use theme::{GradientDirection, Theme, ThemeSlot};
