//! The site theme record
//!
//! The theme is a closed record: every color slot is enumerated up front and
//! carries a required default, so consumers never fall back through missing
//! keys at runtime. Color slots hold HSL triplet strings (see [`crate::color`]);
//! the gradient direction is an enumerated angle, not a color.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{ColorError, Hsl};

/// A color slot value, an HSL triplet string (e.g. `"270 85% 60%"`)
pub type Color = String;

/// Gradient angle for hero and banner backgrounds
///
/// One of a fixed set of angles; free-form angle strings are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GradientDirection {
    /// `0deg` - bottom to top
    #[serde(rename = "0deg")]
    Deg0,
    /// `45deg`
    #[serde(rename = "45deg")]
    Deg45,
    /// `90deg` - left to right
    #[serde(rename = "90deg")]
    Deg90,
    /// `135deg` - the default diagonal
    #[default]
    #[serde(rename = "135deg")]
    Deg135,
    /// `180deg` - top to bottom
    #[serde(rename = "180deg")]
    Deg180,
    /// `225deg`
    #[serde(rename = "225deg")]
    Deg225,
    /// `270deg` - right to left
    #[serde(rename = "270deg")]
    Deg270,
    /// `315deg`
    #[serde(rename = "315deg")]
    Deg315,
}

impl GradientDirection {
    /// All supported angles, ascending
    pub const ALL: [GradientDirection; 8] = [
        GradientDirection::Deg0,
        GradientDirection::Deg45,
        GradientDirection::Deg90,
        GradientDirection::Deg135,
        GradientDirection::Deg180,
        GradientDirection::Deg225,
        GradientDirection::Deg270,
        GradientDirection::Deg315,
    ];

    /// The CSS angle string, e.g. `"135deg"`
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientDirection::Deg0 => "0deg",
            GradientDirection::Deg45 => "45deg",
            GradientDirection::Deg90 => "90deg",
            GradientDirection::Deg135 => "135deg",
            GradientDirection::Deg180 => "180deg",
            GradientDirection::Deg225 => "225deg",
            GradientDirection::Deg270 => "270deg",
            GradientDirection::Deg315 => "315deg",
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GradientDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("Unknown gradient direction: {}", s))
    }
}

/// The color slots of a theme
///
/// `GradientDirection` is deliberately absent: it is an angle, not a color,
/// and is edited through its own setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeSlot {
    /// Primary brand color (buttons, links, active navigation)
    Primary,
    /// Accent color (highlights, badges, calls to action)
    Accent,
    /// Page background
    Background,
    /// Card and elevated-surface background
    Card,
    /// Default foreground on the page background
    Foreground,
    /// Muted/secondary foreground
    Muted,
    /// Border and divider color
    Border,
    /// Primary body text
    TextPrimary,
    /// Success text (confirmation banners, rating badges)
    TextSuccess,
    /// Warning text
    TextWarning,
    /// Hero gradient start color
    GradientStart,
    /// Hero gradient end color
    GradientEnd,
}

impl ThemeSlot {
    /// Every color slot, in display order
    pub const ALL: [ThemeSlot; 12] = [
        ThemeSlot::Primary,
        ThemeSlot::Accent,
        ThemeSlot::Background,
        ThemeSlot::Card,
        ThemeSlot::Foreground,
        ThemeSlot::Muted,
        ThemeSlot::Border,
        ThemeSlot::TextPrimary,
        ThemeSlot::TextSuccess,
        ThemeSlot::TextWarning,
        ThemeSlot::GradientStart,
        ThemeSlot::GradientEnd,
    ];

    /// The camelCase wire name of the slot
    pub fn name(&self) -> &'static str {
        match self {
            ThemeSlot::Primary => "primary",
            ThemeSlot::Accent => "accent",
            ThemeSlot::Background => "background",
            ThemeSlot::Card => "card",
            ThemeSlot::Foreground => "foreground",
            ThemeSlot::Muted => "muted",
            ThemeSlot::Border => "border",
            ThemeSlot::TextPrimary => "textPrimary",
            ThemeSlot::TextSuccess => "textSuccess",
            ThemeSlot::TextWarning => "textWarning",
            ThemeSlot::GradientStart => "gradientStart",
            ThemeSlot::GradientEnd => "gradientEnd",
        }
    }
}

impl fmt::Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The complete site theme
///
/// Serializes to the camelCase JSON shape exchanged with the back-office API.
/// Missing fields deserialize to their defaults, so older persisted themes
/// keep loading after new slots are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Primary brand color
    pub primary: Color,
    /// Accent color
    pub accent: Color,
    /// Page background
    pub background: Color,
    /// Card background
    pub card: Color,
    /// Default foreground
    pub foreground: Color,
    /// Muted foreground
    pub muted: Color,
    /// Border color
    pub border: Color,
    /// Primary body text
    pub text_primary: Color,
    /// Success text
    pub text_success: Color,
    /// Warning text
    pub text_warning: Color,
    /// Hero gradient start
    pub gradient_start: Color,
    /// Hero gradient end
    pub gradient_end: Color,
    /// Hero gradient angle
    pub gradient_direction: GradientDirection,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "270 85% 60%".to_string(),
            accent: "320 85% 65%".to_string(),
            background: "240 18% 10%".to_string(),
            card: "240 16% 14%".to_string(),
            foreground: "0 0% 98%".to_string(),
            muted: "240 10% 60%".to_string(),
            border: "240 14% 22%".to_string(),
            text_primary: "0 0% 98%".to_string(),
            text_success: "150 65% 45%".to_string(),
            text_warning: "40 95% 55%".to_string(),
            gradient_start: "270 85% 60%".to_string(),
            gradient_end: "320 85% 65%".to_string(),
            gradient_direction: GradientDirection::default(),
        }
    }
}

impl Theme {
    /// Read a color slot
    pub fn color(&self, slot: ThemeSlot) -> &str {
        match slot {
            ThemeSlot::Primary => &self.primary,
            ThemeSlot::Accent => &self.accent,
            ThemeSlot::Background => &self.background,
            ThemeSlot::Card => &self.card,
            ThemeSlot::Foreground => &self.foreground,
            ThemeSlot::Muted => &self.muted,
            ThemeSlot::Border => &self.border,
            ThemeSlot::TextPrimary => &self.text_primary,
            ThemeSlot::TextSuccess => &self.text_success,
            ThemeSlot::TextWarning => &self.text_warning,
            ThemeSlot::GradientStart => &self.gradient_start,
            ThemeSlot::GradientEnd => &self.gradient_end,
        }
    }

    /// Write a color slot
    ///
    /// The value is stored as-is; callers validate with [`Hsl::parse`] first
    /// when the value comes from user input.
    pub fn set_color(&mut self, slot: ThemeSlot, value: impl Into<Color>) {
        let value = value.into();
        match slot {
            ThemeSlot::Primary => self.primary = value,
            ThemeSlot::Accent => self.accent = value,
            ThemeSlot::Background => self.background = value,
            ThemeSlot::Card => self.card = value,
            ThemeSlot::Foreground => self.foreground = value,
            ThemeSlot::Muted => self.muted = value,
            ThemeSlot::Border => self.border = value,
            ThemeSlot::TextPrimary => self.text_primary = value,
            ThemeSlot::TextSuccess => self.text_success = value,
            ThemeSlot::TextWarning => self.text_warning = value,
            ThemeSlot::GradientStart => self.gradient_start = value,
            ThemeSlot::GradientEnd => self.gradient_end = value,
        }
    }

    /// Check that every color slot holds a parseable HSL triplet
    pub fn validate(&self) -> Result<(), ColorError> {
        for slot in ThemeSlot::ALL {
            Hsl::parse(self.color(slot))?;
        }
        Ok(())
    }
}
