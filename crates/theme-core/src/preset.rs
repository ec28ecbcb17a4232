//! Named theme presets
//!
//! A preset is a named partial color scheme an admin applies in one action.
//! Applying one is a shallow merge into the current theme: slots the preset
//! names take its values, every other slot keeps its previous value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::{ColorError, Hsl};
use crate::theme::{Color, Theme, ThemeSlot};

/// A named partial color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name shown in the editor's preset picker
    pub name: String,
    /// Slot overrides; slots not present are left untouched on apply
    pub overrides: BTreeMap<ThemeSlot, Color>,
}

impl Preset {
    /// Create an empty preset
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), overrides: BTreeMap::new() }
    }

    /// Add a slot override
    pub fn with(mut self, slot: ThemeSlot, color: impl Into<Color>) -> Self {
        self.overrides.insert(slot, color.into());
        self
    }

    /// Merge this preset into `theme`
    ///
    /// Returns a new theme: overridden slots take the preset's values, all
    /// other slots (and the gradient direction) are unchanged. The preset
    /// wins on every slot it names.
    pub fn apply(&self, theme: &Theme) -> Theme {
        let mut merged = theme.clone();
        for (slot, color) in &self.overrides {
            merged.set_color(*slot, color.clone());
        }
        merged
    }

    /// Check that every override is a parseable HSL triplet
    pub fn validate(&self) -> Result<(), ColorError> {
        for color in self.overrides.values() {
            Hsl::parse(color)?;
        }
        Ok(())
    }
}

/// The builtin preset catalog, in picker order
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Ocean Blue")
            .with(ThemeSlot::Primary, "210 100% 60%")
            .with(ThemeSlot::Accent, "190 100% 65%")
            .with(ThemeSlot::GradientStart, "220 100% 55%")
            .with(ThemeSlot::GradientEnd, "180 95% 60%"),
        Preset::new("Royal Violet")
            .with(ThemeSlot::Primary, "270 85% 60%")
            .with(ThemeSlot::Accent, "320 85% 65%")
            .with(ThemeSlot::GradientStart, "270 85% 60%")
            .with(ThemeSlot::GradientEnd, "320 85% 65%"),
        Preset::new("Sunset Glow")
            .with(ThemeSlot::Primary, "15 90% 58%")
            .with(ThemeSlot::Accent, "340 85% 60%")
            .with(ThemeSlot::GradientStart, "25 95% 55%")
            .with(ThemeSlot::GradientEnd, "330 85% 55%"),
        Preset::new("Forest")
            .with(ThemeSlot::Primary, "150 60% 42%")
            .with(ThemeSlot::Accent, "90 55% 50%")
            .with(ThemeSlot::GradientStart, "160 65% 38%")
            .with(ThemeSlot::GradientEnd, "100 55% 45%"),
        Preset::new("Slate Mono")
            .with(ThemeSlot::Primary, "220 10% 45%")
            .with(ThemeSlot::Accent, "220 8% 60%")
            .with(ThemeSlot::GradientStart, "220 12% 35%")
            .with(ThemeSlot::GradientEnd, "220 8% 55%"),
    ]
}

/// Look up a builtin preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Option<Preset> {
    builtin_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
