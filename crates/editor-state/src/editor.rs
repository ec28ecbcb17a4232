//! The admin theme editor session
//!
//! One editor session per signed-in admin. Edits accumulate in a draft
//! buffer; preview mode renders the draft live through the [`ThemeService`]
//! without persisting anything; `save` pushes the draft through the
//! [`ThemeStore`], records it in history, and applies it. A failed save
//! leaves the draft and preview untouched so the admin can retry.

use std::sync::Arc;
use storage::kv::{KvError, KvStore};
use theme_core::color::{hex_to_hsl, ColorError, Hsl};
use theme_core::preset::Preset;
use theme_core::theme::{GradientDirection, Theme, ThemeSlot};
use thiserror::Error;

use crate::history::ThemeHistory;
use crate::service::ThemeService;
use crate::store::{StoreError, ThemeStore};

/// Errors surfaced by editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    /// A color input did not parse; the draft was not changed
    #[error("Invalid color value: {0}")]
    Color(#[from] ColorError),

    /// The save request failed; the draft is preserved for retry
    #[error("Theme save failed: {0}")]
    Save(#[from] StoreError),

    /// History could not be persisted
    #[error("History persistence failed: {0}")]
    History(#[from] KvError),

    /// `load_from_history` was asked for an entry that does not exist
    #[error("No history entry at index {0}")]
    NoSuchHistoryEntry(usize),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// The theme editor session state
pub struct ThemeEditor<S> {
    store: Arc<S>,
    service: Arc<ThemeService>,
    history: ThemeHistory,
    draft: Theme,
    preview: bool,
    saving: bool,
}

impl<S: ThemeStore> ThemeEditor<S> {
    /// Mount the editor: fetch the applied theme and load local history
    ///
    /// The fetched theme seeds both the service (so the rest of the app
    /// renders it) and the draft buffer the admin edits.
    pub async fn mount(
        store: Arc<S>,
        service: Arc<ThemeService>,
        kv: Arc<KvStore>,
    ) -> Result<Self> {
        let theme = store.fetch_theme().await?;
        service.set(theme.clone());
        let history = ThemeHistory::load(kv);

        Ok(Self { store, service, history, draft: theme, preview: false, saving: false })
    }

    /// The draft theme being edited
    pub fn draft(&self) -> &Theme {
        &self.draft
    }

    /// The history of applied themes
    pub fn history(&self) -> &ThemeHistory {
        &self.history
    }

    /// Whether preview mode is active
    pub fn is_previewing(&self) -> bool {
        self.preview
    }

    /// Whether a save is in flight (drives the editor's saving indicator)
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Set a color slot from an HSL triplet string
    ///
    /// The value is validated first; malformed or out-of-range input is
    /// rejected and the draft keeps its previous value.
    pub fn set_color(&mut self, slot: ThemeSlot, hsl: &str) -> Result<()> {
        Hsl::parse(hsl)?;
        self.draft.set_color(slot, hsl);
        self.refresh_preview();
        Ok(())
    }

    /// Set a color slot from a hex color control (`"#rrggbb"`)
    ///
    /// The adapter between the native color picker and the HSL storage form.
    pub fn set_color_hex(&mut self, slot: ThemeSlot, hex: &str) -> Result<()> {
        let hsl = hex_to_hsl(hex)?;
        self.draft.set_color(slot, hsl);
        self.refresh_preview();
        Ok(())
    }

    /// Set the hero gradient angle
    pub fn set_gradient_direction(&mut self, direction: GradientDirection) {
        self.draft.gradient_direction = direction;
        self.refresh_preview();
    }

    /// Merge a preset into the draft
    ///
    /// Slots the preset names take its values; everything else is unchanged.
    /// With preview mode active, the merged draft renders immediately,
    /// without being persisted.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.draft = preset.apply(&self.draft);
        self.refresh_preview();
    }

    /// Enter preview mode and render the current draft live
    pub fn begin_preview(&mut self) {
        self.preview = true;
        self.service.preview(self.draft.clone());
    }

    /// Leave preview mode; subscribers go back to the applied theme
    pub fn end_preview(&mut self) {
        self.preview = false;
        self.service.end_preview();
    }

    /// Discard draft edits and start over from the applied theme
    pub fn revert(&mut self) {
        self.draft = self.service.get();
        self.refresh_preview();
    }

    /// Copy history entry `index` into the draft; history order is unchanged
    pub fn load_from_history(&mut self, index: usize) -> Result<()> {
        let theme = self
            .history
            .recall(index)
            .ok_or(EditorError::NoSuchHistoryEntry(index))?;
        self.draft = theme;
        self.refresh_preview();
        Ok(())
    }

    /// Persist the draft and make it the applied theme
    ///
    /// On success the draft is recorded in history just before it becomes
    /// the applied theme. On failure nothing changes client-side: the draft
    /// (and any live preview) stays as-is and the error is surfaced so the
    /// admin can retry. The save is not retried automatically.
    pub async fn save(&mut self) -> Result<()> {
        self.saving = true;
        let result = self.store.save_theme(&self.draft).await;
        self.saving = false;

        match result {
            Ok(()) => {
                self.history.record(&self.draft)?;
                self.service.set(self.draft.clone());
                tracing::info!("theme applied");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "theme save failed; draft preserved");
                Err(err.into())
            }
        }
    }

    fn refresh_preview(&self) {
        if self.preview {
            self.service.preview(self.draft.clone());
        }
    }
}
