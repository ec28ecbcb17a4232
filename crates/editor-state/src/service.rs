//! Live theme state shared across the application
//!
//! `ThemeService` replaces ambient theme context: it is an explicit object,
//! injected where needed, holding the currently applied theme and
//! broadcasting what subscribers should render. Previewing sends a theme to
//! subscribers without applying it, so the editor can show changes live
//! before anything is persisted.

use parking_lot::RwLock;
use theme_core::theme::Theme;
use tokio::sync::watch;

/// Explicit theme state with get/set/subscribe/preview operations
pub struct ThemeService {
    /// The applied theme, the one the backend knows about
    current: RwLock<Theme>,
    /// Broadcasts the rendered theme (applied, or a live preview)
    tx: watch::Sender<Theme>,
}

impl ThemeService {
    /// Create a service with an initial applied theme
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self { current: RwLock::new(initial), tx }
    }

    /// The currently applied theme
    pub fn get(&self) -> Theme {
        self.current.read().clone()
    }

    /// Apply a theme: update current and re-render subscribers
    pub fn set(&self, theme: Theme) {
        *self.current.write() = theme.clone();
        self.tx.send_replace(theme);
    }

    /// Render `theme` live without applying it
    pub fn preview(&self, theme: Theme) {
        self.tx.send_replace(theme);
    }

    /// Drop any live preview and re-render the applied theme
    pub fn end_preview(&self) {
        self.tx.send_replace(self.get());
    }

    /// Subscribe to rendered-theme updates
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }

    /// What subscribers are currently rendering (applied or previewed)
    pub fn rendered(&self) -> Theme {
        self.tx.borrow().clone()
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
