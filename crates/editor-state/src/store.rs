//! Persistence seam between the editor and the back-office API
//!
//! The editor talks to a `ThemeStore` trait rather than the HTTP client
//! directly, so tests can drive the save flow (including its failure paths)
//! without a network.

use async_trait::async_trait;
use theme_core::color::ColorError;
use theme_core::theme::Theme;
use thiserror::Error;

/// Errors from theme persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// The back-office API rejected or failed the request
    #[error("Theme API error: {0}")]
    Api(#[from] admin_api::ApiError),

    /// The backend returned a theme whose slots do not parse
    #[error("Persisted theme failed validation: {0}")]
    InvalidTheme(#[from] ColorError),
}

impl StoreError {
    /// Check if the failure is transient (worth the admin retrying as-is)
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Api(err) => err.is_network_error(),
            StoreError::InvalidTheme(_) => false,
        }
    }
}

/// Where applied themes are fetched from and saved to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Fetch the currently applied theme
    async fn fetch_theme(&self) -> Result<Theme, StoreError>;

    /// Persist `theme` as the applied theme
    async fn save_theme(&self, theme: &Theme) -> Result<(), StoreError>;
}

/// Production store backed by the back-office REST API
pub struct ApiThemeStore {
    client: admin_api::ApiClient,
}

impl ApiThemeStore {
    /// Wrap an API client
    pub fn new(client: admin_api::ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ThemeStore for ApiThemeStore {
    async fn fetch_theme(&self) -> Result<Theme, StoreError> {
        let theme = self.client.fetch_theme().await?;
        theme.validate()?;
        Ok(theme)
    }

    async fn save_theme(&self, theme: &Theme) -> Result<(), StoreError> {
        self.client.save_theme(theme).await?;
        Ok(())
    }
}
