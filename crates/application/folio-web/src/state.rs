//! Application state for the portfolio server

use folio_config::SiteConfig;
use folio_core::content::Catalogs;
use folio_core::SiteContent;

use crate::Result;

/// Shared, read-only state. Catalogs are built once at startup and never mutated.
pub struct AppState {
    pub content: SiteContent,
    pub catalogs: Catalogs,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Build state from content, validating every catalog
    pub fn new(content: SiteContent) -> Result<Self> {
        let catalogs = content.catalogs()?;
        tracing::info!(
            blog = catalogs.blog.len(),
            projects = catalogs.projects.len(),
            experience = catalogs.experience.len(),
            "catalogs loaded"
        );
        Ok(Self {
            content,
            catalogs,
            started_at: chrono::Utc::now(),
        })
    }

    /// Load the configured content file, or fall back to the built-in portfolio
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let content = match &config.content {
            Some(path) => SiteContent::load(path)?,
            None => SiteContent::builtin(),
        };
        Self::new(content)
    }

    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}
