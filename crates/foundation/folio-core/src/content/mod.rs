//! Site content - everything the portfolio displays
//!
//! Content is an injected value: [`SiteContent::builtin`] ships the author's
//! own biography, and [`SiteContent::load`] swaps in a YAML file with the same
//! shape. Catalog invariants are checked when the catalogs are built.

mod builtin;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Catalog, CatalogConfig, CatalogKind};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub blog: CatalogConfig,
    #[serde(default)]
    pub projects: CatalogConfig,
    #[serde(default)]
    pub experience: CatalogConfig,
    #[serde(default)]
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// The three listing catalogs, built and validated
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub blog: Catalog,
    pub projects: Catalog,
    pub experience: Catalog,
}

impl Catalogs {
    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Blog => &self.blog,
            CatalogKind::Projects => &self.projects,
            CatalogKind::Experience => &self.experience,
        }
    }
}

impl SiteContent {
    /// The author's own portfolio content
    pub fn builtin() -> Self {
        builtin::content()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read content from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let content = Self::from_yaml_str(&yaml)?;
        tracing::info!(path = %path.display(), "loaded site content");
        Ok(content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn catalog_config(&self, kind: CatalogKind) -> &CatalogConfig {
        match kind {
            CatalogKind::Blog => &self.blog,
            CatalogKind::Projects => &self.projects,
            CatalogKind::Experience => &self.experience,
        }
    }

    /// Build one catalog from its configuration
    pub fn catalog(&self, kind: CatalogKind) -> Result<Catalog> {
        Catalog::from_config(kind, self.catalog_config(kind).clone())
    }

    /// Build every catalog, failing on the first invariant violation
    pub fn catalogs(&self) -> Result<Catalogs> {
        Ok(Catalogs {
            blog: self.catalog(CatalogKind::Blog)?,
            projects: self.catalog(CatalogKind::Projects)?,
            experience: self.catalog(CatalogKind::Experience)?,
        })
    }

    /// Check every catalog invariant without keeping the catalogs
    pub fn validate(&self) -> Result<()> {
        self.catalogs().map(|_| ())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}
