//! Catalog entry definitions
//!
//! Every entry shares the filterable base (`id`, `title`, `category`,
//! `summary`) and carries a page-specific [`EntryDetail`] payload.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::catalog::CatalogKind;

/// Stable, opaque identifier of an entry within one catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One displayable item: a blog post, a project or an experience record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    /// Single category label used by the category filter
    pub category: String,
    /// Free text searched by the text filter
    pub summary: String,
    /// Display-only labels (post tags, technologies); never used for exclusion
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub detail: EntryDetail,
}

impl CatalogEntry {
    /// Which kind of catalog this entry belongs in
    pub fn kind(&self) -> CatalogKind {
        match self.detail {
            EntryDetail::Blog(_) => CatalogKind::Blog,
            EntryDetail::Project(_) => CatalogKind::Projects,
            EntryDetail::Experience(_) => CatalogKind::Experience,
        }
    }

    /// Featured flag for posts and projects; experience records are never featured
    pub fn is_featured(&self) -> bool {
        match &self.detail {
            EntryDetail::Blog(blog) => blog.featured,
            EntryDetail::Project(project) => project.featured,
            EntryDetail::Experience(_) => false,
        }
    }

    pub fn as_blog(&self) -> Option<&BlogDetail> {
        match &self.detail {
            EntryDetail::Blog(blog) => Some(blog),
            _ => None,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectDetail> {
        match &self.detail {
            EntryDetail::Project(project) => Some(project),
            _ => None,
        }
    }

    pub fn as_experience(&self) -> Option<&ExperienceDetail> {
        match &self.detail {
            EntryDetail::Experience(record) => Some(record),
            _ => None,
        }
    }

    /// True when both entries carry at least one identical tag
    pub fn shares_tag_with(&self, other: &CatalogEntry) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

/// Page-specific payload of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryDetail {
    Blog(BlogDetail),
    Project(ProjectDetail),
    Experience(ExperienceDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDetail {
    pub date: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author_note: String,
    #[serde(default)]
    pub sections: Vec<ArticleSection>,
}

/// One headed block of a full article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSection {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_entry_kind_follows_detail() {
        let entry = post("1", "The Ethics of AI", "Ethics", "ethics implications");
        assert_eq!(entry.kind(), CatalogKind::Blog);
        assert!(entry.as_blog().is_some());
        assert!(entry.as_project().is_none());
        assert!(!entry.is_featured());
    }

    #[test]
    fn test_shares_tag_with() {
        let a = tagged(post("1", "A", "Ethics", ""), &["AI", "Ethics"]);
        let b = tagged(post("2", "B", "Technical", ""), &["AI", "React"]);
        let c = tagged(post("3", "C", "Technical", ""), &["Rust"]);

        assert!(a.shares_tag_with(&b));
        assert!(!a.shares_tag_with(&c));
    }

    #[test]
    fn test_detail_is_tagged_by_kind() {
        let yaml = r#"
id: renault
title: Software Engineering Intern
category: Professional
summary: Digitalised defect collection
detail:
  kind: experience
  company: Renault Group Tangier
  location: Tangier, MA
  period: June 2024 - July 2024
"#;
        let entry: CatalogEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.id.as_str(), "renault");
        assert_eq!(entry.kind(), CatalogKind::Experience);
        let record = entry.as_experience().unwrap();
        assert_eq!(record.company, "Renault Group Tangier");
        assert!(record.achievements.is_empty());
    }
}
