//! Content catalog - the immutable, ordered entry list of one page

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::entry::{CatalogEntry, EntryId};
use crate::filter::ALL_CATEGORIES;
use crate::{Error, Result};

/// Which listing page a catalog backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Blog,
    Projects,
    Experience,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [Self::Blog, Self::Projects, Self::Experience];

    /// URL segment for the listing page
    pub fn slug(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Projects => "projects",
            Self::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blog" | "posts" => Ok(Self::Blog),
            "projects" | "project" => Ok(Self::Projects),
            "experience" | "experiences" => Ok(Self::Experience),
            other => Err(format!(
                "unknown catalog '{other}' (expected blog, projects or experience)"
            )),
        }
    }
}

/// Injected description of a catalog, as written in site content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Category labels in tab order. Derived from the entries when empty.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tab the page opens on; `None` opens on all categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

/// The immutable entry list for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: CatalogKind,
    categories: Vec<String>,
    default_category: Option<String>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and category membership
    pub fn from_config(kind: CatalogKind, config: CatalogConfig) -> Result<Self> {
        let CatalogConfig {
            categories,
            default_category,
            entries,
        } = config;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::DuplicateId {
                    catalog: kind,
                    id: entry.id.to_string(),
                });
            }
            if entry.kind() != kind {
                return Err(Error::WrongEntryKind {
                    catalog: kind,
                    id: entry.id.to_string(),
                    found: entry.kind(),
                });
            }
        }

        let categories = if categories.is_empty() {
            let mut derived: Vec<String> = Vec::new();
            for entry in &entries {
                if !derived.contains(&entry.category) {
                    derived.push(entry.category.clone());
                }
            }
            derived
        } else {
            if let Some(entry) = entries.iter().find(|e| !categories.contains(&e.category)) {
                return Err(Error::UndeclaredCategory {
                    catalog: kind,
                    id: entry.id.to_string(),
                    category: entry.category.clone(),
                });
            }
            categories
        };

        // "All" and "" parse as the show-everything tab, so they cannot name one category
        if let Some(reserved) = categories
            .iter()
            .find(|c| c.is_empty() || c.as_str() == ALL_CATEGORIES)
        {
            return Err(Error::ReservedCategory {
                catalog: kind,
                category: reserved.clone(),
            });
        }

        if let Some(default) = &default_category {
            if !categories.contains(default) {
                return Err(Error::UnknownDefaultCategory {
                    catalog: kind,
                    category: default.clone(),
                });
            }
        }

        tracing::debug!(
            catalog = %kind,
            entries = entries.len(),
            categories = categories.len(),
            "catalog built"
        );

        Ok(Self {
            kind,
            categories,
            default_category,
            entries,
        })
    }

    /// Build a catalog straight from entries, deriving categories
    pub fn from_entries(kind: CatalogKind, entries: Vec<CatalogEntry>) -> Result<Self> {
        Self::from_config(
            kind,
            CatalogConfig {
                entries,
                ..CatalogConfig::default()
            },
        )
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// All entries in display (source) order
    pub fn load(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id.as_str()).is_some()
    }

    /// Declared category labels in tab order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn default_category(&self) -> Option<&str> {
        self.default_category.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Other entries sharing at least one tag with `id`, in source order
    pub fn related(&self, id: &str, limit: usize) -> Vec<&CatalogEntry> {
        let Some(origin) = self.get(id) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| e.id != origin.id && e.shares_tag_with(origin))
            .take(limit)
            .collect()
    }

    /// First entry flagged featured
    pub fn featured(&self) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.is_featured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::fixtures::{post, tagged};

    fn config(entries: Vec<CatalogEntry>) -> CatalogConfig {
        CatalogConfig {
            categories: vec![
                "Technical".to_string(),
                "Leadership".to_string(),
                "Ethics".to_string(),
            ],
            default_category: None,
            entries,
        }
    }

    #[test]
    fn test_load_preserves_source_order() {
        let catalog = Catalog::from_config(
            CatalogKind::Blog,
            config(vec![
                post("3", "Third", "Technical", ""),
                post("1", "First", "Ethics", ""),
                post("2", "Second", "Leadership", ""),
            ]),
        )
        .unwrap();

        let ids: Vec<&str> = catalog.load().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_config(
            CatalogKind::Blog,
            config(vec![
                post("1", "One", "Technical", ""),
                post("1", "Also one", "Ethics", ""),
            ]),
        );

        match result {
            Err(Error::DuplicateId { catalog, id }) => {
                assert_eq!(catalog, CatalogKind::Blog);
                assert_eq!(id, "1");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_undeclared_category_rejected() {
        let result = Catalog::from_config(
            CatalogKind::Blog,
            config(vec![post("1", "One", "Cooking", "")]),
        );
        assert!(matches!(result, Err(Error::UndeclaredCategory { .. })));
    }

    #[test]
    fn test_all_is_a_reserved_category() {
        let mut cfg = config(vec![post("1", "One", "Technical", "")]);
        cfg.categories.push("All".to_string());
        let result = Catalog::from_config(CatalogKind::Blog, cfg);
        assert!(matches!(
            result,
            Err(Error::ReservedCategory { category, .. }) if category == "All"
        ));

        let mut derived = config(vec![post("1", "One", "All", "")]);
        derived.categories.clear();
        assert!(matches!(
            Catalog::from_config(CatalogKind::Blog, derived),
            Err(Error::ReservedCategory { .. })
        ));
    }

    #[test]
    fn test_empty_category_label_rejected() {
        let mut cfg = config(vec![post("1", "One", "", "")]);
        cfg.categories.clear();
        assert!(matches!(
            Catalog::from_config(CatalogKind::Blog, cfg),
            Err(Error::ReservedCategory { category, .. }) if category.is_empty()
        ));
    }

    #[test]
    fn test_unknown_default_category_rejected() {
        let mut cfg = config(vec![post("1", "One", "Technical", "")]);
        cfg.default_category = Some("Professional".to_string());
        let result = Catalog::from_config(CatalogKind::Blog, cfg);
        assert!(matches!(result, Err(Error::UnknownDefaultCategory { .. })));
    }

    #[test]
    fn test_wrong_entry_kind_rejected() {
        let result = Catalog::from_entries(
            CatalogKind::Projects,
            vec![post("1", "One", "Technical", "")],
        );
        assert!(matches!(
            result,
            Err(Error::WrongEntryKind {
                found: CatalogKind::Blog,
                ..
            })
        ));
    }

    #[test]
    fn test_categories_derived_in_first_appearance_order() {
        let catalog = Catalog::from_entries(
            CatalogKind::Blog,
            vec![
                post("1", "A", "Ethics", ""),
                post("2", "B", "Technical", ""),
                post("3", "C", "Ethics", ""),
            ],
        )
        .unwrap();
        assert_eq!(catalog.categories(), ["Ethics", "Technical"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_entries(CatalogKind::Blog, Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.load().is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.get("1").is_none());
    }

    #[test]
    fn test_get_and_lookup_miss() {
        let catalog =
            Catalog::from_entries(CatalogKind::Blog, vec![post("1", "A", "Ethics", "")]).unwrap();
        assert_eq!(catalog.get("1").map(|e| e.title.as_str()), Some("A"));
        assert!(catalog.get("42").is_none());
        assert!(!catalog.contains(&EntryId::from("42")));
    }

    #[test]
    fn test_related_by_shared_tags() {
        let catalog = Catalog::from_entries(
            CatalogKind::Blog,
            vec![
                tagged(post("1", "A", "Ethics", ""), &["AI", "Ethics"]),
                tagged(post("2", "B", "Technical", ""), &["React"]),
                tagged(post("3", "C", "Technical", ""), &["AI"]),
                tagged(post("4", "D", "Ethics", ""), &["Ethics"]),
            ],
        )
        .unwrap();

        let related: Vec<&str> = catalog.related("1", 5).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(related, vec!["3", "4"]);

        assert_eq!(catalog.related("1", 1).len(), 1);
        assert!(catalog.related("missing", 3).is_empty());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("blog".parse::<CatalogKind>().unwrap(), CatalogKind::Blog);
        assert_eq!("Projects".parse::<CatalogKind>().unwrap(), CatalogKind::Projects);
        assert_eq!(
            "experience".parse::<CatalogKind>().unwrap(),
            CatalogKind::Experience
        );
        assert!("skills".parse::<CatalogKind>().is_err());
        assert_eq!(CatalogKind::Projects.to_string(), "projects");
    }
}
