//! Filter/query component
//!
//! An entry is visible iff its category is admitted by the active category
//! AND its title or summary contains the query text, ignoring case.
//!
//! The query is used literally: no trimming, no tokenising. A query of
//! `" "` only matches entries whose title or summary contains a space.

use std::fmt;

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;

/// Token that selects every category on the wire and in the UI
pub const ALL_CATEGORIES: &str = "All";

/// The active category tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Sentinel admitting every category
    #[default]
    All,
    /// Exact, case-sensitive category label
    Named(String),
}

impl Category {
    /// Parse a request parameter; missing, empty and `"All"` mean every category
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(label) => Self::Named(label.to_string()),
        }
    }

    pub fn named(label: impl Into<String>) -> Self {
        Self::Named(label.into())
    }

    /// Whether an entry with this category label is visible
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => label == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient (query, category) pair owned by one page view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: Category,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a page backed by `catalog`
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            query: String::new(),
            category: Category::from_param(catalog.default_category()),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// True when nothing narrows the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.category.admits(&entry.category) && text_matches(entry, &self.query.to_lowercase())
    }

    /// Filter a whole catalog
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        apply(catalog.load(), self)
    }
}

/// Compute the visible subset of `entries`, preserving their order
pub fn apply<'a, I>(entries: I, state: &FilterState) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let needle = state.query.to_lowercase();
    let visible: Vec<&CatalogEntry> = entries
        .into_iter()
        .filter(|entry| state.category.admits(&entry.category) && text_matches(entry, &needle))
        .collect();

    tracing::debug!(
        query = %state.query,
        category = %state.category,
        visible = visible.len(),
        "filter applied"
    );

    visible
}

fn text_matches(entry: &CatalogEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.title.to_lowercase().contains(needle)
        || entry.summary.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use crate::entry::fixtures::post;

    fn scenario() -> Vec<CatalogEntry> {
        vec![
            post("1", "The Ethics of AI", "Ethics", "ethics implications"),
            post("2", "Building React Apps", "Technical", "react patterns"),
        ]
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    fn wider() -> Vec<CatalogEntry> {
        vec![
            post("1", "The Ethics of AI", "Ethics", "Exploring the implications of AI"),
            post("2", "Leading a Tech Club", "Leadership", "Community building lessons"),
            post("3", "Scalable React", "Technical", "Patterns for large apps"),
            post("4", "Volunteering abroad", "Volunteer Work", "Building a water well"),
            post("5", "AI in Healthcare", "Technical", "Detecting pneumonia"),
        ]
    }

    #[test]
    fn test_scenario_query() {
        let catalog = scenario();
        let state = FilterState::new().with_query("ai");
        assert_eq!(ids(&apply(&catalog, &state)), vec!["1"]);
    }

    #[test]
    fn test_scenario_category() {
        let catalog = scenario();
        let state = FilterState::new().with_category(Category::named("Technical"));
        assert_eq!(ids(&apply(&catalog, &state)), vec!["2"]);
    }

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let catalog = wider();
        let state = FilterState::new();
        assert!(state.is_unfiltered());

        let visible = apply(&catalog, &state);
        assert_eq!(visible.len(), catalog.len());
        for (shown, original) in visible.iter().zip(catalog.iter()) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = wider();
        let states = [
            FilterState::new().with_query("ai"),
            FilterState::new().with_query("build"),
            FilterState::new().with_category(Category::named("Technical")),
            FilterState::new()
                .with_query("a")
                .with_category(Category::named("Technical")),
            FilterState::new().with_query("nothing matches this"),
        ];

        for state in &states {
            let visible = apply(&catalog, state);
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| catalog.iter().position(|e| e.id == v.id).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "order broken for {state:?}"
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let catalog = wider();
        let state = FilterState::new()
            .with_query("i")
            .with_category(Category::named("Technical"));

        let once = apply(&catalog, &state);
        let twice = apply(once.iter().copied(), &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_case_insensitive_query() {
        let catalog = wider();
        let upper = apply(&catalog, &FilterState::new().with_query("AI"));
        let lower = apply(&catalog, &FilterState::new().with_query("ai"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["1", "5"]);
    }

    #[test]
    fn test_query_matches_summary() {
        let catalog = wider();
        let visible = apply(&catalog, &FilterState::new().with_query("PNEUMONIA"));
        assert_eq!(ids(&visible), vec!["5"]);
    }

    #[test]
    fn test_category_exact_match() {
        let technical = post("2", "Building React Apps", "Technical", "react patterns");
        let catalog = vec![technical];

        let ethics = FilterState::new().with_category(Category::named("Ethics"));
        let exact = FilterState::new().with_category(Category::named("Technical"));
        let wrong_case = FilterState::new().with_category(Category::named("technical"));
        let all = FilterState::new().with_category(Category::All);

        assert!(apply(&catalog, &ethics).is_empty());
        assert_eq!(apply(&catalog, &exact).len(), 1);
        assert!(apply(&catalog, &wrong_case).is_empty());
        assert_eq!(apply(&catalog, &all).len(), 1);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let catalog = wider();
        let state = FilterState::new().with_category(Category::named("Cooking"));
        assert!(apply(&catalog, &state).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<CatalogEntry> = Vec::new();
        assert!(apply(&catalog, &FilterState::new().with_query("ai")).is_empty());
        assert!(apply(&catalog, &FilterState::new()).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let catalog = vec![
            post("1", "Nospace", "Technical", "single"),
            post("2", "Has space", "Technical", "x"),
        ];
        let visible = apply(&catalog, &FilterState::new().with_query(" "));
        assert_eq!(ids(&visible), vec!["2"]);

        let padded = apply(&catalog, &FilterState::new().with_query(" nospace"));
        assert!(padded.is_empty());
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let catalog = wider();
        let state = FilterState::new().with_query("build");
        let visible = apply(&catalog, &state);
        for entry in &catalog {
            assert_eq!(state.matches(entry), visible.contains(&entry));
        }
    }

    #[test]
    fn test_category_from_param() {
        assert_eq!(Category::from_param(None), Category::All);
        assert_eq!(Category::from_param(Some("")), Category::All);
        assert_eq!(Category::from_param(Some("All")), Category::All);
        assert_eq!(
            Category::from_param(Some("Ethics")),
            Category::Named("Ethics".to_string())
        );
        assert_eq!(Category::All.to_string(), "All");
    }

    #[test]
    fn test_for_catalog_uses_default_category() {
        let mut catalog_config = crate::catalog::CatalogConfig {
            categories: vec!["Ethics".to_string(), "Technical".to_string()],
            default_category: Some("Technical".to_string()),
            entries: scenario(),
        };
        let catalog = Catalog::from_config(CatalogKind::Blog, catalog_config.clone()).unwrap();
        let state = FilterState::for_catalog(&catalog);
        assert_eq!(state.category, Category::named("Technical"));
        assert_eq!(ids(&state.apply(&catalog)), vec!["2"]);

        catalog_config.default_category = None;
        let catalog = Catalog::from_config(CatalogKind::Blog, catalog_config).unwrap();
        assert!(FilterState::for_catalog(&catalog).is_unfiltered());
    }
}
