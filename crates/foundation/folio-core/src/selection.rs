//! Selection/detail state - which single entry is open, if any

use crate::catalog::Catalog;
use crate::entry::{CatalogEntry, EntryId};

/// At most one selected entry id. Selecting replaces; there is no stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<EntryId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection.
    ///
    /// Ids unknown to the catalog are accepted; resolving them is the
    /// renderer's job (see [`Selection::resolve`]).
    pub fn select(&mut self, id: impl Into<EntryId>) {
        self.current = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&EntryId> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Resolve the selection against a catalog; a lookup miss is `None`
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogEntry> {
        let id = self.current.as_ref()?;
        let entry = catalog.get(id.as_str());
        if entry.is_none() {
            tracing::warn!(catalog = %catalog.kind(), id = %id, "selected entry not found");
        }
        entry
    }
}

impl From<Option<&str>> for Selection {
    fn from(id: Option<&str>) -> Self {
        Self {
            current: id.filter(|id| !id.is_empty()).map(EntryId::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use crate::entry::fixtures::post;

    #[test]
    fn test_starts_empty() {
        let selection = Selection::new();
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_select_replace_clear() {
        let mut selection = Selection::new();

        selection.select("2");
        assert_eq!(selection.current(), Some(&EntryId::from("2")));

        selection.select("1");
        assert_eq!(selection.current(), Some(&EntryId::from("1")));
        assert!(!selection.is_selected(&EntryId::from("2")));

        selection.clear();
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_unknown_id_is_accepted_but_does_not_resolve() {
        let catalog =
            Catalog::from_entries(CatalogKind::Blog, vec![post("1", "A", "Ethics", "")]).unwrap();

        let mut selection = Selection::new();
        selection.select("404");
        assert_eq!(selection.current().map(|id| id.as_str()), Some("404"));
        assert!(selection.resolve(&catalog).is_none());

        selection.select("1");
        assert_eq!(selection.resolve(&catalog).map(|e| e.title.as_str()), Some("A"));
    }

    #[test]
    fn test_from_query_param() {
        assert!(Selection::from(None::<&str>).current().is_none());
        assert!(Selection::from(Some("")).current().is_none());
        assert_eq!(
            Selection::from(Some("3")).current(),
            Some(&EntryId::from("3"))
        );
    }
}
