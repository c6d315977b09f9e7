//! # Folio Core
//!
//! The filterable content catalog behind every listing page of the portfolio.
//!
//! ```text
//! ┌──────────────┐   FilterState    ┌──────────────┐   Selection   ┌──────────┐
//! │   Catalog    │ ───────────────► │  visible     │ ────────────► │  detail  │
//! │ (immutable)  │  query+category  │  subset      │  at most one  │  view    │
//! └──────────────┘                  └──────────────┘               └──────────┘
//! ```
//!
//! - A [`Catalog`] is built once from an injected [`CatalogConfig`] and never
//!   mutated afterwards.
//! - [`filter::apply`] is a pure, order-preserving filter over the catalog.
//! - [`Selection`] tracks which single entry is open for detail, if any.
//! - [`PageView`] bundles the transient per-page state a renderer needs.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod entry;
pub mod filter;
pub mod selection;
pub mod view;

pub use catalog::{Catalog, CatalogConfig, CatalogKind};
pub use contact::{ContactError, ContactMessage};
pub use content::SiteContent;
pub use entry::{
    ArticleSection, BlogDetail, CatalogEntry, EntryDetail, EntryId, ExperienceDetail,
    ProjectDetail,
};
pub use filter::{apply, Category, FilterState};
pub use selection::Selection;
pub use view::PageView;

/// Result type for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building catalogs or loading site content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate entry id '{id}' in {catalog} catalog")]
    DuplicateId { catalog: CatalogKind, id: String },

    #[error("Entry '{id}' is a {found} entry but sits in the {catalog} catalog")]
    WrongEntryKind {
        catalog: CatalogKind,
        id: String,
        found: CatalogKind,
    },

    #[error("Entry '{id}' in {catalog} catalog uses undeclared category '{category}'")]
    UndeclaredCategory {
        catalog: CatalogKind,
        id: String,
        category: String,
    },

    #[error("Category '{category}' in {catalog} catalog is reserved for the show-everything tab")]
    ReservedCategory {
        catalog: CatalogKind,
        category: String,
    },

    #[error("Default category '{category}' is not declared in {catalog} catalog")]
    UnknownDefaultCategory {
        catalog: CatalogKind,
        category: String,
    },

    #[error("Content IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Content parse error: {0}")]
    ParseError(#[from] serde_yaml::Error),
}
