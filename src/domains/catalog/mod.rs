//! Catalog domain module.
//!
//! Derives what the catalog shows from the registry, the active filters
//! and the user's favorites and recents. Pure projection: nothing here
//! mutates state.

mod filter;
mod view;

pub use filter::{CatalogFilter, CategoryFilter};
pub use view::{CatalogSection, CatalogView, MainSection, build_catalog_view};
