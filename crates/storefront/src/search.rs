//! Catalog filtering.
//!
//! Filtering is a pure function over the full catalog: it is re-run from
//! scratch on every keystroke and selector change, never compounded on a
//! previous result.

use daily_grind_core::Category;

use crate::catalog::{Catalog, Product};

/// Selector value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// The state of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only products in exactly this category match.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(Category::from(selection))
        }
    }
}

/// Narrow the catalog by search term and category.
///
/// A product is kept when its name contains `search_term`
/// case-insensitively (the empty term matches everything) and its category
/// passes `category`. Catalog order is preserved.
#[must_use]
pub fn filter_products<'a>(
    catalog: &'a Catalog,
    search_term: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();

    catalog
        .products()
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .filter(|product| category.matches(&product.category))
        .collect()
}
