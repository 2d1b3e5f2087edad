//! Item categories.
//!
//! Categories are free-form text on items; the dashboard offers a fixed
//! suggestion set plus the `All` pseudo-category for filtering.

use core::str::FromStr;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Label of the pseudo-category that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the item form and the category dropdown.
pub const SUGGESTED_CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Stationery"];

/// Category selection applied to the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        Self::from(category.into())
    }

    /// Exact, case-sensitive category match; `All` matches everything.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(c) => c == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(c) => c,
        }
    }

    /// Dropdown entries: `All` followed by the suggestion set.
    pub fn choices() -> Vec<CategoryFilter> {
        core::iter::once(CategoryFilter::All)
            .chain(SUGGESTED_CATEGORIES.iter().map(|c| CategoryFilter::Named((*c).to_string())))
            .collect()
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(c) => c,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
