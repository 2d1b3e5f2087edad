use serde::{Deserialize, Serialize};

use stockroom_inventory::{CategoryFilter, InventoryItem};

/// Search box + category dropdown state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Case-insensitive name substring AND category match.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matcher().matches(item)
    }

    /// Items passing the filter, in store order.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> impl Iterator<Item = &'a InventoryItem> + 'a {
        let matcher = self.matcher();
        items.iter().filter(move |item| matcher.matches(item))
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            needle: self.search_term.to_lowercase(),
            category: self.category.clone(),
        }
    }
}

/// Criteria with the search term lower-cased once.
struct Matcher {
    needle: String,
    category: CategoryFilter,
}

impl Matcher {
    fn matches(&self, item: &InventoryItem) -> bool {
        item.name().to_lowercase().contains(&self.needle) && self.category.matches(item.category())
    }
}
