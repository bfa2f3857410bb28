use serde::{Deserialize, Serialize};
use shopfront_types::{CategoryFilter, Criteria, Product};

/// Result-count summary for the listing header ("N of M products").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub visible: usize,
    pub total: usize,
    /// Active category label, None when the selector is "all"
    pub category: Option<String>,
    pub search_active: bool,
}

impl CatalogSummary {
    /// True when active criteria hide every product.
    pub fn is_filtered_empty(&self) -> bool {
        self.visible == 0 && self.total > 0
    }
}

pub fn summarize(visible: &[Product], all: &[Product], criteria: &Criteria) -> CatalogSummary {
    let category = match &criteria.category {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(category.to_string()),
    };

    CatalogSummary {
        visible: visible.len(),
        total: all.len(),
        category,
        search_active: !criteria.search.is_empty(),
    }
}
