use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category selector for the listing view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Exactly one category, matched case-sensitively
    Only(Category),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Only(Category::new(other)),
        })
    }
}

/// Ordering applied to the filtered product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Source order, no reordering
    #[default]
    Featured,
    /// Price ascending
    PriceLow,
    /// Price descending
    PriceHigh,
    /// Title, lexicographic ascending
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "name" => Ok(SortKey::Name),
            other => Err(format!(
                "unknown sort key '{}' (expected featured, price-low, price-high or name)",
                other
            )),
        }
    }
}

/// The active filter/sort selections driving the listing view.
///
/// Criteria live only as long as the controller that owns them; there is no
/// persistence, and a recreated controller starts from `Criteria::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Criteria {
    pub category: CategoryFilter,
    /// Free-text search, matched case-insensitively against title and
    /// description. Whitespace-only text is a real (non-empty) query.
    pub search: String,
    pub sort: SortKey,
}

impl Criteria {
    /// Reset category and search while keeping the sort key.
    pub fn clear_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
    }
}
