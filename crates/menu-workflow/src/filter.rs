//! Category Filter
//!
//! Decides which server-rendered `.menu-item` rows stay visible.

/// Select value meaning "all categories"
const ALL_CATEGORIES: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse the `categoryFilter` select value
    pub fn from_select(value: &str) -> Self {
        match value {
            ALL_CATEGORIES => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    /// Whether a row with the given `data-category` is shown
    pub fn shows(&self, data_category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => data_category == Some(wanted.as_str()),
        }
    }
}
