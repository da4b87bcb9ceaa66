//! Paged search types shared by repository ports

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOrder::Asc => write!(f, "asc"),
            SearchOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SearchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SearchOrder::Asc),
            "desc" => Ok(SearchOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Criteria for a paged listing. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub page: usize,
    pub per_page: usize,
    /// Case-insensitive filter applied to the name
    pub search: Option<String>,
    pub order_by: Option<String>,
    pub order: SearchOrder,
}

impl SearchInput {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            search: None,
            order_by: None,
            order: SearchOrder::Asc,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, order: SearchOrder) -> Self {
        self.order_by = Some(field.into());
        self.order = order;
        self
    }

    /// Number of items preceding the requested page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// One page of results plus the unpaged total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutput<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> SearchOutput<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchOutput<U> {
        SearchOutput {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
