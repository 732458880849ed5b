use serde::{Deserialize, Serialize};

use crate::admin::ModelAdmin;
use crate::serde::{deserialize_lenient_page, deserialize_optional_string};

/// Query string accepted by the admin list routes: `?q=...&page=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub q: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u32>,
}

impl ListQuery {
    /// Resolves the query against a model's admin settings.
    ///
    /// The search term is dropped for models without search fields.
    pub fn to_params(&self, admin: &ModelAdmin) -> ListParams {
        let search = if admin.search_fields.is_empty() {
            None
        } else {
            self.q.clone()
        };
        ListParams {
            search,
            page: self.page.unwrap_or(1).max(1),
            per_page: admin.list_per_page,
        }
    }
}

/// Search and paging for a list query. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: u32,
    pub per_page: usize,
}

impl ListParams {
    pub fn new(per_page: usize) -> Self {
        Self {
            search: None,
            page: 1,
            per_page,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Rows to skip before the current page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.per_page
    }

    /// `%term%` pattern for a `LIKE` clause, if a search term is set.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| {
            let escaped = term
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: usize,
    /// Rows matching the query across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, params: &ListParams, total: u64) -> Self {
        Self {
            items,
            page: params.page,
            per_page: params.per_page,
            total,
        }
    }

    pub fn num_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page as u64).max(1)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.num_pages()
    }
}
