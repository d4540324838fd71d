//! Paged product listings: catalog pages and search results.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::responses::{list_of, Lenient, ResponseView, WalmartProduct, WalmartResponse};

/// A page of the product catalog.
///
/// Pass [`WalmartCatalog::next_page`] as the `nextPage` option of
/// [`WalmartIo::catalog_product`](crate::WalmartIo::catalog_product) to
/// fetch the following page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartCatalog {
    view: ResponseView,
}

impl WalmartResponse for WalmartCatalog {
    const NAME: &'static str = "WalmartCatalog";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartCatalog {
    /// Category filter applied to the page.
    #[must_use]
    pub fn category(&self) -> Option<Lenient<&str>> {
        self.view.get_str("category")
    }

    /// Response format reported by the API.
    #[must_use]
    pub fn format(&self) -> Option<Lenient<&str>> {
        self.view.get_str("format")
    }

    /// Relative URL of the next page.
    #[must_use]
    pub fn next_page(&self) -> Option<Lenient<&str>> {
        self.view.get_str("nextPage")
    }

    /// Whether another page exists.
    #[must_use]
    pub fn next_page_exist(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("nextPageExist")
    }

    /// Total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> Option<Lenient<i64>> {
        self.view.get_int("totalPages")
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> Vec<WalmartProduct> {
        self.view.get("items").map_or_else(Vec::new, list_of)
    }
}

/// A page of search results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartSearch {
    view: ResponseView,
}

impl WalmartResponse for WalmartSearch {
    const NAME: &'static str = "WalmartSearch";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartSearch {
    /// The search text.
    #[must_use]
    pub fn query(&self) -> Option<Lenient<&str>> {
        self.view.get_str("query")
    }

    /// Sort criteria used.
    #[must_use]
    pub fn sort(&self) -> Option<Lenient<&str>> {
        self.view.get_str("sort")
    }

    /// Response group (`base` or `full`).
    #[must_use]
    pub fn response_group(&self) -> Option<Lenient<&str>> {
        self.view.get_str("responseGroup")
    }

    /// Total number of matching items.
    #[must_use]
    pub fn total_results(&self) -> Option<Lenient<i64>> {
        self.view.get_int("totalResults")
    }

    /// Position of the first item of this page within the result set.
    #[must_use]
    pub fn start(&self) -> Option<Lenient<i64>> {
        self.view.get_int("start")
    }

    /// Number of items on this page, at most 25.
    #[must_use]
    pub fn num_items(&self) -> Option<Lenient<i64>> {
        self.view.get_int("numItems")
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> Vec<WalmartProduct> {
        self.view.get("items").map_or_else(Vec::new, list_of)
    }

    /// Facets of the result set, present when faceting was on.
    #[must_use]
    pub fn facets(&self) -> Option<&Value> {
        self.view.get("facets")
    }
}
