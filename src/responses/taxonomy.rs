//! The category taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::responses::{list_of, Lenient, ResponseView, WalmartResponse};

/// A node of the Walmart category taxonomy.
///
/// The taxonomy has three levels (departments, categories, sub-categories).
/// The root returned by [`WalmartIo::taxonomy`](crate::WalmartIo::taxonomy)
/// lists the departments in `categories`; every other node lists its
/// descendants in `children`. Node ids can be used as the `category` option
/// of search and catalog requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartTaxonomy {
    view: ResponseView,
}

impl WalmartResponse for WalmartTaxonomy {
    const NAME: &'static str = "WalmartTaxonomy";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartTaxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartTaxonomy {
    /// Category id.
    #[must_use]
    pub fn id(&self) -> Option<Lenient<&str>> {
        self.view.get_str("id")
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("name")
    }

    /// Full path of the category, e.g. `Electronics/TV & Video`.
    #[must_use]
    pub fn path(&self) -> Option<Lenient<&str>> {
        self.view.get_str("path")
    }

    /// Child categories.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.view.get("children").map_or_else(Vec::new, list_of)
    }

    /// Top level departments, present on the taxonomy root.
    #[must_use]
    pub fn categories(&self) -> Vec<Self> {
        self.view.get("categories").map_or_else(Vec::new, list_of)
    }
}
