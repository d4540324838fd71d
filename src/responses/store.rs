//! Store locator results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::responses::{Lenient, ResponseView, WalmartResponse};

/// A Walmart store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartStore {
    view: ResponseView,
}

impl WalmartResponse for WalmartStore {
    const NAME: &'static str = "WalmartStore";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartStore {
    /// Store number.
    #[must_use]
    pub fn no(&self) -> Option<Lenient<i64>> {
        self.view.get_int("no")
    }

    /// Store name.
    #[must_use]
    pub fn name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("name")
    }

    /// Country code.
    #[must_use]
    pub fn country(&self) -> Option<Lenient<&str>> {
        self.view.get_str("country")
    }

    /// `[longitude, latitude]` of the store. Entries that are not numbers are
    /// skipped.
    #[must_use]
    pub fn coordinates(&self) -> Vec<f64> {
        self.view
            .get("coordinates")
            .and_then(serde_json::Value::as_array)
            .map(|values| values.iter().filter_map(serde_json::Value::as_f64).collect())
            .unwrap_or_default()
    }

    /// Street address.
    #[must_use]
    pub fn street_address(&self) -> Option<Lenient<&str>> {
        self.view.get_str("streetAddress")
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> Option<Lenient<&str>> {
        self.view.get_str("city")
    }

    /// State or province code.
    #[must_use]
    pub fn state_prov_code(&self) -> Option<Lenient<&str>> {
        self.view.get_str("stateProvCode")
    }

    /// Postal code.
    #[must_use]
    pub fn zip(&self) -> Option<Lenient<&str>> {
        self.view.get_str("zip")
    }

    /// Phone number.
    #[must_use]
    pub fn phone_number(&self) -> Option<Lenient<&str>> {
        self.view.get_str("phoneNumber")
    }
}
