//! Typed views over Walmart IO JSON responses.
//!
//! Responses are never schema-validated. Each typed view wraps the raw
//! payload in a [`ResponseView`] and exposes named accessors that coerce
//! tolerantly; anything the accessors do not cover is reachable through
//! [`WalmartResponse::get_attr`].
//!
//! # Overview
//!
//! - [`WalmartProduct`]: An item from lookup, search, catalog or trending
//! - [`WalmartSearch`]: A search result page
//! - [`WalmartCatalog`]: A paginated catalog page
//! - [`WalmartReviewResponse`]: Reviews of one item, with [`WalmartReview`],
//!   [`ReviewStatistics`], [`OverallRating`] and [`RatingDistribution`]
//! - [`WalmartStore`]: A store from the store locator
//! - [`WalmartTaxonomy`]: A node of the category taxonomy

mod catalog;
mod product;
mod review;
mod store;
mod taxonomy;
mod view;

pub use catalog::{WalmartCatalog, WalmartSearch};
pub use product::WalmartProduct;
pub use review::{
    OverallRating, RatingDistribution, ReviewStatistics, WalmartReview, WalmartReviewResponse,
};
pub use store::WalmartStore;
pub use taxonomy::WalmartTaxonomy;
pub use view::{Lenient, ResponseView};

pub(crate) use view::elements;

use serde_json::Value;

/// Behavior shared by every typed response view.
///
/// Implementors only provide construction from a view and access to it; the
/// lookup helpers come with default implementations.
pub trait WalmartResponse: Sized {
    /// The name of the response type, used in log output.
    const NAME: &'static str;

    /// Wraps a view.
    fn from_view(view: ResponseView) -> Self;

    /// Returns the underlying view.
    fn view(&self) -> &ResponseView;

    /// Wraps a raw value.
    #[must_use]
    fn from_value(value: Value) -> Self {
        Self::from_view(ResponseView::new(value))
    }

    /// Returns any field by name, for fields without a dedicated accessor.
    #[must_use]
    fn get_attr(&self, key: &str) -> Option<&Value> {
        self.view().get(key)
    }

    /// Returns the payload's keys.
    #[must_use]
    fn keys(&self) -> Vec<&str> {
        self.view().keys()
    }

    /// Returns the raw payload.
    #[must_use]
    fn raw(&self) -> &Value {
        self.view().raw()
    }
}

/// Maps every element of an array value into `T`. Non-arrays map to nothing.
pub(crate) fn list_of<T: WalmartResponse>(value: &Value) -> Vec<T> {
    if !value.is_array() && !value.is_null() {
        tracing::debug!("Expected a list of {} but got {value}", T::NAME);
    }
    elements(value).into_iter().map(T::from_view).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_attr_reaches_uncovered_fields() {
        let product = WalmartProduct::from_value(json!({"itemId": 1, "newField": "x"}));
        assert_eq!(product.get_attr("newField"), Some(&json!("x")));
        assert_eq!(product.get_attr("absent"), None);
    }

    #[test]
    fn test_display_is_json() {
        let store = WalmartStore::from_value(json!({"no": 100}));
        assert_eq!(store.to_string(), r#"{"no":100}"#);
    }

    #[test]
    fn test_list_of_ignores_non_arrays() {
        let products: Vec<WalmartProduct> = list_of(&json!({"items": []}));
        assert!(products.is_empty());

        let products: Vec<WalmartProduct> = list_of(&json!([{"itemId": 1}, {"itemId": 2}]));
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_keys_lists_payload_fields() {
        let taxonomy = WalmartTaxonomy::from_value(json!({"id": "0", "name": "Root"}));
        let mut keys = taxonomy.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["id", "name"]);
    }
}
