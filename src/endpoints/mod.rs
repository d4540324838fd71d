//! Endpoint methods of [`WalmartIo`].
//!
//! Every method prepares a request and returns a value to execute with
//! `send().await` or `send_blocking()`:
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | [`catalog_product`](WalmartIo::catalog_product) | `paginated/items` | [`WalmartCatalog`] |
//! | [`post_browsed_products`](WalmartIo::post_browsed_products) | `postbrowse` | `Vec<WalmartProduct>` |
//! | [`product_lookup`](WalmartIo::product_lookup) | `items` | `Vec<WalmartProduct>` |
//! | [`bulk_product_lookup`](WalmartIo::bulk_product_lookup) | `items` | batches of `WalmartProduct` |
//! | [`product_recommendation`](WalmartIo::product_recommendation) | `nbp` | `Vec<WalmartProduct>` |
//! | [`reviews`](WalmartIo::reviews) | `reviews/{itemId}` | [`WalmartReviewResponse`] |
//! | [`search`](WalmartIo::search) | `search` | [`WalmartSearch`] |
//! | [`stores`](WalmartIo::stores) | `stores` | `Vec<WalmartStore>` |
//! | [`taxonomy`](WalmartIo::taxonomy) | `taxonomy` | [`WalmartTaxonomy`] |
//! | [`trending`](WalmartIo::trending) | `trends` | `Vec<WalmartProduct>` |
//!
//! Paths are relative to `/affil/product/v2` under the configured endpoint.

mod call;
mod lookup;

pub use call::Call;
pub use lookup::{BulkLookup, FailedChunk, ProductLookup};

use serde_json::Value;

use crate::clients::{ApiRequest, InvalidParameterError, WalmartError};
use crate::params::{
    catalog_next_page_url, compose, normalize_search, require_store_location, review_page,
    take_next_page, RequestOptions,
};
use crate::responses::{
    list_of, WalmartCatalog, WalmartProduct, WalmartResponse, WalmartReviewResponse,
    WalmartSearch, WalmartStore, WalmartTaxonomy,
};
use crate::{ItemIds, WalmartIo};

const CATALOG_PATH: &str = "/affil/product/v2/paginated/items";
const POST_BROWSE_PATH: &str = "/affil/product/v2/postbrowse";
const ITEMS_PATH: &str = "/affil/product/v2/items";
const RECOMMENDATION_PATH: &str = "/affil/product/v2/nbp";
const REVIEWS_PATH: &str = "/affil/product/v2/reviews";
const SEARCH_PATH: &str = "/affil/product/v2/search";
const STORES_PATH: &str = "/affil/product/v2/stores";
const TAXONOMY_PATH: &str = "/affil/product/v2/taxonomy";
const TRENDS_PATH: &str = "/affil/product/v2/trends";

fn products(body: Value) -> Vec<WalmartProduct> {
    list_of(&body)
}

fn item_products(body: Value) -> Vec<WalmartProduct> {
    lookup::items_of(&body)
}

fn stores(body: Value) -> Vec<WalmartStore> {
    list_of(&body)
}

fn require_item_id(item_id: &str) -> Result<&str, InvalidParameterError> {
    let item_id = item_id.trim();
    if item_id.is_empty() {
        Err(InvalidParameterError::new("An item id is required"))
    } else {
        Ok(item_id)
    }
}

impl WalmartIo {
    /// Fetches a page of the product catalog.
    ///
    /// Pass the `nextPage` value of a previous [`WalmartCatalog`] as the
    /// `nextPage` option to continue from that page. Other options, such as
    /// `category`, `brand` or `specialOffer`, are sent as query parameters.
    pub fn catalog_product(&self, mut options: RequestOptions) -> Call<'_, WalmartCatalog> {
        let request = take_next_page(&mut options).and_then(|next_page| match next_page {
            Some(fragment) => {
                let url = catalog_next_page_url(self.config().endpoint(), &fragment)?;
                Ok(ApiRequest::new(
                    url,
                    compose(options, self.config().publisher_id()),
                ))
            }
            None => Ok(self.compose_request(CATALOG_PATH, options)),
        });
        Call::new(self, request, WalmartCatalog::from_value)
    }

    /// Fetches items frequently viewed after `item_id`.
    pub fn post_browsed_products(&self, item_id: &str) -> Call<'_, Vec<WalmartProduct>> {
        let request = require_item_id(item_id).map(|item_id| {
            self.compose_request(
                POST_BROWSE_PATH,
                RequestOptions::new().with("itemId", item_id),
            )
        });
        Call::new(self, request, products)
    }

    /// Looks up items by id, failing on the first failed request.
    ///
    /// `ids` may be a comma-separated string or a sequence of ids. Lists
    /// longer than 20 ids are sent in several requests.
    pub fn product_lookup(
        &self,
        ids: impl Into<ItemIds>,
        options: RequestOptions,
    ) -> ProductLookup<'_> {
        ProductLookup::new(self, self.compose_request(ITEMS_PATH, options), ids)
    }

    /// Looks up items by id in chunks, skipping chunks that fail.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::InvalidParameter`] if no ids were given.
    pub fn bulk_product_lookup(
        &self,
        ids: impl Into<ItemIds>,
        options: RequestOptions,
    ) -> Result<BulkLookup<'_>, WalmartError> {
        BulkLookup::new(self, self.compose_request(ITEMS_PATH, options), ids)
    }

    /// Fetches items recommended together with `item_id`.
    pub fn product_recommendation(&self, item_id: &str) -> Call<'_, Vec<WalmartProduct>> {
        let request = require_item_id(item_id).map(|item_id| {
            self.compose_request(
                RECOMMENDATION_PATH,
                RequestOptions::new().with("itemId", item_id),
            )
        });
        Call::new(self, request, products)
    }

    /// Fetches customer reviews of an item.
    ///
    /// Pass the `nextPage` value of a previous [`WalmartReviewResponse`] as
    /// the `nextPage` option to fetch the following page.
    pub fn reviews(
        &self,
        item_id: &str,
        mut options: RequestOptions,
    ) -> Call<'_, WalmartReviewResponse> {
        let request = require_item_id(item_id).and_then(|item_id| {
            if let Some(fragment) = take_next_page(&mut options)? {
                let page = review_page(self.config().endpoint(), &fragment)?;
                options.insert("page", page);
            }
            let mut url = self.config().endpoint().endpoint_url(REVIEWS_PATH);
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.push(item_id);
            }
            Ok(ApiRequest::new(
                url,
                compose(options, self.config().publisher_id()),
            ))
        });
        Call::new(self, request, WalmartReviewResponse::from_value)
    }

    /// Searches the catalog for `query`.
    ///
    /// Besides the raw facet parameters, the options accept a boolean
    /// `facet` and the `range` and `filter` shorthands for `facet.range` and
    /// `facet.filter`.
    pub fn search(&self, query: &str, mut options: RequestOptions) -> Call<'_, WalmartSearch> {
        normalize_search(&mut options);
        options.insert("query", query);
        let request = self.compose_request(SEARCH_PATH, options);
        Call::new(self, Ok(request), WalmartSearch::from_value)
    }

    /// Finds stores near a location.
    ///
    /// The options must hold `lat` and `lon`, or `zip`.
    pub fn stores(&self, options: RequestOptions) -> Call<'_, Vec<WalmartStore>> {
        let request = require_store_location(&options)
            .map(|()| self.compose_request(STORES_PATH, options));
        Call::new(self, request, stores)
    }

    /// Fetches the category taxonomy.
    pub fn taxonomy(&self, options: RequestOptions) -> Call<'_, WalmartTaxonomy> {
        let request = self.compose_request(TAXONOMY_PATH, options);
        Call::new(self, Ok(request), WalmartTaxonomy::from_value)
    }

    /// Fetches trending items.
    ///
    /// `publisher_id` overrides the configured default publisher.
    pub fn trending(&self, publisher_id: Option<&str>) -> Call<'_, Vec<WalmartProduct>> {
        let options = publisher_id
            .map(|id| RequestOptions::new().with("publisherId", id))
            .unwrap_or_default();
        let request = self.compose_request(TRENDS_PATH, options);
        Call::new(self, Ok(request), item_products)
    }
}
