//! The product item view.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::responses::{Lenient, ResponseView, WalmartResponse};

/// A Walmart item, as returned by lookup, search, catalog, trending and the
/// recommendation endpoints.
///
/// Every accessor returns `None` when the item does not carry the field.
/// See <https://walmart.io/docs/affiliate/item_response_groups> for field
/// descriptions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartProduct {
    view: ResponseView,
}

impl WalmartResponse for WalmartProduct {
    const NAME: &'static str = "WalmartProduct";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartProduct {
    /// A positive integer that uniquely identifies an item.
    #[must_use]
    pub fn item_id(&self) -> Option<Lenient<i64>> {
        self.view.get_int("itemId")
    }

    /// Item id of the base version of this item, for variants.
    #[must_use]
    pub fn parent_item_id(&self) -> Option<Lenient<i64>> {
        self.view.get_int("parentItemId")
    }

    /// Standard name of the item.
    #[must_use]
    pub fn name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("name")
    }

    /// Manufacturer suggested retail price.
    #[must_use]
    pub fn msrp(&self) -> Option<Lenient<f64>> {
        self.view.get_float("msrp")
    }

    /// Selling price for the item in USD.
    #[must_use]
    pub fn sale_price(&self) -> Option<Lenient<f64>> {
        self.view.get_float("salePrice")
    }

    /// Unique Product Code.
    #[must_use]
    pub fn upc(&self) -> Option<Lenient<&str>> {
        self.view.get_str("upc")
    }

    /// Breadcrumb of the item's category, e.g. `Home/Kitchen/Cookware`.
    #[must_use]
    pub fn category_path(&self) -> Option<Lenient<&str>> {
        self.view.get_str("categoryPath")
    }

    /// Category id of the item, matching the taxonomy.
    #[must_use]
    pub fn category_node(&self) -> Option<Lenient<&str>> {
        self.view.get_str("categoryNode")
    }

    /// Short description, HTML entities decoded.
    #[must_use]
    pub fn short_description(&self) -> Option<Lenient<String>> {
        self.view.get_text("shortDescription")
    }

    /// Long description, HTML entities decoded.
    #[must_use]
    pub fn long_description(&self) -> Option<Lenient<String>> {
        self.view.get_text("longDescription")
    }

    /// Brand name.
    #[must_use]
    pub fn brand_name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("brandName")
    }

    /// Small image URL.
    #[must_use]
    pub fn thumbnail_image(&self) -> Option<Lenient<&str>> {
        self.view.get_str("thumbnailImage")
    }

    /// Medium image URL.
    #[must_use]
    pub fn medium_image(&self) -> Option<Lenient<&str>> {
        self.view.get_str("mediumImage")
    }

    /// Large image URL.
    #[must_use]
    pub fn large_image(&self) -> Option<Lenient<&str>> {
        self.view.get_str("largeImage")
    }

    /// Deep linked URL that directly links to the product page on
    /// Walmart.com, with affiliate tracking when a publisher id was sent.
    #[must_use]
    pub fn product_tracking_url(&self) -> Option<Lenient<&str>> {
        self.view.get_str("productTrackingUrl")
    }

    /// Whether the item qualifies for 97 cent shipping.
    #[must_use]
    pub fn ninety_seven_cent_shipping(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("ninetySevenCentShipping")
    }

    /// Shipping rate for standard shipping.
    #[must_use]
    pub fn standard_ship_rate(&self) -> Option<Lenient<f64>> {
        self.view.get_float("standardShipRate")
    }

    /// Shipping rate for expedited shipping.
    #[must_use]
    pub fn two_three_day_shipping_rate(&self) -> Option<Lenient<f64>> {
        self.view.get_float("twoThreeDayShippingRate")
    }

    /// Size attribute of the item.
    #[must_use]
    pub fn size(&self) -> Option<Lenient<&str>> {
        self.view.get_str("size")
    }

    /// Color attribute of the item.
    #[must_use]
    pub fn color(&self) -> Option<Lenient<&str>> {
        self.view.get_str("color")
    }

    /// Whether the item is sold by a marketplace seller. Marketplace items
    /// are returned to the seller, not to Walmart.
    #[must_use]
    pub fn marketplace(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("marketplace")
    }

    /// Name of the marketplace seller.
    #[must_use]
    pub fn seller_info(&self) -> Option<Lenient<&str>> {
        self.view.get_str("sellerInfo")
    }

    /// Whether the item can be shipped to a store.
    #[must_use]
    pub fn ship_to_store(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("shipToStore")
    }

    /// Whether shipping to a store is free.
    #[must_use]
    pub fn free_ship_to_store(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("freeShipToStore")
    }

    /// Model number of the item.
    #[must_use]
    pub fn model_number(&self) -> Option<Lenient<&str>> {
        self.view.get_str("modelNumber")
    }

    /// Whether the item is currently available for sale on Walmart.com.
    #[must_use]
    pub fn available_online(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("availableOnline")
    }

    /// Indicative stock quantity: `Not available`, `Limited supply`,
    /// `Last few items` or `Available`.
    #[must_use]
    pub fn stock(&self) -> Option<Lenient<&str>> {
        self.view.get_str("stock")
    }

    /// Average customer rating out of 5.
    #[must_use]
    pub fn customer_rating(&self) -> Option<Lenient<f64>> {
        self.view.get_float("customerRating")
    }

    /// Customer rating image URL.
    #[must_use]
    pub fn customer_rating_image(&self) -> Option<Lenient<&str>> {
        self.view.get_str("customerRatingImage")
    }

    /// Number of customer reviews.
    #[must_use]
    pub fn num_reviews(&self) -> Option<Lenient<i64>> {
        self.view.get_int("numReviews")
    }

    /// Whether the item is on clearance.
    #[must_use]
    pub fn clearance(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("clearance")
    }

    /// Whether the item is a pre-order.
    #[must_use]
    pub fn pre_order(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("preOrder")
    }

    /// Date a pre-order item ships on.
    #[must_use]
    pub fn pre_order_ships_on(&self) -> Option<Lenient<&str>> {
        self.view.get_str("preOrderShipsOn")
    }

    /// Offer type: `ONLINE_ONLY`, `STORE_ONLY` or `ONLINE_AND_STORE`.
    #[must_use]
    pub fn offer_type(&self) -> Option<Lenient<&str>> {
        self.view.get_str("offerType")
    }

    /// Relevance hierarchy id.
    #[must_use]
    pub fn rhid(&self) -> Option<Lenient<&str>> {
        self.view.get_str("rhid")
    }

    /// Whether the item is a bundle of other items.
    #[must_use]
    pub fn bundle(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("bundle")
    }

    /// Item attributes, as a nested view.
    #[must_use]
    pub fn attributes(&self) -> Option<ResponseView> {
        self.view.get_view("attributes")
    }

    /// URL that adds the item to a Walmart.com cart with affiliate tracking.
    #[must_use]
    pub fn affiliate_add_to_cart_url(&self) -> Option<Lenient<&str>> {
        self.view.get_str("affiliateAddToCartUrl")
    }

    /// Whether shipping is free for orders over $35.
    #[must_use]
    pub fn free_shipping_over_35_dollars(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("freeShippingOver35Dollars")
    }

    /// Gender the item is intended for.
    #[must_use]
    pub fn gender(&self) -> Option<Lenient<&str>> {
        self.view.get_str("gender")
    }

    /// Age group the item is intended for.
    #[must_use]
    pub fn age(&self) -> Option<Lenient<&str>> {
        self.view.get_str("age")
    }

    /// All images of the item, with their size variants.
    #[must_use]
    pub fn image_entities(&self) -> Vec<ResponseView> {
        self.view.get_views("imageEntities")
    }

    /// Whether the item qualifies for two day shipping.
    #[must_use]
    pub fn is_two_day_shipping_eligible(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("isTwoDayShippingEligible")
    }

    /// Gift options: gift wrap, gift message and gift receipt availability.
    #[must_use]
    pub fn gift_options(&self) -> Option<ResponseView> {
        self.view.get_view("giftOptions")
    }

    /// Lowest marketplace offer for the item.
    #[must_use]
    pub fn best_marketplace_price(&self) -> Option<ResponseView> {
        self.view.get_view("bestMarketplacePrice")
    }

    /// Item ids of the item's variants.
    #[must_use]
    pub fn variants(&self) -> Option<&Value> {
        self.view.get("variants")
    }
}
