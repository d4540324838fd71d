//! Item reviews and their rating summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::responses::{list_of, Lenient, ResponseView, WalmartResponse};

/// Reviews of one item, with summary statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartReviewResponse {
    view: ResponseView,
}

/// A single customer review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalmartReview {
    view: ResponseView,
}

/// The rating a reviewer gave.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverallRating {
    view: ResponseView,
}

/// Review statistics for an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewStatistics {
    view: ResponseView,
}

/// How many reviews gave one rating value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingDistribution {
    view: ResponseView,
}

impl WalmartResponse for WalmartReviewResponse {
    const NAME: &'static str = "WalmartReviewResponse";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl WalmartResponse for WalmartReview {
    const NAME: &'static str = "WalmartReview";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl WalmartResponse for OverallRating {
    const NAME: &'static str = "OverallRating";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl WalmartResponse for ReviewStatistics {
    const NAME: &'static str = "ReviewStatistics";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl WalmartResponse for RatingDistribution {
    const NAME: &'static str = "RatingDistribution";

    fn from_view(view: ResponseView) -> Self {
        Self { view }
    }

    fn view(&self) -> &ResponseView {
        &self.view
    }
}

impl fmt::Display for WalmartReviewResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl fmt::Display for WalmartReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl fmt::Display for ReviewStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl fmt::Display for RatingDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

impl WalmartReviewResponse {
    /// Item id the reviews belong to.
    #[must_use]
    pub fn item_id(&self) -> Option<Lenient<i64>> {
        self.view.get_int("itemId")
    }

    /// Item name.
    #[must_use]
    pub fn name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("name")
    }

    /// Item selling price in USD.
    #[must_use]
    pub fn sale_price(&self) -> Option<Lenient<f64>> {
        self.view.get_float("salePrice")
    }

    /// Unique Product Code.
    #[must_use]
    pub fn upc(&self) -> Option<Lenient<&str>> {
        self.view.get_str("upc")
    }

    /// Breadcrumb of the item's category.
    #[must_use]
    pub fn category_path(&self) -> Option<Lenient<&str>> {
        self.view.get_str("categoryPath")
    }

    /// Brand name.
    #[must_use]
    pub fn brand_name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("brandName")
    }

    /// Link back to the item on Walmart.com. Showing review content requires
    /// linking to this URL.
    #[must_use]
    pub fn product_tracking_url(&self) -> Option<Lenient<&str>> {
        self.view.get_str("productTrackingUrl")
    }

    /// Category id of the item.
    #[must_use]
    pub fn category_node(&self) -> Option<Lenient<&str>> {
        self.view.get_str("categoryNode")
    }

    /// Reviews on this page.
    #[must_use]
    pub fn reviews(&self) -> Vec<WalmartReview> {
        self.view.get("reviews").map_or_else(Vec::new, list_of)
    }

    /// Aggregate statistics over all reviews of the item.
    #[must_use]
    pub fn review_statistics(&self) -> Option<ReviewStatistics> {
        self.view
            .get_view("reviewStatistics")
            .map(ReviewStatistics::from_view)
    }

    /// Fragment to pass as `nextPage` for the following page of reviews.
    #[must_use]
    pub fn next_page(&self) -> Option<Lenient<&str>> {
        self.view.get_str("nextPage")
    }

    /// Whether the item is available online.
    #[must_use]
    pub fn available_online(&self) -> Option<Lenient<bool>> {
        self.view.get_bool("availableOnline")
    }
}

impl WalmartReview {
    /// Item name the review was written for.
    #[must_use]
    pub fn name(&self) -> Option<Lenient<&str>> {
        self.view.get_str("name")
    }

    /// The rating given by the reviewer.
    #[must_use]
    pub fn overall_rating(&self) -> Option<OverallRating> {
        self.view
            .get_view("overallRating")
            .map(OverallRating::from_view)
    }

    /// Reviewer's display name.
    #[must_use]
    pub fn reviewer(&self) -> Option<Lenient<&str>> {
        self.view.get_str("reviewer")
    }

    /// Review body, HTML entities decoded.
    #[must_use]
    pub fn review_text(&self) -> Option<Lenient<String>> {
        self.view.get_text("reviewText")
    }

    /// When the review was submitted.
    #[must_use]
    pub fn submission_time(&self) -> Option<Lenient<&str>> {
        self.view.get_str("submissionTime")
    }

    /// Review title, HTML entities decoded.
    #[must_use]
    pub fn title(&self) -> Option<Lenient<String>> {
        self.view.get_text("title")
    }

    /// Number of readers who found the review helpful.
    #[must_use]
    pub fn up_votes(&self) -> Option<Lenient<i64>> {
        self.view.get_int("upVotes")
    }

    /// Number of readers who did not find the review helpful.
    #[must_use]
    pub fn down_votes(&self) -> Option<Lenient<i64>> {
        self.view.get_int("downVotes")
    }
}

impl OverallRating {
    /// Rating label, e.g. `Overall`.
    #[must_use]
    pub fn label(&self) -> Option<Lenient<&str>> {
        self.view.get_str("label")
    }

    /// Rating value.
    #[must_use]
    pub fn rating(&self) -> Option<Lenient<f64>> {
        self.view.get_float("rating")
    }
}

impl ReviewStatistics {
    /// Average rating over all reviews.
    #[must_use]
    pub fn average_overall_rating(&self) -> Option<Lenient<f64>> {
        self.view.get_float("averageOverallRating")
    }

    /// Highest possible rating value.
    #[must_use]
    pub fn overall_rating_range(&self) -> Option<Lenient<i64>> {
        self.view.get_int("overallRatingRange")
    }

    /// Review counts per rating value.
    #[must_use]
    pub fn rating_distributions(&self) -> Vec<RatingDistribution> {
        self.view
            .get("ratingDistributions")
            .map_or_else(Vec::new, list_of)
    }

    /// Total number of reviews.
    #[must_use]
    pub fn total_review_count(&self) -> Option<Lenient<i64>> {
        self.view.get_int("totalReviewCount")
    }
}

impl RatingDistribution {
    /// The rating value.
    #[must_use]
    pub fn rating_value(&self) -> Option<Lenient<i64>> {
        self.view.get_int("ratingValue")
    }

    /// Number of reviews with this rating.
    #[must_use]
    pub fn count(&self) -> Option<Lenient<i64>> {
        self.view.get_int("count")
    }
}
