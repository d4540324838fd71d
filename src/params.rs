//! Request composition: caller options to query parameters.
//!
//! Endpoint methods accept a [`RequestOptions`] bag of named values. Before a
//! request is sent the options are normalized by [`compose`] into the flat
//! [`QueryParams`] map that ends up in the URL query string.
//!
//! # Normalization rules
//!
//! - `format` is always dropped; responses are always JSON.
//! - A boolean `richAttributes` becomes `"true"`/`"false"`. When absent it is
//!   sent as `"true"`.
//! - The client's default `publisherId` is injected unless one was supplied.
//! - Remaining values are rendered with their `Display` form.
//!
//! # Example
//!
//! ```rust
//! use walmart_io::params::{compose, RequestOptions};
//!
//! let options = RequestOptions::new()
//!     .with("category", "3944")
//!     .with("count", 25)
//!     .with("format", "xml")
//!     .with("richAttributes", false);
//!
//! let params = compose(options, None);
//! assert_eq!(params["category"], "3944");
//! assert_eq!(params["count"], "25");
//! assert_eq!(params["richAttributes"], "false");
//! assert!(!params.contains_key("format"));
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use reqwest::Url;

use crate::clients::InvalidParameterError;
use crate::config::{ApiEndpoint, PublisherId};

/// Flat query parameter map sent with a request.
pub type QueryParams = BTreeMap<String, String>;

/// Largest number of item ids the lookup endpoint accepts per request.
pub const MAX_CHUNK_SIZE: usize = 20;

/// Strict lookups above this many ids log a hint to use the bulk variant.
pub const LARGE_LOOKUP_THRESHOLD: usize = 200;

pub(crate) const FORMAT: &str = "format";
pub(crate) const RICH_ATTRIBUTES: &str = "richAttributes";
pub(crate) const PUBLISHER_ID: &str = "publisherId";
pub(crate) const NEXT_PAGE: &str = "nextPage";
pub(crate) const ITEM_IDS: &str = "ids";

/// A single option value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// A string value, sent unchanged.
    Text(String),
    /// A boolean, sent as `"true"`/`"false"` unless an endpoint maps it.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating point value, such as a latitude.
    Float(f64),
}

impl OptionValue {
    /// Returns the string content of a [`OptionValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of a [`OptionValue::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Named options passed to an endpoint.
///
/// Option names are the Walmart IO query parameter names (`category`,
/// `numItems`, `sort`, ...). Endpoint specific aliases such as `range` and
/// `filter` on search are rewritten before sending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    values: BTreeMap<String, OptionValue>,
}

impl RequestOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing any previous value with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an option and returns the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Returns the value of an option.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Removes an option and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.values.remove(name)
    }

    /// Returns `true` if the option is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}

/// Normalizes options into query parameters.
///
/// See the [module documentation](self) for the rules applied.
#[must_use]
pub fn compose(mut options: RequestOptions, default_publisher: Option<&PublisherId>) -> QueryParams {
    options.remove(FORMAT);

    let mut params = QueryParams::new();
    let rich_attributes = match options.remove(RICH_ATTRIBUTES) {
        Some(OptionValue::Bool(true)) | None => "true".to_string(),
        Some(OptionValue::Bool(false)) => "false".to_string(),
        Some(other) => other.to_string(),
    };
    params.insert(RICH_ATTRIBUTES.to_string(), rich_attributes);

    if let Some(publisher) = default_publisher {
        if !options.contains(PUBLISHER_ID) {
            params.insert(PUBLISHER_ID.to_string(), publisher.as_ref().to_string());
        }
    }

    for (name, value) in options.values {
        params.insert(name, value.to_string());
    }
    params
}

/// Applies the search endpoint's facet aliases.
///
/// A boolean `facet` becomes `"on"`/`"off"`. `range` is renamed to
/// `facet.range` and `filter` to `facet.filter`; either one turns faceting
/// on regardless of the `facet` value.
pub fn normalize_search(options: &mut RequestOptions) {
    if let Some(enabled) = options.get("facet").and_then(OptionValue::as_bool) {
        options.insert("facet", if enabled { "on" } else { "off" });
    }
    if let Some(range) = options.remove("range") {
        options.insert("facet.range", range);
        options.insert("facet", "on");
    }
    if let Some(filter) = options.remove("filter") {
        options.insert("facet.filter", filter);
        options.insert("facet", "on");
    }
}

/// Checks that a store lookup has a location: `lat` and `lon`, or `zip`.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when neither form is present.
pub fn require_store_location(options: &RequestOptions) -> Result<(), InvalidParameterError> {
    let has_coordinates = options.contains("lat") && options.contains("lon");
    if has_coordinates || options.contains("zip") {
        Ok(())
    } else {
        Err(InvalidParameterError::new("Missing lat & lon OR zip parameter"))
    }
}

/// Removes `nextPage` from `options` and returns it as a string.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] if `nextPage` is present but not text.
pub(crate) fn take_next_page(
    options: &mut RequestOptions,
) -> Result<Option<String>, InvalidParameterError> {
    match options.remove(NEXT_PAGE) {
        None => Ok(None),
        Some(OptionValue::Text(fragment)) => Ok(Some(fragment)),
        Some(other) => Err(InvalidParameterError::new(format!(
            "nextPage must be a URL fragment, got '{other}'"
        ))),
    }
}

/// Resolves a catalog `nextPage` fragment to the URL of the next page.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] if the fragment cannot be resolved.
pub fn catalog_next_page_url(
    endpoint: &ApiEndpoint,
    fragment: &str,
) -> Result<Url, InvalidParameterError> {
    endpoint.resolve(fragment.trim()).ok_or_else(|| {
        InvalidParameterError::new(format!("Invalid catalog nextPage fragment '{fragment}'"))
    })
}

/// Extracts the `page` value from a reviews `nextPage` fragment.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] if the fragment has no `page` query value.
pub fn review_page(endpoint: &ApiEndpoint, fragment: &str) -> Result<String, InvalidParameterError> {
    endpoint
        .resolve(fragment.trim())
        .and_then(|url| {
            url.query_pairs()
                .find(|(name, _)| name == "page")
                .map(|(_, page)| page.into_owned())
        })
        .filter(|page| !page.is_empty())
        .ok_or_else(|| {
            InvalidParameterError::new(format!(
                "Reviews nextPage fragment '{fragment}' has no page value"
            ))
        })
}

/// Clamps a requested chunk size to `[1, MAX_CHUNK_SIZE]`.
#[must_use]
pub fn clamp_chunk_size(size: usize) -> usize {
    size.clamp(1, MAX_CHUNK_SIZE)
}

/// A normalized, de-duplicated list of item ids.
///
/// A single string is split on commas. Every id is trimmed, empty ids are
/// dropped and duplicates removed, keeping the first occurrence's position.
///
/// # Example
///
/// ```rust
/// use walmart_io::params::ItemIds;
///
/// let ids = ItemIds::from(" 12, 34 ,,12 ,56");
/// assert_eq!(ids.as_slice(), ["12", "34", "56"]);
///
/// let chunks: Vec<String> = ids.chunks(2).collect();
/// assert_eq!(chunks, ["12,34", "56"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemIds(Vec<String>);

impl ItemIds {
    /// Normalizes a sequence of ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self(ids)
    }

    /// Returns the number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the ids in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Splits the ids into comma-joined groups of at most `size` ids.
    ///
    /// `size` is clamped with [`clamp_chunk_size`].
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = String> + '_ {
        self.0.chunks(clamp_chunk_size(size)).map(|chunk| chunk.join(","))
    }

    /// Fails with [`InvalidParameterError`] if there are no ids.
    pub(crate) fn require_non_empty(self) -> Result<Self, InvalidParameterError> {
        if self.is_empty() {
            Err(InvalidParameterError::new("At least one item id is required"))
        } else {
            Ok(self)
        }
    }
}

impl From<&str> for ItemIds {
    fn from(ids: &str) -> Self {
        Self::new(ids.split(','))
    }
}

impl From<String> for ItemIds {
    fn from(ids: String) -> Self {
        Self::from(ids.as_str())
    }
}

impl From<&String> for ItemIds {
    fn from(ids: &String) -> Self {
        Self::from(ids.as_str())
    }
}

impl From<Vec<String>> for ItemIds {
    fn from(ids: Vec<String>) -> Self {
        Self::new(ids)
    }
}

impl From<Vec<&str>> for ItemIds {
    fn from(ids: Vec<&str>) -> Self {
        Self::new(ids)
    }
}

impl From<&[&str]> for ItemIds {
    fn from(ids: &[&str]) -> Self {
        Self::new(ids)
    }
}

impl From<&[String]> for ItemIds {
    fn from(ids: &[String]) -> Self {
        Self::new(ids)
    }
}

impl<const N: usize> From<[&str; N]> for ItemIds {
    fn from(ids: [&str; N]) -> Self {
        Self::new(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_defaults_rich_attributes_and_drops_format() {
        let params = compose(RequestOptions::new().with("format", "xml"), None);
        assert_eq!(params.len(), 1);
        assert_eq!(params["richAttributes"], "true");
    }

    #[test]
    fn test_compose_forwards_non_bool_rich_attributes() {
        let params = compose(RequestOptions::new().with("richAttributes", "FALSE"), None);
        assert_eq!(params["richAttributes"], "FALSE");
    }

    #[test]
    fn test_compose_injects_default_publisher() {
        let publisher = PublisherId::new("default-pub").unwrap();

        let params = compose(RequestOptions::new(), Some(&publisher));
        assert_eq!(params["publisherId"], "default-pub");

        let params = compose(
            RequestOptions::new().with("publisherId", "caller-pub"),
            Some(&publisher),
        );
        assert_eq!(params["publisherId"], "caller-pub");
    }

    #[test]
    fn test_compose_stringifies_values() {
        let params = compose(
            RequestOptions::new()
                .with("lat", 29.735)
                .with("numItems", 25)
                .with("available", true),
            None,
        );
        assert_eq!(params["lat"], "29.735");
        assert_eq!(params["numItems"], "25");
        assert_eq!(params["available"], "true");
    }

    #[test]
    fn test_chunking_45_ids() {
        let ids = ItemIds::new((0..45).map(|i| i.to_string()));
        let sizes: Vec<usize> = ids.chunks(20).map(|c| c.split(',').count()).collect();
        assert_eq!(sizes, vec![20, 20, 5]);

        let first = ids.chunks(20).next().unwrap();
        assert!(first.starts_with("0,1,2,"));
    }

    #[test]
    fn test_chunk_size_is_clamped() {
        assert_eq!(clamp_chunk_size(0), 1);
        assert_eq!(clamp_chunk_size(7), 7);
        assert_eq!(clamp_chunk_size(50), 20);

        let ids = ItemIds::from("1,2,3");
        assert_eq!(ids.chunks(0).count(), 3);
        assert_eq!(ids.chunks(50).count(), 1);
    }

    #[test]
    fn test_item_ids_normalization() {
        let ids = ItemIds::from(vec![" a ", "b", "", "a", "c "]);
        assert_eq!(ids.as_slice(), ["a", "b", "c"]);
        assert!(ItemIds::from(" , ,").require_non_empty().is_err());
    }

    #[test]
    fn test_sequence_ids_are_not_split() {
        let ids = ItemIds::from(vec!["1,2".to_string()]);
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_search_facet_bool_mapping() {
        let mut options = RequestOptions::new().with("facet", true);
        normalize_search(&mut options);
        assert_eq!(options.get("facet"), Some(&OptionValue::from("on")));

        let mut options = RequestOptions::new().with("facet", false);
        normalize_search(&mut options);
        assert_eq!(options.get("facet"), Some(&OptionValue::from("off")));
    }

    #[test]
    fn test_search_range_and_filter_force_facet_on() {
        let mut options = RequestOptions::new()
            .with("facet", false)
            .with("range", "price:[10 TO 20]")
            .with("filter", "brand:Apple");
        normalize_search(&mut options);

        assert_eq!(options.get("facet"), Some(&OptionValue::from("on")));
        assert_eq!(
            options.get("facet.range"),
            Some(&OptionValue::from("price:[10 TO 20]"))
        );
        assert_eq!(
            options.get("facet.filter"),
            Some(&OptionValue::from("brand:Apple"))
        );
        assert!(!options.contains("range"));
        assert!(!options.contains("filter"));
    }

    #[test]
    fn test_store_location_requirement() {
        assert!(require_store_location(&RequestOptions::new().with("zip", 72716)).is_ok());
        assert!(require_store_location(
            &RequestOptions::new().with("lat", 36.1).with("lon", -94.1)
        )
        .is_ok());
        assert!(require_store_location(&RequestOptions::new().with("lat", 36.1)).is_err());
    }

    #[test]
    fn test_review_page_extraction() {
        let endpoint = ApiEndpoint::default();
        let page = review_page(&endpoint, "/reviews/4837473?page=3").unwrap();
        assert_eq!(page, "3");

        assert!(review_page(&endpoint, "/reviews/4837473").is_err());
    }

    #[test]
    fn test_catalog_next_page_resolves_against_origin() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:4000/api-proxy/service").unwrap();
        let url = catalog_next_page_url(
            &endpoint,
            "/api-proxy/service/affil/product/v2/paginated/items?nextPage=abc",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:4000/api-proxy/service/affil/product/v2/paginated/items?nextPage=abc"
        );
    }

    #[test]
    fn test_take_next_page_rejects_non_text() {
        let mut options = RequestOptions::new().with("nextPage", 2);
        assert!(take_next_page(&mut options).is_err());

        let mut options = RequestOptions::new().with("nextPage", "/x?page=2");
        assert_eq!(
            take_next_page(&mut options).unwrap().as_deref(),
            Some("/x?page=2")
        );
        assert!(!options.contains("nextPage"));
    }
}
