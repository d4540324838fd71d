//! The request type sent by [`HttpClient`](crate::clients::HttpClient).

use reqwest::Url;

use crate::params::QueryParams;

/// A fully composed GET request: endpoint URL plus query parameters.
///
/// The URL may already carry a query string (catalog continuation pages do);
/// the parameters are appended to it.
///
/// # Example
///
/// ```rust
/// use walmart_io::clients::ApiRequest;
/// use walmart_io::params::QueryParams;
/// use walmart_io::ApiEndpoint;
///
/// let mut params = QueryParams::new();
/// params.insert("query".to_string(), "ipa".to_string());
///
/// let request = ApiRequest::new(
///     ApiEndpoint::default().endpoint_url("/affil/product/v2/search"),
///     params,
/// );
/// assert!(request.full_url().as_str().ends_with("/affil/product/v2/search?query=ipa"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    url: Url,
    params: QueryParams,
}

impl ApiRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(url: Url, params: QueryParams) -> Self {
        Self { url, params }
    }

    /// Returns the endpoint URL, without the composed parameters.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns a copy of this request with one parameter replaced.
    #[must_use]
    pub fn with_param(&self, name: &str, value: impl Into<String>) -> Self {
        let mut request = self.clone();
        request.params.insert(name.to_string(), value.into());
        request
    }

    /// Returns the URL with the parameters appended, as it goes on the wire.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_keeps_existing_query() {
        let url = Url::parse("https://example.com/items?nextPage=abc").unwrap();
        let mut params = QueryParams::new();
        params.insert("richAttributes".to_string(), "true".to_string());

        let request = ApiRequest::new(url, params);
        assert_eq!(
            request.full_url().as_str(),
            "https://example.com/items?nextPage=abc&richAttributes=true"
        );
    }

    #[test]
    fn test_with_param_replaces_value() {
        let url = Url::parse("https://example.com/items").unwrap();
        let mut params = QueryParams::new();
        params.insert("ids".to_string(), "1,2".to_string());

        let request = ApiRequest::new(url, params);
        let next = request.with_param("ids", "3");
        assert_eq!(next.params()["ids"], "3");
        assert_eq!(request.params()["ids"], "1,2");
    }
}
