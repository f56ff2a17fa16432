//! HTTP client for the search service

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::constants::{http, search as defaults};

use super::types::{
    ErrorBody, HealthStatus, SearchRequest, SearchResponse, SmartSearchRequest,
};

/// Search client error type
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured server URL is not a valid base URL
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service could not be reached (connect failure or timeout)
    #[error("search service unavailable: {0}")]
    ServiceUnavailable(reqwest::Error),

    /// The service answered, but not with a usable response
    #[error("bad response from search service: {0}")]
    BadResponse(String),
}

/// Client for the remote paper-search service
///
/// One instance per app; `reqwest::Client` already pools connections.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: Url,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder()
            .connect_timeout(http::CONNECT_TIMEOUT)
            .timeout(http::REQUEST_TIMEOUT)
            .build()
            .map_err(SearchError::ServiceUnavailable)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /search` - plain ranked search
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        debug!(query = %request.query, top_k = request.top_k, "Searching papers");
        self.post("search", request).await
    }

    /// `POST /smart-search` - the service escalates ranking modes until it
    /// has enough good results
    pub async fn smart_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<SearchResponse, SearchError> {
        let request = SmartSearchRequest {
            query: query.to_string(),
            top_k,
            min_good_results: defaults::DEFAULT_MIN_GOOD_RESULTS,
            fetch_metadata: true,
        };
        debug!(query = %query, top_k, "Smart-searching papers");
        let response: SearchResponse = self.post("smart-search", &request).await?;
        info!(
            query = %response.query,
            results = response.results.len(),
            time_ms = response.search_time_ms,
            "Search completed"
        );
        Ok(response)
    }

    /// `GET /health` - service reachability probe
    pub async fn health(&self) -> Result<HealthStatus, SearchError> {
        let url = self.endpoint("health")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;
        decode(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, SearchError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;
        decode(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Connect/timeout failures are "unavailable"; anything else that produced
/// no usable response is a bad response.
fn classify_transport_error(err: reqwest::Error) -> SearchError {
    if err.is_connect() || err.is_timeout() {
        SearchError::ServiceUnavailable(err)
    } else {
        SearchError::BadResponse(err.to_string())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SearchError> {
    let status = response.status();
    if !status.is_success() {
        // The backend attaches a human-readable `detail` to failures.
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(SearchError::BadResponse(detail));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| SearchError::BadResponse(format!("undecodable body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            SearchClient::new("not a url"),
            Err(SearchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn joins_endpoints_against_the_base() {
        let client = SearchClient::new("http://localhost:8000").unwrap();
        let url = client.endpoint("smart-search").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/smart-search");
    }

    #[tokio::test]
    async fn unreachable_service_is_classified_as_unavailable() {
        // Port 9 (discard) is not listening; the connect fails immediately.
        let client = SearchClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.health().await,
            Err(SearchError::ServiceUnavailable(_))
        ));
    }
}
