//! Wire types for the search service
//!
//! Field names match the backend's JSON exactly; keep them in sync with the
//! service rather than renaming for Rust taste.

use serde::{Deserialize, Serialize};

/// Request body for `POST /search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: usize,
    /// Ranking mode: "balanced", "precision", or "recall"
    pub search_mode: String,
    pub fetch_metadata: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, top_k: usize) -> Self {
        Self {
            query: query.into(),
            top_k,
            search_mode: "balanced".to_string(),
            fetch_metadata: true,
        }
    }
}

/// Request body for `POST /smart-search`
#[derive(Debug, Clone, Serialize)]
pub struct SmartSearchRequest {
    pub query: String,
    pub top_k: usize,
    pub min_good_results: usize,
    pub fetch_metadata: bool,
}

/// Bibliographic metadata resolved from the paper identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// ISO-8601 publication timestamp
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub journal_ref: Option<String>,
}

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperResult {
    pub arxiv_id: String,
    /// Relevance score in [0, 1]
    pub score: f64,
    /// Absent when metadata fetching is disabled or the lookup failed
    #[serde(default)]
    pub metadata: Option<PaperMetadata>,
}

impl PaperResult {
    /// Link to the paper's abstract page
    pub fn arxiv_url(&self) -> String {
        format!("https://arxiv.org/abs/{}", self.arxiv_id)
    }
}

/// Response body for both search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<PaperResult>,
    #[serde(default)]
    pub total_results: usize,
    #[serde(default)]
    pub search_time_ms: f64,
    #[serde(default)]
    pub mode_used: Option<String>,
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub indexed_papers: Option<usize>,
}

/// Error payload the backend attaches to non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Captured from the backend's /smart-search response shape.
    const RESPONSE_JSON: &str = r#"{
        "query": "transformer attention",
        "results": [
            {
                "arxiv_id": "1706.03762",
                "score": 0.8431,
                "metadata": {
                    "title": "Attention Is All You Need",
                    "abstract": "We propose a new simple network architecture, the Transformer.",
                    "authors": ["Ashish Vaswani", "Noam Shazeer"],
                    "published": "2017-06-12T17:57:34+00:00",
                    "categories": ["cs.CL", "cs.LG"],
                    "doi": null,
                    "journal_ref": null
                }
            },
            {
                "arxiv_id": "2010.15980",
                "score": 0.6912,
                "metadata": null
            }
        ],
        "total_results": 2,
        "search_time_ms": 142.7,
        "mode_used": "balanced"
    }"#;

    #[test]
    fn response_deserializes_from_backend_json() {
        let response: SearchResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
        assert_eq!(response.query, "transformer attention");
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.mode_used.as_deref(), Some("balanced"));

        let first = &response.results[0];
        assert_eq!(first.arxiv_id, "1706.03762");
        let metadata = first.metadata.as_ref().expect("metadata present");
        assert_eq!(metadata.title, "Attention Is All You Need");
        assert_eq!(metadata.authors.len(), 2);
        assert!(metadata.doi.is_none());

        // Metadata can be missing per result without failing the decode.
        assert!(response.results[1].metadata.is_none());
    }

    #[test]
    fn request_serializes_expected_fields() {
        let request = SearchRequest::new("quantum error correction", 10);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "quantum error correction");
        assert_eq!(json["top_k"], 10);
        assert_eq!(json["search_mode"], "balanced");
        assert_eq!(json["fetch_metadata"], true);
    }

    #[test]
    fn arxiv_url_points_at_the_abstract_page() {
        let result = PaperResult {
            arxiv_id: "1810.04805".to_string(),
            score: 0.9,
            metadata: None,
        };
        assert_eq!(result.arxiv_url(), "https://arxiv.org/abs/1810.04805");
    }
}
