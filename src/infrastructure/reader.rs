// src/infrastructure/reader.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::metadata::SummaryFetcher;
use tracing::instrument;

/// Client for a Jina-style reader endpoint that renders a page as text.
///
/// The target URL is percent-encoded into the request path:
/// `{base}/{encoded url}`.
#[derive(Debug, Clone)]
pub struct ReaderSummaryFetcher {
    base_url: String,
}

impl ReaderSummaryFetcher {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint_for(&self, url: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(url)
        )
    }
}

impl SummaryFetcher for ReaderSummaryFetcher {
    #[instrument(skip(self), level = "debug")]
    fn fetch_summary(&self, url: &str) -> DomainResult<String> {
        let endpoint = self.endpoint_for(url);
        let client = reqwest::blocking::Client::new();

        let response = client
            .get(&endpoint)
            .send()
            .map_err(|e| DomainError::CannotFetchSummary(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::CannotFetchSummary(format!(
                "reader endpoint returned {}",
                response.status()
            )));
        }

        response
            .text()
            .map_err(|e| DomainError::CannotFetchSummary(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_percent_encodes_target_url() {
        let fetcher = ReaderSummaryFetcher::new("https://r.example.net");
        assert_eq!(
            fetcher.endpoint_for("https://example.com/a page?q=1"),
            "https://r.example.net/https%3A%2F%2Fexample.com%2Fa%20page%3Fq%3D1"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_in_base() {
        let fetcher = ReaderSummaryFetcher::new("https://r.example.net/");
        assert_eq!(
            fetcher.endpoint_for("https://example.com"),
            "https://r.example.net/https%3A%2F%2Fexample.com"
        );
    }
}
