// src/infrastructure/http.rs
use crate::domain::bookmark::ExtractedMetadata;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::metadata::MetadataFetcher;
use tracing::{debug, instrument};

/// Scrapes page metadata with a plain GET and an HTML parse.
///
/// Deliberately minimal: no timeout, no content-type check, no redirect
/// budget beyond the client default.
#[derive(Debug, Default, Clone)]
pub struct HttpMetadataFetcher;

impl MetadataFetcher for HttpMetadataFetcher {
    #[instrument(skip(self), level = "debug")]
    fn fetch(&self, url: &str) -> ExtractedMetadata {
        match load_page_metadata(url) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Error extracting metadata: {}", e);
                ExtractedMetadata::empty()
            }
        }
    }
}

fn load_page_metadata(url: &str) -> DomainResult<ExtractedMetadata> {
    let client = reqwest::blocking::Client::new();
    let body = client
        .get(url)
        .send()
        .map_err(|e| DomainError::CannotFetchMetadata(e.to_string()))?
        .text()
        .map_err(|e| DomainError::CannotFetchMetadata(e.to_string()))?;

    Ok(parse_page_metadata(&body))
}

/// First `<title>` text and first `<meta name="description">` content
/// attribute; empty values count as absent.
fn parse_page_metadata(body: &str) -> ExtractedMetadata {
    let document = select::document::Document::from(body);

    let title = document
        .find(select::predicate::Name("title"))
        .next()
        .map(|n| n.text().trim().to_owned())
        .filter(|t| !t.is_empty());

    let description = document
        .find(select::predicate::Attr("name", "description"))
        .next()
        .and_then(|n| n.attr("content"))
        .map(str::to_owned)
        .filter(|d| !d.is_empty());

    ExtractedMetadata { title, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_title_and_description() {
        let html = r#"<html><head>
            <title> Example Domain </title>
            <meta name="description" content="An example page">
            </head><body></body></html>"#;

        let metadata = parse_page_metadata(html);
        assert_eq!(metadata.title.as_deref(), Some("Example Domain"));
        assert_eq!(metadata.description.as_deref(), Some("An example page"));
    }

    #[test]
    fn test_parse_takes_first_title_only() {
        let html = "<title>First</title><title>Second</title>";
        let metadata = parse_page_metadata(html);
        assert_eq!(metadata.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_parse_without_metadata_yields_empty() {
        let metadata = parse_page_metadata("<html><body>no head</body></html>");
        assert!(metadata.title.is_none());
        assert!(metadata.description.is_none());
    }

    #[test]
    fn test_parse_ignores_empty_values() {
        let html = r#"<title></title><meta name="description" content="">"#;
        let metadata = parse_page_metadata(html);
        assert!(metadata.title.is_none());
        assert!(metadata.description.is_none());
    }

    #[test]
    fn test_fetch_swallows_network_failure() {
        // Nothing listens on this port; the contract is an empty result,
        // not an error.
        let fetcher = HttpMetadataFetcher;
        let metadata = fetcher.fetch("http://127.0.0.1:1/unreachable");
        assert_eq!(metadata, ExtractedMetadata::empty());
    }
}
