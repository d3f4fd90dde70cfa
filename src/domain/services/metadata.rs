// src/domain/services/metadata.rs
use crate::domain::bookmark::ExtractedMetadata;
use crate::domain::error::DomainResult;

/// Fetches a page and scrapes its title and description.
///
/// Best effort by contract: any network or parse failure is absorbed into an
/// empty result, never propagated to the caller.
pub trait MetadataFetcher: std::fmt::Debug + Send + Sync {
    fn fetch(&self, url: &str) -> ExtractedMetadata;
}

/// Fetches a third-party reader/summarization rendition of a page.
///
/// Unlike metadata fetching this surfaces failure; the orchestrator decides
/// to fall back rather than escalate.
pub trait SummaryFetcher: std::fmt::Debug + Send + Sync {
    fn fetch_summary(&self, url: &str) -> DomainResult<String>;
}
