// src/util/testing.rs

use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::bookmark::ExtractedMetadata;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::metadata::{MetadataFetcher, SummaryFetcher};
use crate::infrastructure::repositories::sqlite::connection::{init_pool, ConnectionPool};

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
pub fn init_test_logging() {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "debug");
    }

    let noisy_modules = ["html5ever", "reqwest", "mio", "want", "hyper_util", "hyper"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves and restores LINKSTASH_* environment variables around a test.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_url: Option<String>,
    listen_addr: Option<String>,
    reader_url: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_url: env::var("LINKSTASH_DB_URL").ok(),
            listen_addr: env::var("LINKSTASH_LISTEN_ADDR").ok(),
            reader_url: env::var("LINKSTASH_READER_URL").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("LINKSTASH_DB_URL");
        env::remove_var("LINKSTASH_LISTEN_ADDR");
        env::remove_var("LINKSTASH_READER_URL");
        if let Some(val) = &self.db_url {
            env::set_var("LINKSTASH_DB_URL", val);
        }
        if let Some(val) = &self.listen_addr {
            env::set_var("LINKSTASH_LISTEN_ADDR", val);
        }
        if let Some(val) = &self.reader_url {
            env::set_var("LINKSTASH_READER_URL", val);
        }
    }
}

/// A migrated SQLite database in a temp directory, dropped with the test.
#[derive(Debug)]
pub struct TestDb {
    pub pool: ConnectionPool,
    pub db_path: PathBuf,
    _temp_dir: tempfile::TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        init_test_logging();
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("linkstash-test.db");
        let pool = init_pool(db_path.to_string_lossy().as_ref())
            .expect("Failed to initialize test database");
        Self {
            pool,
            db_path,
            _temp_dir: temp_dir,
        }
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata fetcher returning a fixed result, for tests that must not
/// touch the network.
#[derive(Debug, Clone, Default)]
pub struct StubMetadataFetcher {
    pub metadata: ExtractedMetadata,
}

impl StubMetadataFetcher {
    pub fn returning(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            metadata: ExtractedMetadata {
                title: title.map(str::to_string),
                description: description.map(str::to_string),
            },
        }
    }
}

impl MetadataFetcher for StubMetadataFetcher {
    fn fetch(&self, _url: &str) -> ExtractedMetadata {
        self.metadata.clone()
    }
}

/// Summary fetcher returning a fixed body, or an error when `body` is None.
#[derive(Debug, Clone, Default)]
pub struct StubSummaryFetcher {
    pub body: Option<String>,
}

impl StubSummaryFetcher {
    pub fn returning(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { body: None }
    }
}

impl SummaryFetcher for StubSummaryFetcher {
    fn fetch_summary(&self, _url: &str) -> DomainResult<String> {
        self.body
            .clone()
            .ok_or_else(|| DomainError::CannotFetchSummary("stubbed failure".to_string()))
    }
}
