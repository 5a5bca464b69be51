//! Retrieval of the static schedule documents (per-day event files and
//! per-team files) from wherever the ingestion job published them.
//!
//! Absence of a document is a normal state (a date not yet ingested, a team
//! never cached), so it gets its own error variant and is never fatal.

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested document does not exist. Expected and non-fatal.
    #[error("document not found")]
    NotFound,
    #[error("transport error: {0}")]
    Transport(String),
}

/// Source of schedule documents, addressed by a relative path such as
/// `events/2025-11-04.json` or `teams/100.json`.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches documents over HTTP from a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpFetcher {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn get_blocking(url: &str) -> Result<String, FetchError> {
        match ureq::get(url).call() {
            Ok(response) => {
                let code = response.status().as_u16();
                if code == 404 {
                    return Err(FetchError::NotFound);
                }
                if !(200..300).contains(&code) {
                    return Err(FetchError::Transport(format!(
                        "unexpected status {} for {}",
                        code, url
                    )));
                }
                let mut body_reader = response.into_body();
                body_reader
                    .read_to_string()
                    .map_err(|e| FetchError::Transport(format!("failed to read body: {}", e)))
            }
            Err(ureq::Error::StatusCode(404)) => Err(FetchError::NotFound),
            Err(e) => Err(FetchError::Transport(format!("request failed: {}", e))),
        }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        // ureq is blocking; run the call on the blocking pool so the
        // cooperative tasks around it keep making progress.
        match tokio::task::spawn_blocking(move || Self::get_blocking(&url)).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "fetch task failed to complete");
                Err(FetchError::Transport(format!("fetch task failed: {}", e)))
            }
        }
    }
}

/// Fetches documents from a local directory holding an ingested snapshot.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirFetcher { root: root.into() }
    }
}

impl Fetch for DirFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        match tokio::fs::read_to_string(self.root.join(path)).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FetchError::NotFound),
            Err(e) => Err(FetchError::Transport(format!("read failed: {}", e))),
        }
    }
}
