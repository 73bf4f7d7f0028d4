use crate::{domain::Snapshot, error::Result};
use async_trait::async_trait;
use tracing::{instrument, warn};

#[cfg(feature = "file-source")]
pub mod file_source;

#[cfg(feature = "http-source")]
pub mod http_source;

#[cfg(feature = "file-source")]
pub use file_source::FileSource;

#[cfg(feature = "http-source")]
pub use http_source::HttpSource;

/// Endpoint the board loads from when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Where the board's tickets and users come from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the full ticket and user lists
    async fn fetch(&self) -> Result<Snapshot>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// Fetches once from the source, falling back to an empty snapshot.
///
/// Failures are logged and never retried; the board simply starts empty.
#[instrument(skip(source), fields(from = %source.describe()))]
pub async fn load_or_empty(source: &dyn DataSource) -> Snapshot {
    match source.fetch().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("error fetching board data: {err}");
            Snapshot::default()
        }
    }
}
