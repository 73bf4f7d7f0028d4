use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Failed to fetch board data: {0}")]
    Fetch(String),

    #[error("Data source responded with status {status}")]
    Http { status: u16 },

    #[error("Invalid grouping '{0}'. Valid groupings: status, user, priority")]
    InvalidGrouping(String),

    #[error("Invalid sort field '{0}'. Valid fields: none, priority, title")]
    InvalidSortKey(String),

    #[error("Invalid sort order '{0}'. Valid orders: asc, desc")]
    InvalidSortOrder(String),

    #[error("Invalid priority {0}, expected a value between 0 and 4")]
    InvalidPriority(i64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(feature = "http-source")]
impl From<reqwest::Error> for KanbanError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http {
                status: status.as_u16(),
            },
            None => Self::Fetch(err.to_string()),
        }
    }
}
