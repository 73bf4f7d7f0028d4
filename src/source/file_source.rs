use crate::{
    domain::Snapshot,
    error::{KanbanError, Result},
    source::DataSource,
};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Reads a snapshot saved as JSON on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Snapshot> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => KanbanError::Fetch(format!(
                    "snapshot file {} does not exist",
                    self.path.display()
                )),
                _ => KanbanError::IoError(err),
            })?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;

        debug!(
            tickets = snapshot.tickets.len(),
            users = snapshot.users.len(),
            "read snapshot file"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TicketStatus;
    use crate::source::load_or_empty;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "tickets": [
            {"id": "CAM-1", "title": "Update User Profile Page UI", "tag": ["Feature request"], "userId": "usr-1", "status": "Todo", "priority": 4},
            {"id": "CAM-2", "title": "Add Multi-Language Support", "tag": ["Feature Request"], "userId": "usr-2", "status": "In progress", "priority": 3}
        ],
        "users": [
            {"id": "usr-1", "name": "Anoop Sharma", "available": false},
            {"id": "usr-2", "name": "Yogesh", "available": true}
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_reads_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        fs::write(&path, SNAPSHOT).await.unwrap();

        let source = FileSource::new(&path);
        let snapshot = source.fetch().await.unwrap();

        assert_eq!(snapshot.tickets.len(), 2);
        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.tickets[1].status, TicketStatus::InProgress);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("missing.json"));

        assert!(matches!(source.fetch().await, Err(KanbanError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_bad_ticket_does_not_drop_the_board() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        fs::write(
            &path,
            r#"{
                "tickets": [
                    {"id": "CAM-1", "title": "Fine", "status": "Todo", "priority": 2},
                    {"id": "CAM-2", "title": "Off the scale", "status": "Todo", "priority": 9}
                ],
                "users": [{"id": "usr-1", "name": "Anoop", "available": true}]
            }"#,
        )
        .await
        .unwrap();

        let snapshot = load_or_empty(&FileSource::new(&path)).await;
        assert_eq!(snapshot.tickets.len(), 1);
        assert_eq!(snapshot.tickets[0].id.as_str(), "CAM-1");
        assert_eq!(snapshot.users.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty_board() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        fs::write(&path, "{\"tickets\": [").await.unwrap();

        let source = FileSource::new(&path);
        assert!(matches!(
            source.fetch().await,
            Err(KanbanError::SerializationError(_))
        ));

        let snapshot = load_or_empty(&source).await;
        assert!(snapshot.tickets.is_empty());
    }
}
