use crate::{
    domain::Snapshot,
    error::Result,
    source::{DataSource, DEFAULT_ENDPOINT},
};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::debug;

/// Loads a snapshot with a single GET request
pub struct HttpSource {
    http: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let snapshot: Snapshot = response.json().await?;
        debug!(
            url = %self.url,
            tickets = snapshot.tickets.len(),
            users = snapshot.users.len(),
            "fetched snapshot"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
