use crate::domain::{GroupingMode, SortKey, SortOrder, SortSpec};
use crate::error::{KanbanError, Result};
#[cfg(feature = "file-source")]
use crate::source::FileSource;
#[cfg(feature = "http-source")]
use crate::source::HttpSource;
use crate::source::{DataSource, DEFAULT_ENDPOINT};
use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Where to load board data from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum SourceConfig {
    Http { url: String },
    File { path: PathBuf },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Builds the data source this configuration describes
    pub fn build(&self) -> Result<Box<dyn DataSource>> {
        match self {
            #[cfg(feature = "http-source")]
            Self::Http { url } => Ok(Box::new(HttpSource::new(url.clone()))),
            #[cfg(feature = "file-source")]
            Self::File { path } => Ok(Box::new(FileSource::new(path))),
            #[allow(unreachable_patterns)]
            other => Err(KanbanError::ConfigError(format!(
                "data source {other:?} is not enabled in this build"
            ))),
        }
    }
}

/// Board settings: data source plus initial grouping and sort.
///
/// Unknown grouping or sort key names do not fail loading: an unknown
/// grouping leaves `grouping` empty (a board with no columns) and an unknown
/// sort key means no reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    #[serde(deserialize_with = "grouping_by_name")]
    pub grouping: Option<GroupingMode>,
    pub sort: SortSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            grouping: Some(GroupingMode::default()),
            sort: SortSpec::default(),
        }
    }
}

fn grouping_by_name<'de, D>(deserializer: D) -> std::result::Result<Option<GroupingMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(GroupingMode::from_name))
}

impl AppConfig {
    pub const SOURCE_URL_VAR: &'static str = "KANBAN_SOURCE_URL";
    pub const SOURCE_FILE_VAR: &'static str = "KANBAN_SOURCE_FILE";
    pub const GROUPING_VAR: &'static str = "KANBAN_GROUPING";
    pub const SORT_VAR: &'static str = "KANBAN_SORT";
    pub const ORDER_VAR: &'static str = "KANBAN_ORDER";

    /// Reads a JSON config file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            KanbanError::ConfigError(format!("cannot read {}: {err}", path.display()))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Defaults overridden by `KANBAN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Applies overrides from a variable lookup, e.g. the process environment.
    ///
    /// A file source wins over a URL when both are set.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(Self::SOURCE_URL_VAR) {
            self.source = SourceConfig::Http { url };
        }
        if let Some(path) = non_empty(Self::SOURCE_FILE_VAR) {
            self.source = SourceConfig::File {
                path: PathBuf::from(path),
            };
        }
        if let Some(grouping) = non_empty(Self::GROUPING_VAR) {
            self.grouping = GroupingMode::from_name(&grouping);
        }
        if let Some(key) = non_empty(Self::SORT_VAR) {
            self.sort.key = SortKey::from_name(&key);
        }
        if let Some(order) = non_empty(Self::ORDER_VAR) {
            self.sort.order = order.parse::<SortOrder>()?;
        }

        Ok(self)
    }
}
