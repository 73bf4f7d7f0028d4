use crate::domain::user::User;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Unique identifier for a ticket (e.g., CAM-1, or NEW-3 for a locally created one)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(String);

impl TicketId {
    const PLACEHOLDER_PREFIX: &'static str = "NEW-";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a local id for a ticket the server has not numbered yet
    pub fn placeholder(counter: u32) -> Self {
        Self(format!("{}{}", Self::PLACEHOLDER_PREFIX, counter))
    }

    pub fn is_placeholder(&self) -> bool {
        self.0
            .strip_prefix(Self::PLACEHOLDER_PREFIX)
            .is_some_and(|rest| rest.parse::<u32>().is_ok())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow status of a ticket.
///
/// Statuses arrive as free text from the data source. Text that matches one of
/// the known labels (ignoring case) becomes the corresponding variant; anything
/// else is kept verbatim in [`TicketStatus::Other`] and lands in no status column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    Backlog,
    Todo,
    InProgress,
    Done,
    Cancelled,
    Other(String),
}

impl TicketStatus {
    /// The status columns of the board, in display order
    pub fn columns() -> [TicketStatus; 5] {
        [
            Self::Backlog,
            Self::Todo,
            Self::InProgress,
            Self::Done,
            Self::Cancelled,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Case-insensitive comparison of this status against a column label
    pub fn matches_label(&self, label: &str) -> bool {
        self.label().to_lowercase() == label.to_lowercase()
    }
}

impl FromStr for TicketStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = Self::columns()
            .into_iter()
            .find(|status| status.matches_label(s))
            .unwrap_or_else(|| Self::Other(s.to_string()));
        Ok(status)
    }
}

impl From<String> for TicketStatus {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordinal urgency of a ticket, encoded on the wire as 0 through 4.
///
/// This is the single priority table used for columns, sorting and display:
/// 0 = No Priority, 1 = Low, 2 = Medium, 3 = High, 4 = Urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum Priority {
    #[default]
    NoPriority = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    /// The priority columns of the board, in display order
    pub const COLUMNS: [Priority; 5] = [
        Self::NoPriority,
        Self::Urgent,
        Self::High,
        Self::Medium,
        Self::Low,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NoPriority => "No Priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = KanbanError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::NoPriority),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            other => Err(KanbanError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A kanban ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub status: TicketStatus,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl Ticket {
    /// Creates a backlog ticket with no priority and no assignee
    pub fn new(id: TicketId, title: String) -> Self {
        Self {
            id,
            title,
            status: TicketStatus::default(),
            user_id: None,
            priority: Priority::default(),
        }
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Checks whether the ticket is assigned to the given user
    pub fn is_assigned_to(&self, user: &User) -> bool {
        self.user_id.as_deref() == Some(user.id.as_str())
    }
}
