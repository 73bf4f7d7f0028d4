use crate::domain::ticket::{Priority, Ticket, TicketStatus};
use crate::domain::user::User;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

/// Dimension used to partition tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupingMode {
    /// Reads a grouping by name; `None` for a name that is not a grouping
    pub fn from_name(name: &str) -> Option<Self> {
        match name.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                debug!(%err, "unrecognized grouping, board left empty");
                None
            }
        }
    }
}

impl FromStr for GroupingMode {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupingMode::Status),
            "user" => Ok(GroupingMode::User),
            "priority" => Ok(GroupingMode::Priority),
            _ => Err(KanbanError::InvalidGrouping(s.to_string())),
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::User => write!(f, "user"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// Identity of a column under a grouping mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Status(TicketStatus),
    /// User columns are keyed by display name
    User(String),
    Priority(Priority),
}

impl ColumnKey {
    pub fn label(&self) -> &str {
        match self {
            Self::Status(status) => status.label(),
            Self::User(name) => name,
            Self::Priority(priority) => priority.label(),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named bucket of tickets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub key: ColumnKey,
    pub tickets: Vec<&'a Ticket>,
}

impl<'a> Column<'a> {
    fn empty(key: ColumnKey) -> Self {
        Self {
            key,
            tickets: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.key.label()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Partitions tickets into the ordered columns of a grouping mode.
///
/// Status and priority modes always produce their full fixed column set, even
/// when a column has no tickets. User mode produces one column per user, in
/// user-list order. A ticket lands in at most one column; tickets whose
/// status is not a known label, or whose `userId` names no known user, land in
/// none. Tickets keep their input order within a column.
pub fn classify<'a>(tickets: &'a [Ticket], users: &[User], mode: GroupingMode) -> Vec<Column<'a>> {
    let columns: Vec<Column<'a>> = match mode {
        GroupingMode::Status => TicketStatus::columns()
            .into_iter()
            .map(|status| {
                let label = status.label().to_string();
                let mut column = Column::empty(ColumnKey::Status(status));
                column.tickets = tickets
                    .iter()
                    .filter(|t| t.status.matches_label(&label))
                    .collect();
                column
            })
            .collect(),
        GroupingMode::User => users
            .iter()
            .map(|user| {
                let mut column = Column::empty(ColumnKey::User(user.name.clone()));
                column.tickets = tickets.iter().filter(|t| t.is_assigned_to(user)).collect();
                column
            })
            .collect(),
        GroupingMode::Priority => Priority::COLUMNS
            .into_iter()
            .map(|priority| {
                let mut column = Column::empty(ColumnKey::Priority(priority));
                column.tickets = tickets.iter().filter(|t| t.priority == priority).collect();
                column
            })
            .collect(),
    };

    debug!(
        %mode,
        columns = columns.len(),
        placed = columns.iter().map(Column::len).sum::<usize>(),
        total = tickets.len(),
        "classified tickets"
    );

    columns
}

/// Classifies by a grouping name as it arrives from a form or query string.
///
/// An unrecognized name yields no columns at all, so nothing is placed.
pub fn classify_named<'a>(tickets: &'a [Ticket], users: &[User], mode: &str) -> Vec<Column<'a>> {
    match GroupingMode::from_name(mode) {
        Some(mode) => classify(tickets, users, mode),
        None => Vec::new(),
    }
}
