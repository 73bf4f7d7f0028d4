use crate::domain::grouping::{classify, ColumnKey, GroupingMode};
use crate::domain::sorting::{sort_tickets, SortSpec};
use crate::domain::ticket::{Ticket, TicketId};
use crate::domain::user::{find_user, User};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Payload served by a data source: every ticket and every user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tickets that fail to decode are skipped, the rest still load
    #[serde(default, deserialize_with = "skip_invalid_tickets")]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TicketEntry {
    Valid(Ticket),
    Invalid(serde_json::Value),
}

fn skip_invalid_tickets<'de, D>(deserializer: D) -> Result<Vec<Ticket>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<TicketEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            TicketEntry::Valid(ticket) => Some(ticket),
            TicketEntry::Invalid(raw) => {
                warn!(id = %raw.get("id").unwrap_or(&raw), "skipping malformed ticket");
                None
            }
        })
        .collect())
}

/// Kanban board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tickets: Vec<Ticket>,
    users: Vec<User>,
    next_ticket_number: u32,
}

impl Board {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            tickets: snapshot.tickets,
            users: snapshot.users,
            next_ticket_number: 1,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Generates the next local ticket ID
    pub fn next_ticket_id(&mut self) -> TicketId {
        let id = TicketId::placeholder(self.next_ticket_number);
        self.next_ticket_number += 1;
        id
    }

    /// Appends a ticket to the board
    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Gets the user a ticket is assigned to, if that user is known
    pub fn user_for(&self, ticket: &Ticket) -> Option<&User> {
        find_user(&self.users, ticket.user_id.as_deref())
    }

    /// Groups and sorts the board for display
    pub fn view(&self, mode: GroupingMode, sort: SortSpec) -> BoardView<'_> {
        let columns = classify(&self.tickets, &self.users, mode)
            .into_iter()
            .map(|mut column| {
                sort_tickets(&mut column.tickets, sort);
                ColumnView {
                    key: column.key,
                    cards: column
                        .tickets
                        .into_iter()
                        .map(|ticket| Card {
                            ticket,
                            user: self.user_for(ticket),
                        })
                        .collect(),
                }
            })
            .collect();

        BoardView {
            mode: Some(mode),
            sort,
            columns,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl From<Snapshot> for Board {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

/// A ticket paired with its assignee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub ticket: &'a Ticket,
    pub user: Option<&'a User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub key: ColumnKey,
    pub cards: Vec<Card<'a>>,
}

impl ColumnView<'_> {
    pub fn title(&self) -> &str {
        self.key.label()
    }
}

/// Classified and sorted board, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    /// `None` when the selected grouping was not recognized
    pub mode: Option<GroupingMode>,
    pub sort: SortSpec,
    pub columns: Vec<ColumnView<'a>>,
}

impl BoardView<'_> {
    /// A board with no columns, shown for an unrecognized grouping
    pub fn empty(sort: SortSpec) -> Self {
        Self {
            mode: None,
            sort,
            columns: Vec::new(),
        }
    }

    pub fn column(&self, title: &str) -> Option<&ColumnView<'_>> {
        self.columns.iter().find(|column| column.title() == title)
    }
}
