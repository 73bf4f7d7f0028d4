use crate::domain::board::Board;
use crate::domain::ticket::{Priority, Ticket, TicketStatus};
use tracing::debug;

/// Values a column's "add" action pre-fills into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorPreset {
    pub status: Option<TicketStatus>,
    pub priority: Priority,
    pub user_id: Option<String>,
}

/// In-progress state of the new-ticket form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketEditor {
    pub is_open: bool,
    pub title: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub user_id: Option<String>,
}

impl TicketEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form with the given preset values
    pub fn open(&mut self, preset: EditorPreset) {
        self.reset();
        self.is_open = true;
        self.status = preset.status.unwrap_or_default();
        self.priority = preset.priority;
        self.user_id = preset.user_id;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_user(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    /// Builds a ticket from the form, appends it to the board and resets the form.
    ///
    /// No validation happens here: an empty title is accepted as-is.
    pub fn submit(&mut self, board: &mut Board) -> Ticket {
        let form = std::mem::take(self);
        let ticket = Ticket {
            id: board.next_ticket_id(),
            title: form.title,
            status: form.status,
            user_id: form.user_id,
            priority: form.priority,
        };

        debug!(id = %ticket.id, status = %ticket.status, "ticket submitted");
        board.add_ticket(ticket.clone());
        ticket
    }

    /// Discards the form without touching the board
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
