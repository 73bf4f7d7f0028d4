//! # Kanban Board
//!
//! Ticket grouping, sorting and editing for a kanban board.
//!
//! Tickets and users are loaded once from a [`DataSource`], partitioned into
//! columns by status, assignee or priority, ordered within each column, and
//! extended through a new-ticket editor. All board state lives in memory.

pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use config::{AppConfig, SourceConfig};
pub use domain::{
    board::{Board, BoardView, Snapshot},
    grouping::{classify, Column, ColumnKey, GroupingMode},
    sorting::{sort_tickets, SortKey, SortOrder, SortSpec},
    state::{reduce, AppState, Event},
    ticket::{Priority, Ticket, TicketId, TicketStatus},
    user::User,
};
pub use error::{KanbanError, Result};
pub use source::{load_or_empty, DataSource};
