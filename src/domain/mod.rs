pub mod board;
pub mod editor;
pub mod grouping;
pub mod sorting;
pub mod state;
pub mod ticket;
pub mod user;

pub use board::{Board, BoardView, Card, ColumnView, Snapshot};
pub use editor::{EditorPreset, TicketEditor};
pub use grouping::{classify, classify_named, Column, ColumnKey, GroupingMode};
pub use sorting::{sort_tickets, sorted, SortKey, SortOrder, SortSpec};
pub use state::{reduce, AppState, Event};
pub use ticket::{Priority, Ticket, TicketId, TicketStatus};
pub use user::User;
