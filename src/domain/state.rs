//! Board state as a value plus the transitions that produce the next one.
//!
//! Every user action or load result is an [`Event`]; [`reduce`] consumes the
//! current [`AppState`] and returns its successor.

use crate::domain::board::{Board, BoardView, Snapshot};
use crate::domain::editor::{EditorPreset, TicketEditor};
use crate::domain::grouping::GroupingMode;
use crate::domain::sorting::SortSpec;
use crate::domain::ticket::{Priority, TicketStatus};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub board: Board,
    /// `None` when the selected grouping was not recognized; no columns show
    pub grouping: Option<GroupingMode>,
    pub sort: SortSpec,
    pub editor: TicketEditor,
}

impl AppState {
    pub fn new(grouping: Option<GroupingMode>, sort: SortSpec) -> Self {
        Self {
            board: Board::default(),
            grouping,
            sort,
            editor: TicketEditor::default(),
        }
    }

    pub fn view(&self) -> BoardView<'_> {
        match self.grouping {
            Some(mode) => self.board.view(mode, self.sort),
            None => BoardView::empty(self.sort),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Some(GroupingMode::default()), SortSpec::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadSucceeded(Snapshot),
    LoadFailed(String),
    GroupingChanged(GroupingMode),
    SortChanged(SortSpec),
    SortOrderToggled,
    EditorOpened(EditorPreset),
    EditorTitleChanged(String),
    EditorStatusChanged(TicketStatus),
    EditorPriorityChanged(Priority),
    EditorUserChanged(Option<String>),
    TicketSubmitted,
    EditorClosed,
}

pub fn reduce(mut state: AppState, event: Event) -> AppState {
    match event {
        Event::LoadSucceeded(snapshot) => {
            info!(
                tickets = snapshot.tickets.len(),
                users = snapshot.users.len(),
                "board loaded"
            );
            state.board = Board::new(snapshot);
        }
        Event::LoadFailed(reason) => {
            warn!(%reason, "board data unavailable, showing empty board");
            state.board = Board::default();
        }
        Event::GroupingChanged(mode) => state.grouping = Some(mode),
        Event::SortChanged(spec) => state.sort = spec,
        Event::SortOrderToggled => state.sort.order = state.sort.order.toggled(),
        Event::EditorOpened(preset) => state.editor.open(preset),
        Event::EditorTitleChanged(title) => state.editor.set_title(title),
        Event::EditorStatusChanged(status) => state.editor.set_status(status),
        Event::EditorPriorityChanged(priority) => state.editor.set_priority(priority),
        Event::EditorUserChanged(user_id) => state.editor.set_user(user_id),
        Event::TicketSubmitted if state.editor.is_open => {
            state.editor.submit(&mut state.board);
        }
        Event::TicketSubmitted => debug!("submit ignored, editor is closed"),
        Event::EditorClosed => state.editor.cancel(),
    }
    state
}
