//! Plain-text rendering of a [`BoardView`].

use crate::domain::{BoardView, Card, ColumnView, Priority, TicketStatus};

/// Shown when a status or priority has no icon of its own
pub const DEFAULT_ICON: &str = "·";

pub fn status_icon(status: &TicketStatus) -> &'static str {
    match status {
        TicketStatus::Backlog => "◌",
        TicketStatus::Todo => "○",
        TicketStatus::InProgress => "◐",
        TicketStatus::Done => "●",
        TicketStatus::Cancelled => "⊘",
        TicketStatus::Other(_) => DEFAULT_ICON,
    }
}

pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "!!!",
        Priority::High => "▮▮▮",
        Priority::Medium => "▮▮▯",
        Priority::Low => "▮▯▯",
        Priority::NoPriority => DEFAULT_ICON,
    }
}

/// One line per card: status icon, id, title, assignee, priority
pub fn render_card(card: &Card<'_>) -> String {
    let ticket = card.ticket;
    let mut line = format!(
        "{} {} {}",
        status_icon(&ticket.status),
        ticket.id,
        ticket.title
    );
    if let Some(user) = card.user {
        line.push_str(&format!(" @{}", user.name));
    }
    line.push_str(&format!(
        " [{} {}]",
        priority_icon(ticket.priority),
        ticket.priority
    ));
    line
}

fn render_column(out: &mut String, column: &ColumnView<'_>) {
    out.push_str(&format!("{} ({})\n", column.title(), column.cards.len()));
    for card in &column.cards {
        out.push_str(&format!("  {}\n", render_card(card)));
    }
}

/// Renders every column in order, separated by blank lines
pub fn render_board(view: &BoardView<'_>) -> String {
    let mut out = String::new();
    for (i, column) in view.columns.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_column(&mut out, column);
    }
    out
}
