use crate::domain::ticket::Ticket;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fields available for sorting tickets within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKey {
    #[default]
    None,
    Priority,
    Title,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Key and direction used to order tickets within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}

impl SortKey {
    /// Reads a sort key by name; names that are not a key mean no reordering
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            debug!(%err, "unrecognized sort key, keeping input order");
            SortKey::None
        })
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl FromStr for SortKey {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(KanbanError::InvalidSortKey(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(KanbanError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Sorts tickets in-place by the given spec.
///
/// The sort is stable: tickets that compare equal under the key keep their
/// relative input order in both directions. `SortKey::None` leaves the slice
/// untouched.
///
/// Works on owned tickets as well as on borrowed ones, so a classified column
/// of `&Ticket` can be ordered without cloning.
///
/// # Examples
/// ```
/// use kanban_board::domain::sorting::{sort_tickets, SortKey, SortSpec};
/// use kanban_board::domain::ticket::{Priority, Ticket, TicketId};
///
/// let mut tickets = vec![
///     Ticket::new(TicketId::new("a"), "A".to_string()).with_priority(Priority::High),
///     Ticket::new(TicketId::new("b"), "B".to_string()).with_priority(Priority::Low),
/// ];
///
/// sort_tickets(&mut tickets, SortSpec::ascending(SortKey::Priority));
/// assert_eq!(tickets[0].id.as_str(), "b");
/// ```
pub fn sort_tickets<T: Borrow<Ticket>>(tickets: &mut [T], spec: SortSpec) {
    if spec.key == SortKey::None {
        return;
    }

    tickets.sort_by(|a, b| {
        let (a, b) = (a.borrow(), b.borrow());
        let cmp = match spec.key {
            SortKey::None => Ordering::Equal,
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::Title => compare_titles(&a.title, &b.title),
        };

        match spec.order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Returns a sorted copy, leaving the input untouched
pub fn sorted(tickets: &[Ticket], spec: SortSpec) -> Vec<Ticket> {
    let mut copy = tickets.to_vec();
    sort_tickets(&mut copy, spec);
    copy
}

/// Sorts by a key name as it arrives from a form or query string.
///
/// An unrecognized key leaves the tickets in input order.
pub fn sort_named<T: Borrow<Ticket>>(tickets: &mut [T], key: &str, order: SortOrder) {
    sort_tickets(tickets, SortSpec::new(SortKey::from_name(key), order));
}

/// Base letters only: decomposed, combining marks dropped, lowercased
fn base_letters(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style title collation.
///
/// Titles compare on base letters first, ignoring accents and case. Ties
/// then put unaccented before accented, then lowercase before uppercase.
/// Identical titles compare equal.
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| {
            let a_marked = a.nfd().flat_map(char::to_lowercase);
            a_marked.cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::{Priority, TicketId};

    fn ticket(id: &str, title: &str, priority: Priority) -> Ticket {
        Ticket::new(TicketId::new(id), title.to_string()).with_priority(priority)
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_priority_ascending_is_stable() {
        let mut tickets = vec![
            ticket("a", "A", Priority::High),
            ticket("b", "B", Priority::Low),
            ticket("c", "C", Priority::Urgent),
            ticket("d", "D", Priority::Low),
        ];

        sort_tickets(&mut tickets, SortSpec::ascending(SortKey::Priority));

        assert_eq!(ids(&tickets), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_by_priority_descending_keeps_ties_in_input_order() {
        let mut tickets = vec![
            ticket("a", "A", Priority::High),
            ticket("b", "B", Priority::Low),
            ticket("c", "C", Priority::Urgent),
            ticket("d", "D", Priority::Low),
        ];

        sort_tickets(&mut tickets, SortSpec::descending(SortKey::Priority));

        assert_eq!(ids(&tickets), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_sort_by_title_descending_case_insensitive() {
        let mut tickets = vec![
            ticket("1", "Banana", Priority::NoPriority),
            ticket("2", "apple", Priority::NoPriority),
            ticket("3", "Cherry", Priority::NoPriority),
        ];

        sort_tickets(&mut tickets, SortSpec::descending(SortKey::Title));

        let titles: Vec<&str> = tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Cherry", "Banana", "apple"]);
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let mut tickets = vec![
            ticket("1", "zebra", Priority::NoPriority),
            ticket("2", "Apple", Priority::NoPriority),
            ticket("3", "BANANA", Priority::NoPriority),
        ];

        sort_tickets(&mut tickets, SortSpec::ascending(SortKey::Title));

        let titles: Vec<&str> = tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "BANANA", "zebra"]);
    }

    #[test]
    fn test_sort_none_preserves_order() {
        let mut tickets = vec![
            ticket("c", "C", Priority::Urgent),
            ticket("a", "A", Priority::NoPriority),
            ticket("b", "B", Priority::Medium),
        ];

        sort_tickets(&mut tickets, SortSpec::descending(SortKey::None));

        assert_eq!(ids(&tickets), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_borrowed_tickets() {
        let owned = vec![
            ticket("a", "A", Priority::Medium),
            ticket("b", "B", Priority::Urgent),
        ];
        let mut borrowed: Vec<&Ticket> = owned.iter().collect();

        sort_tickets(&mut borrowed, SortSpec::descending(SortKey::Priority));

        assert_eq!(borrowed[0].id.as_str(), "b");
        assert_eq!(owned[0].id.as_str(), "a");
    }

    #[test]
    fn test_sorted_is_idempotent_and_pure() {
        let tickets = vec![
            ticket("a", "A", Priority::High),
            ticket("b", "B", Priority::Low),
        ];
        let spec = SortSpec::ascending(SortKey::Priority);

        let first = sorted(&tickets, spec);
        let second = sorted(&tickets, spec);

        assert_eq!(first, second);
        assert_eq!(ids(&tickets), vec!["a", "b"]);
    }

    #[test]
    fn test_compare_titles_case_tie_break() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_title_ignores_accents() {
        let mut tickets = vec![
            ticket("1", "fig", Priority::NoPriority),
            ticket("2", "éclair", Priority::NoPriority),
            ticket("3", "Zebra", Priority::NoPriority),
        ];

        sort_tickets(&mut tickets, SortSpec::ascending(SortKey::Title));

        let titles: Vec<&str> = tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["éclair", "fig", "Zebra"]);
    }

    #[test]
    fn test_compare_titles_accent_tie_break() {
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("Résumé", "resumes"), Ordering::Less);
        assert_eq!(compare_titles("Éclair", "eclair"), Ordering::Greater);
    }

    #[test]
    fn test_sort_named_unknown_key_keeps_order() {
        let mut tickets = vec![
            ticket("c", "C", Priority::Urgent),
            ticket("a", "A", Priority::NoPriority),
            ticket("b", "B", Priority::Medium),
        ];

        sort_named(&mut tickets, "status", SortOrder::Ascending);
        assert_eq!(ids(&tickets), vec!["c", "a", "b"]);

        sort_named(&mut tickets, "priority", SortOrder::Ascending);
        assert_eq!(ids(&tickets), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_key_from_name() {
        assert_eq!(SortKey::from_name("Title"), SortKey::Title);
        assert_eq!(SortKey::from_name("status"), SortKey::None);
    }

    #[test]
    fn test_parse_sort_key_and_order() {
        assert_eq!("Priority".parse::<SortKey>().unwrap(), SortKey::Priority);
        assert_eq!("title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("status".parse::<SortKey>().is_err());

        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("up".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
