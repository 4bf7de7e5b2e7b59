//! Latest-request-wins bookkeeping.
//!
//! Every dashboard fetch takes a ticket. When a response arrives, only the
//! holder of the most recently issued ticket may apply it; older responses
//! are discarded so a slow request can't overwrite newer data.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGenerations {
    latest: u64,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding all earlier ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_current() {
        let mut generations = RequestGenerations::new();
        let first = generations.issue();
        assert!(generations.is_current(first));
        let second = generations.issue();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn out_of_order_completion_keeps_newest() {
        let mut generations = RequestGenerations::new();
        let mut applied = None;
        let old = generations.issue();
        let new = generations.issue();
        // The newer response lands first, then the stale one
        for (ticket, data) in [(new, "new"), (old, "old")] {
            if generations.is_current(ticket) {
                applied = Some(data);
            }
        }
        assert_eq!(applied, Some("new"));
    }
}
