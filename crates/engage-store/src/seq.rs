//! Monotonic request sequencing.
//!
//! Refetch-after-mutation means two in-flight fetches can race; without a
//! guard the last response to *resolve* wins, which may be the older one.
//! Issuing a ticket per fetch and discarding completions whose ticket is no
//! longer current makes the last *issued* request win instead.

/// Opaque handle for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues tickets and remembers the most recent one.
#[derive(Debug, Default)]
pub struct SeqGuard {
    latest: u64,
}

impl SeqGuard {
    #[must_use]
    pub fn new() -> Self {
        SeqGuard::default()
    }

    /// Issues a ticket for a new request, invalidating all earlier tickets.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// True while no newer ticket has been issued.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ticket_is_current() {
        let mut guard = SeqGuard::new();
        let ticket = guard.issue();
        assert!(guard.is_current(ticket));
    }

    #[test]
    fn newer_ticket_invalidates_older() {
        let mut guard = SeqGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first), "stale ticket must be discarded");
        assert!(guard.is_current(second));
    }

    #[test]
    fn completion_order_does_not_matter() {
        let mut guard = SeqGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        // Even if the older request resolves last, it stays stale.
        assert!(guard.is_current(second));
        assert!(!guard.is_current(first));
    }
}
