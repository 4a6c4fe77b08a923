use std::time::{Duration, Instant};

/// Identifies one scheduled run; a later [`Debouncer::schedule`] supersedes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A query whose debounce window has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    pub ticket: Ticket,
    pub query: String,
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    query: String,
    deadline: Instant,
}

/// Cancellable delayed task keyed by a generation counter
///
/// Rescheduling cancels the previous instance: only the most recent query
/// ever fires, and results tagged with an older [`Ticket`] can be recognized
/// as stale with [`Debouncer::is_current`].
///
/// Time is passed in explicitly so the owner's event loop decides when to poll.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self { window, generation: 0, pending: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `query` to fire one window after `now`, replacing any pending query
    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending { ticket, query: query.into(), deadline: now + self.window });
        ticket
    }

    /// Drop the pending query and invalidate every outstanding ticket
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending query fires
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Take the pending query if its window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<Fired> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|p| Fired { ticket: p.ticket, query: p.query })
    }

    /// Whether `ticket` belongs to the latest scheduling
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
