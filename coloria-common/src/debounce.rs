//! Ticket-based debouncer.
//!
//! The caller owns the timer: every `push` hands back a ticket, and when that
//! ticket's delay elapses the timer calls `fire`. Only the newest ticket can
//! release a value, and it can do so once. Superseded timers fire into nothing.

/// Identifies one pending debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }

    /// Record a new input value, superseding any pending one.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.latest += 1;
        self.pending = Some(value);
        DebounceTicket(self.latest)
    }

    /// Release the pending value if `ticket` is still the newest.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.latest {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value; outstanding tickets release nothing.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_emits_last_value_once() {
        let mut d = Debouncer::new();
        let t1 = d.push("r");
        let t2 = d.push("re");
        let t3 = d.push("red");

        assert_eq!(d.fire(t1), None);
        assert_eq!(d.fire(t2), None);
        assert_eq!(d.fire(t3), Some("red"));
        assert_eq!(d.fire(t3), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_out_of_order_timers() {
        let mut d = Debouncer::new();
        let t1 = d.push(1);
        let t2 = d.push(2);
        assert_eq!(d.fire(t2), Some(2));
        assert_eq!(d.fire(t1), None);
    }

    #[test]
    fn test_separate_bursts_each_emit() {
        let mut d = Debouncer::new();
        let t1 = d.push("a");
        assert_eq!(d.fire(t1), Some("a"));
        let t2 = d.push("b");
        assert_eq!(d.fire(t2), Some("b"));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new();
        let t = d.push(5);
        d.cancel();
        assert_eq!(d.fire(t), None);
    }
}
