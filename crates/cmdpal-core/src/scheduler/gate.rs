use std::time::{Duration, Instant};

/// Earliest instant at which a refresh may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshGate {
    next_allowed: Instant,
}

impl RefreshGate {
    /// A gate that is already open at `now`.
    pub fn open_at(now: Instant) -> Self {
        Self { next_allowed: now }
    }

    pub fn next_allowed(&self) -> Instant {
        self.next_allowed
    }

    pub fn is_open(&self, now: Instant) -> bool {
        now >= self.next_allowed
    }

    /// Keep the gate closed until at least `until`.
    ///
    /// Never moves the deadline backwards. Returns `true` if it moved.
    pub fn defer_until(&mut self, until: Instant) -> bool {
        if until > self.next_allowed {
            self.next_allowed = until;
            true
        } else {
            false
        }
    }

    /// Time left until the gate opens, zero if already open.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_allowed.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gate_is_open() {
        let now = Instant::now();
        let gate = RefreshGate::open_at(now);
        assert!(gate.is_open(now));
        assert_eq!(gate.remaining(now), Duration::ZERO);
    }

    #[test]
    fn test_defer_closes_until_deadline() {
        let now = Instant::now();
        let mut gate = RefreshGate::open_at(now);
        assert!(gate.defer_until(now + Duration::from_secs(10)));

        assert!(!gate.is_open(now + Duration::from_secs(9)));
        assert!(gate.is_open(now + Duration::from_secs(10)));
        assert_eq!(gate.remaining(now), Duration::from_secs(10));
    }

    #[test]
    fn test_defer_never_moves_backwards() {
        let now = Instant::now();
        let mut gate = RefreshGate::open_at(now);
        gate.defer_until(now + Duration::from_secs(10));

        assert!(!gate.defer_until(now + Duration::from_secs(5)));
        assert_eq!(gate.next_allowed(), now + Duration::from_secs(10));
    }
}
