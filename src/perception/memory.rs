//! Short-term memory of the last direct sighting.

/// Timestamp of the last confirmed, unobstructed sighting of the target.
///
/// Starts far in the past so a fresh guard remembers nothing. The stamp
/// never moves backward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptionMemory {
    last_seen: f32,
}

impl Default for PerceptionMemory {
    fn default() -> Self {
        Self {
            last_seen: f32::NEG_INFINITY,
        }
    }
}

impl PerceptionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last direct sighting, `NEG_INFINITY` if never seen.
    pub fn last_seen(&self) -> f32 {
        self.last_seen
    }

    /// Stamp a direct sighting at `now`.
    pub fn record_sighting(&mut self, now: f32) {
        self.last_seen = self.last_seen.max(now);
    }

    /// Whether the target was seen less than `persistence` seconds ago.
    ///
    /// The grace period is exclusive: at exactly `persistence` seconds after
    /// the sighting the target is forgotten.
    pub fn seen_within(&self, now: f32, persistence: f32) -> bool {
        now - self.last_seen < persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_memory_remembers_nothing() {
        let memory = PerceptionMemory::new();
        assert!(!memory.seen_within(0.0, 0.5));
        assert!(!memory.seen_within(1_000_000.0, 1_000.0));
    }

    #[test]
    fn sighting_persists_until_boundary() {
        let mut memory = PerceptionMemory::new();
        memory.record_sighting(10.0);

        assert!(memory.seen_within(10.0, 0.5));
        assert!(memory.seen_within(10.25, 0.5));
        assert!(!memory.seen_within(10.5, 0.5));
        assert!(!memory.seen_within(11.0, 0.5));
    }

    #[test]
    fn stamp_never_moves_backward() {
        let mut memory = PerceptionMemory::new();
        memory.record_sighting(5.0);
        memory.record_sighting(3.0);
        assert_eq!(memory.last_seen(), 5.0);

        memory.record_sighting(7.0);
        assert_eq!(memory.last_seen(), 7.0);
    }
}
