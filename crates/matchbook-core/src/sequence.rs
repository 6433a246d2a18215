//! Logical clock for time priority.

/// Monotonic counter producing logical timestamps.
///
/// The first call to [`next`](Sequencer::next) returns 1 and every later
/// call returns a strictly larger value. Timestamps break ties between
/// orders at the same price; an iceberg refresh takes a fresh stamp, which
/// is what pushes the replenished slice to the back of its price level.
///
/// This is not wall-clock time. A fresh `Sequencer` fed the same order
/// stream produces the same stamps, so matching outcomes are reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sequencer {
    tick: u64,
}

impl Sequencer {
    /// Create a sequencer whose first timestamp will be 1.
    pub fn new() -> Self {
        Sequencer::default()
    }

    /// Return the next logical timestamp.
    pub fn next(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}
