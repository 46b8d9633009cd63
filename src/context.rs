//! Evaluation state shared between lines.
//!
//! A [`Context`] holds the numbered memory slots and the last-result
//! register. The evaluator only ever borrows it immutably; the session that
//! owns it writes to it between lines.

/// Number of addressable memory slots.
pub const MEMORY_SLOTS: usize = 10;

/// Memory slots plus the value of the most recent top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Context {
    memory: [f64; MEMORY_SLOTS],
    last_result: f64,
}

impl Context {
    /// Create a context with every slot and the last result set to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored in `slot`, or `None` when the slot does not exist.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<f64> {
        self.memory.get(slot).copied()
    }

    /// Store `value` in `slot`.
    ///
    /// Returns `false` without touching memory when `slot` is out of range.
    pub fn set_slot(&mut self, slot: usize, value: f64) -> bool {
        let Some(cell) = self.memory.get_mut(slot) else {
            return false;
        };
        *cell = value;
        true
    }

    #[must_use]
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn set_last_result(&mut self, value: f64) {
        self.last_result = value;
    }
}
