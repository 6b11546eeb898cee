//! Deterministic identifier source for harness assertions.

use jobdeck_core::normalizer::IdSource;
use std::cell::Cell;

/// [`IdSource`] stub yielding `"gen-0"`, `"gen-1"`, … in call order, so tests
/// can assert exactly which records needed a synthesized id.
pub struct SeqIds(Cell<u32>);

impl SeqIds {
    pub fn new() -> Self {
        SeqIds(Cell::new(0))
    }

    /// How many ids have been handed out.
    pub fn issued(&self) -> u32 {
        self.0.get()
    }
}

impl Default for SeqIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SeqIds {
    fn generate(&self) -> String {
        let n = self.0.get();
        self.0.set(n + 1);
        format!("gen-{n}")
    }
}
