use crate::models::Candidate;

/// Ordered candidate sequence plus a consumption cursor.
///
/// Invariant: `cursor <= items.len()`. `cursor == items.len()` means the
/// queue is exhausted and must be replenished before further interaction.
/// The cursor only moves forward; it resets solely when the queue is
/// replaced by a fresh batch.
#[derive(Debug, Clone, Default)]
pub struct CandidateQueue {
    items: Vec<Candidate>,
    cursor: usize,
}

impl CandidateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh batch and reset the cursor.
    pub fn replace(&mut self, batch: Vec<Candidate>) {
        self.items = batch;
        self.cursor = 0;
    }

    /// Extend the queue without touching the cursor.
    pub fn append(&mut self, batch: Vec<Candidate>) {
        self.items.extend(batch);
    }

    /// The candidate under the cursor (the top card), if any.
    pub fn current(&self) -> Option<&Candidate> {
        self.items.get(self.cursor)
    }

    /// Up to `depth` candidates starting at the cursor, for the visual stack.
    pub fn upcoming(&self, depth: usize) -> &[Candidate] {
        let end = (self.cursor + depth).min(self.items.len());
        &self.items[self.cursor..end]
    }

    /// Advance past the current candidate. Returns `false` when already
    /// exhausted; the cursor never moves past `len`.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.items.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidates not yet decided on.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }
}
