//! Injectable randomness for option draws.

/// Supplies the index of the next pool entry to draw.
///
/// Every [`rand::Rng`] is an index source drawing uniformly. Tests and
/// replays use [`ScriptedIndices`].
pub trait IndexSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// A fixed, replayable sequence of draws.
///
/// Each value is reduced modulo the pool length, and the script wraps around
/// once exhausted. An empty script always draws the first entry.
///
/// # Examples
///
/// ```
/// use bayou_prompt::{IndexSource, ScriptedIndices};
///
/// let mut source = ScriptedIndices::new(vec![3, 9]);
/// assert_eq!(source.next_index(8), 3);
/// assert_eq!(source.next_index(8), 1);
/// assert_eq!(source.next_index(8), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndices {
    /// Creates a source replaying `script`.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    /// Rewinds to the start of the script.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, len: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len.max(1)
    }
}
