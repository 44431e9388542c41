use std::ops::RangeInclusive;

/// Source of raw draws for the audit generator.
///
/// Implementors only hand out raw `u32` values; range reduction happens in
/// the provided methods so every value lands inside its bounds no matter
/// what sequence the source produces.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    fn in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (low, high) = range.into_inner();
        let span = u64::from(high.saturating_sub(low)) + 1;
        low + (u64::from(self.next_u32()) % span) as u32
    }

    /// Draws an index into a collection of `len` items. The draw is consumed
    /// even when `len` is zero, in which case `None` is returned.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        let raw = self.next_u32() as usize;
        if len == 0 { None } else { Some(raw % len) }
    }
}

impl RandomSource for fastrand::Rng {
    fn next_u32(&mut self) -> u32 {
        self.u32(..)
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            self.position += 1;
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
