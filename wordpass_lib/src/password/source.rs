use rand::Rng;

/// Uniform selection capabilities needed to build a password.
///
/// Every [`rand::Rng`] is a source, so callers can pass `rand::rng()` or a
/// seeded generator. Tests can implement it directly to script the choices.
pub trait RandomSource {
    /// Uniform index in `0..len`, `len` must be non zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn pick_in_range(&mut self, low: u8, high: u8) -> u8;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn pick_in_range(&mut self, low: u8, high: u8) -> u8 {
        self.random_range(low..=high)
    }
}
