//! Linear congruential generator driving hero layouts.

/// Seeded LCG: `state = state * 1664525 + 1013904223 (mod 2^32)`.
///
/// Every draw advances the shared state, so the order of calls is part of
/// the output contract.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;

    /// Create a generator. A zero seed is replaced with 1.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        f64::from(self.state) / 4_294_967_296.0
    }

    /// Advance and return a value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        (max - min).mul_add(self.next_f64(), min)
    }
}
