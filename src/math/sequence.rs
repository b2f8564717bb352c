//! Deterministic pseudo-random sequence seeded from a string
//!
//! The generator is a linear congruential recurrence over the modulus 233 280. Every draw
//! is a pure function of the previous cursor, so the whole composition for a seed is fixed
//! as long as draws are requested in the same order.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49_297;
const MODULUS: u64 = 233_280;

/// Polynomial rolling hash (multiplier 31) over the UTF-16 code units of `seed`
///
/// The accumulator wraps as a 32-bit signed integer; the absolute value is taken without
/// overflow so every seed maps to a non-negative cursor.
pub fn hash_seed(seed: &str) -> u64 {
    let hash = seed.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    u64::from(hash.unsigned_abs())
}

/// Stateful source of reproducible draws
///
/// One generator is created per render and passed by `&mut` through every phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    state: u64,
}

impl SequenceGenerator {
    /// Create a generator whose cursor is the hash of `seed`
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    /// Current cursor value
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the cursor and return a float in `[0, 1)`
    // The sequence never ends, so it is not an `Iterator`
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Float in `[min, max)`
    // Left unfused: integer draws floor this value and depend on its exact rounding
    #[allow(clippy::suboptimal_flops)]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Integer in `[min, max)`; callers keep `max - min >= 1`
    pub fn range_int(&mut self, min: i64, max: i64) -> i64 {
        self.range(min as f64, max as f64).floor() as i64
    }

    /// Floor of a draw over real-valued bounds
    ///
    /// Used where the bounds themselves are fractional, such as a quarter of the grid extent.
    pub fn range_floor(&mut self, min: f64, max: f64) -> i64 {
        self.range(min, max).floor() as i64
    }

    /// `true` with probability `probability`
    ///
    /// Values at or below 0 never succeed, values at or above 1 always do.
    pub fn boolean(&mut self, probability: f64) -> bool {
        self.next() < probability
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.boolean(0.5)
    }

    /// Uniform choice from a caller-supplied list whose length is only known at run time
    ///
    /// The composition itself draws from fixed tables through [`Self::pick_from`]; this
    /// form serves callers picking from their own lists. Consumes one draw even when
    /// `items` is empty, in which case `None` is returned.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let index = self.range_int(0, items.len() as i64);
        usize::try_from(index).ok().and_then(|i| items.get(i))
    }

    /// Uniform choice from a non-empty array
    // Index is clamped below N and N > 0 is checked at compile time
    #[allow(clippy::indexing_slicing)]
    pub fn pick_from<T: Copy, const N: usize>(&mut self, items: &[T; N]) -> T {
        const { assert!(N > 0, "cannot pick from an empty array") };
        let index = self.range_int(0, N as i64).clamp(0, N as i64 - 1) as usize;
        items[index]
    }
}
