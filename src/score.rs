//! # Score
//!
//! Fitness values are not tied to a numeric scale. Any ordered, copyable type
//! can act as a score as long as it can be turned into a non-negative weight
//! for fitness-proportionate selection.

use std::fmt::Debug;

/// Trait for fitness score types.
///
/// Higher scores are fitter. `weight` maps a score onto the roulette wheel;
/// negative scores occupy no space on it.
///
/// Only `PartialOrd` is required, so `Ord` is not needed for floats. Ranking
/// first checks `is_valid` on every score and rejects the values that break a
/// total order, such as NaN. Every score that reaches the sort is comparable.
pub trait Score: PartialOrd + Copy + Debug + Send + Sync + 'static {
    /// The size of this score's arc on the roulette wheel.
    fn weight(&self) -> f64;

    /// Whether this score can be ranked against others.
    ///
    /// Floating-point NaN and infinities return `false`.
    fn is_valid(&self) -> bool {
        true
    }
}

impl Score for f64 {
    fn weight(&self) -> f64 {
        self.max(0.0)
    }

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Score for f32 {
    fn weight(&self) -> f64 {
        f64::from(self.max(0.0))
    }

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

macro_rules! impl_integer_score {
    ($($t:ty),*) => {
        $(
            impl Score for $t {
                #[allow(unused_comparisons)]
                fn weight(&self) -> f64 {
                    if *self < 0 {
                        0.0
                    } else {
                        *self as f64
                    }
                }
            }
        )*
    };
}

impl_integer_score!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
