//! Roll resolution against a pool's range table.
//!
//! A roll draws an integer in `[0, 100]` and scans the ranges in stored
//! order, taking the first one whose bounds satisfy
//! `max_value <= roll && min_value >= roll`. When nothing matches the first
//! range of the pool is granted instead; a pool without ranges cannot be
//! rolled.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GachaError;
use crate::inventory::InventorySlot;
use crate::pool::{ItemPool, Range, MAX_ROLL_VALUE};
use crate::types::DbId;

/// Source of roll values.
pub trait RollSource {
    /// Draw a value in `[0, 100]`.
    fn roll_value(&mut self) -> i32;
}

/// Uniform draws: a continuous `[0, 1)` sample scaled by 100 and rounded to
/// the nearest integer.
#[derive(Debug, Clone)]
pub struct UniformRoll<R> {
    rng: R,
}

impl<R: Rng> UniformRoll<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformRoll<StdRng> {
    /// Seeded from the operating system. `Send`, so it can be held across
    /// `.await` points in request handlers.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RollSource for UniformRoll<R> {
    fn roll_value(&mut self) -> i32 {
        scale_unit_sample(self.rng.random::<f64>())
    }
}

/// Map a `[0, 1)` sample onto `[0, 100]`.
fn scale_unit_sample(sample: f64) -> i32 {
    let scaled = (sample * f64::from(MAX_ROLL_VALUE)).round() as i32;
    scaled.clamp(0, MAX_ROLL_VALUE)
}

/// Replays a fixed sequence of roll values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedRoll {
    values: Vec<i32>,
    next: usize,
}

impl FixedRoll {
    /// Always returns `value`.
    pub fn always(value: i32) -> Self {
        Self::sequence(vec![value])
    }

    /// Returns `values` in order, then starts over.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn sequence(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "FixedRoll needs at least one value");
        Self { values, next: 0 }
    }
}

impl RollSource for FixedRoll {
    fn roll_value(&mut self) -> i32 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

impl ItemPool {
    /// Resolve a drawn value to a range of this pool.
    pub fn resolve(&self, roll_value: i32) -> Result<&Range, GachaError> {
        self.pool
            .iter()
            .find(|range| range.max_value <= roll_value && range.min_value >= roll_value)
            .or_else(|| self.pool.first())
            .ok_or_else(|| GachaError::EmptyPool {
                pool_type: self.pool_type.clone(),
            })
    }

    /// Draw once from `source` and build the slot granted to `user_id`.
    pub fn roll_item<S: RollSource + ?Sized>(
        &self,
        user_id: DbId,
        source: &mut S,
    ) -> Result<InventorySlot, GachaError> {
        if self.pool.is_empty() {
            return Err(GachaError::EmptyPool {
                pool_type: self.pool_type.clone(),
            });
        }
        let roll_value = source.roll_value();
        let range = self.resolve(roll_value)?;
        Ok(InventorySlot::granted(user_id, range))
    }
}
