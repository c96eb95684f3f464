//! Moving-average damping for noisy sensor readings.
//!
//! Uses a fixed-size circular buffer so no allocation happens after
//! construction. The buffer starts full (every slot holds the first real
//! sample) so the average is meaningful from the very first update.

/// Circular buffer of the last `K` integer samples.
pub struct MovingAverage<const K: usize> {
    samples: [i32; K],
    cursor: usize,
}

impl<const K: usize> MovingAverage<K> {
    /// Buffer pre-filled with `first`.
    pub const fn new(first: i32) -> Self {
        const { assert!(K > 0, "moving average needs at least one slot") };
        Self {
            samples: [first; K],
            cursor: 0,
        }
    }

    /// Overwrite the oldest sample.
    pub fn push(
        &mut self,
        sample: i32,
    ) {
        self.samples[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % K;
    }

    /// Mean of all `K` slots.
    pub fn average(&self) -> f32 {
        let sum: i64 = self.samples.iter().map(|&s| i64::from(s)).sum();
        (sum as f64 / K as f64) as f32
    }

    /// Refill every slot with `sample`.
    pub fn reset(
        &mut self,
        sample: i32,
    ) {
        self.samples = [sample; K];
        self.cursor = 0;
    }

    /// Slot the next push writes to.
    #[inline]
    pub const fn cursor(&self) -> usize { self.cursor }

    #[inline]
    pub const fn capacity(&self) -> usize { K }
}
