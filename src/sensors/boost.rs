//! Manifold pressure conversion and demo sample sources.
//!
//! The MAP sensor reads absolute pressure. The gauge shows manifold
//! differential pressure (MDP), the difference to ambient:
//!
//! ```text
//! mdp = raw / BOOST_RAW_SCALE - offset
//! ```
//!
//! `offset` is ambient pressure in the same units, either measured at startup
//! (engine off, manifold at ambient) or a fixed value.

use crate::config::sensors::{BOOST_CALIBRATION_SAMPLES, BOOST_FIXED_OFFSET, BOOST_RAW_SCALE};

/// How the ambient pressure offset is obtained.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoostOffset {
    /// Use a known ambient reading.
    Fixed(f32),
    /// Average this many raw readings at startup.
    Calibrate { samples: u16 },
}

impl Default for BoostOffset {
    fn default() -> Self {
        Self::Calibrate {
            samples: BOOST_CALIBRATION_SAMPLES,
        }
    }
}

/// Ambient pressure offset applied to every manifold reading.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoostCalibration {
    offset: f32,
}

impl BoostCalibration {
    pub const fn fixed(offset: f32) -> Self { Self { offset } }

    /// Average `samples` readings from `read`. Zero samples falls back to the
    /// fixed offset.
    pub fn measure(
        samples: u16,
        mut read: impl FnMut() -> u16,
    ) -> Self {
        if samples == 0 {
            return Self::fixed(BOOST_FIXED_OFFSET);
        }

        let total: f64 = (0..samples)
            .map(|_| f64::from(read()) / f64::from(BOOST_RAW_SCALE))
            .sum();
        let offset = (total / f64::from(samples)) as f32;
        log_info!("boost offset calibrated over {} samples: {}", samples, offset);
        Self::fixed(offset)
    }

    /// Resolve a configured offset, sampling through `read` if needed.
    pub fn from_offset(
        offset: BoostOffset,
        read: impl FnMut() -> u16,
    ) -> Self {
        match offset {
            BoostOffset::Fixed(offset) => Self::fixed(offset),
            BoostOffset::Calibrate { samples } => Self::measure(samples, read),
        }
    }

    #[inline]
    pub const fn offset(&self) -> f32 { self.offset }

    /// Signed manifold differential pressure for a raw reading.
    #[inline]
    pub fn mdp(
        &self,
        raw: u16,
    ) -> f32 {
        f32::from(raw) / BOOST_RAW_SCALE - self.offset
    }
}

impl Default for BoostCalibration {
    fn default() -> Self { Self::fixed(BOOST_FIXED_OFFSET) }
}

// =============================================================================
// Demo Source
// =============================================================================

/// Boost sweep period in steps (`-15.0` to `+10.0` psi).
const BOOST_SWEEP_STEPS: u16 = 251;

/// Boost sweep step `n` maps to `(n - BOOST_SWEEP_ZERO) / 10` psi.
const BOOST_SWEEP_ZERO: i32 = 150;

/// Temperature sweep period.
const TEMPERATURE_SWEEP_STEPS: u16 = 150;

/// Lowest temperature of the sweep.
const TEMPERATURE_SWEEP_BASE: i32 = 145;

/// Synthetic readings that sweep both gauges through their full range.
///
/// Used on the bench with no sensors connected. The encoder counter is added
/// to the temperature so it can be nudged by hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DemoSweep {
    boost_step: u16,
    temperature_step: u16,
}

impl DemoSweep {
    pub const fn new() -> Self {
        Self {
            boost_step: 0,
            temperature_step: 0,
        }
    }

    /// Next boost value, stepping 0.2 psi and wrapping from `+10.0` back to `-15.0`.
    pub fn next_boost(&mut self) -> f32 {
        let value = (i32::from(self.boost_step) - BOOST_SWEEP_ZERO) as f32 / 10.0;
        self.boost_step = (self.boost_step + 2) % BOOST_SWEEP_STEPS;
        value
    }

    /// Next temperature value, stepping 2 degrees and wrapping after 150.
    pub fn next_temperature(
        &mut self,
        offset: i32,
    ) -> f32 {
        let value = TEMPERATURE_SWEEP_BASE + i32::from(self.temperature_step) + offset;
        self.temperature_step = (self.temperature_step + 2) % TEMPERATURE_SWEEP_STEPS;
        value as f32
    }
}
