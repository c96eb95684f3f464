//! Sensor ranges, scaling and update cadences.
//!
//! All values are compile-time constants. Range pairs carry `const` assertions
//! so an inverted range fails the build instead of producing an empty gauge.

// =============================================================================
// Manifold Pressure
// =============================================================================

/// Boost reading (psi) that fills the boost zone.
pub const MAX_BOOST: f32 = 10.0;

/// Vacuum magnitude (psi) that fills the vacuum zone.
pub const MAX_VACUUM: f32 = 15.0;

/// Distance above zero before the first pressure segment lights.
pub const PRESSURE_ACTIVATION: f32 = 0.1;

/// Raw ADC counts per psi of absolute manifold pressure.
pub const BOOST_RAW_SCALE: f32 = 1000.0;

/// Ambient pressure offset used when startup calibration is skipped.
pub const BOOST_FIXED_OFFSET: f32 = 13.88;

/// Raw samples averaged by the startup calibration.
pub const BOOST_CALIBRATION_SAMPLES: u16 = 100;

const _: () = assert!(MAX_BOOST > 0.0);
const _: () = assert!(MAX_VACUUM > 0.0);
const _: () = assert!(PRESSURE_ACTIVATION < MAX_BOOST);

// =============================================================================
// Oil Temperature
// =============================================================================

/// Oil temperature at the empty end of the bar (°F).
pub const OIL_TEMP_MIN_F: f32 = 180.0;

/// Oil temperature at the full end of the bar (°F).
pub const OIL_TEMP_MAX_F: f32 = 300.0;

/// Empty end of the bar in °C (180 °F).
pub const OIL_TEMP_MIN_C: f32 = 82.0;

/// Full end of the bar in °C (300 °F).
pub const OIL_TEMP_MAX_C: f32 = 149.0;

/// Converted samples averaged for the temperature readout.
pub const SAMPLE_SIZE: usize = 50;

const _: () = assert!(OIL_TEMP_MIN_F < OIL_TEMP_MAX_F);
const _: () = assert!(OIL_TEMP_MIN_C < OIL_TEMP_MAX_C);
const _: () = assert!(SAMPLE_SIZE > 0);

// =============================================================================
// Update Cadences
// =============================================================================

/// Minimum milliseconds between pressure gauge updates.
pub const BOOST_INTERVAL_MS: u32 = 10;

/// Minimum milliseconds between temperature gauge updates. Conversion is
/// comparatively expensive, so this runs at 2 Hz.
pub const TEMPERATURE_INTERVAL_MS: u32 = 500;

const _: () = assert!(BOOST_INTERVAL_MS > 0);
const _: () = assert!(BOOST_INTERVAL_MS < TEMPERATURE_INTERVAL_MS);
