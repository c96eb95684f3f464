//! Errors raised while building gauges from their configuration.
//!
//! The run loop itself never fails: out-of-range levels are clamped, sensor
//! singularities map to sentinel values and clock rollover resets the cadences.
//! Everything that can go wrong is caught once, at construction time.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Construction-time failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bar must have at least one segment and fit in the per-bar storage.
    #[error("segment count {0} is out of range")]
    InvalidSegmentCount(u16),

    /// Arc width must be non-zero and no wider than the radius.
    #[error("arc width {width} does not fit radius {radius}")]
    InvalidArcWidth { radius: u32, width: u32 },

    /// Angular spread must be positive and finite.
    #[error("angular spread must be positive and finite")]
    InvalidSpread,

    /// Value range must be finite with the maximum above the minimum.
    #[error("value range must be finite with max above min")]
    InvalidRange,

    /// Activation threshold must be finite and non-negative.
    #[error("activation threshold must be finite and non-negative")]
    InvalidThreshold,

    /// A color ramp needs at least one entry.
    #[error("segment color ramp is empty")]
    EmptyRamp,

    /// The pressure gauge draws its vacuum zone from the secondary bar.
    #[error("pressure gauge needs a secondary bar")]
    MissingSecondary,

    /// The temperature gauge range must be the one drawn for the configured unit.
    #[error("temperature gauge range does not match the temperature unit")]
    TemperatureRangeMismatch,

    /// Cadence intervals must be non-zero.
    #[error("cadence interval must be non-zero")]
    InvalidInterval,

    /// The drawing surface has no room for another segment.
    #[error("drawing surface is out of segment slots")]
    SegmentCapacity,

    /// The drawing surface has no room for another label.
    #[error("drawing surface is out of label slots")]
    LabelCapacity,

    /// The drawing surface has no room for another outline.
    #[error("drawing surface is out of outline slots")]
    OutlineCapacity,
}
