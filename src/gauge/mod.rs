//! Gauge engine.
//!
//! - `geometry`: segment polygons and template outlines
//! - `arc`: a single segmented bar and its value-to-level mapping
//! - `readout`: numeric readout formatting
//! - `pressure`: the dual-zone boost/vacuum gauge
//! - `temperature`: the oil temperature gauge
//!
//! Gauges talk to the display only through [`GaugeSurface`], creating their
//! elements once and afterwards issuing only the writes a value change needs.

pub mod arc;
pub mod geometry;
pub mod pressure;
pub mod readout;
pub mod temperature;

pub use arc::{LevelScale, NO_LEVEL, SegmentFill, SegmentedArc};
pub use geometry::{GaugeGeometry, Sweep};
pub use pressure::{PressureGauge, Zone, ZoneTransition};
pub use temperature::TemperatureGauge;

use crate::surface::GaugeSurface;

/// A gauge driven by one scalar reading.
pub trait Gauge {
    /// Show `value`, writing only what changed since the previous call.
    fn update<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    );

    /// Value last shown.
    fn value(&self) -> f32;
}
