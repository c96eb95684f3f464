//! Per-gauge configuration.
//!
//! A [`GaugeConfig`] fully describes one gauge: where its arc sits, how many
//! segments each bar has, how values map to levels and where the readout goes.
//! It is checked once by [`GaugeConfig::validate`] before anything is created
//! on the drawing surface.

use embedded_graphics::prelude::Point;

use super::layout::{
    ARC_RADIUS,
    ARC_WIDTH,
    BOOST_ORIGIN,
    BOOST_READOUT_MAJOR,
    BOOST_READOUT_MINOR,
    BOOST_SEGMENTS,
    BOOST_SPREAD,
    BOOST_START_ANGLE,
    OIL_ORIGIN,
    OIL_READOUT,
    OIL_SEGMENTS,
    OIL_SPREAD,
    OIL_START_ANGLE,
    VACUUM_SEGMENTS,
    VACUUM_SPREAD,
};
use super::sensors::{
    MAX_BOOST,
    MAX_VACUUM,
    OIL_TEMP_MAX_C,
    OIL_TEMP_MAX_F,
    OIL_TEMP_MIN_C,
    OIL_TEMP_MIN_F,
    PRESSURE_ACTIVATION,
};
use crate::gauge::arc::{LevelScale, MAX_BAR_SEGMENTS, SegmentFill};
use crate::gauge::geometry::{GaugeGeometry, Sweep};
use crate::sensors::TemperatureUnit;
use crate::ui::{BOOST_FILL, OIL_RAMP, VACUUM_FILL};
use crate::{Error, Result};

/// Where the numeric readout is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReadoutLayout {
    /// Bottom-right corner of the integer part.
    pub major: Point,
    /// Bottom-left corner of the fractional part, if the gauge shows one.
    pub minor: Option<Point>,
}

/// Second bar continuing the primary arc past its far end.
///
/// Driven by the magnitude of negative values (vacuum for the pressure gauge).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SecondaryBar {
    pub segments: u16,
    pub spread: f32,
    /// Magnitude that fills the bar.
    pub max_value: f32,
    pub fill: SegmentFill,
    pub sweep: Sweep,
}

/// Complete description of one gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeConfig {
    pub origin: Point,
    pub radius: u32,
    pub arc_width: u32,
    pub start_angle: f32,
    pub spread: f32,
    pub segments: u16,
    pub sweep: Sweep,
    pub fill: SegmentFill,
    pub min_value: f32,
    pub max_value: f32,
    /// Distance above `min_value` before the first segment lights.
    pub activation_threshold: f32,
    pub readout: ReadoutLayout,
    pub secondary: Option<SecondaryBar>,
}

impl GaugeConfig {
    /// Boost/vacuum gauge in the upper half of the panel.
    ///
    /// The boost zone fills from the shared zero point at 135° toward 45°; the
    /// vacuum zone continues from 135° toward 180°.
    pub const fn boost() -> Self {
        Self {
            origin: BOOST_ORIGIN,
            radius: ARC_RADIUS,
            arc_width: ARC_WIDTH,
            start_angle: BOOST_START_ANGLE,
            spread: BOOST_SPREAD,
            segments: BOOST_SEGMENTS,
            sweep: Sweep::Clockwise,
            fill: SegmentFill::Solid(BOOST_FILL),
            min_value: 0.0,
            max_value: MAX_BOOST,
            activation_threshold: PRESSURE_ACTIVATION,
            readout: ReadoutLayout {
                major: BOOST_READOUT_MAJOR,
                minor: Some(BOOST_READOUT_MINOR),
            },
            secondary: Some(SecondaryBar {
                segments: VACUUM_SEGMENTS,
                spread: VACUUM_SPREAD,
                max_value: MAX_VACUUM,
                fill: SegmentFill::Solid(VACUUM_FILL),
                sweep: Sweep::CounterClockwise,
            }),
        }
    }

    /// Oil temperature gauge in the lower half of the panel.
    pub const fn oil_temperature(unit: TemperatureUnit) -> Self {
        let (min_value, max_value) = match unit {
            TemperatureUnit::Fahrenheit => (OIL_TEMP_MIN_F, OIL_TEMP_MAX_F),
            TemperatureUnit::Celsius => (OIL_TEMP_MIN_C, OIL_TEMP_MAX_C),
        };

        Self {
            origin: OIL_ORIGIN,
            radius: ARC_RADIUS,
            arc_width: ARC_WIDTH,
            start_angle: OIL_START_ANGLE,
            spread: OIL_SPREAD,
            segments: OIL_SEGMENTS,
            sweep: Sweep::Clockwise,
            fill: SegmentFill::Ramp(&OIL_RAMP),
            min_value,
            max_value,
            activation_threshold: 0.0,
            readout: ReadoutLayout {
                major: OIL_READOUT,
                minor: None,
            },
            secondary: None,
        }
    }

    /// Check every field that could produce an empty or malformed bar.
    pub fn validate(&self) -> Result<()> {
        check_segments(self.segments)?;
        check_fill(self.fill)?;

        if self.arc_width == 0 || self.arc_width > self.radius {
            return Err(Error::InvalidArcWidth {
                radius: self.radius,
                width: self.arc_width,
            });
        }
        if !self.start_angle.is_finite() {
            return Err(Error::InvalidSpread);
        }
        check_spread(self.spread)?;

        if !self.min_value.is_finite() || !self.max_value.is_finite() || self.max_value <= self.min_value {
            return Err(Error::InvalidRange);
        }
        if !self.activation_threshold.is_finite() || self.activation_threshold < 0.0 {
            return Err(Error::InvalidThreshold);
        }

        if let Some(secondary) = &self.secondary {
            check_segments(secondary.segments)?;
            check_fill(secondary.fill)?;
            check_spread(secondary.spread)?;
            if !secondary.max_value.is_finite() || secondary.max_value <= 0.0 {
                return Err(Error::InvalidRange);
            }
        }

        Ok(())
    }

    /// Geometry of the primary bar.
    pub const fn geometry(&self) -> GaugeGeometry {
        GaugeGeometry {
            origin: self.origin,
            radius: self.radius,
            arc_width: self.arc_width,
            start_angle: self.start_angle,
            spread: self.spread,
            segments: self.segments,
            sweep: self.sweep,
        }
    }

    /// Value-to-level mapping of the primary bar.
    pub const fn scale(&self) -> LevelScale {
        LevelScale {
            min: self.min_value,
            max: self.max_value,
            threshold: self.activation_threshold,
            segments: self.segments,
        }
    }

    /// Geometry of the secondary bar, continuing the primary arc.
    pub fn secondary_geometry(&self) -> Option<GaugeGeometry> {
        self.secondary
            .map(|s| self.geometry().continuation(s.segments, s.spread, s.sweep))
    }

    /// Magnitude-to-level mapping of the secondary bar.
    pub fn secondary_scale(&self) -> Option<LevelScale> {
        self.secondary.map(|s| LevelScale {
            min: 0.0,
            max: s.max_value,
            threshold: self.activation_threshold,
            segments: s.segments,
        })
    }

    /// Degrees the template outline extends past the primary bar.
    pub fn outline_extension(&self) -> f32 { self.secondary.map_or(0.0, |s| s.spread) }
}

fn check_segments(segments: u16) -> Result<()> {
    if segments == 0 || usize::from(segments) > MAX_BAR_SEGMENTS {
        return Err(Error::InvalidSegmentCount(segments));
    }
    Ok(())
}

fn check_spread(spread: f32) -> Result<()> {
    if !spread.is_finite() || spread <= 0.0 {
        return Err(Error::InvalidSpread);
    }
    Ok(())
}

fn check_fill(fill: SegmentFill) -> Result<()> {
    match fill {
        SegmentFill::Ramp(ramp) if ramp.is_empty() => Err(Error::EmptyRamp),
        _ => Ok(()),
    }
}
