//! Oil temperature gauge.
//!
//! A single bar with a per-segment color ramp and a whole-number readout. When
//! the converter reports no reading (open or shorted sender) the bar empties
//! and the readout shows a dim placeholder until a real reading returns.

use super::Gauge;
use super::arc::SegmentedArc;
use super::readout::whole_number;
use crate::Result;
use crate::config::GaugeConfig;
use crate::surface::{Anchor, GaugeSurface, LabelAnchor, LabelId};
use crate::ui::{OUTLINE, PLACEHOLDER, PaletteIndex, READOUT, ReadoutFont};

/// Readout shown when there is no valid reading.
pub const PLACEHOLDER_TEXT: &str = "- - ";

/// Single-bar gauge for oil temperature.
pub struct TemperatureGauge {
    bar: SegmentedArc,
    readout: LabelId,
    readout_color: PaletteIndex,
    reading: Option<f32>,
}

impl TemperatureGauge {
    /// Build the gauge on `surface` and show `initial`.
    pub fn new<S: GaugeSurface>(
        surface: &mut S,
        config: &GaugeConfig,
        initial: Option<f32>,
    ) -> Result<Self> {
        config.validate()?;

        let geometry = config.geometry();
        surface.create_outline(geometry.outline(config.outline_extension(), OUTLINE))?;
        let bar = SegmentedArc::build(surface, &geometry, config.fill, config.scale())?;

        let readout = surface.create_label(LabelAnchor {
            position: config.readout.major,
            anchor: Anchor::BottomRight,
            font: ReadoutFont::Major,
        })?;
        surface.set_text_color(readout, PLACEHOLDER);

        let mut gauge = Self {
            bar,
            readout,
            readout_color: PLACEHOLDER,
            reading: None,
        };
        gauge.apply(surface, initial);
        Ok(gauge)
    }

    /// Reading last shown, `None` while the placeholder is up.
    #[inline]
    pub const fn reading(&self) -> Option<f32> { self.reading }

    /// Reading last shown, NaN while the placeholder is up.
    #[inline]
    pub fn value(&self) -> f32 { self.reading.unwrap_or(f32::NAN) }

    #[inline]
    pub const fn bar(&self) -> &SegmentedArc { &self.bar }

    #[inline]
    pub const fn label(&self) -> LabelId { self.readout }

    #[inline]
    pub const fn readout_color(&self) -> PaletteIndex { self.readout_color }

    fn set_readout_color<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        color: PaletteIndex,
    ) {
        if self.readout_color != color {
            surface.set_text_color(self.readout, color);
            self.readout_color = color;
        }
    }

    /// Apply a new reading. Returns the resulting bar level.
    ///
    /// `None` and non-finite values show the placeholder.
    pub fn apply<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        reading: Option<f32>,
    ) -> i16 {
        self.reading = reading.filter(|v| v.is_finite());

        let Some(value) = self.reading else {
            surface.set_text(self.readout, PLACEHOLDER_TEXT);
            self.set_readout_color(surface, PLACEHOLDER);
            self.bar.clear(surface);
            return self.bar.level();
        };

        surface.set_text(self.readout, &whole_number(value));
        self.set_readout_color(surface, READOUT);
        self.bar.set_value(surface, value)
    }
}

impl Gauge for TemperatureGauge {
    fn update<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) {
        self.apply(surface, Some(value));
    }

    fn value(&self) -> f32 { TemperatureGauge::value(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::arc::NO_LEVEL;
    use crate::sensors::TemperatureUnit;
    use crate::surface::testing::{RecordingSurface, Write};
    use crate::ui::OIL_RAMP;

    fn gauge_in(
        unit: TemperatureUnit,
        initial: Option<f32>,
    ) -> (RecordingSurface, TemperatureGauge) {
        let mut surface = RecordingSurface::new();
        let config = GaugeConfig::oil_temperature(unit);
        let gauge = TemperatureGauge::new(&mut surface, &config, initial).unwrap();
        (surface, gauge)
    }

    fn gauge(initial: Option<f32>) -> (RecordingSurface, TemperatureGauge) { gauge_in(TemperatureUnit::Fahrenheit, initial) }

    #[test]
    fn test_builds_ramp_colored_bar() {
        let (surface, gauge) = gauge(None);
        assert_eq!(surface.outlines.len(), 1);
        assert_eq!(surface.outlines[0].sweep, 135.0);
        for i in 0..gauge.bar().len() {
            let id = gauge.bar().segment(i).unwrap();
            assert_eq!(surface.colors[usize::from(id.0)], OIL_RAMP[i]);
        }
    }

    #[test]
    fn test_no_reading_shows_placeholder() {
        let (surface, gauge) = gauge(None);
        assert_eq!(surface.text(gauge.label()), PLACEHOLDER_TEXT);
        assert_eq!(surface.text_color(gauge.label()), PLACEHOLDER);
        assert_eq!(gauge.bar().level(), NO_LEVEL);
        assert_eq!(gauge.reading(), None);
        assert!(gauge.value().is_nan());
    }

    #[test]
    fn test_reading_shows_whole_number() {
        let (mut surface, mut gauge) = gauge(None);
        assert_eq!(gauge.apply(&mut surface, Some(240.7)), 9);
        assert_eq!(surface.text(gauge.label()), "240");
        assert_eq!(surface.text_color(gauge.label()), READOUT);
        assert_eq!(gauge.value(), 240.7);
    }

    #[test]
    fn test_below_range_shows_value_without_bar() {
        let (mut surface, mut gauge) = gauge(None);
        assert_eq!(gauge.apply(&mut surface, Some(150.0)), NO_LEVEL);
        assert_eq!(surface.text(gauge.label()), "150");
        assert_eq!(surface.text_color(gauge.label()), READOUT);
    }

    #[test]
    fn test_freezing_celsius_reading_is_shown() {
        let (mut surface, mut gauge) = gauge_in(TemperatureUnit::Celsius, Some(90.0));
        gauge.apply(&mut surface, Some(0.0));
        assert_eq!(surface.text(gauge.label()), "0");
        assert_eq!(surface.text_color(gauge.label()), READOUT);

        gauge.apply(&mut surface, Some(-12.0));
        assert_eq!(surface.text(gauge.label()), "-12");
        assert_eq!(gauge.bar().level(), NO_LEVEL);
    }

    #[test]
    fn test_losing_the_sender_clears_the_bar() {
        let (mut surface, mut gauge) = gauge(Some(280.0));
        assert_eq!(gauge.bar().level(), 15);

        gauge.apply(&mut surface, None);
        assert_eq!(gauge.bar().level(), NO_LEVEL);
        assert_eq!(surface.text(gauge.label()), PLACEHOLDER_TEXT);
        assert_eq!(surface.text_color(gauge.label()), PLACEHOLDER);
    }

    #[test]
    fn test_nan_is_not_a_reading() {
        let (mut surface, mut gauge) = gauge(Some(200.0));
        gauge.update(&mut surface, f32::NAN);
        assert_eq!(surface.text(gauge.label()), PLACEHOLDER_TEXT);
        assert_eq!(gauge.bar().level(), NO_LEVEL);
    }

    #[test]
    fn test_color_written_only_on_change() {
        let (mut surface, mut gauge) = gauge(Some(200.0));
        surface.clear_writes();
        gauge.apply(&mut surface, Some(201.0));
        gauge.apply(&mut surface, Some(202.0));
        assert!(!surface.writes.iter().any(|w| matches!(w, Write::TextColor(..))));

        gauge.apply(&mut surface, None);
        let colors = surface
            .writes
            .iter()
            .filter(|w| matches!(w, Write::TextColor(..)))
            .count();
        assert_eq!(colors, 1);
    }

    #[test]
    fn test_over_range_clamps() {
        let (mut surface, mut gauge) = gauge(None);
        assert_eq!(gauge.apply(&mut surface, Some(350.0)), 19);
    }
}
