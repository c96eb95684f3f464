//! Dual-zone boost/vacuum gauge.
//!
//! One arc carries two bars: the boost zone for positive manifold differential
//! pressure and the vacuum zone, continuing past the boost zone's far end, for
//! negative pressure. Only one zone is ever lit. When the reading changes sign
//! the old zone is emptied before the new one fills.
//!
//! | previous | next | action |
//! |----------|------|--------|
//! | ≥ 0 | ≥ 0 | move the boost level |
//! | < 0 | < 0 | move the vacuum level |
//! | ≥ 0 | < 0 | empty boost, fill vacuum |
//! | < 0 | ≥ 0 | empty vacuum, fill boost |

use super::Gauge;
use super::arc::SegmentedArc;
use super::readout::SplitReadout;
use crate::config::GaugeConfig;
use crate::surface::{Anchor, GaugeSurface, LabelAnchor, LabelId};
use crate::ui::{OUTLINE, READOUT, ReadoutFont};
use crate::{Error, Result};

/// Which bar a reading belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    Boost,
    Vacuum,
}

impl Zone {
    /// Zero belongs to boost.
    #[inline]
    pub fn of(value: f32) -> Self { if value < 0.0 { Self::Vacuum } else { Self::Boost } }
}

/// Zone change between two consecutive readings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ZoneTransition {
    WithinBoost,
    WithinVacuum,
    BoostToVacuum,
    VacuumToBoost,
}

impl ZoneTransition {
    pub fn between(
        previous: f32,
        next: f32,
    ) -> Self {
        match (Zone::of(previous), Zone::of(next)) {
            (Zone::Boost, Zone::Boost) => Self::WithinBoost,
            (Zone::Vacuum, Zone::Vacuum) => Self::WithinVacuum,
            (Zone::Boost, Zone::Vacuum) => Self::BoostToVacuum,
            (Zone::Vacuum, Zone::Boost) => Self::VacuumToBoost,
        }
    }

    #[inline]
    pub const fn is_crossing(self) -> bool { matches!(self, Self::BoostToVacuum | Self::VacuumToBoost) }
}

/// Boost/vacuum gauge with a split `12` `.3` readout.
pub struct PressureGauge {
    boost: SegmentedArc,
    vacuum: SegmentedArc,
    major: LabelId,
    minor: Option<LabelId>,
    value: f32,
}

impl PressureGauge {
    /// Build the gauge on `surface` and show `initial`.
    ///
    /// Draw order: template outline, boost segments, vacuum segments, readout.
    pub fn new<S: GaugeSurface>(
        surface: &mut S,
        config: &GaugeConfig,
        initial: f32,
    ) -> Result<Self> {
        config.validate()?;
        let secondary = config.secondary.ok_or(Error::MissingSecondary)?;
        let vacuum_geometry = config.secondary_geometry().ok_or(Error::MissingSecondary)?;
        let vacuum_scale = config.secondary_scale().ok_or(Error::MissingSecondary)?;

        let geometry = config.geometry();
        surface.create_outline(geometry.outline(config.outline_extension(), OUTLINE))?;

        let boost = SegmentedArc::build(surface, &geometry, config.fill, config.scale())?;
        let vacuum = SegmentedArc::build(surface, &vacuum_geometry, secondary.fill, vacuum_scale)?;

        let major = surface.create_label(LabelAnchor {
            position: config.readout.major,
            anchor: Anchor::BottomRight,
            font: ReadoutFont::Major,
        })?;
        surface.set_text_color(major, READOUT);

        let minor = match config.readout.minor {
            Some(position) => {
                let label = surface.create_label(LabelAnchor {
                    position,
                    anchor: Anchor::BottomLeft,
                    font: ReadoutFont::Minor,
                })?;
                surface.set_text_color(label, READOUT);
                Some(label)
            }
            None => None,
        };

        let mut gauge = Self {
            boost,
            vacuum,
            major,
            minor,
            value: initial,
        };
        gauge.show_readout(surface, initial);
        gauge.set_zone_level(surface, initial);
        Ok(gauge)
    }

    /// Last value applied.
    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    #[inline]
    pub fn zone(&self) -> Zone { Zone::of(self.value) }

    #[inline]
    pub const fn boost(&self) -> &SegmentedArc { &self.boost }

    #[inline]
    pub const fn vacuum(&self) -> &SegmentedArc { &self.vacuum }

    /// Labels of the integer and fractional readout parts.
    #[inline]
    pub const fn labels(&self) -> (LabelId, Option<LabelId>) { (self.major, self.minor) }

    fn show_readout<S: GaugeSurface>(
        &self,
        surface: &mut S,
        value: f32,
    ) {
        let readout = SplitReadout::new(value);
        surface.set_text(self.major, readout.major());
        if let Some(minor) = self.minor {
            surface.set_text(minor, readout.minor());
        }
    }

    /// Move the level of the zone `value` falls in.
    fn set_zone_level<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) {
        match Zone::of(value) {
            Zone::Boost => self.boost.set_value(surface, value),
            Zone::Vacuum => self.vacuum.set_value(surface, -value),
        };
    }

    /// Apply a new reading, returning the zone transition it caused.
    pub fn apply<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) -> ZoneTransition {
        let transition = ZoneTransition::between(self.value, value);

        self.show_readout(surface, value);
        match transition {
            ZoneTransition::BoostToVacuum => self.boost.clear(surface),
            ZoneTransition::VacuumToBoost => self.vacuum.clear(surface),
            ZoneTransition::WithinBoost | ZoneTransition::WithinVacuum => {}
        }
        self.set_zone_level(surface, value);

        if transition.is_crossing() {
            log_debug!("pressure zone crossing: {}", transition);
        }

        self.value = value;
        transition
    }
}

impl Gauge for PressureGauge {
    fn update<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) {
        self.apply(surface, value);
    }

    fn value(&self) -> f32 { self.value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::arc::NO_LEVEL;
    use crate::surface::testing::{RecordingSurface, Write};

    fn gauge(initial: f32) -> (RecordingSurface, PressureGauge) {
        let mut surface = RecordingSurface::new();
        let gauge = PressureGauge::new(&mut surface, &GaugeConfig::boost(), initial).unwrap();
        surface.clear_writes();
        (surface, gauge)
    }

    fn lit(
        surface: &RecordingSurface,
        arc: &SegmentedArc,
    ) -> usize {
        (0..arc.len())
            .filter(|&i| surface.is_visible(arc.segment(i).unwrap()))
            .count()
    }

    #[test]
    fn test_builds_outline_segments_and_labels() {
        let mut surface = RecordingSurface::new();
        let gauge = PressureGauge::new(&mut surface, &GaugeConfig::boost(), 0.0).unwrap();
        assert_eq!(surface.outlines.len(), 1);
        assert_eq!(surface.outlines[0].sweep, 135.0);
        assert_eq!(surface.quads.len(), 30);
        assert_eq!(surface.labels.len(), 2);
        assert_eq!(gauge.boost().len(), 20);
        assert_eq!(gauge.vacuum().len(), 10);
        assert_eq!(surface.text_color(gauge.labels().0), READOUT);
    }

    #[test]
    fn test_requires_vacuum_zone() {
        let mut surface = RecordingSurface::new();
        let config = GaugeConfig {
            secondary: None,
            ..GaugeConfig::boost()
        };
        assert_eq!(PressureGauge::new(&mut surface, &config, 0.0).err(), Some(Error::MissingSecondary));
        assert!(surface.quads.is_empty());
    }

    #[test]
    fn test_initial_value_is_shown() {
        let mut surface = RecordingSurface::new();
        let gauge = PressureGauge::new(&mut surface, &GaugeConfig::boost(), -6.0).unwrap();
        assert_eq!(gauge.vacuum().level(), 3);
        assert_eq!(gauge.boost().level(), NO_LEVEL);
        assert_eq!(surface.text(gauge.labels().0), "-6");
        assert_eq!(surface.text(gauge.labels().1.unwrap()), ".0");
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(ZoneTransition::between(1.0, 2.0), ZoneTransition::WithinBoost);
        assert_eq!(ZoneTransition::between(0.0, 0.0), ZoneTransition::WithinBoost);
        assert_eq!(ZoneTransition::between(-1.0, -2.0), ZoneTransition::WithinVacuum);
        assert_eq!(ZoneTransition::between(0.0, -0.1), ZoneTransition::BoostToVacuum);
        assert_eq!(ZoneTransition::between(-0.1, 0.0), ZoneTransition::VacuumToBoost);
    }

    #[test]
    fn test_boost_to_vacuum_empties_boost_first() {
        let (mut surface, mut gauge) = gauge(5.0);
        assert_eq!(gauge.boost().level(), 9);

        assert_eq!(gauge.apply(&mut surface, -7.5), ZoneTransition::BoostToVacuum);
        assert_eq!(lit(&surface, gauge.boost()), 0);
        assert_eq!(gauge.vacuum().level(), 4);
        assert_eq!(lit(&surface, gauge.vacuum()), 5);

        // every boost hide lands before the first vacuum show
        let hidden_boost: std::vec::Vec<usize> = surface
            .writes
            .iter()
            .enumerate()
            .filter(|(_, w)| matches!(w, Write::Visible(_, false)))
            .map(|(i, _)| i)
            .collect();
        let first_show = surface
            .writes
            .iter()
            .position(|w| matches!(w, Write::Visible(_, true)))
            .unwrap();
        assert_eq!(hidden_boost.len(), 10);
        assert!(hidden_boost.iter().all(|&i| i < first_show));
    }

    #[test]
    fn test_vacuum_to_boost_empties_vacuum() {
        let (mut surface, mut gauge) = gauge(-15.0);
        assert_eq!(gauge.vacuum().level(), 9);

        assert_eq!(gauge.apply(&mut surface, 10.0), ZoneTransition::VacuumToBoost);
        assert_eq!(lit(&surface, gauge.vacuum()), 0);
        assert_eq!(gauge.boost().level(), 19);
        assert_eq!(lit(&surface, gauge.boost()), 20);
    }

    #[test]
    fn test_only_one_zone_lit_across_sweep() {
        let (mut surface, mut gauge) = gauge(0.0);
        let mut n = 0i32;
        for _ in 0..600 {
            n = (n + 2) % 251;
            gauge.update(&mut surface, (n - 150) as f32 / 10.0);
            let boost = lit(&surface, gauge.boost());
            let vacuum = lit(&surface, gauge.vacuum());
            assert!(boost == 0 || vacuum == 0, "boost {boost} vacuum {vacuum}");
            assert_eq!(boost, (gauge.boost().level() + 1) as usize);
            assert_eq!(vacuum, (gauge.vacuum().level() + 1) as usize);
        }
    }

    #[test]
    fn test_boost_scenario_levels() {
        let (mut surface, mut gauge) = gauge(0.0);
        let mut levels = std::vec::Vec::new();
        for value in [0.0, 0.5, 5.0, 10.0, 12.0] {
            gauge.update(&mut surface, value);
            levels.push(gauge.boost().level());
        }
        assert_eq!(levels, [NO_LEVEL, 0, 9, 19, 19]);
    }

    #[test]
    fn test_readout_updates_every_call() {
        let (mut surface, mut gauge) = gauge(0.0);
        gauge.update(&mut surface, -0.04);
        let (major, minor) = gauge.labels();
        assert_eq!(surface.text(major), "-0");
        assert_eq!(surface.text(minor.unwrap()), ".0");
        // small vacuum below the activation threshold lights nothing
        assert_eq!(gauge.vacuum().level(), NO_LEVEL);

        surface.clear_writes();
        gauge.update(&mut surface, -0.04);
        let texts = surface
            .writes
            .iter()
            .filter(|w| matches!(w, Write::Text(..)))
            .count();
        assert_eq!(texts, 2);
        assert_eq!(surface.visibility_writes(), 0);
    }

    #[test]
    fn test_vacuum_levels_follow_magnitude() {
        let (mut surface, mut gauge) = gauge(-1.0);
        gauge.update(&mut surface, -15.0);
        assert_eq!(gauge.vacuum().level(), 9);
        gauge.update(&mut surface, -20.0);
        assert_eq!(gauge.vacuum().level(), 9);
        gauge.update(&mut surface, -1.7);
        assert_eq!(gauge.vacuum().level(), 1);
    }
}
