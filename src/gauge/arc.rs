//! Segmented arc bar.
//!
//! A [`SegmentedArc`] owns `N` segments spread over an angular sweep and shows
//! a fill level by making segments `[0, level]` visible. Level changes are
//! applied as a minimal diff: only the segments between the old and the new
//! level are touched, so the display never sees a clear-and-redraw.
//!
//! # Level Scale
//!
//! [`LevelScale`] maps a physical value to a level:
//!
//! ```text
//! level = floor((value - min) / ((max - min) / (N - 1)))   clamped to N - 1
//! ```
//!
//! Values below `min + threshold` (and NaN) map to [`NO_LEVEL`]. Anything at or
//! above the threshold lights at least segment 0, so a value just above zero is
//! visible without waiting for a full step.

use heapless::Vec;

use crate::surface::{GaugeSurface, SegmentId};
use crate::ui::PaletteIndex;
use crate::{Error, Result};

use super::geometry::GaugeGeometry;

/// Level meaning "no segments visible".
pub const NO_LEVEL: i16 = -1;

/// Maximum segments in one bar.
pub const MAX_BAR_SEGMENTS: usize = 32;

/// How segments are colored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SegmentFill {
    /// Every segment uses the same color.
    Solid(PaletteIndex),
    /// Segment `i` uses `ramp[i]`; segments past the end reuse the last entry.
    Ramp(&'static [PaletteIndex]),
}

impl SegmentFill {
    /// Color of a logical segment, `None` for an empty ramp.
    pub fn color(
        &self,
        index: u16,
    ) -> Option<PaletteIndex> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Ramp(ramp) => ramp
                .get(usize::from(index))
                .or_else(|| ramp.last())
                .copied(),
        }
    }
}

/// Value-to-level mapping for one bar.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LevelScale {
    pub min: f32,
    pub max: f32,
    /// Minimum distance above `min` before segment 0 lights.
    pub threshold: f32,
    pub segments: u16,
}

impl LevelScale {
    /// Level for a value, always within `[NO_LEVEL, segments - 1]`.
    pub fn level_for(
        &self,
        value: f32,
    ) -> i16 {
        let offset = value - self.min;
        if offset.is_nan() || offset < self.threshold {
            return NO_LEVEL;
        }

        let last = self.segments.saturating_sub(1);
        if last == 0 {
            return 0;
        }

        // offset * (N-1) / span is the same step count as offset / (span / (N-1))
        // but lands exactly on whole steps at the range ends
        let steps = offset * f32::from(last) / (self.max - self.min);
        let level = (steps as i32).min(i32::from(last));
        level as i16
    }
}

/// One bar of discrete arc segments.
pub struct SegmentedArc {
    /// Segment handles indexed by logical index (low end first).
    segments: Vec<SegmentId, MAX_BAR_SEGMENTS>,
    scale: LevelScale,
    level: i16,
}

impl SegmentedArc {
    /// Create the bar's segments on `surface`, all hidden.
    ///
    /// Segments are created from the high end down so that on surfaces that
    /// draw in creation order, segment 0 ends up on top.
    pub fn build<S: GaugeSurface>(
        surface: &mut S,
        geometry: &GaugeGeometry,
        fill: SegmentFill,
        scale: LevelScale,
    ) -> Result<Self> {
        let count = geometry.segments;
        if count == 0 || usize::from(count) > MAX_BAR_SEGMENTS {
            return Err(Error::InvalidSegmentCount(count));
        }

        let mut created: Vec<SegmentId, MAX_BAR_SEGMENTS> = Vec::new();
        for index in (0..count).rev() {
            let color = fill.color(index).ok_or(Error::EmptyRamp)?;
            let id = surface.create_segment(geometry.segment_quad(index))?;
            surface.set_segment_color(id, color);
            created.push(id).map_err(|_| Error::InvalidSegmentCount(count))?;
        }
        created.reverse();

        Ok(Self {
            segments: created,
            scale: LevelScale { segments: count, ..scale },
            level: NO_LEVEL,
        })
    }

    /// Currently applied level.
    #[inline]
    pub const fn level(&self) -> i16 { self.level }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize { self.segments.len() }

    /// Always false; a bar has at least one segment.
    #[inline]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Highest valid level.
    #[inline]
    pub fn last_level(&self) -> i16 { self.segments.len() as i16 - 1 }

    #[inline]
    pub const fn scale(&self) -> &LevelScale { &self.scale }

    /// Handle of a logical segment.
    pub fn segment(
        &self,
        index: usize,
    ) -> Option<SegmentId> {
        self.segments.get(index).copied()
    }

    /// Move the fill to `level`, touching only the segments in between.
    ///
    /// Levels outside `[NO_LEVEL, N - 1]` are clamped. Returns whether
    /// anything changed.
    pub fn set_level<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        level: i16,
    ) -> bool {
        let target = level.clamp(NO_LEVEL, self.last_level());
        let current = self.level;

        if target > current {
            for index in (current + 1)..=target {
                surface.set_segment_visible(self.segments[index as usize], true);
            }
        } else if target < current {
            for index in ((target + 1)..=current).rev() {
                surface.set_segment_visible(self.segments[index as usize], false);
            }
        } else {
            return false;
        }

        self.level = target;
        true
    }

    /// Map `value` through the scale and apply the resulting level.
    pub fn set_value<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) -> i16 {
        let level = self.scale.level_for(value);
        self.set_level(surface, level);
        self.level
    }

    /// Hide every segment.
    pub fn clear<S: GaugeSurface>(
        &mut self,
        surface: &mut S,
    ) {
        self.set_level(surface, NO_LEVEL);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::gauge::geometry::Sweep;
    use crate::surface::testing::RecordingSurface;
    use crate::ui::{BOOST_FILL, OIL_RAMP};

    fn geometry(segments: u16) -> GaugeGeometry {
        GaugeGeometry {
            origin: Point::new(140, 148),
            radius: 135,
            arc_width: 30,
            start_angle: 45.0,
            spread: 90.0,
            segments,
            sweep: Sweep::Clockwise,
        }
    }

    fn boost_scale() -> LevelScale {
        LevelScale {
            min: 0.0,
            max: 10.0,
            threshold: 0.1,
            segments: 20,
        }
    }

    fn build(
        surface: &mut RecordingSurface,
        segments: u16,
    ) -> SegmentedArc {
        SegmentedArc::build(surface, &geometry(segments), SegmentFill::Solid(BOOST_FILL), boost_scale()).unwrap()
    }

    fn visible(
        surface: &RecordingSurface,
        arc: &SegmentedArc,
    ) -> std::vec::Vec<bool> {
        (0..arc.len())
            .map(|i| surface.is_visible(arc.segment(i).unwrap()))
            .collect()
    }

    #[test]
    fn test_build_starts_hidden() {
        let mut surface = RecordingSurface::new();
        let arc = build(&mut surface, 20);
        assert_eq!(arc.len(), 20);
        assert_eq!(arc.level(), NO_LEVEL);
        assert!(visible(&surface, &arc).iter().all(|v| !v));
    }

    #[test]
    fn test_build_creates_high_end_first() {
        let mut surface = RecordingSurface::new();
        let arc = build(&mut surface, 5);
        assert_eq!(arc.segment(4), Some(SegmentId(0)));
        assert_eq!(arc.segment(0), Some(SegmentId(4)));
        assert_eq!(surface.quads[0], geometry(5).segment_quad(4));
    }

    #[test]
    fn test_build_rejects_bad_segment_counts() {
        let mut surface = RecordingSurface::new();
        let fill = SegmentFill::Solid(BOOST_FILL);
        assert_eq!(
            SegmentedArc::build(&mut surface, &geometry(0), fill, boost_scale()).err(),
            Some(Error::InvalidSegmentCount(0))
        );
        assert_eq!(
            SegmentedArc::build(&mut surface, &geometry(33), fill, boost_scale()).err(),
            Some(Error::InvalidSegmentCount(33))
        );
    }

    #[test]
    fn test_ramp_colors_segments() {
        let mut surface = RecordingSurface::new();
        let arc = SegmentedArc::build(&mut surface, &geometry(20), SegmentFill::Ramp(&OIL_RAMP), boost_scale()).unwrap();
        for i in 0..20 {
            let id = arc.segment(i).unwrap();
            assert_eq!(surface.colors[usize::from(id.0)], OIL_RAMP[i]);
        }
    }

    #[test]
    fn test_short_ramp_reuses_last_color() {
        let fill = SegmentFill::Ramp(&[PaletteIndex(2), PaletteIndex(9)]);
        assert_eq!(fill.color(0), Some(PaletteIndex(2)));
        assert_eq!(fill.color(7), Some(PaletteIndex(9)));
        assert_eq!(SegmentFill::Ramp(&[]).color(0), None);
    }

    #[test]
    fn test_set_level_exhaustive_small_bars() {
        for n in 1..=6u16 {
            for start in -1..n as i16 {
                for target in -1..n as i16 {
                    let mut surface = RecordingSurface::new();
                    let mut arc = build(&mut surface, n);
                    arc.set_level(&mut surface, start);
                    arc.set_level(&mut surface, target);

                    let expected: std::vec::Vec<bool> = (0..n as i16).map(|i| i <= target).collect();
                    assert_eq!(visible(&surface, &arc), expected, "n={n} start={start} target={target}");
                    assert_eq!(arc.level(), target);
                }
            }
        }
    }

    #[test]
    fn test_set_level_writes_minimal_diff() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 20);
        arc.set_level(&mut surface, 5);
        assert_eq!(surface.visibility_writes(), 6);

        surface.clear_writes();
        arc.set_level(&mut surface, 8);
        assert_eq!(surface.visibility_writes(), 3);

        surface.clear_writes();
        arc.set_level(&mut surface, 2);
        assert_eq!(surface.visibility_writes(), 6);
    }

    #[test]
    fn test_set_level_is_idempotent() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 20);
        assert!(arc.set_level(&mut surface, 7));

        surface.clear_writes();
        assert!(!arc.set_level(&mut surface, 7));
        assert_eq!(surface.visibility_writes(), 0);
    }

    #[test]
    fn test_set_level_ascends_and_descends_in_order() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 10);
        surface.clear_writes();
        arc.set_level(&mut surface, 3);
        let shown: std::vec::Vec<_> = surface.writes.iter().cloned().collect();
        let expected: std::vec::Vec<_> = (0..=3)
            .map(|i| crate::surface::testing::Write::Visible(arc.segment(i).unwrap(), true))
            .collect();
        assert_eq!(shown, expected);

        surface.clear_writes();
        arc.set_level(&mut surface, 1);
        let expected: std::vec::Vec<_> = [3, 2]
            .iter()
            .map(|&i| crate::surface::testing::Write::Visible(arc.segment(i).unwrap(), false))
            .collect();
        assert_eq!(surface.writes, expected);
    }

    #[test]
    fn test_set_level_clamps_out_of_range() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 20);
        arc.set_level(&mut surface, 40);
        assert_eq!(arc.level(), 19);
        arc.set_level(&mut surface, -7);
        assert_eq!(arc.level(), NO_LEVEL);
    }

    #[test]
    fn test_level_for_boost_scenario() {
        let scale = boost_scale();
        let levels: std::vec::Vec<i16> = [0.0, 0.5, 5.0, 10.0, 12.0]
            .iter()
            .map(|&v| scale.level_for(v))
            .collect();
        assert_eq!(levels, [NO_LEVEL, 0, 9, 19, 19]);
    }

    #[test]
    fn test_level_for_first_segment_threshold() {
        let scale = boost_scale();
        assert_eq!(scale.level_for(0.09), NO_LEVEL);
        assert_eq!(scale.level_for(0.1), 0);
        assert_eq!(scale.level_for(-3.0), NO_LEVEL);
    }

    #[test]
    fn test_level_for_never_exceeds_last_segment() {
        let scale = boost_scale();
        for v in [10.0, 10.5, 100.0, 1.0e9, f32::INFINITY] {
            assert_eq!(scale.level_for(v), 19);
        }
    }

    #[test]
    fn test_level_for_nan_is_empty() {
        assert_eq!(boost_scale().level_for(f32::NAN), NO_LEVEL);
    }

    #[test]
    fn test_level_for_offset_range() {
        let scale = LevelScale {
            min: 180.0,
            max: 300.0,
            threshold: 0.0,
            segments: 20,
        };
        assert_eq!(scale.level_for(179.0), NO_LEVEL);
        assert_eq!(scale.level_for(180.0), 0);
        assert_eq!(scale.level_for(240.0), 9);
        assert_eq!(scale.level_for(300.0), 19);
    }

    #[test]
    fn test_level_for_single_segment() {
        let scale = LevelScale {
            min: 0.0,
            max: 10.0,
            threshold: 0.1,
            segments: 1,
        };
        assert_eq!(scale.level_for(0.0), NO_LEVEL);
        assert_eq!(scale.level_for(0.2), 0);
        assert_eq!(scale.level_for(50.0), 0);
    }

    #[test]
    fn test_increasing_values_never_hide_segments() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 20);
        let mut previous = visible(&surface, &arc);
        let mut value = 0.0f32;
        while value < 12.0 {
            arc.set_value(&mut surface, value);
            let now = visible(&surface, &arc);
            assert!(previous.iter().zip(&now).all(|(was, is)| !was || *is));
            previous = now;
            value += 0.37;
        }
    }

    #[test]
    fn test_clear_hides_everything() {
        let mut surface = RecordingSurface::new();
        let mut arc = build(&mut surface, 20);
        arc.set_value(&mut surface, 7.5);
        arc.clear(&mut surface);
        assert_eq!(arc.level(), NO_LEVEL);
        assert!(visible(&surface, &arc).iter().all(|v| !v));
    }
}
