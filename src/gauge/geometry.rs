//! Arc geometry: segment polygons and template outlines.
//!
//! Angles are in degrees, measured counter-clockwise from 3 o'clock. Screen y
//! grows downward, so a point at angle `a` and radius `r` sits at
//! `(r·cos a, −r·sin a)` relative to the origin, each component truncated
//! toward zero.
//!
//! Geometry is evaluated once per segment at startup; nothing here runs inside
//! the update loop.

use core::f32::consts::PI;

use embedded_graphics::prelude::Point;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::surface::{ArcOutline, SegmentQuad};
use crate::ui::PaletteIndex;

/// Extra radius of the template outline beyond the segments.
pub const OUTLINE_MARGIN: u32 = 2;

/// Direction in which a bar fills as its level rises.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sweep {
    /// Segment 0 sits at the start angle.
    #[default]
    CounterClockwise,
    /// Segment 0 sits at the far end (start + spread) and the bar fills back
    /// toward the start angle.
    Clockwise,
}

/// Screen point at `radius` and `degrees` around `origin`.
pub fn polar(
    origin: Point,
    radius: f32,
    degrees: f32,
) -> Point {
    let alpha = degrees / 180.0 * PI;
    let x = (radius * alpha.cos()) as i32;
    let y = -((radius * alpha.sin()) as i32);
    origin + Point::new(x, y)
}

/// Immutable geometry of one bar.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeGeometry {
    pub origin: Point,
    pub radius: u32,
    pub arc_width: u32,
    pub start_angle: f32,
    pub spread: f32,
    pub segments: u16,
    pub sweep: Sweep,
}

impl GaugeGeometry {
    /// Angular slot a logical index occupies.
    #[inline]
    pub const fn slot(
        &self,
        index: u16,
    ) -> u16 {
        match self.sweep {
            Sweep::CounterClockwise => index,
            Sweep::Clockwise => self.segments - 1 - index,
        }
    }

    /// Lower and upper angular bound of a segment.
    pub fn bounds(
        &self,
        index: u16,
    ) -> (f32, f32) {
        let slot = f32::from(self.slot(index));
        let step = self.spread / f32::from(self.segments);
        (self.start_angle + slot * step, self.start_angle + (slot + 1.0) * step)
    }

    /// Polygon of a segment.
    pub fn segment_quad(
        &self,
        index: u16,
    ) -> SegmentQuad {
        let (low, high) = self.bounds(index);
        let outer = self.radius as f32;
        let inner = self.radius.saturating_sub(self.arc_width) as f32;
        SegmentQuad {
            points: [
                polar(self.origin, outer, low),
                polar(self.origin, outer, high),
                polar(self.origin, inner, high),
                polar(self.origin, inner, low),
            ],
        }
    }

    /// Hollow band enclosing this bar plus `extra_spread` degrees beyond it.
    pub fn outline(
        &self,
        extra_spread: f32,
        color: PaletteIndex,
    ) -> ArcOutline {
        let outer_radius = self.radius + OUTLINE_MARGIN;
        ArcOutline {
            origin: self.origin,
            outer_radius,
            inner_radius: outer_radius.saturating_sub(self.arc_width + 2 * OUTLINE_MARGIN),
            start_angle: self.start_angle,
            sweep: self.spread + extra_spread,
            color,
        }
    }

    /// Geometry of a bar continuing this one's arc past its far end.
    pub const fn continuation(
        &self,
        segments: u16,
        spread: f32,
        sweep: Sweep,
    ) -> Self {
        Self {
            origin: self.origin,
            radius: self.radius,
            arc_width: self.arc_width,
            start_angle: self.start_angle + self.spread,
            spread,
            segments,
            sweep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(sweep: Sweep) -> GaugeGeometry {
        GaugeGeometry {
            origin: Point::new(140, 148),
            radius: 135,
            arc_width: 30,
            start_angle: 45.0,
            spread: 90.0,
            segments: 20,
            sweep,
        }
    }

    fn close(
        a: Point,
        b: Point,
    ) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
    }

    #[test]
    fn test_polar_cardinal_points() {
        let origin = Point::new(100, 100);
        assert!(close(polar(origin, 50.0, 0.0), Point::new(150, 100)));
        assert!(close(polar(origin, 50.0, 90.0), Point::new(100, 50)));
        assert!(close(polar(origin, 50.0, 180.0), Point::new(50, 100)));
    }

    #[test]
    fn test_bounds_counter_clockwise() {
        let g = geometry(Sweep::CounterClockwise);
        assert_eq!(g.bounds(0), (45.0, 49.5));
        assert_eq!(g.bounds(19), (130.5, 135.0));
    }

    #[test]
    fn test_bounds_clockwise_reverses_slots() {
        let g = geometry(Sweep::Clockwise);
        assert_eq!(g.bounds(0), (130.5, 135.0));
        assert_eq!(g.bounds(19), (45.0, 49.5));
    }

    #[test]
    fn test_adjacent_segments_share_an_edge() {
        let g = geometry(Sweep::CounterClockwise);
        for i in 0..19 {
            let a = g.segment_quad(i);
            let b = g.segment_quad(i + 1);
            assert_eq!(a.points[1], b.points[0]);
            assert_eq!(a.points[2], b.points[3]);
        }
    }

    #[test]
    fn test_quad_vertices_sit_on_both_radii() {
        let g = geometry(Sweep::CounterClockwise);
        let quad = g.segment_quad(0);
        // 45 degrees: outer ≈ (95, -95), inner ≈ (74, -74)
        assert!(close(quad.points[0], Point::new(140 + 95, 148 - 95)));
        assert!(close(quad.points[3], Point::new(140 + 74, 148 - 74)));
    }

    #[test]
    fn test_continuation_starts_at_far_end() {
        let g = geometry(Sweep::Clockwise);
        let vacuum = g.continuation(10, 45.0, Sweep::CounterClockwise);
        assert_eq!(vacuum.start_angle, 135.0);
        assert_eq!(vacuum.bounds(0), (135.0, 139.5));
        assert_eq!(vacuum.radius, g.radius);
    }

    #[test]
    fn test_outline_encloses_both_zones() {
        let g = geometry(Sweep::Clockwise);
        let outline = g.outline(45.0, PaletteIndex(0));
        assert_eq!(outline.outer_radius, 137);
        assert_eq!(outline.inner_radius, 103);
        assert_eq!(outline.sweep, 135.0);
    }
}
