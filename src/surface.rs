//! Drawing interface consumed by the gauges.
//!
//! Gauges never draw pixels themselves. They create retained elements once at
//! construction (segment polygons, outline arcs, text labels) and afterwards
//! only flip visibility, change colors and replace text.

use embedded_graphics::prelude::Point;

use crate::Result;
use crate::ui::{PaletteIndex, ReadoutFont};

/// Handle to a segment created on a surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentId(pub u16);

/// Handle to a text label created on a surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelId(pub u8);

/// Four screen-space vertices of one arc segment.
///
/// Order: outer edge at the first angular bound, outer edge at the second
/// bound, inner edge at the second bound, inner edge at the first bound.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SegmentQuad {
    pub points: [Point; 4],
}

/// Hollow arc band drawn once behind a gauge's segments.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcOutline {
    pub origin: Point,
    pub outer_radius: u32,
    pub inner_radius: u32,
    /// Degrees, counter-clockwise from 3 o'clock.
    pub start_angle: f32,
    /// Degrees swept counter-clockwise from `start_angle`.
    pub sweep: f32,
    pub color: PaletteIndex,
}

/// Which corner of the text box sits on the anchor position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    BottomLeft,
    BottomRight,
}

/// Placement of a text label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LabelAnchor {
    pub position: Point,
    pub anchor: Anchor,
    pub font: ReadoutFont,
}

/// Retained drawing surface.
///
/// Segments start hidden. Labels start empty.
pub trait GaugeSurface {
    /// Register a segment polygon. Returns a handle for later updates.
    fn create_segment(
        &mut self,
        quad: SegmentQuad,
    ) -> Result<SegmentId>;

    fn set_segment_visible(
        &mut self,
        segment: SegmentId,
        visible: bool,
    );

    fn set_segment_color(
        &mut self,
        segment: SegmentId,
        color: PaletteIndex,
    );

    /// Register a static outline arc.
    fn create_outline(
        &mut self,
        outline: ArcOutline,
    ) -> Result<()>;

    fn create_label(
        &mut self,
        anchor: LabelAnchor,
    ) -> Result<LabelId>;

    fn set_text(
        &mut self,
        label: LabelId,
        text: &str,
    );

    fn set_text_color(
        &mut self,
        label: LabelId,
        color: PaletteIndex,
    );
}
