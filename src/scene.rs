//! Retained scene rendering gauges onto an `embedded-graphics` display.
//!
//! [`Scene`] is the concrete [`GaugeSurface`]: it stores every segment polygon,
//! outline arc and label in fixed `heapless` storage, tracks what changed since
//! the last [`Scene::flush`], and only draws those elements.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Outline arcs | Once / after `invalidate()` | Draw-once tracking |
//! | Segments | On visibility or color change | Paint fill or background |
//! | Labels | On text or color change | Clear previous bounds, redraw |
//!
//! Neighbouring segments share an edge. When a hidden segment is painted with
//! the background, visible neighbours are repainted in the same flush so the
//! shared edge pixels stay filled.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::{String, Vec};

use crate::gauge::geometry::polar;
use crate::surface::{Anchor, ArcOutline, GaugeSurface, LabelAnchor, LabelId, SegmentId, SegmentQuad};
use crate::ui::{Palette, PaletteIndex};
use crate::{Error, Result};

/// Maximum segments across all gauges.
pub const MAX_SEGMENTS: usize = 64;

/// Maximum text labels across all gauges.
pub const MAX_LABELS: usize = 8;

/// Maximum outline arcs across all gauges.
pub const MAX_OUTLINES: usize = 4;

/// Maximum characters per label.
pub const LABEL_CAPACITY: usize = 8;

struct SegmentNode {
    quad: SegmentQuad,
    color: PaletteIndex,
    visible: bool,
    dirty: bool,
}

struct LabelNode {
    anchor: LabelAnchor,
    text: String<LABEL_CAPACITY>,
    color: PaletteIndex,
    /// Area covered by the last drawn text, cleared before the next draw.
    drawn: Option<Rectangle>,
    dirty: bool,
}

/// Retained gauge scene with dirty tracking.
pub struct Scene {
    palette: Palette,
    background: Rgb565,
    segments: Vec<SegmentNode, MAX_SEGMENTS>,
    outlines: Vec<ArcOutline, MAX_OUTLINES>,
    labels: Vec<LabelNode, MAX_LABELS>,
    outlines_drawn: bool,
}

impl Scene {
    /// Create an empty scene.
    pub const fn new(
        palette: Palette,
        background: Rgb565,
    ) -> Self {
        Self {
            palette,
            background,
            segments: Vec::new(),
            outlines: Vec::new(),
            labels: Vec::new(),
            outlines_drawn: false,
        }
    }

    /// Force everything to be redrawn on the next flush.
    ///
    /// Call after the display was cleared externally.
    pub fn invalidate(&mut self) {
        self.outlines_drawn = false;
        for segment in self.segments.iter_mut() {
            segment.dirty = true;
        }
        for label in self.labels.iter_mut() {
            label.drawn = None;
            label.dirty = true;
        }
    }

    /// Whether anything is waiting to be drawn.
    pub fn is_dirty(&self) -> bool {
        !self.outlines_drawn || self.segments.iter().any(|s| s.dirty) || self.labels.iter().any(|l| l.dirty)
    }

    /// Draw every element that changed since the last flush.
    pub fn flush<D>(
        &mut self,
        display: &mut D,
    ) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = self.palette;
        let background = self.background;

        if !self.outlines_drawn {
            for outline in &self.outlines {
                draw_outline(display, outline, palette.color(outline.color))?;
            }
            self.outlines_drawn = true;
        }

        // Erase pass
        let mut erased = [false; MAX_SEGMENTS];
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.dirty && !segment.visible {
                fill_quad(display, &segment.quad, background)?;
                erased[i] = true;
            }
        }

        // Paint pass
        let count = self.segments.len();
        for (i, segment) in self.segments.iter_mut().enumerate() {
            let touches_erased = (i > 0 && erased[i - 1]) || (i + 1 < count && erased[i + 1]);
            if segment.visible && (segment.dirty || touches_erased) {
                fill_quad(display, &segment.quad, palette.color(segment.color))?;
            }
            segment.dirty = false;
        }

        for label in self.labels.iter_mut().filter(|l| l.dirty) {
            if let Some(area) = label.drawn.take() {
                area.into_styled(PrimitiveStyle::with_fill(background))
                    .draw(display)?;
            }
            if !label.text.is_empty() {
                let text = label_text(&label.text, &label.anchor, palette.color(label.color));
                label.drawn = Some(text.bounding_box());
                text.draw(display)?;
            }
            label.dirty = false;
        }

        Ok(())
    }

    /// Number of registered segments.
    pub fn segment_count(&self) -> usize { self.segments.len() }

    /// Current visibility of a segment.
    pub fn segment_visible(
        &self,
        segment: SegmentId,
    ) -> Option<bool> {
        self.segments.get(usize::from(segment.0)).map(|s| s.visible)
    }

    /// Current palette index of a segment.
    pub fn segment_color(
        &self,
        segment: SegmentId,
    ) -> Option<PaletteIndex> {
        self.segments.get(usize::from(segment.0)).map(|s| s.color)
    }

    /// Current text of a label.
    pub fn text(
        &self,
        label: LabelId,
    ) -> Option<&str> {
        self.labels.get(usize::from(label.0)).map(|l| l.text.as_str())
    }

    /// Current palette index of a label.
    pub fn text_color(
        &self,
        label: LabelId,
    ) -> Option<PaletteIndex> {
        self.labels.get(usize::from(label.0)).map(|l| l.color)
    }
}

impl GaugeSurface for Scene {
    fn create_segment(
        &mut self,
        quad: SegmentQuad,
    ) -> Result<SegmentId> {
        let id = SegmentId(self.segments.len() as u16);
        self.segments
            .push(SegmentNode {
                quad,
                color: PaletteIndex::default(),
                visible: false,
                dirty: false,
            })
            .map_err(|_| Error::SegmentCapacity)?;
        Ok(id)
    }

    fn set_segment_visible(
        &mut self,
        segment: SegmentId,
        visible: bool,
    ) {
        if let Some(node) = self.segments.get_mut(usize::from(segment.0))
            && node.visible != visible
        {
            node.visible = visible;
            node.dirty = true;
        }
    }

    fn set_segment_color(
        &mut self,
        segment: SegmentId,
        color: PaletteIndex,
    ) {
        if let Some(node) = self.segments.get_mut(usize::from(segment.0))
            && node.color != color
        {
            node.color = color;
            node.dirty |= node.visible;
        }
    }

    fn create_outline(
        &mut self,
        outline: ArcOutline,
    ) -> Result<()> {
        self.outlines.push(outline).map_err(|_| Error::OutlineCapacity)?;
        self.outlines_drawn = false;
        Ok(())
    }

    fn create_label(
        &mut self,
        anchor: LabelAnchor,
    ) -> Result<LabelId> {
        let id = LabelId(self.labels.len() as u8);
        self.labels
            .push(LabelNode {
                anchor,
                text: String::new(),
                color: PaletteIndex::default(),
                drawn: None,
                dirty: false,
            })
            .map_err(|_| Error::LabelCapacity)?;
        Ok(id)
    }

    fn set_text(
        &mut self,
        label: LabelId,
        text: &str,
    ) {
        let Some(node) = self.labels.get_mut(usize::from(label.0)) else {
            return;
        };
        if node.text.as_str() == text {
            return;
        }
        node.text.clear();
        for c in text.chars() {
            if node.text.push(c).is_err() {
                break;
            }
        }
        node.dirty = true;
    }

    fn set_text_color(
        &mut self,
        label: LabelId,
        color: PaletteIndex,
    ) {
        if let Some(node) = self.labels.get_mut(usize::from(label.0))
            && node.color != color
        {
            node.color = color;
            node.dirty = true;
        }
    }
}

fn fill_quad<D>(
    display: &mut D,
    quad: &SegmentQuad,
    color: Rgb565,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let [p0, p1, p2, p3] = quad.points;
    let style = PrimitiveStyle::with_fill(color);
    Triangle::new(p0, p1, p2).into_styled(style).draw(display)?;
    Triangle::new(p0, p2, p3).into_styled(style).draw(display)
}

fn draw_outline<D>(
    display: &mut D,
    outline: &ArcOutline,
    color: Rgb565,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    // embedded-graphics measures angles clockwise (y grows downward)
    let start = Angle::from_degrees(-(outline.start_angle + outline.sweep));
    let sweep = Angle::from_degrees(outline.sweep);

    for radius in [outline.outer_radius, outline.inner_radius] {
        Arc::with_center(outline.origin, radius * 2, start, sweep)
            .into_styled(style)
            .draw(display)?;
    }

    for angle in [outline.start_angle, outline.start_angle + outline.sweep] {
        Line::new(
            polar(outline.origin, outline.inner_radius as f32, angle),
            polar(outline.origin, outline.outer_radius as f32, angle),
        )
        .into_styled(style)
        .draw(display)?;
    }

    Ok(())
}

fn label_text<'a>(
    text: &'a str,
    anchor: &LabelAnchor,
    color: Rgb565,
) -> Text<'a, MonoTextStyle<'static, Rgb565>> {
    let alignment = match anchor.anchor {
        Anchor::BottomLeft => Alignment::Left,
        Anchor::BottomRight => Alignment::Right,
    };
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Bottom)
        .build();
    Text::with_text_style(
        text,
        anchor.position,
        MonoTextStyle::new(anchor.font.font(), color),
        text_style,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
