//! Display and gauge layout constants.
//!
//! # Pre-computed Layout Constants
//!
//! Gauge origins and readout anchors are derived from the panel size at compile
//! time. Both gauges share the same arc radius and width; the boost gauge sits
//! in the upper half of the portrait panel and the oil temperature gauge in the
//! lower half.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789, portrait).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Arc Geometry (shared by both gauges)
// =============================================================================

/// Outer radius of every gauge bar.
pub const ARC_RADIUS: u32 = 135;

/// Radial thickness of every gauge bar.
pub const ARC_WIDTH: u32 = 30;

/// Arc center X. The arc extends left of this point, off the right edge.
const ARC_ORIGIN_X: i32 = SCREEN_WIDTH as i32 - 100;

const _: () = assert!(ARC_WIDTH < ARC_RADIUS);

// =============================================================================
// Boost Gauge
// =============================================================================

/// Baseline of the boost readout text.
const BOOST_READOUT_Y: i32 = SCREEN_HEIGHT as i32 / 2 - 6;

/// Center of the boost/vacuum arc.
pub const BOOST_ORIGIN: Point = Point::new(ARC_ORIGIN_X, BOOST_READOUT_Y - 6);

/// Boost zone starts here (degrees, counter-clockwise from 3 o'clock).
pub const BOOST_START_ANGLE: f32 = 45.0;

/// Angular spread of the boost zone. The vacuum zone continues past it.
pub const BOOST_SPREAD: f32 = 90.0;

/// Angular spread of the vacuum zone.
pub const VACUUM_SPREAD: f32 = 45.0;

pub const BOOST_SEGMENTS: u16 = 20;
pub const VACUUM_SEGMENTS: u16 = 10;

/// Bottom-right corner of the integer part of the boost readout.
pub const BOOST_READOUT_MAJOR: Point = Point::new(SCREEN_WIDTH as i32 - 60, BOOST_READOUT_Y - 3);

/// Bottom-left corner of the fractional part of the boost readout.
pub const BOOST_READOUT_MINOR: Point = Point::new(SCREEN_WIDTH as i32 - 64, BOOST_READOUT_Y - 3);

// =============================================================================
// Oil Temperature Gauge
// =============================================================================

/// Center of the oil temperature arc.
pub const OIL_ORIGIN: Point = Point::new(ARC_ORIGIN_X, SCREEN_HEIGHT as i32 - 10);

pub const OIL_START_ANGLE: f32 = 45.0;
pub const OIL_SPREAD: f32 = 135.0;
pub const OIL_SEGMENTS: u16 = 20;

/// Bottom-right corner of the oil temperature readout.
pub const OIL_READOUT: Point = Point::new(SCREEN_WIDTH as i32 - 6, SCREEN_HEIGHT as i32 - 10);
