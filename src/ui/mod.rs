//! UI styling and visual constants.
//!
//! - `colors`: the gauge palette and its well-known indices
//! - `styles`: fonts and text alignment for the numeric readouts

mod colors;
mod styles;

pub use colors::{
    BACKGROUND,
    BOOST_FILL,
    GAUGE_PALETTE,
    OIL_RAMP,
    OUTLINE,
    PALETTE_SIZE,
    PLACEHOLDER,
    Palette,
    PaletteIndex,
    READOUT,
    VACUUM_FILL,
    rgb,
};
pub use styles::{MAJOR_FONT, MINOR_FONT, ReadoutFont};
