//! Fonts for the numeric readouts.
//!
//! The pressure readout splits its value into a large integer part and a
//! smaller fractional part, so two fonts are exposed. The temperature readout
//! uses the major font only.

use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Font for integer readouts.
pub const MAJOR_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Font for the fractional part of the pressure readout.
pub const MINOR_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

/// Which readout font a label uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadoutFont {
    #[default]
    Major,
    Minor,
}

impl ReadoutFont {
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Major => MAJOR_FONT,
            Self::Minor => MINOR_FONT,
        }
    }
}
