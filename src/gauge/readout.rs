//! Numeric readout formatting.

use core::fmt::Write;

use heapless::String;

/// Enough for any finite `f32` at one decimal place.
const READOUT_CAPACITY: usize = 48;

/// Pressure readout split into an integer part and a one-digit fraction.
///
/// The value is formatted once to one decimal place and both parts are
/// slices of that text, so they always agree on rounding:
///
/// | value | major | minor |
/// |-------|-------|-------|
/// | 12.34 | `12` | `.3` |
/// | -0.04 | `-0` | `.0` |
/// | -7.96 | `-8` | `.0` |
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SplitReadout {
    text: String<READOUT_CAPACITY>,
    split: usize,
}

impl SplitReadout {
    const UNAVAILABLE: &'static str = "--.-";

    pub fn new(value: f32) -> Self {
        let mut text = String::new();
        if value.is_finite() && write!(text, "{value:.1}").is_ok() {
            if let Some(split) = text.find('.') {
                return Self { text, split };
            }
        }

        Self::unavailable()
    }

    fn unavailable() -> Self {
        let mut text = String::new();
        // fits: four bytes into a 48-byte buffer
        let _ = text.push_str(Self::UNAVAILABLE);
        Self { text, split: 2 }
    }

    /// Integer part including the sign.
    #[inline]
    pub fn major(&self) -> &str { &self.text[..self.split] }

    /// `.` followed by the first decimal digit.
    #[inline]
    pub fn minor(&self) -> &str { &self.text[self.split..] }
}

/// Whole-number readout for the temperature gauge.
///
/// Truncates toward zero, so 187.9 reads `187`.
pub fn whole_number(value: f32) -> String<READOUT_CAPACITY> {
    let mut text = String::new();
    if write!(text, "{}", value as i32).is_err() {
        text.clear();
    }
    text
}
