//! Gauge palette.
//!
//! Segments and labels refer to colors by [`PaletteIndex`] so the gauge engine
//! never touches pixel formats. The [`Scene`](crate::scene::Scene) resolves the
//! index to an `Rgb565` value when it draws.
//!
//! ## Palette layout
//!
//! | Index | Use |
//! |-------|-----|
//! | 0 | Template outline, placeholder readout |
//! | 1 | Boost fill |
//! | 2-15 | Blue → green → yellow → red ramp (oil temperature) |
//! | 15 | Vacuum fill |
//! | 16 | Readout text |

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 17;

/// Index into a [`Palette`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteIndex(pub u8);

/// Convert a `0xRRGGBB` literal to `Rgb565` at compile time.
pub const fn rgb(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Fixed set of colors addressed by [`PaletteIndex`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: [Rgb565; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Rgb565; PALETTE_SIZE]) -> Self { Self { colors } }

    /// Resolve an index. Out-of-range indices fall back to the outline color.
    #[inline]
    pub fn color(
        &self,
        index: PaletteIndex,
    ) -> Rgb565 {
        self.colors
            .get(usize::from(index.0))
            .copied()
            .unwrap_or(self.colors[0])
    }
}

/// Screen background. Hidden segments are painted in this color.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Palette used by both gauges.
pub const GAUGE_PALETTE: Palette = Palette::new([
    rgb(0xdddddd),
    rgb(0x00aaff),
    rgb(0x00c8fa),
    rgb(0x00e4fa),
    rgb(0x00fae5),
    rgb(0x00ff80),
    rgb(0x03ff03),
    rgb(0x55ff00),
    rgb(0xb7ff00),
    rgb(0xe1ff00),
    rgb(0xffff00),
    rgb(0xfff700),
    rgb(0xffd500),
    rgb(0xff9500),
    rgb(0xff5500),
    rgb(0xff0303),
    Rgb565::WHITE,
]);

/// Hollow template arc drawn behind the segments.
pub const OUTLINE: PaletteIndex = PaletteIndex(0);

/// Readout color while no valid reading is available.
pub const PLACEHOLDER: PaletteIndex = PaletteIndex(0);

/// Boost zone fill.
pub const BOOST_FILL: PaletteIndex = PaletteIndex(1);

/// Vacuum zone fill.
pub const VACUUM_FILL: PaletteIndex = PaletteIndex(15);

/// Numeric readout text.
pub const READOUT: PaletteIndex = PaletteIndex(16);

/// Per-segment colors for the oil temperature bar, cold end first.
pub const OIL_RAMP: [PaletteIndex; 20] = [
    PaletteIndex(2),
    PaletteIndex(3),
    PaletteIndex(4),
    PaletteIndex(5),
    PaletteIndex(6),
    PaletteIndex(6),
    PaletteIndex(6),
    PaletteIndex(6),
    PaletteIndex(7),
    PaletteIndex(8),
    PaletteIndex(9),
    PaletteIndex(10),
    PaletteIndex(10),
    PaletteIndex(10),
    PaletteIndex(11),
    PaletteIndex(12),
    PaletteIndex(13),
    PaletteIndex(14),
    PaletteIndex(15),
    PaletteIndex(15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb(0x000000), Rgb565::BLACK);
        assert_eq!(rgb(0xffffff), Rgb565::WHITE);
        assert_eq!(rgb(0xff0000), Rgb565::RED);
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(GAUGE_PALETTE.color(READOUT), Rgb565::WHITE);
        assert_eq!(GAUGE_PALETTE.color(VACUUM_FILL), rgb(0xff0303));
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_outline() {
        assert_eq!(GAUGE_PALETTE.color(PaletteIndex(200)), GAUGE_PALETTE.color(OUTLINE));
    }

    #[test]
    fn test_oil_ramp_stays_in_palette() {
        assert!(OIL_RAMP.iter().all(|i| usize::from(i.0) < PALETTE_SIZE));
    }
}
