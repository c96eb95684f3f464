//! Display driver for the 240x320 ST7789 TFT breakout.
//!
//! Pin mapping:
//! - CLK: GPIO10 (SPI1 SCK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - DC: GPIO12
//! - CS: GPIO13
//! - Reset: GPIO9

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation};

/// Display type alias for the ST7789 with a wired reset pin.
pub type GaugeDisplay<'d> =
    mipidsi::Display<SPIInterface<ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, NoDelay>, Output<'d>>, ST7789, Output<'d>>;

/// Initialize the display in portrait orientation.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
) -> GaugeDisplay<'d> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap_or_else(|_| defmt::panic!("SPI device setup failed"));
    let di = SPIInterface::new(spi_device, dc);

    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new())
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut embassy_time::Delay)
        .unwrap_or_else(|_| defmt::panic!("ST7789 init failed"))
}

/// SPI configuration for the display.
///
/// 24MHz keeps a full-screen clear under 60ms on breadboard wiring.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 24_000_000;
    config
}
