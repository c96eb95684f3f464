//! Gauge cluster firmware for the RP2350.
//!
//! Drives the boost/vacuum and oil temperature gauges on a 240x320 ST7789.

#![no_std]
#![no_main]

mod board;
mod display;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use embedded_graphics::prelude::*;
use gauge_cluster::config::DashboardConfig;
use gauge_cluster::ui::{BACKGROUND, GAUGE_PALETTE};
use gauge_cluster::{Dashboard, Scene};
use {defmt_rtt as _, panic_probe as _};

use crate::board::{Board, MonotonicClock};
use crate::display::{display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"gauge-cluster"),
    embassy_rp::binary_info::rp_program_description!(c"Boost/vacuum and oil temperature gauges on ST7789"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Gauge cluster starting...");

    let p = embassy_rp::init(Default::default());

    // Display on SPI1
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());
    let cs = Output::new(p.PIN_13, Level::High);
    let dc = Output::new(p.PIN_12, Level::Low);
    let rst = Output::new(p.PIN_9, Level::High);
    let mut display = init_display(spi, cs, dc, rst);
    unwrap!(display.clear(BACKGROUND).map_err(|_| "display clear failed"));
    info!("Display initialized");

    // Manifold sensor on A0, oil sender on A2, encoder on GP0/GP1
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let manifold = adc::Channel::new_pin(p.PIN_26, Pull::None);
    let oil = adc::Channel::new_pin(p.PIN_28, Pull::None);
    let encoder_a = Input::new(p.PIN_0, Pull::Up);
    let encoder_b = Input::new(p.PIN_1, Pull::Up);
    let board = Board::new(adc, manifold, oil, encoder_a, encoder_b);

    let config = DashboardConfig::default();
    let scene = Scene::new(GAUGE_PALETTE, BACKGROUND);
    let mut dashboard = unwrap!(Dashboard::new(&config, scene, board, MonotonicClock));

    loop {
        dashboard.tick();
        if dashboard.surface().is_dirty() && dashboard.surface_mut().flush(&mut display).is_err() {
            // Partially drawn frame: start from a blank screen on the next flush
            warn!("Display flush failed");
            if display.clear(BACKGROUND).is_ok() {
                dashboard.surface_mut().invalidate();
            }
        }
        Timer::after_millis(1).await;
    }
}
