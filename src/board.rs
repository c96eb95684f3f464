//! RP2350 bindings for the dashboard's sensor and clock interfaces.

use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use gauge_cluster::sensors::{Channel, Clock, QuadratureDecoder, SensorBus};

/// Analog inputs and the rotary encoder.
pub struct Board<'d> {
    adc: Adc<'d, adc::Blocking>,
    manifold: adc::Channel<'d>,
    oil: adc::Channel<'d>,
    encoder_a: Input<'d>,
    encoder_b: Input<'d>,
    decoder: QuadratureDecoder,
}

impl<'d> Board<'d> {
    pub fn new(
        adc: Adc<'d, adc::Blocking>,
        manifold: adc::Channel<'d>,
        oil: adc::Channel<'d>,
        encoder_a: Input<'d>,
        encoder_b: Input<'d>,
    ) -> Self {
        let decoder = QuadratureDecoder::new(encoder_a.is_high(), encoder_b.is_high());
        Self {
            adc,
            manifold,
            oil,
            encoder_a,
            encoder_b,
            decoder,
        }
    }
}

impl SensorBus for Board<'_> {
    fn read_analog(
        &mut self,
        channel: Channel,
    ) -> u16 {
        let pin = match channel {
            Channel::Manifold => &mut self.manifold,
            Channel::OilTemperature => &mut self.oil,
        };
        match self.adc.blocking_read(pin) {
            // 12-bit conversion scaled to the 16-bit range
            Ok(raw) => raw << 4,
            Err(e) => {
                defmt::warn!("ADC read on {} failed: {}", channel, e);
                0
            }
        }
    }

    fn read_encoder_delta(&mut self) -> i32 { self.decoder.update(self.encoder_a.is_high(), self.encoder_b.is_high()) }
}

/// Milliseconds since boot from the embassy time driver.
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u32 { Instant::now().as_millis() as u32 }
}
