//! Sensor inputs and signal conditioning.
//!
//! - `thermistor`: raw ADC reading to temperature (Steinhart-Hart or lookup table)
//! - `damper`: moving-average smoothing
//! - `boost`: ambient offset calibration, MDP conversion and the demo sweep
//! - `encoder`: polled quadrature decoding for the rotary encoder
//!
//! The scheduler reaches hardware only through [`SensorBus`] and [`Clock`], so
//! the whole update path runs on the host with fakes.

pub mod boost;
pub mod damper;
pub mod encoder;
pub mod thermistor;

pub use boost::{BoostCalibration, BoostOffset, DemoSweep};
pub use damper::MovingAverage;
pub use encoder::QuadratureDecoder;
pub use thermistor::{
    LookupTable,
    SteinhartHart,
    TemperatureUnit,
    Thermistor,
    ThermistorKind,
    raw_to_fahrenheit,
};

/// Analog input channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Manifold absolute pressure sensor.
    Manifold,
    /// Oil temperature sender.
    OilTemperature,
}

/// Source of raw sensor readings.
pub trait SensorBus {
    /// Latest reading scaled to 16 bits (`0..=65535`).
    fn read_analog(
        &mut self,
        channel: Channel,
    ) -> u16;

    /// Encoder detents since the previous call (positive = clockwise).
    fn read_encoder_delta(&mut self) -> i32;
}

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait Clock {
    fn now_millis(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_millis(&self) -> u32 { (**self).now_millis() }
}
