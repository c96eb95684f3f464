//! Whole-dashboard configuration.

use super::gauge::GaugeConfig;
use super::sensors::{BOOST_FIXED_OFFSET, BOOST_INTERVAL_MS, TEMPERATURE_INTERVAL_MS};
use crate::sensors::{BoostOffset, TemperatureUnit, ThermistorKind};
use crate::{Error, Result};

/// Where gauge values come from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleSource {
    /// Read the sensors.
    #[default]
    Live,
    /// Sweep both gauges with synthetic values (bench testing).
    Demo,
}

/// Everything the scheduler needs to build and run both gauges.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DashboardConfig {
    pub boost: GaugeConfig,
    pub temperature: GaugeConfig,
    pub thermistor: ThermistorKind,
    pub unit: TemperatureUnit,
    pub boost_offset: BoostOffset,
    pub source: SampleSource,
    pub boost_interval_ms: u32,
    pub temperature_interval_ms: u32,
}

impl DashboardConfig {
    /// Default layout with the temperature gauge in `unit`.
    pub fn with_unit(unit: TemperatureUnit) -> Self {
        Self {
            temperature: GaugeConfig::oil_temperature(unit),
            unit,
            ..Self::default()
        }
    }

    /// Bench configuration: synthetic sweeps, no calibration.
    pub fn demo() -> Self {
        Self {
            source: SampleSource::Demo,
            boost_offset: BoostOffset::Fixed(BOOST_FIXED_OFFSET),
            ..Self::default()
        }
    }

    /// Check both gauges, the cadences, and that the temperature gauge is
    /// scaled for `unit`.
    pub fn validate(&self) -> Result<()> {
        self.boost.validate()?;
        self.temperature.validate()?;
        if self.boost.secondary.is_none() {
            return Err(Error::MissingSecondary);
        }
        let expected = GaugeConfig::oil_temperature(self.unit);
        if self.temperature.min_value != expected.min_value || self.temperature.max_value != expected.max_value {
            return Err(Error::TemperatureRangeMismatch);
        }
        if self.boost_interval_ms == 0 || self.temperature_interval_ms == 0 {
            return Err(Error::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            boost: GaugeConfig::boost(),
            temperature: GaugeConfig::oil_temperature(TemperatureUnit::Fahrenheit),
            thermistor: ThermistorKind::default(),
            unit: TemperatureUnit::Fahrenheit,
            boost_offset: BoostOffset::default(),
            source: SampleSource::Live,
            boost_interval_ms: BOOST_INTERVAL_MS,
            temperature_interval_ms: TEMPERATURE_INTERVAL_MS,
        }
    }
}
