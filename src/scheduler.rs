//! Cooperative update loop.
//!
//! [`Dashboard`] owns both gauges, the drawing surface and the sensor inputs.
//! The firmware calls [`Dashboard::tick`] as fast as it can; each gauge
//! updates only when its own [`Cadence`] has elapsed.
//!
//! # Tick order
//!
//! 1. Poll the encoder and fold its direction into the manual counter.
//! 2. Pressure cadence due: sample, convert, update the pressure gauge.
//! 3. Temperature cadence due: sample, convert, damp, update the temperature gauge.
//! 4. Read the clock as the baseline for the next tick and check for rollover.
//!
//! # Clock Rollover
//!
//! The millisecond clock wraps at `u32::MAX`. After a wrap every "last run"
//! timestamp is ahead of the clock and no cadence would ever be due again.
//! When that is detected the cadences restart from zero and the baseline is
//! set to [`ROLLOVER_BASELINE_MS`] instead of computing an elapsed time across
//! the wrap. The pressure gauge is due again on the next tick.

use crate::Result;
use crate::config::{DashboardConfig, SAMPLE_SIZE, SampleSource};
use crate::gauge::{Gauge, PressureGauge, TemperatureGauge};
use crate::sensors::{
    BoostCalibration,
    Channel,
    Clock,
    DemoSweep,
    MovingAverage,
    SensorBus,
    TemperatureUnit,
    Thermistor,
    ThermistorKind,
};
use crate::surface::GaugeSurface;

/// Tick baseline at startup and after a clock rollover.
pub const ROLLOVER_BASELINE_MS: u32 = 101;

/// Minimum interval between runs of one periodic task.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cadence {
    interval_ms: u32,
    last_run_ms: u32,
}

impl Cadence {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_run_ms: 0,
        }
    }

    /// True once `interval_ms` has passed since the last run.
    #[inline]
    pub const fn is_due(
        &self,
        now_ms: u32,
    ) -> bool {
        now_ms.saturating_sub(self.last_run_ms) >= self.interval_ms
    }

    #[inline]
    pub fn mark(
        &mut self,
        now_ms: u32,
    ) {
        self.last_run_ms = now_ms;
    }

    /// Last run is later than `now_ms`: the clock has wrapped.
    #[inline]
    pub const fn is_ahead_of(
        &self,
        now_ms: u32,
    ) -> bool {
        self.last_run_ms > now_ms
    }

    #[inline]
    pub fn reset(&mut self) { self.last_run_ms = 0; }

    #[inline]
    pub const fn interval_ms(&self) -> u32 { self.interval_ms }

    #[inline]
    pub const fn last_run_ms(&self) -> u32 { self.last_run_ms }
}

/// What one call to [`Dashboard::tick`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub boost_updated: bool,
    pub temperature_updated: bool,
    pub rolled_over: bool,
}

/// Both gauges plus everything needed to feed them.
pub struct Dashboard<S, B, C> {
    surface: S,
    bus: B,
    clock: C,
    pressure: PressureGauge,
    temperature: TemperatureGauge,
    calibration: BoostCalibration,
    thermistor: ThermistorKind,
    unit: TemperatureUnit,
    damper: MovingAverage<SAMPLE_SIZE>,
    /// Damper holds samples from the current connection of the sender.
    damper_primed: bool,
    source: SampleSource,
    demo: DemoSweep,
    boost_cadence: Cadence,
    temperature_cadence: Cadence,
    last_tick_ms: u32,
    encoder_count: i32,
}

impl<S, B, C> Dashboard<S, B, C>
where
    S: GaugeSurface,
    B: SensorBus,
    C: Clock,
{
    /// Validate `config`, calibrate the boost offset and build both gauges.
    ///
    /// Live sources take one reading per sensor for the initial gauge state;
    /// with [`BoostOffset::Calibrate`](crate::sensors::BoostOffset::Calibrate)
    /// the manifold is also sampled for the ambient offset first, so this
    /// should run before the engine starts.
    pub fn new(
        config: &DashboardConfig,
        mut surface: S,
        mut bus: B,
        clock: C,
    ) -> Result<Self> {
        config.validate()?;

        let (calibration, initial_boost, initial_temperature) = match config.source {
            SampleSource::Live => {
                let calibration =
                    BoostCalibration::from_offset(config.boost_offset, || bus.read_analog(Channel::Manifold));
                let boost = calibration.mdp(bus.read_analog(Channel::Manifold));
                let temperature = config
                    .thermistor
                    .temperature(bus.read_analog(Channel::OilTemperature), config.unit);
                (calibration, boost, temperature)
            }
            SampleSource::Demo => (BoostCalibration::default(), 0.0, None),
        };

        let pressure = PressureGauge::new(&mut surface, &config.boost, initial_boost)?;
        let temperature = TemperatureGauge::new(&mut surface, &config.temperature, initial_temperature)?;

        log_info!(
            "dashboard ready: boost every {} ms, temperature every {} ms",
            config.boost_interval_ms,
            config.temperature_interval_ms
        );

        Ok(Self {
            surface,
            bus,
            clock,
            pressure,
            temperature,
            calibration,
            thermistor: config.thermistor,
            unit: config.unit,
            damper: MovingAverage::new(initial_temperature.map_or(0, |t| t as i32)),
            damper_primed: initial_temperature.is_some(),
            source: config.source,
            demo: DemoSweep::new(),
            boost_cadence: Cadence::new(config.boost_interval_ms),
            temperature_cadence: Cadence::new(config.temperature_interval_ms),
            last_tick_ms: ROLLOVER_BASELINE_MS,
            encoder_count: 0,
        })
    }

    /// Run one iteration of the update loop. Never blocks.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        let delta = self.bus.read_encoder_delta();
        self.encoder_count += delta.signum();

        if self.boost_cadence.is_due(self.last_tick_ms) {
            let value = self.sample_boost();
            self.pressure.update(&mut self.surface, value);
            self.boost_cadence.mark(self.clock.now_millis());
            report.boost_updated = true;
        }

        if self.temperature_cadence.is_due(self.last_tick_ms) {
            let reading = self.sample_temperature();
            self.temperature.apply(&mut self.surface, reading);
            self.temperature_cadence.mark(self.clock.now_millis());
            report.temperature_updated = true;
        }

        self.last_tick_ms = self.clock.now_millis();
        if self.boost_cadence.is_ahead_of(self.last_tick_ms) || self.temperature_cadence.is_ahead_of(self.last_tick_ms) {
            log_warn!("clock rollover at {} ms, restarting cadences", self.last_tick_ms);
            self.boost_cadence.reset();
            self.temperature_cadence.reset();
            self.last_tick_ms = ROLLOVER_BASELINE_MS;
            report.rolled_over = true;
        }

        report
    }

    fn sample_boost(&mut self) -> f32 {
        match self.source {
            SampleSource::Live => self.calibration.mdp(self.bus.read_analog(Channel::Manifold)),
            SampleSource::Demo => self.demo.next_boost(),
        }
    }

    /// Damped reading, `None` while the sender is disconnected.
    ///
    /// The first reading after a disconnect refills the damper so stale
    /// samples from before the gap are not averaged in.
    fn sample_temperature(&mut self) -> Option<f32> {
        match self.source {
            SampleSource::Live => {
                let raw = self.bus.read_analog(Channel::OilTemperature);
                let Some(reading) = self.thermistor.temperature(raw, self.unit) else {
                    self.damper_primed = false;
                    return None;
                };
                if self.damper_primed {
                    self.damper.push(reading as i32);
                } else {
                    self.damper.reset(reading as i32);
                    self.damper_primed = true;
                }
                Some(self.damper.average() as i32 as f32)
            }
            SampleSource::Demo => Some(self.demo.next_temperature(self.encoder_count)),
        }
    }

    #[inline]
    pub const fn surface(&self) -> &S { &self.surface }

    /// Surface access for flushing to the display between ticks.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B { &mut self.bus }

    #[inline]
    pub const fn pressure(&self) -> &PressureGauge { &self.pressure }

    #[inline]
    pub const fn temperature(&self) -> &TemperatureGauge { &self.temperature }

    #[inline]
    pub const fn calibration(&self) -> &BoostCalibration { &self.calibration }

    /// Net encoder detent directions seen so far.
    #[inline]
    pub const fn encoder_count(&self) -> i32 { self.encoder_count }

    /// Clock reading the next tick measures elapsed time against.
    #[inline]
    pub const fn last_tick_ms(&self) -> u32 { self.last_tick_ms }

    #[inline]
    pub const fn boost_cadence(&self) -> &Cadence { &self.boost_cadence }

    #[inline]
    pub const fn temperature_cadence(&self) -> &Cadence { &self.temperature_cadence }
}
