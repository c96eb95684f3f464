//! Gauge cluster library - testable modules for the boost and oil temperature gauges.
//!
//! This library contains the gauge engine that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the RP2350-specific code.
//!
//! # Layout
//!
//! - [`gauge`]: segmented arc bars, the dual-zone pressure gauge and the temperature gauge
//! - [`sensors`]: thermistor conversion, moving-average damping, boost calibration, encoder decoding
//! - [`scheduler`]: the cooperative update loop driving both gauges at their own cadence
//! - [`surface`] / [`scene`]: the drawing interface the gauges write to, and its
//!   `embedded-graphics` implementation
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Log macros must be defined before the modules that use them
#[macro_use]
mod log;

pub mod config;
pub mod error;
pub mod gauge;
pub mod scene;
pub mod scheduler;
pub mod sensors;
pub mod surface;
pub mod ui;

pub use error::{Error, Result};
pub use gauge::{Gauge, PressureGauge, SegmentedArc, TemperatureGauge};
pub use scene::Scene;
pub use scheduler::{Dashboard, TickReport};
pub use surface::GaugeSurface;
