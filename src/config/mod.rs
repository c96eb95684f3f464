//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed gauge geometry
//! - `sensors`: Sensor ranges, scaling and update cadences
//! - `gauge`: Typed per-gauge configuration with validation
//! - `dashboard`: Run-time choices (thermistor strategy, units, sample source)

pub mod dashboard;
pub mod gauge;
pub mod layout;
pub mod sensors;

pub use dashboard::{DashboardConfig, SampleSource};
pub use gauge::{GaugeConfig, ReadoutLayout, SecondaryBar};
// Re-export layout constants at config level for convenience
pub use layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
// Re-export sensor constants at config level for convenience
pub use sensors::{
    BOOST_INTERVAL_MS,
    MAX_BOOST,
    MAX_VACUUM,
    SAMPLE_SIZE,
    TEMPERATURE_INTERVAL_MS,
};
