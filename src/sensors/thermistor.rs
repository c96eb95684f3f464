//! Thermistor conversion: raw 16-bit ADC reading to temperature.
//!
//! The sender is an NTC thermistor in a divider with a 10 kΩ reference
//! resistor. Two interchangeable strategies implement [`Thermistor`]:
//!
//! - [`SteinhartHart`]: closed-form physical model, accurate across the range
//!   but needs a logarithm per sample.
//! - [`LookupTable`]: nearest calibration breakpoint, integer-only.
//!
//! Both return `None` for readings they cannot convert (open or shorted sender
//! for the model, a reading below the table for the lookup).

/// Unit of the converted temperature.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    #[inline]
    pub fn from_celsius(
        self,
        celsius: f64,
    ) -> f64 {
        match self {
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Celsius => celsius,
        }
    }
}

/// Raw ADC reading to temperature.
pub trait Thermistor {
    /// Temperature in `unit`, `None` when `raw` cannot be converted.
    fn temperature(
        &self,
        raw: u16,
        unit: TemperatureUnit,
    ) -> Option<f32>;
}

// =============================================================================
// Steinhart-Hart
// =============================================================================

/// Full-scale ADC reading.
const ADC_FULL_SCALE: f64 = 65535.0;

const KELVIN_OFFSET: f64 = 273.15;

/// Steinhart-Hart model `1/T = A + B·ln R + C·(ln R)³`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SteinhartHart {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Divider reference resistor in ohms.
    pub reference_ohms: f64,
}

impl SteinhartHart {
    /// Coefficients for the oil temperature sender.
    pub const OIL_SENDER: Self = Self {
        a: 9.086_268_490e-4,
        b: 2.045_041_393e-4,
        c: 1.912_131_738e-7,
        reference_ohms: 10_000.0,
    };

    /// Thermistor resistance for a raw reading, `None` at either rail.
    pub fn resistance(
        &self,
        raw: u16,
    ) -> Option<f64> {
        if raw == 0 {
            return None;
        }
        let ohms = self.reference_ohms * (ADC_FULL_SCALE / f64::from(raw) - 1.0);
        (ohms > 0.0).then_some(ohms)
    }

    /// Absolute temperature for a raw reading.
    pub fn kelvin(
        &self,
        raw: u16,
    ) -> Option<f64> {
        let ln_r = libm::log(self.resistance(raw)?);
        let inverse = self.a + self.b * ln_r + self.c * ln_r * ln_r * ln_r;
        let kelvin = 1.0 / inverse;
        kelvin.is_finite().then_some(kelvin)
    }
}

impl Default for SteinhartHart {
    fn default() -> Self { Self::OIL_SENDER }
}

impl Thermistor for SteinhartHart {
    fn temperature(
        &self,
        raw: u16,
        unit: TemperatureUnit,
    ) -> Option<f32> {
        self.kelvin(raw)
            .map(|kelvin| unit.from_celsius(kelvin - KELVIN_OFFSET) as f32)
    }
}

/// Oil sender reading in °F, `0.0` for `raw == 0` or `raw == 65535`.
pub fn raw_to_fahrenheit(raw: u16) -> f32 {
    SteinhartHart::OIL_SENDER
        .temperature(raw, TemperatureUnit::Fahrenheit)
        .unwrap_or(0.0)
}

// =============================================================================
// Lookup Table
// =============================================================================

/// One calibration point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Breakpoint {
    pub raw: u16,
    pub celsius: i16,
    pub fahrenheit: i16,
}

impl Breakpoint {
    const fn new(
        raw: u16,
        celsius: i16,
        fahrenheit: i16,
    ) -> Self {
        Self { raw, celsius, fahrenheit }
    }

    #[inline]
    pub fn in_unit(
        &self,
        unit: TemperatureUnit,
    ) -> i16 {
        match unit {
            TemperatureUnit::Fahrenheit => self.fahrenheit,
            TemperatureUnit::Celsius => self.celsius,
        }
    }

    /// Bucket key: the leading two decimal digits of a five-digit reading.
    #[inline]
    const fn bucket(raw: u16) -> u16 { raw / 1000 }
}

/// Oil sender calibration, 150 °F to 300 °F, sorted by raw reading.
pub const OIL_SENDER_TABLE: [Breakpoint; 51] = [
    Breakpoint::new(32050, 66, 150),
    Breakpoint::new(33000, 67, 153),
    Breakpoint::new(33950, 69, 156),
    Breakpoint::new(34850, 71, 159),
    Breakpoint::new(35750, 72, 162),
    Breakpoint::new(36650, 74, 165),
    Breakpoint::new(37550, 76, 168),
    Breakpoint::new(38400, 77, 171),
    Breakpoint::new(39250, 79, 174),
    Breakpoint::new(40100, 81, 177),
    Breakpoint::new(40950, 82, 180),
    Breakpoint::new(41750, 84, 183),
    Breakpoint::new(42550, 86, 186),
    Breakpoint::new(43300, 87, 189),
    Breakpoint::new(44050, 89, 192),
    Breakpoint::new(44800, 91, 195),
    Breakpoint::new(45525, 92, 198),
    Breakpoint::new(46225, 94, 201),
    Breakpoint::new(46900, 96, 204),
    Breakpoint::new(47550, 97, 207),
    Breakpoint::new(48200, 99, 210),
    Breakpoint::new(48825, 101, 213),
    Breakpoint::new(49425, 102, 216),
    Breakpoint::new(50000, 104, 219),
    Breakpoint::new(50575, 106, 222),
    Breakpoint::new(51125, 107, 225),
    Breakpoint::new(51650, 109, 228),
    Breakpoint::new(52175, 111, 231),
    Breakpoint::new(52650, 112, 234),
    Breakpoint::new(53150, 114, 237),
    Breakpoint::new(53600, 116, 240),
    Breakpoint::new(54050, 117, 243),
    Breakpoint::new(54475, 119, 246),
    Breakpoint::new(54875, 121, 249),
    Breakpoint::new(55275, 122, 252),
    Breakpoint::new(55650, 124, 255),
    Breakpoint::new(56025, 126, 258),
    Breakpoint::new(56375, 127, 261),
    Breakpoint::new(56725, 129, 264),
    Breakpoint::new(57050, 131, 267),
    Breakpoint::new(57360, 132, 270),
    Breakpoint::new(57675, 134, 273),
    Breakpoint::new(57950, 136, 276),
    Breakpoint::new(58230, 137, 279),
    Breakpoint::new(58500, 139, 282),
    Breakpoint::new(58760, 141, 285),
    Breakpoint::new(59020, 142, 288),
    Breakpoint::new(59250, 144, 291),
    Breakpoint::new(59480, 146, 294),
    Breakpoint::new(59700, 147, 297),
    Breakpoint::new(59920, 149, 300),
];

/// Nearest-breakpoint lookup within the reading's bucket.
///
/// Readings are grouped by their leading two digits. A reading is matched
/// against the breakpoints of its own bucket only; the nearest one wins and an
/// exact tie goes to the higher breakpoint (the hotter temperature).
///
/// - fewer than five digits, or a bucket below the table: no reading
/// - a bucket above the table: the hottest entry
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LookupTable {
    breakpoints: &'static [Breakpoint],
}

impl LookupTable {
    pub const OIL_SENDER: Self = Self::new(&OIL_SENDER_TABLE);

    /// `breakpoints` must be sorted by `raw`.
    pub const fn new(breakpoints: &'static [Breakpoint]) -> Self { Self { breakpoints } }

    /// Matching breakpoint for a raw reading.
    pub fn lookup(
        &self,
        raw: u16,
    ) -> Option<&'static Breakpoint> {
        let (first, last) = (self.breakpoints.first()?, self.breakpoints.last()?);
        if raw < 10_000 {
            return None;
        }

        let bucket = Breakpoint::bucket(raw);
        if bucket < Breakpoint::bucket(first.raw) {
            return None;
        }
        if bucket > Breakpoint::bucket(last.raw) {
            return Some(last);
        }

        self.breakpoints
            .iter()
            .filter(|bp| Breakpoint::bucket(bp.raw) == bucket)
            .fold(None, |best: Option<&'static Breakpoint>, bp| match best {
                Some(b) if b.raw.abs_diff(raw) < bp.raw.abs_diff(raw) => Some(b),
                _ => Some(bp),
            })
    }
}

impl Default for LookupTable {
    fn default() -> Self { Self::OIL_SENDER }
}

impl Thermistor for LookupTable {
    fn temperature(
        &self,
        raw: u16,
        unit: TemperatureUnit,
    ) -> Option<f32> {
        self.lookup(raw).map(|bp| f32::from(bp.in_unit(unit)))
    }
}

// =============================================================================
// Strategy Selection
// =============================================================================

/// Conversion strategy chosen by configuration.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ThermistorKind {
    #[default]
    SteinhartHart,
    Lookup,
}

impl Thermistor for ThermistorKind {
    fn temperature(
        &self,
        raw: u16,
        unit: TemperatureUnit,
    ) -> Option<f32> {
        match self {
            Self::SteinhartHart => SteinhartHart::OIL_SENDER.temperature(raw, unit),
            Self::Lookup => LookupTable::OIL_SENDER.temperature(raw, unit),
        }
    }
}
