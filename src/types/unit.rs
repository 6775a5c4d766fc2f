// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display units and fixed-point scale descriptors.

use std::fmt;

/// Display unit attached to a codec.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::types::Unit;
///
/// assert_eq!(Unit::Celsius.symbol(), "°C");
/// assert_eq!(Unit::LitrePerHour.to_string(), "l/h");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Degrees Celsius.
    Celsius,
    /// Kelvin, used for temperature differences.
    Kelvin,
    /// Percent.
    Percent,
    /// Bar.
    Bar,
    /// Kilowatt hours.
    KilowattHour,
    /// Volts.
    Volt,
    /// Hours.
    Hour,
    /// Seconds.
    Second,
    /// Revolutions per minute.
    Rpm,
    /// Litres per hour.
    LitrePerHour,
}

impl Unit {
    /// Returns the display symbol of the unit.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Kelvin => "K",
            Self::Percent => "%",
            Self::Bar => "bar",
            Self::KilowattHour => "kWh",
            Self::Volt => "V",
            Self::Hour => "h",
            Self::Second => "s",
            Self::Rpm => "rpm",
            Self::LitrePerHour => "l/h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fixed-point resolution of a scaled register.
///
/// A raw register value `r` represents the physical quantity `r / divisor`
/// in [`unit`](Self::unit). The device uses tenths for most quantities and
/// hundredths for pressure.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::types::{Scale, Unit};
///
/// assert_eq!(Scale::CELSIUS.divisor(), 10);
/// assert_eq!(Scale::PRESSURE.unit(), Unit::Bar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    divisor: u32,
    unit: Unit,
}

impl Scale {
    /// Temperature in tenths of a degree Celsius.
    pub const CELSIUS: Self = Self::new(10, Unit::Celsius);

    /// Temperature difference in tenths of a Kelvin.
    pub const KELVIN: Self = Self::new(10, Unit::Kelvin);

    /// Percentage in tenths of a percent.
    pub const PERCENT: Self = Self::new(10, Unit::Percent);

    /// Pressure in hundredths of a bar.
    pub const PRESSURE: Self = Self::new(100, Unit::Bar);

    /// Energy in tenths of a kilowatt hour.
    pub const ENERGY: Self = Self::new(10, Unit::KilowattHour);

    /// Voltage in tenths of a volt.
    pub const VOLTAGE: Self = Self::new(10, Unit::Volt);

    /// Elapsed time in tenths of an hour.
    pub const HOURS: Self = Self::new(10, Unit::Hour);

    /// Creates a scale descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. In a `const` or `static` initializer
    /// this is a compile-time error.
    #[must_use]
    pub const fn new(divisor: u32, unit: Unit) -> Self {
        assert!(divisor != 0, "scale divisor must be non-zero");
        Self { divisor, unit }
    }

    /// Returns the divisor.
    #[must_use]
    pub const fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Returns the unit of the scaled quantity.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_symbols() {
        assert_eq!(Unit::Kelvin.symbol(), "K");
        assert_eq!(Unit::KilowattHour.symbol(), "kWh");
        assert_eq!(Unit::Rpm.to_string(), "rpm");
    }

    #[test]
    fn scale_presets() {
        assert_eq!(Scale::PRESSURE.divisor(), 100);
        for scale in [
            Scale::CELSIUS,
            Scale::KELVIN,
            Scale::PERCENT,
            Scale::ENERGY,
            Scale::VOLTAGE,
            Scale::HOURS,
        ] {
            assert_eq!(scale.divisor(), 10);
        }
    }

    #[test]
    #[should_panic(expected = "scale divisor must be non-zero")]
    fn zero_divisor_is_rejected() {
        let _ = Scale::new(0, Unit::Volt);
    }

    #[test]
    fn unit_divisor_is_unscaled() {
        assert_eq!(Scale::new(1, Unit::Volt).divisor(), 1);
    }
}
