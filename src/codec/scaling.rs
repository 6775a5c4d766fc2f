// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-point codec for scaled physical quantities.
//!
//! Temperatures, percentages, pressures, energies, voltages and operating
//! hours only differ by their [`Scale`]: the register holds the quantity
//! multiplied by the scale's divisor.
//!
//! Encoding truncates toward zero, matching the controller firmware. A
//! product that lies within a few ULPs of an integer is first snapped to it,
//! so binary floating-point error never costs one step of resolution and
//! `encode(decode(raw)) == raw` holds for every raw value.

use crate::types::{Scale, Unit};

/// Distance to an integer, in ULPs of the scaled product, below which
/// encoding snaps instead of truncating.
const SNAP_ULPS: f64 = 4.0;

/// Fixed-point codec driven by a [`Scale`] descriptor.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Scaling;
/// use luxtronik_codec::types::Scale;
///
/// let celsius = Scaling::new(Scale::CELSIUS);
/// assert_eq!(celsius.decode(205), 20.5);
/// assert_eq!(celsius.encode(20.5), 205);
///
/// // Truncated, not rounded.
/// assert_eq!(celsius.encode(20.59), 205);
/// assert_eq!(celsius.encode(-20.59), -205);
///
/// // 2.05 * 100 is 204.99999999999997 in binary floating point.
/// let bar = Scaling::new(Scale::PRESSURE);
/// assert_eq!(bar.encode(2.05), 205);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scaling {
    scale: Scale,
}

impl Scaling {
    /// Creates a scaling codec.
    #[must_use]
    pub const fn new(scale: Scale) -> Self {
        Self { scale }
    }

    /// Returns the scale descriptor.
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns the display unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.scale.unit()
    }

    /// Decodes a raw value into the physical quantity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn decode(&self, raw: i64) -> f64 {
        raw as f64 / f64::from(self.scale.divisor())
    }

    /// Encodes a physical quantity, truncating toward zero.
    ///
    /// Products within a few ULPs of an integer encode as that
    /// integer. No bounds checking is performed; values beyond the `i64`
    /// range saturate and `NaN` encodes as `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&self, value: f64) -> i64 {
        let scaled = value * f64::from(self.scale.divisor());
        let nearest = scaled.round();
        let tolerance = SNAP_ULPS * f64::EPSILON * scaled.abs().max(1.0);
        if (scaled - nearest).abs() <= tolerance {
            nearest as i64
        } else {
            scaled.trunc() as i64
        }
    }
}
