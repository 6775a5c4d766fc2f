// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity codec for unscaled registers.

use crate::types::Unit;

/// Identity mapping between raw and domain integers.
///
/// Used for durations in seconds, pulse counts, speeds, flow rates, levels,
/// counters, error codes, icons and registers whose meaning is unknown.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Passthrough;
/// use luxtronik_codec::types::Unit;
///
/// let seconds = Passthrough::with_unit(Unit::Second);
/// assert_eq!(seconds.decode(3600), 3600);
/// assert_eq!(seconds.encode(60), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Passthrough {
    unit: Option<Unit>,
}

impl Passthrough {
    /// Creates a dimensionless passthrough codec.
    #[must_use]
    pub const fn new() -> Self {
        Self { unit: None }
    }

    /// Creates a passthrough codec carrying a display unit.
    #[must_use]
    pub const fn with_unit(unit: Unit) -> Self {
        Self { unit: Some(unit) }
    }

    /// Returns the display unit, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// Decodes a raw value.
    #[must_use]
    pub const fn decode(&self, raw: i64) -> i64 {
        raw
    }

    /// Encodes a domain value.
    #[must_use]
    pub const fn encode(&self, value: i64) -> i64 {
        value
    }
}
