// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Epoch timestamp codec.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::ValueError;

/// Codec between epoch seconds and a local calendar timestamp.
///
/// Decoding converts into the host's local zone; encoding accepts a
/// timestamp in any zone and drops sub-second precision.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Timestamp;
///
/// let dt = Timestamp.decode(1_705_318_200).unwrap();
/// assert_eq!(Timestamp.encode(&dt), 1_705_318_200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp;

impl Timestamp {
    /// Decodes epoch seconds into a local timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if `raw` is outside the range of
    /// representable dates.
    pub fn decode(&self, raw: i64) -> Result<DateTime<Local>, ValueError> {
        DateTime::from_timestamp(raw, 0)
            .map(|dt| dt.with_timezone(&Local))
            .ok_or_else(|| ValueError::OutOfRange {
                min: DateTime::<Utc>::MIN_UTC.timestamp(),
                max: DateTime::<Utc>::MAX_UTC.timestamp(),
                actual: raw,
            })
    }

    /// Encodes a timestamp as epoch seconds.
    #[must_use]
    pub fn encode<Tz: TimeZone>(&self, value: &DateTime<Tz>) -> i64 {
        value.timestamp()
    }
}
