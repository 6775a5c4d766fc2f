// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flag codec.

/// Maps zero to `false` and any other raw value to `true`.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Boolean;
///
/// assert!(!Boolean.decode(0));
/// assert!(Boolean.decode(5));
/// assert_eq!(Boolean.encode(true), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boolean;

impl Boolean {
    /// Decodes a raw value.
    #[must_use]
    pub const fn decode(&self, raw: i64) -> bool {
        raw != 0
    }

    /// Encodes a flag as `1` or `0`.
    #[must_use]
    pub const fn encode(&self, value: bool) -> i64 {
        if value { 1 } else { 0 }
    }
}
