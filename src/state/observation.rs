// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change of a register's observed value.

use crate::types::Value;

/// A change in the observed value of one register.
///
/// `None` on either side means the register was not observed yet, or its
/// last raw value did not resolve to a domain value.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::Value;
/// use luxtronik_codec::state::Observation;
///
/// let obs = Observation::new(10, None, Some(Value::Number(20.5)));
/// assert!(obs.is_first_resolution());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Observation {
    /// The register index.
    pub index: usize,
    /// Value before the update.
    pub previous: Option<Value>,
    /// Value after the update.
    pub current: Option<Value>,
}

impl Observation {
    /// Creates an observation.
    #[must_use]
    pub const fn new(index: usize, previous: Option<Value>, current: Option<Value>) -> Self {
        Self {
            index,
            previous,
            current,
        }
    }

    /// Returns `true` if the register resolved to a value for the first time
    /// since it was last unresolved or unknown.
    #[must_use]
    pub const fn is_first_resolution(&self) -> bool {
        self.previous.is_none() && self.current.is_some()
    }

    /// Returns `true` if the register no longer resolves to a value.
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.previous.is_some() && self.current.is_none()
    }
}
