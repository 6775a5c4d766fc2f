// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-register observed values.

use std::collections::BTreeMap;

use crate::codec::Codec;
use crate::error::Result;
use crate::types::{RawValue, Value};

use super::Observation;

/// Last decoded value of each register, keyed by register index.
///
/// The store is owned by whoever polls the device. It has no interior
/// locking: wrap it in the lock of your choice if several tasks update it.
///
/// A register that was polled but whose raw value did not resolve (an
/// unknown enumeration code) is tracked as observed with no value.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::{Codec, RawValue, Value};
/// use luxtronik_codec::state::ObservedValues;
///
/// let flow = Codec::celsius("ID_WEB_Temperatur_TVL");
/// let mut values = ObservedValues::new();
///
/// let change = values.record(10, &flow, &RawValue::from(205_i64)).unwrap();
/// assert!(change.is_some());
/// assert_eq!(values.get(10), Some(&Value::Number(20.5)));
///
/// // Same value again: nothing changed.
/// let change = values.record(10, &flow, &RawValue::from(205_i64)).unwrap();
/// assert!(change.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservedValues {
    values: BTreeMap<usize, Option<Value>>,
}

impl ObservedValues {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `raw` through `codec` and stores the result for `index`.
    ///
    /// Returns the change, or `None` if the stored value is unchanged.
    ///
    /// # Errors
    ///
    /// Returns any decode error of `codec`; the stored value is left as is.
    pub fn record(
        &mut self,
        index: usize,
        codec: &Codec,
        raw: &RawValue,
    ) -> Result<Option<Observation>> {
        let value = codec.decode(raw)?;
        Ok(self.apply(index, value))
    }

    /// Stores an already decoded value for `index`.
    ///
    /// Returns the change, or `None` if the stored value is unchanged.
    pub fn apply(&mut self, index: usize, value: Option<Value>) -> Option<Observation> {
        if self.values.get(&index) == Some(&value) {
            return None;
        }
        let previous = self.values.insert(index, value.clone()).flatten();
        tracing::trace!(index, previous = ?previous, current = ?value, "Observed value changed");
        Some(Observation::new(index, previous, value))
    }

    /// Returns the last resolved value of `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(&index).and_then(Option::as_ref)
    }

    /// Returns `true` if `index` has been observed, resolved or not.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.values.contains_key(&index)
    }

    /// Forgets the observed value of `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.values.remove(&index).flatten()
    }

    /// Forgets all observed values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns the number of observed registers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no register has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over observed registers in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&Value>)> {
        self.values.iter().map(|(index, value)| (*index, value.as_ref()))
    }
}
