// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw register values and decoded domain values.

use std::fmt;
use std::net::Ipv4Addr;

use chrono::{DateTime, Local};

/// A value as read from or written to the device's register interface.
///
/// Almost every register holds a single integer. Version registers span a
/// short run of registers holding character codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    /// A single register value.
    Integer(i64),
    /// A run of register values, e.g. character codes.
    Sequence(Vec<i64>),
}

impl RawValue {
    /// Returns the single register value, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the register run, if this is one.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[i64]> {
        match self {
            Self::Integer(_) => None,
            Self::Sequence(v) => Some(v),
        }
    }

    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Sequence(_) => "sequence",
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Vec<i64>> for RawValue {
    fn from(value: Vec<i64>) -> Self {
        Self::Sequence(value)
    }
}

impl From<&[i64]> for RawValue {
    fn from(value: &[i64]) -> Self {
        Self::Sequence(value.to_vec())
    }
}

/// A decoded, domain-meaningful register value.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::Value;
///
/// let temp = Value::from(20.5);
/// assert_eq!(temp.as_f64(), Some(20.5));
/// assert_eq!(temp.to_string(), "20.5");
///
/// let mode = Value::from("heating");
/// assert_eq!(mode.as_str(), Some("heating"));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// An unscaled integer (durations, counts, error codes, ...).
    Integer(i64),
    /// A scaled physical quantity.
    Number(f64),
    /// A flag.
    Bool(bool),
    /// An enumeration label or version string.
    Text(String),
    /// An IPv4 address.
    Address(Ipv4Addr),
    /// A point in time in the host's local zone.
    Timestamp(DateTime<Local>),
}

impl Value {
    /// Returns the value as a float if it is numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is an unscaled integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the flag, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is a label or version string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the address, if this is one.
    #[must_use]
    pub const fn as_address(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Address(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is one.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<&DateTime<Local>> {
        match self {
            Self::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Address(_) => "address",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Address(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Ipv4Addr> for Value {
    fn from(value: Ipv4Addr) -> Self {
        Self::Address(value)
    }
}

impl From<DateTime<Local>> for Value {
    fn from(value: DateTime<Local>) -> Self {
        Self::Timestamp(value)
    }
}
