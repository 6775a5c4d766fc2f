// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Codec definitions.
//!
//! Each register of the controller is described by an immutable [`Codec`]:
//! a stable name, a writeable flag and a [`CodecKind`] holding the typed
//! transform. The typed codecs ([`Scaling`], [`Ipv4`], [`Selection`], ...)
//! can be used directly when the value kind is known statically; [`Codec`]
//! dispatches over [`RawValue`] and [`Value`] for catalog-driven callers.
//!
//! # Results
//!
//! - `Ok(Some(_))` - the value was converted
//! - `Ok(None)` - an enumeration code or label is not in the table
//! - `Err(_)` - malformed input, unsupported operation or a value of the
//!   wrong kind
//!
//! # Examples
//!
//! ```
//! use luxtronik_codec::{Codec, RawValue, Value, tables};
//!
//! let flow = Codec::celsius("ID_WEB_Temperatur_TVL");
//! assert_eq!(flow.decode(&RawValue::from(205_i64)).unwrap(), Some(Value::Number(20.5)));
//!
//! let mode = Codec::selection("ID_Ba_Hz_akt", &tables::HEATING_MODE).writeable(true);
//! assert_eq!(mode.encode_for_write(&Value::from("Party")).unwrap(), 2);
//! assert_eq!(mode.decode(&RawValue::from(9_i64)).unwrap(), None);
//! ```

mod boolean;
mod ipv4;
mod passthrough;
mod scaling;
mod selection;
mod timestamp;
mod version;

use std::borrow::Cow;

pub use boolean::Boolean;
pub use ipv4::Ipv4;
pub use passthrough::Passthrough;
pub use scaling::Scaling;
pub use selection::{Selection, Table};
pub use timestamp::Timestamp;
pub use version::Version;

use crate::error::{Error, ParseError, Result, ValueError};
use crate::types::{RawValue, Scale, Unit, Value};

/// The transform behind a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Identity mapping.
    Passthrough(Passthrough),
    /// Zero / non-zero flag.
    Boolean(Boolean),
    /// Fixed-point quantity.
    Scaling(Scaling),
    /// IPv4 address.
    Ipv4(Ipv4),
    /// Epoch timestamp.
    Timestamp(Timestamp),
    /// NUL-padded version string; decode-only.
    Version(Version),
    /// Enumeration over a static table.
    Selection(Selection),
}

impl CodecKind {
    /// Returns `true` if values of this kind can be encoded.
    #[must_use]
    pub const fn supports_encode(&self) -> bool {
        !matches!(self, Self::Version(_))
    }

    /// Returns the display unit, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        match self {
            Self::Passthrough(c) => c.unit(),
            Self::Scaling(c) => Some(c.unit()),
            _ => None,
        }
    }
}

/// Immutable definition of one register's value codec.
///
/// Codecs are built once when the register catalog is assembled and shared
/// read-only afterwards. They hold no observed value; see
/// [`ObservedValues`](crate::state::ObservedValues) for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codec {
    name: Cow<'static, str>,
    writeable: bool,
    kind: CodecKind,
}

impl Codec {
    /// Creates a read-only codec of the given kind.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, kind: CodecKind) -> Self {
        Self {
            name: name.into(),
            writeable: false,
            kind,
        }
    }

    /// Sets whether values may be written through this codec.
    ///
    /// Decode-only kinds stay read-only regardless of `writeable`.
    #[must_use]
    pub fn writeable(mut self, writeable: bool) -> Self {
        if writeable && !self.kind.supports_encode() {
            tracing::warn!(codec = %self.name, "Ignoring writeable flag on decode-only codec");
        }
        self.writeable = writeable && self.kind.supports_encode();
        self
    }

    // ========== Scaled quantities ==========

    /// Creates a scaling codec with an arbitrary scale.
    #[must_use]
    pub fn scaled(name: impl Into<Cow<'static, str>>, scale: Scale) -> Self {
        Self::new(name, CodecKind::Scaling(Scaling::new(scale)))
    }

    /// Temperature in tenths of °C.
    #[must_use]
    pub fn celsius(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::CELSIUS)
    }

    /// Temperature difference in tenths of K.
    #[must_use]
    pub fn kelvin(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::KELVIN)
    }

    /// Percentage in tenths of %.
    #[must_use]
    pub fn percent(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::PERCENT)
    }

    /// Pressure in hundredths of bar.
    #[must_use]
    pub fn pressure(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::PRESSURE)
    }

    /// Energy in tenths of kWh.
    #[must_use]
    pub fn energy(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::ENERGY)
    }

    /// Voltage in tenths of V.
    #[must_use]
    pub fn voltage(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::VOLTAGE)
    }

    /// Operating hours in tenths of h.
    #[must_use]
    pub fn hours(name: impl Into<Cow<'static, str>>) -> Self {
        Self::scaled(name, Scale::HOURS)
    }

    // ========== Passthrough ==========

    fn passthrough(name: impl Into<Cow<'static, str>>, unit: Option<Unit>) -> Self {
        let codec = unit.map_or_else(Passthrough::new, Passthrough::with_unit);
        Self::new(name, CodecKind::Passthrough(codec))
    }

    /// Duration in seconds.
    #[must_use]
    pub fn seconds(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, Some(Unit::Second))
    }

    /// Rotational speed in rpm.
    #[must_use]
    pub fn speed(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, Some(Unit::Rpm))
    }

    /// Flow rate in l/h.
    #[must_use]
    pub fn flow(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, Some(Unit::LitrePerHour))
    }

    /// Pulse counter.
    #[must_use]
    pub fn pulses(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    /// Raw error code.
    #[must_use]
    pub fn error_code(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    /// Generic level.
    #[must_use]
    pub fn level(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    /// Generic counter.
    #[must_use]
    pub fn count(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    /// Display icon identifier.
    #[must_use]
    pub fn icon(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    /// Register of unknown meaning.
    #[must_use]
    pub fn unknown(name: impl Into<Cow<'static, str>>) -> Self {
        Self::passthrough(name, None)
    }

    // ========== Specialized ==========

    /// Zero / non-zero flag.
    #[must_use]
    pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, CodecKind::Boolean(Boolean))
    }

    /// IPv4 address.
    #[must_use]
    pub fn ip_address(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, CodecKind::Ipv4(Ipv4))
    }

    /// Epoch timestamp.
    #[must_use]
    pub fn timestamp(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, CodecKind::Timestamp(Timestamp))
    }

    /// Firmware version string. Always read-only.
    #[must_use]
    pub fn version(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, CodecKind::Version(Version))
    }

    /// Enumeration over `table`.
    #[must_use]
    pub fn selection(name: impl Into<Cow<'static, str>>, table: &'static Table) -> Self {
        Self::new(name, CodecKind::Selection(Selection::new(table)))
    }

    // ========== Accessors ==========

    /// Returns the register name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if values may be written through this codec.
    #[must_use]
    pub const fn is_writeable(&self) -> bool {
        self.writeable
    }

    /// Returns the transform.
    #[must_use]
    pub const fn kind(&self) -> &CodecKind {
        &self.kind
    }

    /// Returns `true` if [`encode`](Self::encode) can produce raw values.
    #[must_use]
    pub const fn supports_encode(&self) -> bool {
        self.kind.supports_encode()
    }

    /// Returns the display unit, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        self.kind.unit()
    }

    /// Returns the selectable labels in declared order for enumeration
    /// codecs, `None` otherwise.
    #[must_use]
    pub fn options(&self) -> Option<Vec<&'static str>> {
        match &self.kind {
            CodecKind::Selection(c) => Some(c.options()),
            _ => None,
        }
    }

    // ========== Conversion ==========

    /// Decodes a raw register value.
    ///
    /// Returns `Ok(None)` if an enumeration code is not in the table.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if `raw` is a sequence for a single-register
    ///   codec or vice versa
    /// - [`Error::Value`] if the raw value is outside the transform's domain
    pub fn decode(&self, raw: &RawValue) -> Result<Option<Value>> {
        let value = match &self.kind {
            CodecKind::Passthrough(c) => Value::Integer(c.decode(self.integer(raw)?)),
            CodecKind::Boolean(c) => Value::Bool(c.decode(self.integer(raw)?)),
            CodecKind::Scaling(c) => Value::Number(c.decode(self.integer(raw)?)),
            CodecKind::Ipv4(c) => Value::Address(c.decode(self.integer(raw)?)?),
            CodecKind::Timestamp(c) => Value::Timestamp(c.decode(self.integer(raw)?)?),
            CodecKind::Version(c) => {
                let codes = raw.as_sequence().ok_or_else(|| Error::TypeMismatch {
                    codec: self.name.to_string(),
                    expected: "sequence",
                    found: raw.kind_name(),
                })?;
                Value::Text(c.decode(codes)?)
            }
            CodecKind::Selection(c) => {
                let code = self.integer(raw)?;
                let Some(label) = c.decode(code) else {
                    tracing::debug!(codec = %self.name, code, "Unresolved selection code");
                    return Ok(None);
                };
                Value::from(label)
            }
        };
        Ok(Some(value))
    }

    /// Encodes a domain value into a raw register value.
    ///
    /// Returns `Ok(None)` if an enumeration label is not in the table. This
    /// does not check [`is_writeable`](Self::is_writeable); use
    /// [`encode_for_write`](Self::encode_for_write) on the write path.
    ///
    /// # Errors
    ///
    /// - [`Error::Unsupported`] for decode-only codecs
    /// - [`Error::Parse`] if an address string is not a dotted quad, or a
    ///   scaled quantity given as text is not a number
    /// - [`Error::TypeMismatch`] if `value` has the wrong kind
    #[allow(clippy::cast_precision_loss)]
    pub fn encode(&self, value: &Value) -> Result<Option<i64>> {
        let raw = match (&self.kind, value) {
            (CodecKind::Version(_), _) => {
                return Err(Error::Unsupported {
                    codec: self.name.to_string(),
                });
            }
            (CodecKind::Passthrough(c), Value::Integer(v)) => c.encode(*v),
            (CodecKind::Boolean(c), Value::Bool(v)) => c.encode(*v),
            (CodecKind::Scaling(c), Value::Number(v)) => c.encode(*v),
            (CodecKind::Scaling(c), Value::Integer(v)) => c.encode(*v as f64),
            (CodecKind::Scaling(c), Value::Text(s)) => {
                let number = s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(s.clone()))?;
                c.encode(number)
            }
            (CodecKind::Ipv4(c), Value::Address(addr)) => c.encode(*addr),
            (CodecKind::Ipv4(c), Value::Text(s)) => c.encode(Ipv4::parse(s)?),
            (CodecKind::Timestamp(c), Value::Timestamp(dt)) => c.encode(dt),
            (CodecKind::Selection(c), Value::Text(label)) => {
                let Some(code) = c.encode(label) else {
                    tracing::debug!(codec = %self.name, label = %label, "Unresolved selection label");
                    return Ok(None);
                };
                code
            }
            (CodecKind::Passthrough(_), _) => return Err(self.mismatch("integer", value)),
            (CodecKind::Boolean(_), _) => return Err(self.mismatch("bool", value)),
            (CodecKind::Scaling(_), _) => return Err(self.mismatch("number", value)),
            (CodecKind::Ipv4(_), _) => return Err(self.mismatch("address", value)),
            (CodecKind::Timestamp(_), _) => return Err(self.mismatch("timestamp", value)),
            (CodecKind::Selection(_), _) => return Err(self.mismatch("text", value)),
        };
        Ok(Some(raw))
    }

    /// Encodes a value destined for a device write.
    ///
    /// # Errors
    ///
    /// - [`Error::ReadOnly`] if the codec is not writeable
    /// - [`ValueError::UnknownLabel`] if an enumeration label is not in the
    ///   table
    /// - any error of [`encode`](Self::encode)
    pub fn encode_for_write(&self, value: &Value) -> Result<i64> {
        if !self.writeable {
            return Err(Error::ReadOnly {
                codec: self.name.to_string(),
            });
        }
        self.encode(value)?.ok_or_else(|| {
            ValueError::UnknownLabel {
                codec: self.name.to_string(),
                label: value.to_string(),
            }
            .into()
        })
    }

    fn integer(&self, raw: &RawValue) -> Result<i64> {
        raw.as_integer().ok_or_else(|| Error::TypeMismatch {
            codec: self.name.to_string(),
            expected: "integer",
            found: raw.kind_name(),
        })
    }

    fn mismatch(&self, expected: &'static str, value: &Value) -> Error {
        Error::TypeMismatch {
            codec: self.name.to_string(),
            expected,
            found: value.kind_name(),
        }
    }
}
