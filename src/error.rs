// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the codec layer.
//!
//! Unresolved enumeration codes and labels are *not* errors: they surface as
//! `Ok(None)` from [`Codec::decode`](crate::Codec::decode) and
//! [`Codec::encode`](crate::Codec::encode). The types here cover the cases
//! where a codec cannot produce any answer at all.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value could not be represented by the codec.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A textual domain value could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The codec is decode-only.
    #[error("codec {codec} does not support encoding")]
    Unsupported {
        /// Name of the codec.
        codec: String,
    },

    /// A write was attempted through a codec that is not writeable.
    #[error("codec {codec} is not writeable")]
    ReadOnly {
        /// Name of the codec.
        codec: String,
    },

    /// The value handed to the codec has the wrong shape.
    #[error("codec {codec} expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the codec.
        codec: String,
        /// Kind of value the codec accepts.
        expected: &'static str,
        /// Kind of value that was provided.
        found: &'static str,
    },
}

/// Errors related to values outside what a codec can represent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A raw value is outside the range the codec's transform is defined on.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A raw character code is not a valid Unicode scalar value.
    #[error("invalid character code: {0}")]
    InvalidCharacter(i64),

    /// A label is not part of the codec's enumeration table.
    #[error("unknown label '{label}' for {codec}")]
    UnknownLabel {
        /// Name of the codec.
        codec: String,
        /// The label that was provided.
        label: String,
    },
}

/// Errors related to parsing textual domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// The string is not a decimal number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
