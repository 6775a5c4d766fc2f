// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IPv4 address codec.
//!
//! The controller stores network addresses as the unsigned 32-bit address
//! value minus `2^32`. Decoding adds the offset back; a raw value for which
//! the sum leaves the unsigned 32-bit range is rejected instead of being
//! wrapped.

use std::net::Ipv4Addr;

use crate::error::{ParseError, ValueError};

/// Offset between the device's signed representation and the address value.
const OFFSET: i64 = 1 << 32;

/// Codec between the signed register value and an [`Ipv4Addr`].
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use luxtronik_codec::codec::Ipv4;
///
/// let addr = Ipv4.decode(-1_062_731_519).unwrap();
/// assert_eq!(addr, Ipv4Addr::new(192, 168, 1, 1));
/// assert_eq!(Ipv4.encode(addr), -1_062_731_519);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv4;

impl Ipv4 {
    /// Smallest raw value accepted by [`decode`](Self::decode).
    pub const MIN_RAW: i64 = -OFFSET;

    /// Largest raw value accepted by [`decode`](Self::decode).
    pub const MAX_RAW: i64 = -1;

    /// Decodes a raw register value into an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if `raw` is outside
    /// [`MIN_RAW`](Self::MIN_RAW)..=[`MAX_RAW`](Self::MAX_RAW).
    pub fn decode(&self, raw: i64) -> Result<Ipv4Addr, ValueError> {
        raw.checked_add(OFFSET)
            .and_then(|v| u32::try_from(v).ok())
            .map(Ipv4Addr::from)
            .ok_or(ValueError::OutOfRange {
                min: Self::MIN_RAW,
                max: Self::MAX_RAW,
                actual: raw,
            })
    }

    /// Encodes an address into the signed register value.
    ///
    /// The result is not range checked against the register width.
    #[must_use]
    pub fn encode(&self, addr: Ipv4Addr) -> i64 {
        i64::from(u32::from(addr)) - OFFSET
    }

    /// Parses a dotted-quad address string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAddress`] if `s` is not exactly a
    /// dotted-quad IPv4 address. Surrounding whitespace is rejected.
    pub fn parse(s: &str) -> Result<Ipv4Addr, ParseError> {
        s.parse()
            .map_err(|_| ParseError::InvalidAddress(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_private_address() {
        assert_eq!(
            Ipv4.decode(-1_062_731_519).unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
    }

    #[test]
    fn encode_private_address() {
        assert_eq!(Ipv4.encode(Ipv4Addr::new(192, 168, 1, 1)), -1_062_731_519);
    }

    #[test]
    fn range_edges() {
        assert_eq!(Ipv4.decode(-1).unwrap(), Ipv4Addr::BROADCAST);
        assert_eq!(Ipv4.decode(Ipv4::MIN_RAW).unwrap(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(
            Ipv4.decode(i64::from(i32::MIN)).unwrap(),
            Ipv4Addr::new(128, 0, 0, 0)
        );
    }

    #[test]
    fn non_negative_raw_is_rejected() {
        let err = Ipv4.decode(0).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                min: Ipv4::MIN_RAW,
                max: -1,
                actual: 0,
            }
        );
        assert!(Ipv4.decode(Ipv4::MIN_RAW - 1).is_err());
        assert!(Ipv4.decode(i64::MAX).is_err());
    }

    #[test]
    fn round_trip_signed_32_bit_range() {
        for raw in [i64::from(i32::MIN), -1_062_731_519, -16_777_216, -256, -1] {
            assert_eq!(Ipv4.encode(Ipv4.decode(raw).unwrap()), raw);
        }
        for addr in ["128.0.0.1", "192.168.178.20", "255.255.255.0"] {
            let addr = Ipv4::parse(addr).unwrap();
            assert_eq!(Ipv4.decode(Ipv4.encode(addr)).unwrap(), addr);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Ipv4::parse("192.168.1").is_err());
        assert!(Ipv4::parse("192.168.1.256").is_err());
        assert!(Ipv4::parse("heatpump.local").is_err());
        assert_eq!(
            Ipv4::parse("").unwrap_err(),
            ParseError::InvalidAddress(String::new())
        );
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        assert_eq!(
            Ipv4::parse(" 10.0.0.1 "),
            Err(ParseError::InvalidAddress(" 10.0.0.1 ".to_string()))
        );
        assert_eq!(
            Ipv4::parse("10.0.0.1\n"),
            Err(ParseError::InvalidAddress("10.0.0.1\n".to_string()))
        );
        assert_eq!(Ipv4::parse("10.0.0.1"), Ok(Ipv4Addr::new(10, 0, 0, 1)));
    }
}
