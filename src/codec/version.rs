// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Firmware version codec.
//!
//! The firmware version is spread over a run of registers, one character
//! code per register, padded with NULs. This codec is decode-only: it has no
//! `encode` method, and the dispatching [`Codec`](crate::Codec) reports
//! [`Error::Unsupported`](crate::Error::Unsupported) for it.

use crate::error::ValueError;

/// Decode-only codec for NUL-padded character code runs.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Version;
///
/// let codes = [86, 51, 46, 56, 56, 0, 0, 0];
/// assert_eq!(Version.decode(&codes).unwrap(), "V3.88");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version;

impl Version {
    /// Decodes character codes into a string with NUL padding removed.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidCharacter`] if a code is not a Unicode
    /// scalar value.
    pub fn decode(&self, codes: &[i64]) -> Result<String, ValueError> {
        let text = codes
            .iter()
            .map(|&code| {
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(ValueError::InvalidCharacter(code))
            })
            .collect::<Result<String, _>>()?;
        Ok(text.trim_matches('\0').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nul_padding() {
        assert_eq!(Version.decode(&[72, 101, 0, 0]).unwrap(), "He");
    }

    #[test]
    fn leading_padding_is_stripped_too() {
        assert_eq!(Version.decode(&[0, 72, 105, 0]).unwrap(), "Hi");
    }

    #[test]
    fn keeps_inner_characters() {
        assert_eq!(Version.decode(&[65, 32, 66]).unwrap(), "A B");
    }

    #[test]
    fn empty_and_all_padding() {
        assert_eq!(Version.decode(&[]).unwrap(), "");
        assert_eq!(Version.decode(&[0, 0, 0]).unwrap(), "");
    }

    #[test]
    fn invalid_codes() {
        assert_eq!(
            Version.decode(&[72, -1]).unwrap_err(),
            ValueError::InvalidCharacter(-1)
        );
        assert_eq!(
            Version.decode(&[0xD800]).unwrap_err(),
            ValueError::InvalidCharacter(0xD800)
        );
    }
}
