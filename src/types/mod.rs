// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by all codecs.
//!
//! # Types
//!
//! - [`RawValue`] - Integer or integer run as exchanged with the device
//! - [`Value`] - Decoded domain value
//! - [`Unit`] - Display unit of a codec
//! - [`Scale`] - Fixed-point `(divisor, unit)` descriptor

mod unit;
mod value;

pub use unit::{Scale, Unit};
pub use value::{RawValue, Value};
