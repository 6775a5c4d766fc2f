// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `luxtronik_codec` - value codecs for Luxtronik heat pump controllers.
//!
//! The controller exposes its parameters and readings as plain integer
//! registers. This library translates those raw integers into typed domain
//! values (temperatures, durations, addresses, timestamps, firmware
//! versions, operating modes) and back, reproducing the controller's wire
//! encoding exactly.
//!
//! Reading and writing registers, and knowing which register holds what, is
//! left to the caller.
//!
//! # Supported Value Kinds
//!
//! - **Scaled quantities**: °C, K, %, bar, kWh, V, h as fixed-point integers
//! - **Passthrough**: seconds, rpm, l/h, pulses, counters, error codes
//! - **Flags**: zero / non-zero
//! - **IPv4 addresses**: signed 32-bit register representation
//! - **Timestamps**: epoch seconds
//! - **Firmware versions**: NUL-padded character codes (read-only)
//! - **Enumerations**: operating modes, status lines and other code tables
//!
//! # Quick Start
//!
//! ```
//! use luxtronik_codec::{Codec, RawValue, Value, tables};
//!
//! # fn main() -> luxtronik_codec::Result<()> {
//! // Build the catalog once.
//! let return_setpoint = Codec::celsius("ID_Einst_WK_akt").writeable(true);
//! let heating_mode = Codec::selection("ID_Ba_Hz_akt", &tables::HEATING_MODE).writeable(true);
//! let firmware = Codec::version("ID_WEB_SoftStand");
//!
//! // Decode polled values.
//! assert_eq!(return_setpoint.decode(&RawValue::from(215_i64))?, Some(Value::Number(21.5)));
//! assert_eq!(heating_mode.decode(&RawValue::from(3_i64))?, Some(Value::from("Holidays")));
//! assert_eq!(
//!     firmware.decode(&RawValue::from(vec![86, 51, 46, 56, 56, 0]))?,
//!     Some(Value::from("V3.88"))
//! );
//!
//! // Encode values to write.
//! assert_eq!(return_setpoint.encode_for_write(&Value::Number(22.0))?, 220);
//! assert_eq!(heating_mode.encode_for_write(&Value::from("Off"))?, 4);
//! assert!(firmware.encode_for_write(&Value::from("V4.00")).is_err());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod state;
pub mod tables;
pub mod types;

pub use codec::{Codec, CodecKind};
pub use error::{Error, ParseError, Result, ValueError};
pub use state::{Observation, ObservedValues};
pub use types::{RawValue, Scale, Unit, Value};
