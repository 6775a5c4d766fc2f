// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observed register values.
//!
//! Codecs are stateless definitions. The last value seen for each register
//! lives here, in an [`ObservedValues`] store owned by the polling side, and
//! every update that changes a value is reported as an [`Observation`].
//!
//! # Examples
//!
//! ```
//! use luxtronik_codec::{Codec, RawValue, tables};
//! use luxtronik_codec::state::ObservedValues;
//!
//! let mode = Codec::selection("ID_WEB_WP_BZ_akt", &tables::OPERATION_MODE);
//! let mut values = ObservedValues::new();
//!
//! let change = values.record(80, &mode, &RawValue::from(1_i64)).unwrap().unwrap();
//! assert_eq!(change.current.as_ref().and_then(|v| v.as_str()), Some("hot water"));
//! ```

mod observation;
mod observed_values;

pub use observation::Observation;
pub use observed_values::ObservedValues;
