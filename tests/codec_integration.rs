// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests exercising codecs through the public API.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use luxtronik_codec::codec::{Scaling, Selection, Table};
use luxtronik_codec::state::ObservedValues;
use luxtronik_codec::{
    Codec, Error, ParseError, RawValue, Scale, Unit, Value, ValueError, tables,
};

fn raw(v: i64) -> RawValue {
    RawValue::Integer(v)
}

/// A small slice of a parameter/calculation catalog.
fn catalog() -> BTreeMap<usize, Codec> {
    BTreeMap::from([
        (1, Codec::celsius("ID_Einst_WK_akt").writeable(true)),
        (3, Codec::selection("ID_Ba_Hz_akt", &tables::HEATING_MODE).writeable(true)),
        (10, Codec::celsius("ID_WEB_Temperatur_TVL")),
        (44, Codec::boolean("ID_WEB_VD1out")),
        (56, Codec::hours("ID_WEB_Zaehler_BetrZeitVD1")),
        (67, Codec::seconds("ID_WEB_Time_WPein_akt")),
        (80, Codec::selection("ID_WEB_WP_BZ_akt", &tables::OPERATION_MODE)),
        (81, Codec::version("ID_WEB_SoftStand")),
        (91, Codec::ip_address("ID_WEB_AdresseIP_akt")),
        (95, Codec::timestamp("ID_WEB_ERROR_Time0")),
        (180, Codec::pressure("Hochdruck")),
    ])
}

// ============================================================================
// Scaling
// ============================================================================

mod scaling {
    use super::*;

    #[test]
    fn decode_is_raw_over_divisor() {
        for scale in [Scale::CELSIUS, Scale::PRESSURE, Scale::ENERGY] {
            let codec = Scaling::new(scale);
            for raw in [-1234_i64, -1, 0, 1, 205, 9999] {
                #[allow(clippy::cast_precision_loss)]
                let expected = raw as f64 / f64::from(scale.divisor());
                assert!((codec.decode(raw) - expected).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn documented_examples() {
        let tenths = Codec::celsius("t");
        assert_eq!(tenths.decode(&raw(205)).unwrap(), Some(Value::Number(20.5)));
        assert_eq!(tenths.encode(&Value::Number(20.5)).unwrap(), Some(205));

        let hundredths = Codec::pressure("p");
        assert_eq!(hundredths.decode(&raw(150)).unwrap(), Some(Value::Number(1.5)));
        assert_eq!(hundredths.encode(&Value::Number(1.5)).unwrap(), Some(150));
    }

    #[test]
    fn write_truncates() {
        let setpoint = Codec::celsius("ID_Einst_WK_akt").writeable(true);
        assert_eq!(setpoint.encode_for_write(&Value::Number(21.99)).unwrap(), 219);
        assert_eq!(setpoint.encode_for_write(&Value::Number(-0.99)).unwrap(), -9);
    }

    #[test]
    fn pressure_writes_keep_every_step() {
        let codec = Codec::pressure("Hochdruck").writeable(true);
        assert_eq!(codec.encode_for_write(&Value::Number(2.05)).unwrap(), 205);
        assert_eq!(codec.encode_for_write(&Value::from("2.05")).unwrap(), 205);
        for raw_value in [29_i64, 205, 1850, 65_531, -29] {
            let value = codec.decode(&raw(raw_value)).unwrap().unwrap();
            assert_eq!(codec.encode_for_write(&value).unwrap(), raw_value);
        }
    }

    #[test]
    fn setpoint_from_text() {
        let setpoint = Codec::celsius("ID_Einst_WK_akt").writeable(true);
        assert_eq!(setpoint.encode_for_write(&Value::from("22.5")).unwrap(), 225);
        assert!(matches!(
            setpoint.encode_for_write(&Value::from("warm")),
            Err(Error::Parse(ParseError::InvalidNumber(_)))
        ));
    }

    #[test]
    fn custom_scale() {
        let codec = Codec::scaled("V_custom", Scale::new(100, Unit::Volt));
        assert_eq!(codec.unit(), Some(Unit::Volt));
        assert_eq!(codec.decode(&raw(23_012)).unwrap(), Some(Value::Number(230.12)));
    }
}

// ============================================================================
// Enumerations
// ============================================================================

mod selection {
    use super::*;

    #[test]
    fn operation_mode_table() {
        let codec = Selection::new(&tables::OPERATION_MODE);
        assert_eq!(codec.decode(0), Some("heating"));
        assert_eq!(codec.decode(99), None);
        assert_eq!(codec.encode("heating"), Some(0));
        assert_eq!(codec.encode("unknown-label"), None);
    }

    #[test]
    fn options_in_declared_order() {
        let codec = Codec::selection("ID_WEB_WP_BZ_akt", &tables::OPERATION_MODE);
        assert_eq!(
            codec.options().unwrap(),
            [
                "heating",
                "hot water",
                "swimming pool/solar",
                "evu",
                "defrost",
                "no request",
                "heating external source",
                "cooling",
            ]
        );
        let sec = Codec::selection("sec", &tables::SEC_OPERATION_MODE);
        let options = sec.options().unwrap();
        assert_eq!(options.len(), tables::SEC_OPERATION_MODE.len());
        assert_eq!(options.iter().filter(|l| **l == "waiting").count(), 2);
    }

    #[test]
    fn every_table_round_trips_first_codes() {
        for table in tables::ALL {
            let codec = Selection::new(table);
            for (code, label) in table.entries() {
                let back = codec.encode(codec.decode(*code).unwrap()).unwrap();
                assert_eq!(table.label(back), Some(*label), "{}", table.name());
            }
        }
    }

    #[test]
    fn caller_defined_table() {
        static STAGES: Table = Table::new("stages", &[(10, "low"), (20, "high")]);
        let codec = Codec::selection("stages", &STAGES).writeable(true);
        assert_eq!(codec.encode_for_write(&Value::from("high")).unwrap(), 20);
        assert_eq!(codec.decode(&raw(0)).unwrap(), None);
    }
}

// ============================================================================
// Specialized codecs
// ============================================================================

mod specialized {
    use super::*;

    #[test]
    fn boolean_examples() {
        let codec = Codec::boolean("b");
        assert_eq!(codec.decode(&raw(0)).unwrap(), Some(Value::Bool(false)));
        assert_eq!(codec.decode(&raw(1)).unwrap(), Some(Value::Bool(true)));
        assert_eq!(codec.decode(&raw(5)).unwrap(), Some(Value::Bool(true)));
        assert_eq!(codec.encode(&Value::Bool(true)).unwrap(), Some(1));
        assert_eq!(codec.encode(&Value::Bool(false)).unwrap(), Some(0));
    }

    #[test]
    fn ipv4_examples() {
        let codec = Codec::ip_address("ip");
        let decoded = codec.decode(&raw(-1_062_731_519)).unwrap().unwrap();
        assert_eq!(decoded.to_string(), "192.168.1.1");
        assert_eq!(codec.encode(&decoded).unwrap(), Some(-1_062_731_519));
        assert_eq!(
            codec.encode(&Value::from("192.168.1.1")).unwrap(),
            Some(-1_062_731_519)
        );
    }

    #[test]
    fn ipv4_round_trip_over_signed_range() {
        let codec = Codec::ip_address("ip");
        let mut raw_value = i64::from(i32::MIN);
        while raw_value < 0 {
            let decoded = codec.decode(&raw(raw_value)).unwrap().unwrap();
            assert_eq!(codec.encode(&decoded).unwrap(), Some(raw_value));
            raw_value += 7_919_993;
        }
    }

    #[test]
    fn ipv4_malformed_input() {
        let codec = Codec::ip_address("ip").writeable(true);
        assert!(matches!(
            codec.encode_for_write(&Value::from("300.1.1.1")),
            Err(Error::Parse(_))
        ));
        assert_eq!(
            codec.encode_for_write(&Value::from(" 192.168.1.1")),
            Err(Error::Parse(ParseError::InvalidAddress(
                " 192.168.1.1".to_string()
            )))
        );
    }

    #[test]
    fn version_examples() {
        let codec = Codec::version("ID_WEB_SoftStand");
        assert_eq!(
            codec.decode(&RawValue::from(vec![72, 101, 0, 0])).unwrap(),
            Some(Value::from("He"))
        );
        assert!(matches!(
            codec.encode(&Value::from("He")),
            Err(Error::Unsupported { .. })
        ));
        assert!(matches!(
            codec.encode_for_write(&Value::from("He")),
            Err(Error::ReadOnly { .. })
        ));
    }

    #[test]
    fn timestamp_round_trip() {
        let codec = Codec::timestamp("ts");
        let decoded = codec.decode(&raw(1_700_000_000)).unwrap().unwrap();
        assert!(decoded.as_timestamp().is_some());
        assert_eq!(codec.encode(&decoded).unwrap(), Some(1_700_000_000));
    }
}

// ============================================================================
// Catalog-driven usage
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn idempotent_round_trip_through_catalog() {
        let catalog = catalog();
        let polled: [(usize, RawValue); 9] = [
            (1, raw(215)),
            (3, raw(2)),
            (10, raw(342)),
            (44, raw(1)),
            (56, raw(123_456)),
            (67, raw(3600)),
            (80, raw(7)),
            (91, raw(-1_062_731_519)),
            (180, raw(1850)),
        ];
        for (index, raw_value) in polled {
            let codec = &catalog[&index];
            let value = codec.decode(&raw_value).unwrap().unwrap();
            let back = codec.encode(&value).unwrap();
            assert_eq!(back, raw_value.as_integer(), "{}", codec.name());
        }
    }

    #[test]
    fn poll_into_observed_values() {
        let catalog = catalog();
        let mut values = ObservedValues::new();

        let poll = [
            (10, raw(342)),
            (80, raw(0)),
            (81, RawValue::from(vec![86, 51, 46, 56, 56, 0, 0, 0])),
            (91, raw(-1_062_731_519)),
        ];
        let changes: Vec<_> = poll
            .iter()
            .filter_map(|(index, raw_value)| {
                values.record(*index, &catalog[index], raw_value).unwrap()
            })
            .collect();
        assert_eq!(changes.len(), 4);
        assert!(changes.iter().all(|c| c.is_first_resolution()));

        assert_eq!(values.get(10), Some(&Value::Number(34.2)));
        assert_eq!(values.get(80), Some(&Value::from("heating")));
        assert_eq!(values.get(81), Some(&Value::from("V3.88")));
        assert_eq!(
            values.get(91),
            Some(&Value::Address(Ipv4Addr::new(192, 168, 1, 1)))
        );

        // Device reports a mode this library does not know.
        let change = values.record(80, &catalog[&80], &raw(42)).unwrap().unwrap();
        assert!(change.is_lost());
        assert_eq!(values.get(80), None);
    }

    #[test]
    fn writes_respect_writeable_flag() {
        let catalog = catalog();
        assert_eq!(
            catalog[&3].encode_for_write(&Value::from("Party")).unwrap(),
            2
        );
        assert!(matches!(
            catalog[&10].encode_for_write(&Value::Number(20.0)),
            Err(Error::ReadOnly { .. })
        ));
        assert!(matches!(
            catalog[&3].encode_for_write(&Value::from("Turbo")),
            Err(Error::Value(ValueError::UnknownLabel { .. }))
        ));
    }

    #[test]
    fn shared_across_threads() {
        let catalog = catalog();
        let codec = &catalog[&80];
        std::thread::scope(|s| {
            for code in 0..8 {
                s.spawn(move || {
                    let value = codec.decode(&raw(code)).unwrap().unwrap();
                    assert_eq!(codec.encode(&value).unwrap(), Some(code));
                });
            }
        });
    }
}
