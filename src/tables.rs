// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumeration tables of the heat pump controller.
//!
//! Labels are the controller's vocabulary, spelling included. Callers encode
//! by label, so they are not normalized.

use crate::codec::Table;

/// Heating circuit operating mode.
pub static HEATING_MODE: Table = Table::new(
    "heating_mode",
    &[
        (0, "Automatic"),
        (1, "Second heatsource"),
        (2, "Party"),
        (3, "Holidays"),
        (4, "Off"),
    ],
);

/// Cooling operating mode.
pub static COOLING_MODE: Table = Table::new("cooling_mode", &[(0, "Off"), (1, "Automatic")]);

/// Domestic hot water operating mode.
pub static HOT_WATER_MODE: Table = Table::new(
    "hot_water_mode",
    &[
        (0, "Automatic"),
        (1, "Second heatsource"),
        (2, "Party"),
        (3, "Holidays"),
        (4, "Off"),
    ],
);

/// Swimming pool operating mode.
pub static POOL_MODE: Table = Table::new(
    "pool_mode",
    &[(0, "Automatic"), (2, "Party"), (3, "Holidays"), (4, "Off")],
);

/// Mixed circuit operating mode.
pub static MIXED_CIRCUIT_MODE: Table = Table::new(
    "mixed_circuit_mode",
    &[(0, "Automatic"), (2, "Party"), (3, "Holidays"), (4, "Off")],
);

/// Solar operating mode.
pub static SOLAR_MODE: Table = Table::new(
    "solar_mode",
    &[
        (0, "Automatic"),
        (1, "Second heatsource"),
        (2, "Party"),
        (3, "Holidays"),
        (4, "Off"),
    ],
);

/// Ventilation operating mode.
pub static VENTILATION_MODE: Table = Table::new(
    "ventilation_mode",
    &[(0, "Automatic"), (1, "Party"), (2, "Holidays"), (3, "Off")],
);

/// Heat pump model code. Code 31 repeats the label of code 0.
pub static HEATPUMP_CODE: Table = Table::new(
    "heatpump_code",
    &[
        (0, "ERC"),
        (1, "SW1"),
        (2, "SW2"),
        (3, "WW1"),
        (4, "WW2"),
        (5, "L1I"),
        (6, "L2I"),
        (7, "L1A"),
        (8, "L2A"),
        (9, "KSW"),
        (10, "KLW"),
        (11, "SWC"),
        (12, "LWC"),
        (13, "L2G"),
        (14, "WZS"),
        (15, "L1I407"),
        (16, "L2I407"),
        (17, "L1A407"),
        (18, "L2A407"),
        (19, "L2G407"),
        (20, "LWC407"),
        (21, "L1AREV"),
        (22, "L2AREV"),
        (23, "WWC1"),
        (24, "WWC2"),
        (25, "L2G404"),
        (26, "WZW"),
        (27, "L1S"),
        (28, "L1H"),
        (29, "L2H"),
        (30, "WZWD"),
        (31, "ERC"),
        (40, "WWB_20"),
        (41, "LD5"),
        (42, "LD7"),
        (43, "SW 37_45"),
        (44, "SW 58_69"),
        (45, "SW 29_56"),
        (46, "LD5 (230V)"),
        (47, "LD7 (230 V)"),
        (48, "LD9"),
        (49, "LD5 REV"),
        (50, "LD7 REV"),
        (51, "LD5 REV 230V"),
        (52, "LD7 REV 230V"),
        (53, "LD9 REV 230V"),
        (54, "SW 291"),
        (55, "LW SEC"),
        (56, "HMD 2"),
        (57, "MSW 4"),
        (58, "MSW 6"),
        (59, "MSW 8"),
        (60, "MSW 10"),
        (61, "MSW 12"),
        (62, "MSW 14"),
        (63, "MSW 17"),
        (64, "MSW 19"),
        (65, "MSW 23"),
        (66, "MSW 26"),
        (67, "MSW 30"),
        (68, "MSW 4S"),
        (69, "MSW 6S"),
        (70, "MSW 8S"),
        (71, "MSW 10S"),
        (72, "MSW 13S"),
        (73, "MSW 16S"),
        (74, "MSW2-6S"),
        (75, "MSW4-16"),
    ],
);

/// Number of compressors allowed to run.
pub static BIVALENCE_LEVEL: Table = Table::new(
    "bivalence_level",
    &[
        (1, "one compressor allowed to run"),
        (2, "two compressors allowed to run"),
        (3, "additional compressor allowed to run"),
    ],
);

/// Current operation of the heat pump.
pub static OPERATION_MODE: Table = Table::new(
    "operation_mode",
    &[
        (0, "heating"),
        (1, "hot water"),
        (2, "swimming pool/solar"),
        (3, "evu"),
        (4, "defrost"),
        (5, "no request"),
        (6, "heating external source"),
        (7, "cooling"),
    ],
);

/// Reason for the last switch-off.
pub static SWITCHOFF_FILE: Table = Table::new(
    "switchoff_file",
    &[
        (1, "heatpump error"),
        (2, "system error"),
        (3, "evu lock"),
        (4, "operation mode second heat generator"),
        (5, "air defrost"),
        (6, "maximal usage temprature"),
        (7, "minimal usage temperature"),
        (8, "lower usage limit"),
        (9, "no request"),
    ],
);

/// First status line of the main menu.
pub static MAIN_MENU_STATUS_LINE_1: Table = Table::new(
    "main_menu_status_line_1",
    &[
        (0, "heatpump running"),
        (1, "heatpump idle"),
        (2, "heatpump coming"),
        (3, "errorcode slot 0"),
        (4, "defrost"),
        (5, "witing on LIN connection"),
        (6, "compressor heating up"),
        (7, "pump forerun"),
    ],
);

/// Second status line of the main menu.
pub static MAIN_MENU_STATUS_LINE_2: Table =
    Table::new("main_menu_status_line_2", &[(0, "since"), (1, "in")]);

/// Third status line of the main menu. Codes 11 and 15 are unassigned.
pub static MAIN_MENU_STATUS_LINE_3: Table = Table::new(
    "main_menu_status_line_3",
    &[
        (0, "heating"),
        (1, "no request"),
        (2, "grid switch on delay"),
        (3, "cycle lock"),
        (4, "lock time"),
        (5, "domestic water"),
        (6, "info bake out program"),
        (7, "defrost"),
        (8, "pump forerun"),
        (9, "thermal desinfection"),
        (10, "cooling"),
        (12, "swimming pool/solar"),
        (13, "heating external engery source"),
        (14, "domestic water external energy source"),
        (16, "flow monitoring"),
        (17, "second heat generator 1 active"),
    ],
);

/// State of the secondary (inverter) unit.
pub static SEC_OPERATION_MODE: Table = Table::new(
    "sec_operation_mode",
    &[
        (0, "off"),
        (1, "cooling"),
        (2, "heating"),
        (3, "fault"),
        (4, "transition"),
        (5, "defrost"),
        (6, "waiting"),
        (7, "waiting"),
        (8, "transition"),
        (9, "stop"),
        (10, "manual"),
        (11, "simulation start"),
        (12, "evu lock"),
    ],
);

/// All tables, for introspection.
pub static ALL: [&Table; 15] = [
    &HEATING_MODE,
    &COOLING_MODE,
    &HOT_WATER_MODE,
    &POOL_MODE,
    &MIXED_CIRCUIT_MODE,
    &SOLAR_MODE,
    &VENTILATION_MODE,
    &HEATPUMP_CODE,
    &BIVALENCE_LEVEL,
    &OPERATION_MODE,
    &SWITCHOFF_FILE,
    &MAIN_MENU_STATUS_LINE_1,
    &MAIN_MENU_STATUS_LINE_2,
    &MAIN_MENU_STATUS_LINE_3,
    &SEC_OPERATION_MODE,
];
