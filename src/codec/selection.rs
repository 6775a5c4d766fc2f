// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumeration codec over closed code tables.
//!
//! Every operating-mode style register is an instance of the same mechanism:
//! an ordered, static table of `(code, label)` pairs. Codes need not be
//! contiguous or zero-based, and labels may repeat; the reverse lookup
//! returns the first code carrying a label, in declared order.
//!
//! The concrete tables live in [`crate::tables`].

/// Ordered code to label mapping.
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Table;
///
/// static FAN: Table = Table::new("fan", &[(0, "Off"), (2, "Low"), (3, "High")]);
///
/// assert_eq!(FAN.label(2), Some("Low"));
/// assert_eq!(FAN.label(1), None);
/// assert_eq!(FAN.code("High"), Some(3));
/// assert_eq!(FAN.options().collect::<Vec<_>>(), ["Off", "Low", "High"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table {
    name: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl Table {
    /// Creates a table from entries in declared order.
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [(i64, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Returns the table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the entries in declared order.
    #[must_use]
    pub const fn entries(&self) -> &'static [(i64, &'static str)] {
        self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the label for a code.
    #[must_use]
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Looks up the first code carrying `label`.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(code, _)| *code)
    }

    /// Iterates over all labels in declared order, duplicates included.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.entries.iter().map(|(_, label)| *label)
    }
}

/// Selection codec backed by a static [`Table`].
///
/// # Examples
///
/// ```
/// use luxtronik_codec::codec::Selection;
/// use luxtronik_codec::tables;
///
/// let mode = Selection::new(&tables::OPERATION_MODE);
/// assert_eq!(mode.decode(0), Some("heating"));
/// assert_eq!(mode.decode(99), None);
/// assert_eq!(mode.encode("cooling"), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    table: &'static Table,
}

impl Selection {
    /// Creates a selection codec over `table`.
    #[must_use]
    pub const fn new(table: &'static Table) -> Self {
        Self { table }
    }

    /// Returns the backing table.
    #[must_use]
    pub const fn table(&self) -> &'static Table {
        self.table
    }

    /// Decodes a code into its label; `None` if the code is not in the table.
    #[must_use]
    pub fn decode(&self, code: i64) -> Option<&'static str> {
        self.table.label(code)
    }

    /// Encodes a label into its first code; `None` if the label is unknown.
    #[must_use]
    pub fn encode(&self, label: &str) -> Option<i64> {
        self.table.code(label)
    }

    /// Returns all labels in declared order.
    #[must_use]
    pub fn options(&self) -> Vec<&'static str> {
        self.table.options().collect()
    }
}
