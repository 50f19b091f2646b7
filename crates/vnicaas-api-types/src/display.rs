// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Log-friendly rendering of records.

use std::fmt;

use serde::Serialize;
use vnicaas_types::{EnumField, Vocabulary};

/// Rendered in place of a field that is not set.
pub(crate) const UNSET: &str = "<unset>";

/// Renders a value as compact JSON.
pub(crate) struct Json<'a, T>(pub &'a T);

impl<T: Serialize> fmt::Display for Json<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Writes `Name { field=value, other=<unset> }`.
pub(crate) struct RecordFmt<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    empty: bool,
}

impl<'a, 'b> RecordFmt<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        let result = write!(f, "{name} {{");
        Self { f, result, empty: true }
    }

    pub(crate) fn field(
        &mut self,
        name: &str,
        value: &dyn fmt::Display,
    ) -> &mut Self {
        if self.result.is_ok() {
            let sep = if self.empty { " " } else { ", " };
            self.result = write!(self.f, "{sep}{name}={value}");
        }
        self.empty = false;
        self
    }

    pub(crate) fn opt<T: fmt::Display>(
        &mut self,
        name: &str,
        value: &Option<T>,
    ) -> &mut Self {
        match value {
            Some(v) => self.field(name, v),
            None => self.field(name, &UNSET),
        }
    }

    pub(crate) fn enumeration<V: Vocabulary>(
        &mut self,
        name: &str,
        value: &EnumField<V>,
    ) -> &mut Self {
        if value.is_empty() {
            self.field(name, &UNSET)
        } else {
            self.field(name, value)
        }
    }

    /// A collection, rendered as JSON, or the sentinel when empty.
    pub(crate) fn json<T: Serialize>(
        &mut self,
        name: &str,
        value: &T,
        is_empty: bool,
    ) -> &mut Self {
        if is_empty {
            self.field(name, &UNSET)
        } else {
            self.field(name, &Json(value))
        }
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        if self.empty {
            self.f.write_str("}")
        } else {
            self.f.write_str(" }")
        }
    }
}
