// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enum validation diagnostics.

use std::fmt;

use thiserror::Error;

use crate::field::EnumField;
use crate::vocabulary::Vocabulary;

/// A record field holds a non-empty value outside its vocabulary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "unsupported enum value for {field}: {value}. \
     Supported values are: {}.",
    .supported.join(",")
)]
pub struct UnsupportedEnumValue {
    field: &'static str,
    value: String,
    supported: &'static [&'static str],
}

impl UnsupportedEnumValue {
    pub fn new<V: Vocabulary>(field: &'static str, value: String) -> Self {
        Self { field, value, supported: V::values() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The value that was observed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The vocabulary, in declaration order.
    pub fn supported(&self) -> &'static [&'static str] {
        self.supported
    }
}

/// Every enum failure found in one record, in field declaration order.
///
/// Displays as one diagnostic line per failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValidationError {
    failures: Vec<UnsupportedEnumValue>,
}

impl EnumValidationError {
    pub fn failures(&self) -> &[UnsupportedEnumValue] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<UnsupportedEnumValue> {
        self.failures
    }
}

impl fmt::Display for EnumValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EnumValidationError {}

/// Collects enum failures across the fields of a record.
///
/// Fields must be visited in declaration order; that order is the order of
/// the lines in the resulting diagnostic.
#[derive(Debug, Default)]
#[must_use]
pub struct EnumValidator {
    failures: Vec<UnsupportedEnumValue>,
}

impl EnumValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<V: Vocabulary>(
        mut self,
        name: &'static str,
        value: &EnumField<V>,
    ) -> Self {
        if let Err(failure) = value.check(name) {
            self.failures.push(failure);
        }
        self
    }

    pub fn finish(self) -> Result<(), EnumValidationError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(EnumValidationError { failures: self.failures })
        }
    }
}
