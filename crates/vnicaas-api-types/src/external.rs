// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types owned by neighbouring schemas.
//!
//! The attachment records embed these, but their layout is defined
//! elsewhere. They are carried as opaque JSON objects so that payloads pass
//! through unchanged.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::display::Json;

/// Customer-facing metrics metadata attached to a VNIC.
#[derive(
    Clone, Debug, Default, Deserialize, PartialEq, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CfmMetadata(pub Map<String, Value>);

/// The SmartNIC side of a VNIC attachment taking part in a migration.
#[derive(
    Clone, Debug, Default, Deserialize, PartialEq, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SmartNicVnicAttachmentInfo(pub Map<String, Value>);

impl CfmMetadata {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl SmartNicVnicAttachmentInfo {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for CfmMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Map<String, Value>> for SmartNicVnicAttachmentInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for SmartNicVnicAttachmentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Json(&self.0), f)
    }
}
