// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Definitions for the request and response bodies of the internal VNIC
//! attachment and VTAP endpoints of the Core Services API.
//!
//! Field names follow the JSON property names of the remote API. Mandatory
//! properties are plain fields; optional ones are `Option`s, or empty
//! collections and unset [`EnumField`]s, and are left out of the serialized
//! body when absent.

use vnicaas_types::EnumValidationError;

// Re-export the vocabulary types so callers only need this crate.
pub use vnicaas_types::{
    AttachmentLifecycleState, AttachmentVnicShape, CreateAttachmentVnicShape,
    EncapsulationProtocol, EnumField, LaunchType, TrafficMode,
    UnsupportedEnumValue, UpdateVnicShape, VnicShapeTag, Vocabulary,
    VtapSourceType, VtapTargetType,
};

pub mod attachment;
mod display;
pub mod external;
pub mod migration;
mod nullable;
pub mod vtap;

pub use attachment::{
    CreateInternalVnicAttachmentDetails, InternalVnicAttachment,
    UpdateVnicShapeDetails,
};
pub use external::{CfmMetadata, SmartNicVnicAttachmentInfo};
pub use migration::MigrationInfo;
pub use vtap::UpdateVtapDetails;

/// Records whose enumerated fields can be checked against their
/// vocabularies before the record is sent.
pub trait ValidateEnums {
    /// Check every enumerated field of this record.
    ///
    /// Empty fields pass. All failures are collected, in field declaration
    /// order, before returning. Records embedded in this one are not
    /// visited; validate them separately if needed.
    fn validate_enums(&self) -> Result<(), EnumValidationError>;
}
