// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vnicaas_types::{EnumValidationError, EnumValidator};

use crate::display::RecordFmt;
use crate::external::SmartNicVnicAttachmentInfo;
use crate::ValidateEnums;

/// State of a live migration of a VNIC between hypervisors.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MigrationInfo {
    /// Identifies the migration session. Also used as the idempotency key
    /// of the migration calls.
    pub migration_session_id: String,

    pub source_smart_nic_vnic_attachment_info: SmartNicVnicAttachmentInfo,

    pub destination_smart_nic_vnic_attachment_info: SmartNicVnicAttachmentInfo,

    /// The VNIC on the source hypervisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hypervisor_vnic_id: Option<String>,

    /// The VNIC on the destination hypervisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_hypervisor_vnic_id: Option<String>,

    /// Whether traffic has already been routed to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_traffic_routed_to_destination: Option<bool>,
}

impl MigrationInfo {
    pub fn new(
        migration_session_id: impl Into<String>,
        source: SmartNicVnicAttachmentInfo,
        destination: SmartNicVnicAttachmentInfo,
    ) -> Self {
        Self {
            migration_session_id: migration_session_id.into(),
            source_smart_nic_vnic_attachment_info: source,
            destination_smart_nic_vnic_attachment_info: destination,
            source_hypervisor_vnic_id: None,
            destination_hypervisor_vnic_id: None,
            is_traffic_routed_to_destination: None,
        }
    }
}

// No enumerated fields; always passes.
impl ValidateEnums for MigrationInfo {
    fn validate_enums(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new().finish()
    }
}

impl fmt::Display for MigrationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordFmt::new(f, "MigrationInfo")
            .field("migrationSessionId", &self.migration_session_id)
            .field(
                "sourceSmartNicVnicAttachmentInfo",
                &self.source_smart_nic_vnic_attachment_info,
            )
            .field(
                "destinationSmartNicVnicAttachmentInfo",
                &self.destination_smart_nic_vnic_attachment_info,
            )
            .opt("sourceHypervisorVnicId", &self.source_hypervisor_vnic_id)
            .opt(
                "destinationHypervisorVnicId",
                &self.destination_hypervisor_vnic_id,
            )
            .opt(
                "isTrafficRoutedToDestination",
                &self.is_traffic_routed_to_destination,
            )
            .finish()
    }
}
