// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vnicaas_types::{
    EncapsulationProtocol, EnumField, EnumValidationError, EnumValidator,
    TrafficMode, VtapSourceType, VtapTargetType,
};

use crate::display::RecordFmt;
use crate::ValidateEnums;

/// Tags grouped by namespace.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, Value>>;

/// Partial update of a virtual test access point. Only the fields that are
/// set are sent.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVtapDetails {
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub defined_tags: DefinedTags,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Simple key/value tags with no predefined namespace.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub freeform_tags: BTreeMap<String, String>,

    /// The source point where packets are captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    /// The destination resource where mirrored packets are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    /// The IP address of the destination resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_ip: Option<String>,

    /// The capture filter applied to the mirrored traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_filter_id: Option<String>,

    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub encapsulation_protocol: EnumField<EncapsulationProtocol>,

    /// The VXLAN network identifier of the mirrored traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vxlan_network_identifier: Option<i64>,

    /// Whether the VTAP is mirroring traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vtap_enabled: Option<bool>,

    /// Treated as [`TrafficMode::Default`] by the service when unset.
    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub traffic_mode: EnumField<TrafficMode>,

    /// Bytes of each mirrored packet to keep; the remainder is truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_packet_size: Option<i64>,

    /// Private endpoint IP for a source outside the VCN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_private_endpoint_ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_private_endpoint_subnet_id: Option<String>,

    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub target_type: EnumField<VtapTargetType>,

    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub source_type: EnumField<VtapSourceType>,
}

impl UpdateVtapDetails {
    /// The traffic mode the service will apply. `None` if the stored value
    /// is not a known mode.
    pub fn effective_traffic_mode(&self) -> Option<TrafficMode> {
        if self.traffic_mode.is_empty() {
            Some(TrafficMode::default())
        } else {
            self.traffic_mode.tag()
        }
    }
}

impl ValidateEnums for UpdateVtapDetails {
    fn validate_enums(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .field("EncapsulationProtocol", &self.encapsulation_protocol)
            .field("TrafficMode", &self.traffic_mode)
            .field("TargetType", &self.target_type)
            .field("SourceType", &self.source_type)
            .finish()
    }
}

impl fmt::Display for UpdateVtapDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordFmt::new(f, "UpdateVtapDetails")
            .json(
                "definedTags",
                &self.defined_tags,
                self.defined_tags.is_empty(),
            )
            .opt("displayName", &self.display_name)
            .json(
                "freeformTags",
                &self.freeform_tags,
                self.freeform_tags.is_empty(),
            )
            .opt("sourceId", &self.source_id)
            .opt("targetId", &self.target_id)
            .opt("targetIp", &self.target_ip)
            .opt("captureFilterId", &self.capture_filter_id)
            .enumeration("encapsulationProtocol", &self.encapsulation_protocol)
            .opt("vxlanNetworkIdentifier", &self.vxlan_network_identifier)
            .opt("isVtapEnabled", &self.is_vtap_enabled)
            .enumeration("trafficMode", &self.traffic_mode)
            .opt("maxPacketSize", &self.max_packet_size)
            .opt("sourcePrivateEndpointIp", &self.source_private_endpoint_ip)
            .opt(
                "sourcePrivateEndpointSubnetId",
                &self.source_private_endpoint_subnet_id,
            )
            .enumeration("targetType", &self.target_type)
            .enumeration("sourceType", &self.source_type)
            .finish()
    }
}
