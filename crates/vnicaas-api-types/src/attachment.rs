// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal VNIC attachments: service VNICs hosted on a VNICaaS fleet, and
//! attachments of non-service VNICs to compute instances.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vnicaas_types::{
    AttachmentLifecycleState, AttachmentVnicShape, CreateAttachmentVnicShape,
    EnumField, EnumValidationError, EnumValidator, LaunchType,
    UpdateVnicShape,
};

use crate::display::RecordFmt;
use crate::external::CfmMetadata;
use crate::migration::MigrationInfo;
use crate::ValidateEnums;

/// Request to attach a service VNIC to a VNICaaS fleet.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternalVnicAttachmentDetails {
    /// The compartment to contain the VNIC attachment.
    pub compartment_id: String,

    /// A user-friendly name. Does not have to be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The primary private IPv4 address to assign to the VNIC. Assigned
    /// from the subnet if not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,

    /// The compute instance the VNIC serves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// Shared by VNICs drawing on the same resource pool, e.g. the
    /// site or gateway of a group of service VNICs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// The compute instance whose resource pool the VNIC uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id_for_resource_pool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_availability_domain: Option<String>,

    /// The overlay MAC address of the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    /// Index of the NIC the VNIC attaches to (OS boot order).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_index: Option<i64>,

    /// Tag identifying the sending VNIC. Only given when a specific tag is
    /// required, e.g. for reboot migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_tag: Option<i64>,

    /// Shape used to allocate the VNIC's resources in the data plane.
    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub vnic_shape: EnumField<CreateAttachmentVnicShape>,

    /// The substrate IP address of the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate_ip: Option<String>,

    /// Whether VLAN tag 0 may be assigned to this VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_skip_vlan_tag0: Option<bool>,

    /// The shard to attach the VNIC to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub metadata_list: Vec<CfmMetadata>,

    /// How the target instance is launched. The service assumes
    /// [`LaunchType::Standard`] when this is unset.
    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub launch_type: EnumField<LaunchType>,
}

impl CreateInternalVnicAttachmentDetails {
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            display_name: None,
            private_ip: None,
            instance_id: None,
            group_id: None,
            instance_id_for_resource_pool: None,
            internal_availability_domain: None,
            mac_address: None,
            nic_index: None,
            vlan_tag: None,
            vnic_shape: EnumField::unset(),
            substrate_ip: None,
            is_skip_vlan_tag0: None,
            shard_id: None,
            metadata_list: Vec::new(),
            launch_type: EnumField::unset(),
        }
    }

    /// The launch type the service will use: the requested one, or the
    /// default when none is requested. `None` if the requested value is not
    /// a known launch type.
    pub fn effective_launch_type(&self) -> Option<LaunchType> {
        if self.launch_type.is_empty() {
            Some(LaunchType::default())
        } else {
            self.launch_type.tag()
        }
    }
}

impl ValidateEnums for CreateInternalVnicAttachmentDetails {
    fn validate_enums(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .field("VnicShape", &self.vnic_shape)
            .field("LaunchType", &self.launch_type)
            .finish()
    }
}

impl fmt::Display for CreateInternalVnicAttachmentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordFmt::new(f, "CreateInternalVnicAttachmentDetails")
            .field("compartmentId", &self.compartment_id)
            .opt("displayName", &self.display_name)
            .opt("privateIp", &self.private_ip)
            .opt("instanceId", &self.instance_id)
            .opt("groupId", &self.group_id)
            .opt("instanceIdForResourcePool", &self.instance_id_for_resource_pool)
            .opt("internalAvailabilityDomain", &self.internal_availability_domain)
            .opt("macAddress", &self.mac_address)
            .opt("nicIndex", &self.nic_index)
            .opt("vlanTag", &self.vlan_tag)
            .enumeration("vnicShape", &self.vnic_shape)
            .opt("substrateIp", &self.substrate_ip)
            .opt("isSkipVlanTag0", &self.is_skip_vlan_tag0)
            .opt("shardId", &self.shard_id)
            .json(
                "metadataList",
                &self.metadata_list,
                self.metadata_list.is_empty(),
            )
            .enumeration("launchType", &self.launch_type)
            .finish()
    }
}

/// A service VNIC attachment, or an attachment of a non-service VNIC to a
/// compute instance.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternalVnicAttachment {
    /// The compartment containing the VNIC attachment.
    pub compartment_id: String,

    /// The VNIC.
    pub id: String,

    pub lifecycle_state: EnumField<AttachmentLifecycleState>,

    /// The substrate or anycast IP address of the VNICaaS fleet the VNIC is
    /// attached to.
    pub substrate_ip: String,

    pub time_created: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The slot number of the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<i64>,

    #[serde(default, skip_serializing_if = "EnumField::is_empty")]
    pub vnic_shape: EnumField<AttachmentVnicShape>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// Composite of the substrate IP and the data plane IDs of the VCN and
    /// the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_plane_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_availability_domain: Option<String>,

    /// Translated address used to reach internal services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat_ip: Option<String>,

    /// The MAC address of the compute instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_mac: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_tag: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_index: Option<i64>,

    /// Present while the VNIC is being moved between hypervisors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_info: Option<MigrationInfo>,

    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub metadata_list: Vec<CfmMetadata>,
}

impl InternalVnicAttachment {
    pub fn new(
        compartment_id: impl Into<String>,
        id: impl Into<String>,
        lifecycle_state: impl Into<EnumField<AttachmentLifecycleState>>,
        substrate_ip: impl Into<String>,
        time_created: DateTime<Utc>,
    ) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            id: id.into(),
            lifecycle_state: lifecycle_state.into(),
            substrate_ip: substrate_ip.into(),
            time_created,
            display_name: None,
            slot_id: None,
            vnic_shape: EnumField::unset(),
            instance_id: None,
            data_plane_id: None,
            internal_availability_domain: None,
            nat_ip: None,
            overlay_mac: None,
            vlan_tag: None,
            nic_index: None,
            migration_info: None,
            metadata_list: Vec::new(),
        }
    }

    /// Whether a live migration of this VNIC is in progress.
    pub fn is_migrating(&self) -> bool {
        self.migration_info.is_some()
    }
}

impl ValidateEnums for InternalVnicAttachment {
    fn validate_enums(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .field("LifecycleState", &self.lifecycle_state)
            .field("VnicShape", &self.vnic_shape)
            .finish()
    }
}

impl fmt::Display for InternalVnicAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordFmt::new(f, "InternalVnicAttachment")
            .field("compartmentId", &self.compartment_id)
            .field("id", &self.id)
            .enumeration("lifecycleState", &self.lifecycle_state)
            .field("substrateIp", &self.substrate_ip)
            .field("timeCreated", &self.time_created.to_rfc3339())
            .opt("displayName", &self.display_name)
            .opt("slotId", &self.slot_id)
            .enumeration("vnicShape", &self.vnic_shape)
            .opt("instanceId", &self.instance_id)
            .opt("dataPlaneId", &self.data_plane_id)
            .opt("internalAvailabilityDomain", &self.internal_availability_domain)
            .opt("natIp", &self.nat_ip)
            .opt("overlayMac", &self.overlay_mac)
            .opt("vlanTag", &self.vlan_tag)
            .opt("nicIndex", &self.nic_index)
            .opt("migrationInfo", &self.migration_info)
            .json(
                "metadataList",
                &self.metadata_list,
                self.metadata_list.is_empty(),
            )
            .finish()
    }
}

/// Request to move the VNIC of an attachment to another shape.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVnicShapeDetails {
    /// The VNIC whose attachments are updated.
    pub vnic_id: String,

    /// The destination shape. Always sent, even when empty.
    pub vnic_shape: EnumField<UpdateVnicShape>,
}

impl UpdateVnicShapeDetails {
    pub fn new(
        vnic_id: impl Into<String>,
        vnic_shape: impl Into<EnumField<UpdateVnicShape>>,
    ) -> Self {
        Self { vnic_id: vnic_id.into(), vnic_shape: vnic_shape.into() }
    }
}

impl ValidateEnums for UpdateVnicShapeDetails {
    fn validate_enums(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new().field("VnicShape", &self.vnic_shape).finish()
    }
}

impl fmt::Display for UpdateVnicShapeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordFmt::new(f, "UpdateVnicShapeDetails")
            .field("vnicId", &self.vnic_id)
            .enumeration("vnicShape", &self.vnic_shape)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::external::SmartNicVnicAttachmentInfo;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use vnicaas_types::{Vocabulary, VnicShapeTag};

    fn attachment(state: &str) -> InternalVnicAttachment {
        InternalVnicAttachment::new(
            "ocid.compartment.x",
            "ocid.vnic.1",
            EnumField::raw(state),
            "192.0.2.10",
            Utc.with_ymd_and_hms(2016, 8, 25, 21, 10, 29).unwrap(),
        )
    }

    #[test]
    fn valid_creation_payload() {
        let mut details =
            CreateInternalVnicAttachmentDetails::new("ocid.compartment.x");
        details.vnic_shape = EnumField::raw("DYNAMIC");
        details.launch_type = LaunchType::Standard.into();
        assert_eq!(details.validate_enums(), Ok(()));
    }

    #[test]
    fn unknown_shape_is_reported() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        details.vnic_shape = EnumField::raw("TURBO_9000");

        let err = details.validate_enums().unwrap_err();
        assert_eq!(err.failures().len(), 1);
        let text = err.to_string();
        assert!(text.starts_with(
            "unsupported enum value for VnicShape: TURBO_9000. \
             Supported values are: DYNAMIC,FIXED0040,FIXED0060,FIXED0060_PSM,"
        ));
        assert!(!text.contains('\n'));
        assert!(text.ends_with('.'));
    }

    #[test]
    fn two_invalid_enums_in_declaration_order() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        details.launch_type = EnumField::raw("OTHER");
        details.vnic_shape = EnumField::raw("NOPE");

        let text = details.validate_enums().unwrap_err().to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("unsupported enum value for VnicShape: NOPE."));
        assert_eq!(
            lines[1],
            "unsupported enum value for LaunchType: OTHER. \
             Supported values are: MARKETPLACE,STANDARD."
        );
    }

    #[test]
    fn diagnostics_are_deterministic() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        details.vnic_shape = EnumField::raw("NOPE");
        details.launch_type = EnumField::raw("OTHER");
        let first = details.validate_enums().unwrap_err().to_string();
        let second = details.validate_enums().unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn validation_rereads_current_state() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        details.launch_type = EnumField::raw("OTHER");
        assert!(details.validate_enums().is_err());
        details.launch_type.set(LaunchType::Marketplace);
        assert!(details.validate_enums().is_ok());
    }

    #[test]
    fn launch_type_defaults_to_standard() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        assert_eq!(details.effective_launch_type(), Some(LaunchType::Standard));
        details.launch_type = LaunchType::Marketplace.into();
        assert_eq!(
            details.effective_launch_type(),
            Some(LaunchType::Marketplace)
        );
        details.launch_type = EnumField::raw("marketplace");
        assert_eq!(details.effective_launch_type(), None);
    }

    #[test]
    fn lowercase_lifecycle_state_is_rejected() {
        let err = attachment("attached").validate_enums().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported enum value for LifecycleState: attached. \
             Supported values are: ATTACHING,ATTACHED,DETACHING,DETACHED."
        );
    }

    #[test]
    fn lifecycle_state_precedes_shape() {
        let mut record = attachment("GONE");
        record.vnic_shape = EnumField::raw("TINY");
        let err = record.validate_enums().unwrap_err();
        let fields: Vec<_> = err.failures().iter().map(|f| f.field()).collect();
        assert_eq!(fields, ["LifecycleState", "VnicShape"]);
    }

    #[test]
    fn nested_migration_info_is_not_visited() {
        let mut record = attachment("ATTACHED");
        record.vnic_shape = EnumField::raw("DYNAMIC");
        record.migration_info = Some(MigrationInfo::new(
            "session-1",
            SmartNicVnicAttachmentInfo::default(),
            SmartNicVnicAttachmentInfo::default(),
        ));
        assert!(record.is_migrating());
        assert_eq!(record.validate_enums(), Ok(()));
    }

    #[test]
    fn shape_update_requires_a_known_shape() {
        let shape = AttachmentVnicShape::parse("FIXED0040_25G").unwrap();
        let update = UpdateVnicShapeDetails::new(
            "ocid.vnic.1",
            shape.recast::<UpdateVnicShape>(),
        );
        assert_eq!(update.vnic_shape.as_str(), "FIXED0040_25G");
        assert_eq!(update.validate_enums(), Ok(()));

        let update = UpdateVnicShapeDetails::new(
            "ocid.vnic.1",
            EnumField::raw("FIXED9999"),
        );
        let err = update.validate_enums().unwrap_err();
        assert_eq!(err.failures()[0].field(), "VnicShape");
        assert_eq!(err.failures()[0].value(), "FIXED9999");
    }

    #[test]
    fn display_marks_unset_fields() {
        let mut details = CreateInternalVnicAttachmentDetails::new("c");
        details.nic_index = Some(0);
        let text = details.to_string();
        assert!(text.starts_with(
            "CreateInternalVnicAttachmentDetails { compartmentId=c, \
             displayName=<unset>,"
        ));
        assert!(text.contains("nicIndex=0,"));
        assert!(text.contains("vnicShape=<unset>,"));
        assert!(text.ends_with("launchType=<unset> }"));

        let text = attachment("ATTACHED").to_string();
        assert!(text.contains("lifecycleState=ATTACHED,"));
        assert!(text.contains("timeCreated=2016-08-25T21:10:29+00:00,"));
        assert!(text.contains("migrationInfo=<unset>,"));
    }

    proptest! {
        #[test]
        fn unknown_shape_fails_once(shape in "[A-Z0-9_]{1,32}") {
            prop_assume!(!CreateAttachmentVnicShape::contains(&shape));
            let mut details = CreateInternalVnicAttachmentDetails::new("c");
            details.vnic_shape = EnumField::raw(shape.clone());
            let err = details.validate_enums().unwrap_err();
            prop_assert_eq!(err.failures().len(), 1);
            prop_assert_eq!(err.failures()[0].field(), "VnicShape");
            prop_assert_eq!(err.failures()[0].value(), shape.as_str());
        }

        #[test]
        fn known_shapes_validate(index in 0usize..867) {
            let shape = CreateAttachmentVnicShape::values()[index];
            let mut details = CreateInternalVnicAttachmentDetails::new("c");
            details.vnic_shape = EnumField::raw(shape);
            prop_assert!(details.validate_enums().is_ok());
        }
    }
}
