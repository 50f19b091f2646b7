// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vocabularies used by virtual test access point (VTAP) records.

use serde::{Deserialize, Serialize};

/// Encapsulation header applied to a VTAP's mirrored traffic.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EncapsulationProtocol {
    Vxlan,
}
variant_vocabulary!(EncapsulationProtocol, "VtapEncapsulationProtocol");

/// Priority given to mirrored traffic.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficMode {
    #[default]
    Default,
    Priority,
}
variant_vocabulary!(TrafficMode, "VtapTrafficMode");

/// Kind of resource that receives mirrored packets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VtapTargetType {
    Vnic,
    NetworkLoadBalancer,
    IpAddress,
}
variant_vocabulary!(VtapTargetType, "VtapTargetType");

/// Kind of resource whose packets are captured.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VtapSourceType {
    Vnic,
    Subnet,
    LoadBalancer,
    DbSystem,
    ExadataVmCluster,
    AutonomousDataWarehouse,
}
variant_vocabulary!(VtapSourceType, "VtapSourceType");

#[cfg(test)]
mod test {
    use super::*;
    use crate::Vocabulary;

    #[test]
    fn declared_values() {
        assert_eq!(EncapsulationProtocol::values(), &["VXLAN"]);
        assert_eq!(TrafficMode::values(), &["DEFAULT", "PRIORITY"]);
        assert_eq!(
            VtapTargetType::values(),
            &["VNIC", "NETWORK_LOAD_BALANCER", "IP_ADDRESS"]
        );
        assert_eq!(
            VtapSourceType::values(),
            &[
                "VNIC",
                "SUBNET",
                "LOAD_BALANCER",
                "DB_SYSTEM",
                "EXADATA_VM_CLUSTER",
                "AUTONOMOUS_DATA_WAREHOUSE",
            ]
        );
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(
            EncapsulationProtocol::parse("VXLAN"),
            Some(EncapsulationProtocol::Vxlan)
        );
        assert_eq!(EncapsulationProtocol::parse("vxlan"), None);
        assert_eq!(EncapsulationProtocol::parse(" VXLAN"), None);
        assert_eq!(
            VtapSourceType::parse("EXADATA_VM_CLUSTER"),
            Some(VtapSourceType::ExadataVmCluster)
        );
    }

    #[test]
    fn traffic_mode_defaults_to_default() {
        assert_eq!(TrafficMode::default(), TrafficMode::Default);
        assert_eq!(TrafficMode::default().as_str(), "DEFAULT");
    }
}
