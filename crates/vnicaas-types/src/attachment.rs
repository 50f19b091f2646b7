// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vocabularies used by VNIC attachment records.

use serde::{Deserialize, Serialize};

/// The current state of a VNIC attachment.
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
pub enum AttachmentLifecycleState {
    Attaching,
    Attached,
    Detaching,
    Detached,
}
variant_vocabulary!(
    AttachmentLifecycleState,
    "InternalVnicAttachmentLifecycleState"
);

/// How the target instance of an attachment is launched.
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
pub enum LaunchType {
    Marketplace,
    /// Assumed by the service when the request does not name a launch type.
    #[default]
    Standard,
}
variant_vocabulary!(LaunchType, "LaunchType");

#[cfg(test)]
mod test {
    use super::*;
    use crate::Vocabulary;
    use std::str::FromStr;

    #[test]
    fn lifecycle_state_values() {
        assert_eq!(
            AttachmentLifecycleState::values(),
            &["ATTACHING", "ATTACHED", "DETACHING", "DETACHED"]
        );
        assert_eq!(
            AttachmentLifecycleState::parse("DETACHING"),
            Some(AttachmentLifecycleState::Detaching)
        );
        assert_eq!(AttachmentLifecycleState::parse("attached"), None);
        assert_eq!(AttachmentLifecycleState::Attached.as_str(), "ATTACHED");
    }

    #[test]
    fn launch_type_values() {
        assert_eq!(LaunchType::values(), &["MARKETPLACE", "STANDARD"]);
        assert_eq!(LaunchType::default(), LaunchType::Standard);
        assert_eq!(
            LaunchType::all(),
            vec![LaunchType::Marketplace, LaunchType::Standard]
        );
    }

    #[test]
    fn strum_and_table_agree() {
        for tag in AttachmentLifecycleState::all() {
            assert_eq!(tag.to_string(), tag.as_str());
            assert_eq!(
                AttachmentLifecycleState::from_str(tag.as_str()).unwrap(),
                tag
            );
        }
        for tag in LaunchType::all() {
            assert_eq!(tag.to_string(), tag.as_str());
            assert_eq!(LaunchType::from_str(tag.as_str()).unwrap(), tag);
        }
        assert!(LaunchType::from_str("standard").is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(
            serde_json::to_string(&LaunchType::Marketplace).unwrap(),
            "\"MARKETPLACE\""
        );
        let state: AttachmentLifecycleState =
            serde_json::from_str("\"ATTACHING\"").unwrap();
        assert_eq!(state, AttachmentLifecycleState::Attaching);
    }
}
