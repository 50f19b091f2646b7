// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! VNIC shapes: the fixed-capacity profiles a VNIC is allocated under in the
//! data plane.
//!
//! Shape names follow `FAMILY{WEIGHT}_{GEN}_{BANDWIDTH}`, e.g.
//! `SUBCORE_VM_FIXED0450_X9_50G`. The catalogue is large, so it lives in
//! `data/vnic_shapes.txt` and is parsed into a single table on first use.
//!
//! Three records carry a shape field (create, read and update of an
//! attachment). They currently accept the same catalogue, but each gets its
//! own tag type so one cannot be stored in another's field without an
//! explicit [`VnicShapeTag::recast`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::vocabulary::{self, EnumTable, Vocabulary};

const VNIC_SHAPES: &str = include_str!("../data/vnic_shapes.txt");

fn shape_values() -> impl Iterator<Item = &'static str> {
    VNIC_SHAPES
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn shape_table() -> &'static EnumTable {
    static TABLE: OnceLock<EnumTable> = OnceLock::new();
    vocabulary::load(&TABLE, "VnicShape", shape_values)
}

/// A tag naming one entry of the VNIC shape catalogue.
pub trait VnicShapeTag: Vocabulary {
    /// Name the same shape with the tag type of another record.
    ///
    /// Returns `None` if the other record's vocabulary does not carry this
    /// shape.
    fn recast<T: VnicShapeTag>(self) -> Option<T> {
        T::parse(self.as_str())
    }
}

macro_rules! shape_vocabulary {
    ($(#[$attr:meta])* $ty:ident, $name:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $ty(u16);

        impl Vocabulary for $ty {
            const NAME: &'static str = $name;

            fn table() -> &'static EnumTable {
                shape_table()
            }

            fn from_index(index: usize) -> Option<Self> {
                if index < Self::table().len() {
                    u16::try_from(index).ok().map(Self)
                } else {
                    None
                }
            }

            fn index(self) -> usize {
                usize::from(self.0)
            }
        }

        impl VnicShapeTag for $ty {}

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.as_str())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = strum::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or(strum::ParseError::VariantNotFound)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'d> Deserialize<'d> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'d>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).ok_or_else(|| {
                    de::Error::unknown_variant(&s, Self::values())
                })
            }
        }
    };
}

shape_vocabulary!(
    /// Shape requested when creating an internal VNIC attachment.
    CreateAttachmentVnicShape,
    "CreateInternalVnicAttachmentDetailsVnicShape"
);

shape_vocabulary!(
    /// Shape reported on an existing internal VNIC attachment.
    AttachmentVnicShape,
    "InternalVnicAttachmentVnicShape"
);

shape_vocabulary!(
    /// Shape an attachment is moved to by a shape update.
    UpdateVnicShape,
    "UpdateVnicShapeDetailsVnicShape"
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalogue_loads_without_duplicates() {
        let table = EnumTable::new("VnicShape", shape_values())
            .expect("shape catalogue is well formed");
        assert_eq!(table.len(), 867);
    }

    #[test]
    fn declaration_order_is_kept() {
        assert_eq!(
            &CreateAttachmentVnicShape::values()[..4],
            &["DYNAMIC", "FIXED0040", "FIXED0060", "FIXED0060_PSM"]
        );
        assert_eq!(
            AttachmentVnicShape::values().last(),
            Some(&"ENTIREHOST_X9_50G")
        );
        let entirehost = AttachmentVnicShape::parse("ENTIREHOST").unwrap();
        assert_eq!(entirehost.index(), 10);
    }

    #[test]
    fn parse_round_trips_every_value() {
        for value in CreateAttachmentVnicShape::values() {
            let tag = CreateAttachmentVnicShape::parse(value)
                .unwrap_or_else(|| panic!("{value} should parse"));
            assert_eq!(tag.as_str(), *value);
            assert_eq!(tag.to_string(), *value);
        }
        assert_eq!(
            CreateAttachmentVnicShape::all().len(),
            CreateAttachmentVnicShape::values().len()
        );
    }

    #[test]
    fn copies_are_identical() {
        assert_eq!(
            CreateAttachmentVnicShape::values(),
            AttachmentVnicShape::values()
        );
        assert_eq!(AttachmentVnicShape::values(), UpdateVnicShape::values());
        for value in ["SUBCORE_VM_FIXED0450_X9_50G", "FIXED0040_25G", "nope"]
        {
            assert_eq!(
                CreateAttachmentVnicShape::parse(value).map(|t| t.index()),
                AttachmentVnicShape::parse(value).map(|t| t.index()),
            );
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(AttachmentVnicShape::contains("DYNAMIC"));
        assert!(!AttachmentVnicShape::contains("dynamic"));
        assert!(!AttachmentVnicShape::contains("Dynamic"));
        assert!(AttachmentVnicShape::parse("DYNAMIC ").is_none());
    }

    #[test]
    fn recast_keeps_the_shape() {
        let create: CreateAttachmentVnicShape =
            "SUBCORE_VM_FIXED0450_X9_50G".parse().unwrap();
        let read: AttachmentVnicShape = create.recast().unwrap();
        assert_eq!(read.as_str(), "SUBCORE_VM_FIXED0450_X9_50G");
        assert_eq!(
            format!("{read:?}"),
            "AttachmentVnicShape(SUBCORE_VM_FIXED0450_X9_50G)"
        );
    }

    #[test]
    fn from_index_is_bounded() {
        let len = UpdateVnicShape::values().len();
        assert!(UpdateVnicShape::from_index(len - 1).is_some());
        assert!(UpdateVnicShape::from_index(len).is_none());
    }

    #[test]
    fn serde_rejects_unknown_shapes() {
        let tag: UpdateVnicShape =
            serde_json::from_str("\"FIXED0040\"").unwrap();
        assert_eq!(tag.as_str(), "FIXED0040");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"FIXED0040\"");
        assert!(serde_json::from_str::<UpdateVnicShape>("\"TURBO_9000\"")
            .is_err());
    }
}
