// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed vocabularies shared by the VNIC attachment API types.
//!
//! Every enumerated field in the API is a string drawn from a fixed
//! vocabulary. This crate defines each vocabulary once, as an ordered table
//! of canonical wire values, and exposes it through the [`Vocabulary`]
//! trait: the values in declaration order, an O(1) membership test, and an
//! exact-match parse into a typed tag.
//!
//! Record fields store the raw wire string in an [`EnumField`] so that
//! values the vocabulary does not know about survive decoding and can be
//! reported by [`EnumValidator`] instead of failing the whole payload.

#[macro_use]
mod vocabulary;

mod attachment;
mod field;
mod shape;
mod validate;
mod vtap;

pub use attachment::{AttachmentLifecycleState, LaunchType};
pub use field::EnumField;
pub use shape::{
    AttachmentVnicShape, CreateAttachmentVnicShape, UpdateVnicShape,
    VnicShapeTag,
};
pub use validate::{EnumValidationError, EnumValidator, UnsupportedEnumValue};
pub use vocabulary::{EnumTable, TableError, Vocabulary};
pub use vtap::{
    EncapsulationProtocol, TrafficMode, VtapSourceType, VtapTargetType,
};

#[cfg(test)]
mod test {
    use super::*;
    use std::fmt::Debug;

    fn assert_consistent<V: Vocabulary + Debug + PartialEq>() {
        let values = V::values();
        for (i, value) in values.iter().enumerate() {
            let tag = V::parse(value)
                .unwrap_or_else(|| panic!("{}: {value} should parse", V::NAME));
            assert_eq!(tag.index(), i);
            assert_eq!(tag.as_str(), *value);
            assert!(V::is_valid(value));
        }
        assert_eq!(V::all().len(), values.len());
        assert!(V::is_valid(""));
        assert!(!V::contains(""));
        assert_eq!(V::parse(""), None);
    }

    #[test]
    fn every_vocabulary_is_consistent() {
        assert_consistent::<CreateAttachmentVnicShape>();
        assert_consistent::<AttachmentVnicShape>();
        assert_consistent::<UpdateVnicShape>();
        assert_consistent::<AttachmentLifecycleState>();
        assert_consistent::<LaunchType>();
        assert_consistent::<EncapsulationProtocol>();
        assert_consistent::<TrafficMode>();
        assert_consistent::<VtapTargetType>();
        assert_consistent::<VtapSourceType>();
    }
}
