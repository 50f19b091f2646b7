// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::validate::UnsupportedEnumValue;
use crate::vocabulary::Vocabulary;

/// The wire value of an enumerated record field.
///
/// The raw string is kept as received so that a payload carrying a value
/// this crate does not know about still decodes; [`EnumField::check`]
/// reports it instead. An empty string means the field is not set.
///
/// The vocabulary is part of the type, so a field of one vocabulary cannot
/// be assigned to a field of another.
pub struct EnumField<V> {
    raw: String,
    _vocabulary: PhantomData<fn() -> V>,
}

impl<V: Vocabulary> EnumField<V> {
    /// A field that is not set.
    pub fn unset() -> Self {
        Self::raw(String::new())
    }

    /// A field holding `value` verbatim, whether or not it is known.
    pub fn raw(value: impl Into<String>) -> Self {
        Self { raw: value.into(), _vocabulary: PhantomData }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The tag for the stored value, or `None` if the field is unset or
    /// holds an unknown value.
    pub fn tag(&self) -> Option<V> {
        V::parse(&self.raw)
    }

    pub fn is_valid(&self) -> bool {
        V::is_valid(&self.raw)
    }

    /// Check the stored value against the vocabulary, naming the field as
    /// `field` in the resulting diagnostic.
    pub fn check(
        &self,
        field: &'static str,
    ) -> Result<(), UnsupportedEnumValue> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(UnsupportedEnumValue::new::<V>(field, self.raw.clone()))
        }
    }

    pub fn set(&mut self, tag: V) {
        self.raw.clear();
        self.raw.push_str(tag.as_str());
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl<V: Vocabulary> From<V> for EnumField<V> {
    fn from(tag: V) -> Self {
        Self::raw(tag.as_str())
    }
}

impl<V: Vocabulary> From<Option<V>> for EnumField<V> {
    fn from(tag: Option<V>) -> Self {
        tag.map_or_else(Self::unset, Self::from)
    }
}

impl<V: Vocabulary> Default for EnumField<V> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<V> Clone for EnumField<V> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone(), _vocabulary: PhantomData }
    }
}

impl<V> PartialEq for EnumField<V> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<V> Eq for EnumField<V> {}

impl<V> Hash for EnumField<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<V: Vocabulary> fmt::Debug for EnumField<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumField<{}>({:?})", V::NAME, self.raw)
    }
}

/// Displays the raw value; an unset field displays as nothing.
impl<V> fmt::Display for EnumField<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<V> Serialize for EnumField<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

struct EnumFieldVisitor<V>(PhantomData<fn() -> V>);

impl<'d, V: Vocabulary> de::Visitor<'d> for EnumFieldVisitor<V> {
    type Value = EnumField<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string or null", V::NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EnumField::raw(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EnumField::raw(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EnumField::unset())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EnumField::unset())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'d>,
    {
        String::deserialize(deserializer).map(EnumField::raw)
    }
}

/// Accepts a string or `null`; `null` leaves the field unset.
impl<'d, V: Vocabulary> Deserialize<'d> for EnumField<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        deserializer.deserialize_option(EnumFieldVisitor(PhantomData))
    }
}

impl<V: Vocabulary> JsonSchema for EnumField<V> {
    fn schema_name() -> String {
        V::NAME.to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        // The empty string is the unset value.
        let values = V::values().iter().chain(std::iter::once(&""));
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(values.map(|v| (*v).into()).collect()),
            ..Default::default()
        }
        .into()
    }
}
