// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

/// Errors produced while building a vocabulary table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("vocabulary {name} declares {value:?} more than once")]
    Duplicate { name: &'static str, value: &'static str },

    #[error("vocabulary {name} declares no values")]
    Empty { name: &'static str },
}

/// The canonical values of one closed vocabulary, in declaration order,
/// together with a hash index from value to position.
#[derive(Debug)]
pub struct EnumTable {
    name: &'static str,
    values: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

impl EnumTable {
    /// Build a table from `values`, keeping their order. Each value may
    /// appear only once.
    pub fn new<I>(name: &'static str, values: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = &'static str>,
    {
        let values: Vec<&'static str> = values.into_iter().collect();
        if values.is_empty() {
            return Err(TableError::Empty { name });
        }

        let mut index = HashMap::with_capacity(values.len());
        for (pos, value) in values.iter().enumerate() {
            if index.insert(*value, pos).is_some() {
                return Err(TableError::Duplicate { name, value: *value });
            }
        }

        Ok(Self { name, values, index })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical values in declaration order.
    #[inline]
    pub fn values(&self) -> &[&'static str] {
        &self.values
    }

    /// Position of `value` in the declaration order. Matching is exact and
    /// case-sensitive.
    #[inline]
    pub fn position(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Initialize a built-in table on first use.
///
/// Built-in vocabularies are compiled into the crate, so a malformed one is
/// a defect in the crate itself and aborts initialization.
pub(crate) fn load<I>(
    cell: &'static OnceLock<EnumTable>,
    name: &'static str,
    values: impl FnOnce() -> I,
) -> &'static EnumTable
where
    I: IntoIterator<Item = &'static str>,
{
    cell.get_or_init(|| match EnumTable::new(name, values()) {
        Ok(table) => table,
        Err(e) => panic!("invalid built-in vocabulary: {e}"),
    })
}

/// A closed vocabulary of wire strings, with `Self` as its tag type.
///
/// Implementors supply the table and the mapping between tags and table
/// positions; everything else is derived from those.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Name of the vocabulary, used for its JSON Schema definition.
    const NAME: &'static str;

    fn table() -> &'static EnumTable;

    /// The tag at `index` in declaration order.
    fn from_index(index: usize) -> Option<Self>;

    /// Position of this tag in declaration order.
    fn index(self) -> usize;

    /// Canonical wire values in declaration order.
    fn values() -> &'static [&'static str] {
        Self::table().values()
    }

    fn contains(value: &str) -> bool {
        Self::table().contains(value)
    }

    /// Whether `value` may be stored in a field of this vocabulary: either
    /// empty (the field is not set) or a known value.
    fn is_valid(value: &str) -> bool {
        value.is_empty() || Self::contains(value)
    }

    /// Look up the tag for an exact wire value.
    fn parse(value: &str) -> Option<Self> {
        Self::table().position(value).and_then(Self::from_index)
    }

    fn as_str(self) -> &'static str {
        Self::table().values()[self.index()]
    }

    /// Every tag, in declaration order.
    fn all() -> Vec<Self> {
        (0..Self::table().len()).filter_map(Self::from_index).collect()
    }
}

/// Implement [`Vocabulary`] for a fieldless enum deriving
/// `strum::VariantArray` and `strum::IntoStaticStr`. Variant order is the
/// declaration order of the vocabulary.
macro_rules! variant_vocabulary {
    ($ty:ident, $name:literal) => {
        impl $crate::Vocabulary for $ty {
            const NAME: &'static str = $name;

            fn table() -> &'static $crate::EnumTable {
                static TABLE: ::std::sync::OnceLock<$crate::EnumTable> =
                    ::std::sync::OnceLock::new();
                $crate::vocabulary::load(&TABLE, $name, || {
                    <$ty as ::strum::VariantArray>::VARIANTS
                        .iter()
                        .map(|v| <&'static str>::from(*v))
                })
            }

            fn from_index(index: usize) -> Option<Self> {
                <$ty as ::strum::VariantArray>::VARIANTS.get(index).copied()
            }

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}
