//! Attribute values and insertion-ordered attribute maps.
//!
//! Serialization follows the boolean-attribute convention: `true` renders the
//! bare name, `false` renders nothing, strings and numbers render as a quoted,
//! escaped value.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::element::is_valid_name;
use crate::escape::{escape_attr, format_number};
use crate::PlateError;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

macro_rules! attr_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Num(value as f64)
                }
            }
        )*
    };
}

attr_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Attribute map with unique names, iterated in insertion order.
///
/// Names that cannot be serialized never enter the map; they are remembered
/// so validating constructors can report them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
    rejected: Vec<String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attrs::insert`].
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert an attribute. An existing name keeps its position and has its
    /// value replaced; the previous value is returned.
    ///
    /// An invalid name is dropped and recorded; see [`Attrs::rejected`].
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        let name = name.into();
        if !is_valid_name(&name) {
            warn!(name = %name, "dropping invalid attribute name");
            if !self.rejected.contains(&name) {
                self.rejected.push(name);
            }
            return None;
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Names dropped by [`Attrs::insert`] because they would break the markup.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Fail on the first name rejected for the opening tag of `tag`.
    pub(crate) fn validate(&self, tag: &str) -> Result<(), PlateError> {
        match self.rejected.first() {
            Some(name) => Err(PlateError::InvalidAttributeName {
                tag: tag.to_owned(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Append the serialized attributes, each with its leading space.
    pub(crate) fn write_to(&self, out: &mut String) {
        for (name, value) in &self.entries {
            match value {
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Num(n) => write_pair(out, name, &format_number(*n)),
                AttrValue::Str(s) => write_pair(out, name, s),
            }
        }
    }
}

fn write_pair(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = Attrs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to strings, numbers or booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attrs, A::Error> {
                let mut attrs = Attrs::new();
                while let Some((name, value)) = map.next_entry::<String, AttrValue>()? {
                    attrs.insert(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}
