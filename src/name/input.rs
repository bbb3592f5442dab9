//! Raw input for domain name normalization.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::any::type_name;
use core::fmt;
use std::borrow::Cow;

//------------ ToLabels ------------------------------------------------------

/// A type that already represents a domain name as a sequence of labels.
///
/// The labels are produced starting with the most significant one, i.e.,
/// the top-level domain comes first. Such a sequence is taken over as is by
/// normalization without any further checks.
pub trait ToLabels {
    /// Returns an iterator over the labels, most significant first.
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Collects the labels into a vec.
    fn to_label_vec(&self) -> Vec<String> {
        self.iter_labels().map(String::from).collect()
    }
}

impl ToLabels for [String] {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl ToLabels for Vec<String> {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().iter_labels()
    }
}

impl<'s> ToLabels for [&'s str] {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().copied())
    }
}

impl<'s> ToLabels for Vec<&'s str> {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().iter_labels()
    }
}

impl<'a, T: ToLabels + ?Sized> ToLabels for &'a T {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).iter_labels()
    }
}

//------------ RawDomain -----------------------------------------------------

/// The input to domain name normalization.
///
/// Domain names come in a number of shapes. Each of them is treated
/// differently by normalization:
///
/// * [`Absent`][Self::Absent] means there is no domain name at all and
///   results in no labels,
/// * [`Empty`][Self::Empty] is the empty string and results in a single
///   empty label,
/// * [`Text`][Self::Text] is anything that is or has been turned into a
///   string and is parsed and validated,
/// * [`Labels`][Self::Labels] are labels produced by a [`ToLabels`] type,
///   most significant first, and are taken over unchanged, and
/// * [`Unsupported`][Self::Unsupported] is a value that can’t be a domain
///   name and always results in an error.
///
/// The various `From` impls pick the right variant. Note that only an
/// actual empty string becomes [`Empty`][Self::Empty]. Scalars that turn
/// into an empty string, such as `false`, become empty
/// [`Text`][Self::Text] which is rejected as malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RawDomain<'a> {
    /// No domain name was given.
    Absent,

    /// The empty string.
    Empty,

    /// A textual domain name.
    Text(Cow<'a, str>),

    /// The labels of a domain name, most significant first.
    Labels(Vec<String>),

    /// A value of the given type that can’t be a domain name.
    Unsupported(&'static str),
}

impl<'a> RawDomain<'a> {
    /// Creates a textual domain name from anything that can be displayed.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        RawDomain::Text(Cow::Owned(value.to_string()))
    }

    /// Creates a value from a label sequence.
    pub fn from_labels<T: ToLabels + ?Sized>(labels: &T) -> Self {
        RawDomain::Labels(labels.to_label_vec())
    }

    /// Creates a value for an unsupported type.
    pub fn unsupported<T: ?Sized>() -> Self {
        RawDomain::Unsupported(type_name::<T>())
    }

    /// Returns whether this is the absent domain name.
    pub fn is_absent(&self) -> bool {
        matches!(self, RawDomain::Absent)
    }

    /// Converts the value into one that owns all its data.
    pub fn into_owned(self) -> RawDomain<'static> {
        match self {
            RawDomain::Absent => RawDomain::Absent,
            RawDomain::Empty => RawDomain::Empty,
            RawDomain::Text(text) => {
                RawDomain::Text(Cow::Owned(text.into_owned()))
            }
            RawDomain::Labels(labels) => RawDomain::Labels(labels),
            RawDomain::Unsupported(name) => RawDomain::Unsupported(name),
        }
    }
}

//--- From

impl<'a> From<&'a str> for RawDomain<'a> {
    fn from(s: &'a str) -> Self {
        if s.is_empty() {
            RawDomain::Empty
        } else {
            RawDomain::Text(Cow::Borrowed(s))
        }
    }
}

impl<'a> From<&'a String> for RawDomain<'a> {
    fn from(s: &'a String) -> Self {
        s.as_str().into()
    }
}

impl<'a> From<String> for RawDomain<'a> {
    fn from(s: String) -> Self {
        if s.is_empty() {
            RawDomain::Empty
        } else {
            RawDomain::Text(Cow::Owned(s))
        }
    }
}

impl<'a> From<Cow<'a, str>> for RawDomain<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        match s {
            Cow::Borrowed(s) => s.into(),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl<'a, T: Into<RawDomain<'a>>> From<Option<T>> for RawDomain<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => RawDomain::Absent,
        }
    }
}

impl<'a> From<&'a [String]> for RawDomain<'a> {
    fn from(labels: &'a [String]) -> Self {
        RawDomain::from_labels(labels)
    }
}

impl<'a> From<Vec<String>> for RawDomain<'a> {
    fn from(labels: Vec<String>) -> Self {
        RawDomain::Labels(labels)
    }
}

impl<'a> From<&'a Vec<String>> for RawDomain<'a> {
    fn from(labels: &'a Vec<String>) -> Self {
        RawDomain::from_labels(labels)
    }
}

impl<'a> From<bool> for RawDomain<'a> {
    fn from(value: bool) -> Self {
        RawDomain::Text(Cow::Borrowed(if value { "1" } else { "" }))
    }
}

macro_rules! from_int {
    ( $( $int:ty ),* ) => {
        $(
            impl<'a> From<$int> for RawDomain<'a> {
                fn from(value: $int) -> Self {
                    RawDomain::display(&value)
                }
            }
        )*
    }
}

from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RawDomain<'static> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::{IgnoredAny, MapAccess, SeqAccess};

        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = RawDomain<'static>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a domain name")
            }

            fn visit_unit<E: serde::de::Error>(
                self,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::Absent)
            }

            fn visit_none<E: serde::de::Error>(
                self,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::Absent)
            }

            fn visit_some<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_any(self)
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::from(String::from(v)))
            }

            fn visit_string<E: serde::de::Error>(
                self,
                v: String,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::from(v))
            }

            fn visit_bool<E: serde::de::Error>(
                self,
                v: bool,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::from(v))
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                v: i64,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::from(v))
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                v: u64,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::from(v))
            }

            fn visit_f64<E: serde::de::Error>(
                self,
                v: f64,
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::display(&v))
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                _v: &[u8],
            ) -> Result<Self::Value, E> {
                Ok(RawDomain::Unsupported("bytes"))
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut labels = Vec::new();
                while let Some(label) = seq.next_element::<String>()? {
                    labels.push(label);
                }
                Ok(RawDomain::Labels(labels))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(RawDomain::Unsupported("map"))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

//============ Testing =======================================================
