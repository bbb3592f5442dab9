//! Normalized domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::input::{RawDomain, ToLabels};
use crate::error::Error;
use crate::NORMALIZER;
use core::{fmt, str};

//------------ NormalizedDomain ----------------------------------------------

/// A normalized domain name.
///
/// The value keeps both the canonical string form of the domain name and
/// its labels. The labels are kept in reverse order, i.e., the most
/// significant label, usually the top-level domain, comes first. This is
/// the order needed for walking a domain name down the tree, for instance
/// when matching it against the Public Suffix List.
///
/// Joining the labels in reverse order with dots gives the canonical string.
/// If the domain name had a trailing dot, the first label is empty.
///
/// A normalized domain name is either created by normalizing some raw input
/// via [`NormalizedDomain::new`], the [`FromStr`][str::FromStr] impl, or a
/// [`Normalizer`][super::Normalizer], or from labels via
/// [`NormalizedDomain::from_labels`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NormalizedDomain {
    /// The canonical string form.
    name: String,

    /// The labels, most significant first.
    labels: Vec<String>,
}

/// # Creation
///
impl NormalizedDomain {
    /// Normalizes a domain name using the default normalizer.
    pub fn new<'a>(domain: impl Into<RawDomain<'a>>) -> Result<Self, Error> {
        NORMALIZER.domain(domain)
    }

    /// Creates a domain name from its labels, most significant first.
    ///
    /// The labels are taken over without any checks.
    pub fn from_labels(labels: Vec<String>) -> Self {
        let mut name = String::new();
        for (idx, label) in labels.iter().rev().enumerate() {
            if idx > 0 {
                name.push('.');
            }
            name.push_str(label);
        }
        NormalizedDomain { name, labels }
    }

    /// Returns the absent domain name.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// # Access
///
impl NormalizedDomain {
    /// Returns the canonical string form of the domain name.
    ///
    /// This is empty for both the absent and the empty domain name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the labels, most significant first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of labels.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether this is the absent domain name.
    ///
    /// The absent domain name doesn’t have any labels, not even an empty
    /// one.
    pub fn is_absent(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the most significant label.
    pub fn tld(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// Converts the value into its labels.
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

/// # Conversion
///
impl NormalizedDomain {
    /// Returns the domain name with all labels in ASCII form.
    pub fn to_ascii(&self) -> Result<Self, Error> {
        NORMALIZER.domain_to_ascii(self)
    }

    /// Returns the domain name with all labels in Unicode form.
    pub fn to_unicode(&self) -> Result<Self, Error> {
        NORMALIZER.domain_to_unicode(self)
    }
}

//--- FromStr

impl str::FromStr for NormalizedDomain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//--- AsRef

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- ToLabels

impl ToLabels for NormalizedDomain {
    fn iter_labels(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.labels.iter_labels()
    }
}

impl<'a> From<&'a NormalizedDomain> for RawDomain<'a> {
    fn from(domain: &'a NormalizedDomain) -> Self {
        RawDomain::from_labels(domain)
    }
}

//--- Display

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for NormalizedDomain {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct("NormalizedDomain", &self.labels)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NormalizedDomain {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = NormalizedDomain;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sequence of domain name labels")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                <Vec<String> as serde::Deserialize>::deserialize(deserializer)
                    .map(NormalizedDomain::from_labels)
            }
        }

        deserializer.deserialize_newtype_struct("NormalizedDomain", Visitor)
    }
}

//============ Testing =======================================================
