//! Domain name normalization.
//!
//! This module turns domain names as they are found in the wild into a
//! canonical sequence of labels. The input can be given in a number of
//! shapes collected in the [`RawDomain`] type: as text, possibly
//! percent-encoded and possibly containing non-ASCII characters, as a
//! label sequence produced by some type implementing [`ToLabels`], or as
//! the absent or empty domain name.
//!
//! The work is done by a [`Normalizer`]. The result is either a plain
//! vec of labels or a [`NormalizedDomain`] which also keeps the canonical
//! string form. In both cases, labels are ordered most significant first.
//!
//! The ASCII grammar used to recognize domain names that need no IDNA
//! processing is available via [`is_well_formed`].

pub use self::domain::NormalizedDomain;
pub use self::grammar::{LABEL_PATTERN, MAX_LABELS, MAX_LABEL_LEN};
pub use self::input::{RawDomain, ToLabels};
pub use self::normalizer::{is_ipv4_literal, Normalizer};

mod domain;
mod grammar;
mod input;
mod normalizer;

/// Returns whether the octets are a well-formed ASCII domain name.
///
/// A well-formed domain name has between 1 and 127 dot-separated labels
/// with an optional trailing dot. Each label consists of 1 to 63 ASCII
/// letters, digits, `_~-!$&'()*+,;=`, or percent-encoded octets.
pub fn is_well_formed(domain: &[u8]) -> bool {
    grammar::is_match(domain)
}
