//! Domain name normalization and IDNA conversion.
//!
//! This crate turns domain names as they are found in the wild – in URLs,
//! configuration files, or user input – into a canonical sequence of labels
//! that can safely be matched against, for instance, the rules of the
//! Public Suffix List.
//!
//! Normalization deals with three kinds of input at once: plain ASCII host
//! names, host names with percent-encoded octets, and internationalized
//! domain names (IDNs) containing non-ASCII characters. The latter are
//! validated and mapped to their canonical form according to [UTS #46].
//!
//! ```
//! use domain_idna::normalize;
//!
//! assert_eq!(
//!     normalize("wWw.uLb.Ac.be").unwrap(),
//!     ["be", "ac", "ulb", "www"]
//! );
//! assert_eq!(
//!     normalize("www.Bücher.example").unwrap(),
//!     ["example", "bücher", "www"]
//! );
//! assert!(normalize("192.168.0.1").is_err());
//! ```
//!
//! # Modules
//!
//! * [name] contains the [`Normalizer`][name::Normalizer], the types
//!   describing its input and output, and the ASCII domain name grammar,
//! * [idna] provides the conversion between Unicode and ASCII domain names
//!   and the error flags reported by it,
//! * [error] defines the error types, and
//! * [utils] contains helpers for percent decoding.
//!
//! The functions at the crate root are shortcuts that use a normalizer with
//! the default configuration.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serialization and deserialization of
//!   [`NormalizedDomain`][name::NormalizedDomain] and
//!   [`IdnaErrors`][idna::IdnaErrors] and deserializing
//!   [`RawDomain`][name::RawDomain] from self-describing formats via the
//!   [serde](https://serde.rs/) crate.
//!
//! [UTS #46]: https://www.unicode.org/reports/tr46/

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::error::{Error, InvalidDomain, TypeMismatch};
pub use self::name::{NormalizedDomain, RawDomain, ToLabels};

pub mod error;
pub mod idna;
pub mod name;
pub mod utils;

/// The normalizer used by the functions below.
pub(crate) static NORMALIZER: name::Normalizer = name::Normalizer::new();

/// Normalizes a domain name into its labels, most significant first.
///
/// See [`Normalizer`][name::Normalizer] for the details.
pub fn normalize<'a>(
    domain: impl Into<RawDomain<'a>>,
) -> Result<Vec<String>, Error> {
    NORMALIZER.normalize(domain)
}

/// Converts a possibly percent-encoded domain name into its ASCII form.
pub fn idn_to_ascii(domain: &str) -> Result<String, InvalidDomain> {
    NORMALIZER.to_ascii(domain)
}

/// Converts an ASCII domain name into its Unicode form.
pub fn idn_to_unicode(domain: &str) -> Result<String, InvalidDomain> {
    NORMALIZER.to_unicode(domain)
}
