//! Normalizing domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::domain::NormalizedDomain;
use super::grammar;
use super::input::RawDomain;
use crate::error::{Error, InvalidDomain, TypeMismatch};
use crate::idna::{self, IdnaEngine, Uts46Engine};
use crate::utils::percent;
use std::net::Ipv4Addr;
use tracing::trace;

//------------ Normalizer ----------------------------------------------------

/// Turns raw domain names into normalized label sequences.
///
/// A normalizer holds nothing but the IDNA engine used for converting
/// internationalized domain names. It can be shared freely and any type
/// that needs normalized domain names can keep one around and delegate to
/// it.
///
/// Normalization of textual input happens in these steps:
///
/// 1. An IPv4 address in dotted-quad notation is rejected.
/// 2. The input is percent-decoded.
/// 3. If the decoded input is a well-formed ASCII domain name, it is
///    lowercased and split into labels.
/// 4. Otherwise, if it contains any of `:/?#[]@` or a space, it is
///    rejected.
/// 5. Otherwise, if it is printable ASCII only, it is rejected as
///    malformed.
/// 6. Otherwise, the original input is converted to ASCII and back to
///    Unicode by the IDNA engine and the Unicode form is split into labels.
///
/// In all cases, the labels are returned in reverse order, with the most
/// significant label, usually the top-level domain, first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer<E = Uts46Engine> {
    /// The IDNA engine.
    engine: E,
}

impl Normalizer<Uts46Engine> {
    /// Creates a normalizer using the default UTS #46 engine.
    pub const fn new() -> Self {
        Normalizer {
            engine: Uts46Engine::new(),
        }
    }

    /// Creates a normalizer using a UTS #46 engine with the given config.
    pub const fn with_config(config: idna::Config) -> Self {
        Normalizer {
            engine: Uts46Engine::with_config(config),
        }
    }
}

impl<E: IdnaEngine> Normalizer<E> {
    /// Creates a normalizer using the given IDNA engine.
    pub const fn with_engine(engine: E) -> Self {
        Normalizer { engine }
    }

    /// Returns a reference to the IDNA engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Normalizes a domain name into its labels.
    ///
    /// The labels are returned most significant first.
    pub fn normalize<'a>(
        &self,
        domain: impl Into<RawDomain<'a>>,
    ) -> Result<Vec<String>, Error> {
        match domain.into() {
            RawDomain::Labels(labels) => {
                trace!("taking over {} labels", labels.len());
                Ok(labels)
            }
            RawDomain::Absent => Ok(Vec::new()),
            RawDomain::Empty => Ok(vec![String::new()]),
            RawDomain::Unsupported(type_name) => {
                Err(TypeMismatch::new(type_name).into())
            }
            RawDomain::Text(text) => {
                self.normalize_text(&text).map_err(Into::into)
            }
        }
    }

    /// Normalizes a domain name into a [`NormalizedDomain`].
    pub fn domain<'a>(
        &self,
        domain: impl Into<RawDomain<'a>>,
    ) -> Result<NormalizedDomain, Error> {
        self.normalize(domain).map(NormalizedDomain::from_labels)
    }

    /// Converts a domain name into its ASCII form.
    ///
    /// See [`idna::to_ascii`] for details.
    pub fn to_ascii(&self, domain: &str) -> Result<String, InvalidDomain> {
        idna::to_ascii(&self.engine, domain)
    }

    /// Converts a domain name into its Unicode form.
    ///
    /// See [`idna::to_unicode`] for details.
    pub fn to_unicode(&self, domain: &str) -> Result<String, InvalidDomain> {
        idna::to_unicode(&self.engine, domain)
    }

    /// Converts a normalized domain into its ASCII form.
    pub fn domain_to_ascii(
        &self,
        domain: &NormalizedDomain,
    ) -> Result<NormalizedDomain, Error> {
        if domain.is_absent() {
            return Ok(domain.clone());
        }
        self.domain(self.to_ascii(domain.as_str())?)
    }

    /// Converts a normalized domain into its Unicode form.
    pub fn domain_to_unicode(
        &self,
        domain: &NormalizedDomain,
    ) -> Result<NormalizedDomain, Error> {
        if domain.is_absent() {
            return Ok(domain.clone());
        }
        self.domain(self.to_unicode(domain.as_str())?)
    }

    fn normalize_text(
        &self,
        text: &str,
    ) -> Result<Vec<String>, InvalidDomain> {
        if is_ipv4_literal(text) {
            return Err(InvalidDomain::ipv4_host(text));
        }
        let decoded = percent::decode(text);
        if grammar::is_match(&decoded) {
            trace!("{:?} is a well-formed ASCII domain name", text);
            return Ok(split_labels(
                &percent::display_lossy(&decoded).to_ascii_lowercase(),
            ));
        }
        if decoded.iter().any(is_gen_delim) {
            return Err(InvalidDomain::invalid_characters(text));
        }
        if percent::is_printable_ascii(&decoded) {
            return Err(InvalidDomain::malformed_labels(text));
        }
        trace!("{:?} is an internationalized domain name", text);
        let ascii = self.to_ascii(text)?;
        let unicode = self.to_unicode(&ascii)?;
        Ok(split_labels(&unicode))
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns whether a string is an IPv4 address in dotted-quad notation.
pub fn is_ipv4_literal(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// Returns whether an octet is a URI generic delimiter or a space.
///
/// The dot is excluded as it separates labels.
fn is_gen_delim(ch: &u8) -> bool {
    matches!(*ch, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@' | b' ')
}

/// Splits a domain name into its labels, most significant first.
fn split_labels(domain: &str) -> Vec<String> {
    domain.split('.').rev().map(String::from).collect()
}

//============ Testing =======================================================
