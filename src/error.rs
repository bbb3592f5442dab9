//! Error types.
//!
//! Normalizing a domain name can fail in two ways: the input is not a
//! valid domain name, reported via [`InvalidDomain`], or it is of a type
//! that can’t be understood as a domain name in the first place, reported
//! via [`TypeMismatch`]. The [`Error`] type combines the two.

use crate::idna::IdnaErrors;
use core::fmt;

//------------ Error ---------------------------------------------------------

/// Normalizing a domain name failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input was not a valid domain name.
    InvalidDomain(InvalidDomain),

    /// The input was of an unsupported type.
    TypeMismatch(TypeMismatch),
}

impl Error {
    /// Returns the invalid domain error if this is one.
    pub fn as_invalid_domain(&self) -> Option<&InvalidDomain> {
        match self {
            Error::InvalidDomain(err) => Some(err),
            Error::TypeMismatch(_) => None,
        }
    }

    /// Returns the type mismatch error if this is one.
    pub fn as_type_mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            Error::InvalidDomain(_) => None,
            Error::TypeMismatch(err) => Some(err),
        }
    }
}

//--- From

impl From<InvalidDomain> for Error {
    fn from(err: InvalidDomain) -> Self {
        Error::InvalidDomain(err)
    }
}

impl From<TypeMismatch> for Error {
    fn from(err: TypeMismatch) -> Self {
        Error::TypeMismatch(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDomain(ref err) => err.fmt(f),
            Error::TypeMismatch(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::InvalidDomain(ref err) => Some(err),
            Error::TypeMismatch(ref err) => Some(err),
        }
    }
}

//------------ InvalidDomain -------------------------------------------------

/// A domain name was invalid.
///
/// The error keeps the offending domain name as well as the reason why it
/// was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidDomain {
    /// The domain name in question.
    domain: String,

    /// Why it was rejected.
    reason: InvalidReason,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InvalidReason {
    /// The domain name is actually an IPv4 address.
    Ipv4Host,

    /// The domain name contains characters never allowed in a host.
    InvalidCharacters,

    /// The domain name is ASCII but its labels are not well-formed.
    MalformedLabels,

    /// The IDNA engine rejected the domain name.
    Idna(IdnaErrors),
}

impl InvalidDomain {
    pub(crate) fn ipv4_host(domain: impl Into<String>) -> Self {
        Self::new(domain, InvalidReason::Ipv4Host)
    }

    pub(crate) fn invalid_characters(domain: impl Into<String>) -> Self {
        Self::new(domain, InvalidReason::InvalidCharacters)
    }

    pub(crate) fn malformed_labels(domain: impl Into<String>) -> Self {
        Self::new(domain, InvalidReason::MalformedLabels)
    }

    pub(crate) fn idna(
        domain: impl Into<String>,
        errors: IdnaErrors,
    ) -> Self {
        Self::new(domain, InvalidReason::Idna(errors))
    }

    fn new(domain: impl Into<String>, reason: InvalidReason) -> Self {
        InvalidDomain {
            domain: domain.into(),
            reason,
        }
    }

    /// Returns the domain name that was rejected.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns whether the domain name was an IPv4 address.
    pub fn is_ipv4_host(&self) -> bool {
        matches!(self.reason, InvalidReason::Ipv4Host)
    }

    /// Returns whether the domain name contained invalid characters.
    ///
    /// This also covers percent-encoded octets that survived IDNA
    /// conversion.
    pub fn is_invalid_characters(&self) -> bool {
        matches!(self.reason, InvalidReason::InvalidCharacters)
    }

    /// Returns whether the domain name had malformed ASCII labels.
    pub fn is_malformed_labels(&self) -> bool {
        matches!(self.reason, InvalidReason::MalformedLabels)
    }

    /// Returns the IDNA errors if the IDNA engine rejected the domain name.
    pub fn idna_errors(&self) -> Option<IdnaErrors> {
        match self.reason {
            InvalidReason::Idna(errors) => Some(errors),
            _ => None,
        }
    }
}

//--- Display and Error

impl fmt::Display for InvalidDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.reason {
            InvalidReason::Ipv4Host => write!(
                f,
                "the domain `{}` is invalid: this is an IPv4 host",
                self.domain
            ),
            InvalidReason::InvalidCharacters => write!(
                f,
                "the domain `{}` is invalid: it contains invalid characters",
                self.domain
            ),
            InvalidReason::MalformedLabels => write!(
                f,
                "the domain `{}` is invalid: the labels are malformed",
                self.domain
            ),
            InvalidReason::Idna(errors) => write!(
                f,
                "the host `{}` is invalid: {}",
                self.domain, errors
            ),
        }
    }
}

impl std::error::Error for InvalidDomain {}

//------------ TypeMismatch --------------------------------------------------

/// A value of an unsupported type was given as a domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeMismatch {
    /// The name of the type that was given.
    type_name: &'static str,
}

impl TypeMismatch {
    pub(crate) fn new(type_name: &'static str) -> Self {
        TypeMismatch { type_name }
    }

    /// Returns the name of the type that was given.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

//--- Display and Error

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expected a domain name, a string, or a label sequence, got {}",
            self.type_name
        )
    }
}

impl std::error::Error for TypeMismatch {}

//============ Testing =======================================================
