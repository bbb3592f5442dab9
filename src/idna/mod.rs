//! Conversion between Unicode and ASCII domain names.
//!
//! Internationalized domain names (IDNs) contain labels with non-ASCII
//! characters. In order to use them in the DNS, these labels are converted
//! into an ASCII compatible encoding, Punycode prefixed with `xn--`. This
//! module provides this conversion in both directions following the
//! processing rules of [UTS #46].
//!
//! The actual processing is done by an [`IdnaEngine`]. The default engine,
//! [`Uts46Engine`], is based on the [`idna`](::idna) crate and can be
//! tweaked through its [`Config`].
//!
//! The functions [`to_ascii`] and [`to_unicode`] wrap an engine and turn
//! its reported errors into an [`InvalidDomain`] error.
//!
//! [UTS #46]: https://www.unicode.org/reports/tr46/

pub use self::engine::{Config, Conversion, IdnaEngine, Uts46Engine};
pub use self::errors::{decode_errors, IdnaErrors};

use crate::error::InvalidDomain;
use crate::utils::percent;
use tracing::{debug, trace};

#[macro_use]
mod macros;

mod engine;
mod errors;

//------------ Conversion Functions ------------------------------------------

/// Converts a domain name into its ASCII form.
///
/// The domain name is percent-decoded first. If the result contains
/// printable ASCII only, it is returned lowercased without consulting the
/// engine at all. Otherwise, the engine converts it and the function fails
/// if the engine reports any error.
///
/// A successful conversion must not leave a percent sign in the result. If
/// it does, the input was percent-encoded in a way that no valid host
/// name can be and the function fails, too.
pub fn to_ascii<E: IdnaEngine + ?Sized>(
    engine: &E,
    domain: &str,
) -> Result<String, InvalidDomain> {
    let decoded = percent::decode(domain);
    if percent::is_printable_ascii(&decoded) {
        trace!("{:?} is printable ASCII", domain);
        return Ok(percent::display_lossy(&decoded).to_ascii_lowercase());
    }
    let res = engine.to_ascii(&decoded);
    if !res.is_ok() {
        debug!(
            "IDNA to ASCII conversion of {:?} failed: {:?}",
            domain, res.errors
        );
        return Err(InvalidDomain::idna(
            percent::display_lossy(&decoded),
            res.errors,
        ));
    }
    if res.output.contains('%') {
        return Err(InvalidDomain::invalid_characters(
            percent::display_lossy(&decoded),
        ));
    }
    Ok(res.output)
}

/// Converts a domain name into its Unicode form.
///
/// Unlike [`to_ascii`], this always asks the engine.
pub fn to_unicode<E: IdnaEngine + ?Sized>(
    engine: &E,
    domain: &str,
) -> Result<String, InvalidDomain> {
    let res = engine.to_unicode(domain.as_bytes());
    if !res.is_ok() {
        debug!(
            "IDNA to Unicode conversion of {:?} failed: {:?}",
            domain, res.errors
        );
        return Err(InvalidDomain::idna(domain, res.errors));
    }
    Ok(res.output)
}

//============ Testing =======================================================
