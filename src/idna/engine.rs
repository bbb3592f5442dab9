//! The IDNA engine.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::errors::IdnaErrors;
use ::idna::punycode;
use ::idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};
use std::borrow::Cow;
use std::str;
use tracing::trace;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_normalization::char::is_combining_mark;

//------------ Config --------------------------------------------------------

/// Configuration of UTS #46 processing.
///
/// The defaults are what ICU does when asked for UTS #46 processing without
/// any further options: processing is transitional, hyphens and DNS lengths
/// are checked, the STD3 ASCII rules are not applied.
///
/// Transitional processing maps the deviation characters the way IDNA2003
/// did: `ß` becomes `ss`, `ς` becomes `σ`, and the zero width joiner and
/// non-joiner are removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Check for leading, trailing, and 3rd/4th position hyphens.
    check_hyphens: bool,

    /// Check label and domain name lengths when converting to ASCII.
    verify_dns_length: bool,

    /// Only allow letters, digits, and hyphens in ASCII labels.
    use_std3_ascii_rules: bool,

    /// Map deviation characters before processing.
    transitional: bool,
}

impl Config {
    /// Creates a new default configuration.
    pub const fn new() -> Self {
        Config {
            check_hyphens: true,
            verify_dns_length: true,
            use_std3_ascii_rules: false,
            transitional: true,
        }
    }

    /// Sets whether hyphens are checked.
    #[must_use]
    pub const fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    /// Sets whether DNS lengths are verified for conversion to ASCII.
    #[must_use]
    pub const fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    /// Sets whether the STD3 ASCII rules apply.
    #[must_use]
    pub const fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    /// Sets whether processing is transitional.
    #[must_use]
    pub const fn transitional(mut self, value: bool) -> Self {
        self.transitional = value;
        self
    }

    /// Returns whether hyphens are checked.
    pub const fn hyphens_checked(self) -> bool {
        self.check_hyphens
    }

    /// Returns whether DNS lengths are verified.
    pub const fn dns_length_verified(self) -> bool {
        self.verify_dns_length
    }

    /// Returns whether the STD3 ASCII rules apply.
    pub const fn std3_ascii_rules(self) -> bool {
        self.use_std3_ascii_rules
    }

    /// Returns whether processing is transitional.
    pub const fn transitional_processing(self) -> bool {
        self.transitional
    }

    fn ascii_deny_list(self) -> AsciiDenyList {
        if self.use_std3_ascii_rules {
            AsciiDenyList::STD3
        } else {
            AsciiDenyList::EMPTY
        }
    }

    fn hyphens(self) -> Hyphens {
        if self.check_hyphens {
            Hyphens::Check
        } else {
            Hyphens::Allow
        }
    }

    fn dns_length(self) -> DnsLength {
        if self.verify_dns_length {
            DnsLength::VerifyAllowRootDot
        } else {
            DnsLength::Ignore
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//------------ Conversion ----------------------------------------------------

/// The outcome of an IDNA conversion.
///
/// The output is only meaningful if the error set is empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversion {
    /// The converted domain name.
    pub output: String,

    /// The errors encountered during conversion.
    pub errors: IdnaErrors,
}

impl Conversion {
    /// Creates a successful conversion.
    pub fn success(output: String) -> Self {
        Conversion {
            output,
            errors: IdnaErrors::empty(),
        }
    }

    /// Creates a failed conversion.
    pub fn failure(output: String, errors: IdnaErrors) -> Self {
        Conversion { output, errors }
    }

    /// Returns whether the conversion succeeded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

//------------ IdnaEngine ----------------------------------------------------

/// A type that can perform UTS #46 conversions of domain names.
///
/// Both methods take the domain name as octets which may not be valid
/// UTF-8. They never fail outright but rather report their errors in the
/// returned [`Conversion`].
pub trait IdnaEngine {
    /// Performs the UTS #46 ToASCII operation.
    fn to_ascii(&self, domain: &[u8]) -> Conversion;

    /// Performs the UTS #46 ToUnicode operation.
    fn to_unicode(&self, domain: &[u8]) -> Conversion;
}

impl<'a, E: IdnaEngine + ?Sized> IdnaEngine for &'a E {
    fn to_ascii(&self, domain: &[u8]) -> Conversion {
        (**self).to_ascii(domain)
    }

    fn to_unicode(&self, domain: &[u8]) -> Conversion {
        (**self).to_unicode(domain)
    }
}

//------------ Uts46Engine ---------------------------------------------------

/// The IDNA engine based on the `idna` crate.
///
/// The `idna` crate only tells whether a conversion failed but not why. In
/// order to provide an error set, the engine inspects a failed domain name
/// label by label and collects all the problems it finds. If it can’t find
/// any, it reports [`IdnaErrors::UNKNOWN`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Uts46Engine {
    config: Config,
}

impl Uts46Engine {
    /// Creates an engine with the default configuration.
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Creates an engine with the given configuration.
    pub const fn with_config(config: Config) -> Self {
        Uts46Engine { config }
    }

    /// Returns the engine’s configuration.
    pub const fn config(&self) -> Config {
        self.config
    }
}

impl IdnaEngine for Uts46Engine {
    fn to_ascii(&self, domain: &[u8]) -> Conversion {
        let mapped = self.map_deviations(domain);
        let domain = &*mapped;
        match Uts46::new().to_ascii(
            domain,
            self.config.ascii_deny_list(),
            self.config.hyphens(),
            self.config.dns_length(),
        ) {
            Ok(output) => Conversion::success(output.into_owned()),
            Err(_) => Conversion::failure(
                String::new(),
                self.diagnose(domain, self.config.verify_dns_length),
            ),
        }
    }

    fn to_unicode(&self, domain: &[u8]) -> Conversion {
        let mapped = self.map_deviations(domain);
        let domain = &*mapped;
        let (output, res) = Uts46::new().to_unicode(
            domain,
            self.config.ascii_deny_list(),
            self.config.hyphens(),
        );
        match res {
            Ok(()) => Conversion::success(output.into_owned()),
            Err(_) => Conversion::failure(
                output.into_owned(),
                self.diagnose(domain, false),
            ),
        }
    }
}

/// # Transitional Processing
///
impl Uts46Engine {
    /// Maps the deviation characters if processing is transitional.
    ///
    /// Input that isn’t UTF-8 is left alone for the engine to reject.
    fn map_deviations<'a>(&self, domain: &'a [u8]) -> Cow<'a, [u8]> {
        if !self.config.transitional {
            return Cow::Borrowed(domain);
        }
        let text = match str::from_utf8(domain) {
            Ok(text) if text.contains(is_deviation) => text,
            _ => return Cow::Borrowed(domain),
        };
        let mut res = String::with_capacity(text.len() + 1);
        for ch in text.chars() {
            match ch {
                '\u{00DF}' | '\u{1E9E}' => res.push_str("ss"),
                '\u{03C2}' => res.push('\u{03C3}'),
                '\u{200C}' | '\u{200D}' => {}
                _ => res.push(ch),
            }
        }
        Cow::Owned(res.into_bytes())
    }
}

/// # Diagnosis
///
impl Uts46Engine {
    /// Collects the reasons why processing a domain name failed.
    fn diagnose(&self, domain: &[u8], verify_length: bool) -> IdnaErrors {
        let domain = match str::from_utf8(domain) {
            Ok(domain) => domain,
            Err(_) => return IdnaErrors::DISALLOWED,
        };
        let labels: Vec<&str> = domain.split(is_label_separator).collect();
        let last = labels.len() - 1;
        let mut errors = IdnaErrors::empty();
        let mut name_len: usize = 0;
        for (idx, label) in labels.iter().enumerate() {
            if label.is_empty() {
                // Only the root label may be empty.
                if verify_length && (idx != last || last == 0) {
                    errors |= IdnaErrors::EMPTY_LABEL;
                }
                continue;
            }
            let (label_errors, label_len) = self.diagnose_label(label);
            errors |= label_errors;
            if verify_length && label_len > 63 {
                errors |= IdnaErrors::LABEL_TOO_LONG;
            }
            name_len =
                name_len.saturating_add(label_len).saturating_add(1);
        }
        // The dot after the last label doesn’t count.
        if verify_length && name_len > 254 {
            errors |= IdnaErrors::DOMAIN_NAME_TOO_LONG;
        }
        if errors.is_empty() && domain.chars().any(is_right_to_left) {
            errors |= IdnaErrors::BIDI;
        }
        if errors.is_empty() {
            errors |= IdnaErrors::UNKNOWN;
        }
        trace!("diagnosed IDNA failure for {:?}: {:?}", domain, errors);
        errors
    }

    /// Collects the errors of a single, non-empty label.
    ///
    /// Also returns the length of the label in its ASCII form.
    fn diagnose_label(&self, label: &str) -> (IdnaErrors, usize) {
        let mut errors = IdnaErrors::empty();
        let is_ace = label
            .get(..4)
            .map(|prefix| prefix.eq_ignore_ascii_case("xn--"))
            .unwrap_or(false);

        let content = if is_ace {
            match punycode::decode_to_string(&label[4..]) {
                None => return (IdnaErrors::PUNYCODE, label.len()),
                Some(decoded) => {
                    if decoded.is_ascii() {
                        errors |= IdnaErrors::INVALID_ACE_LABEL;
                    }
                    if decoded.contains('.') {
                        errors |= IdnaErrors::LABEL_HAS_DOT;
                    }
                    decoded
                }
            }
        } else {
            label.to_lowercase()
        };

        if self.config.check_hyphens {
            if content.starts_with('-') {
                errors |= IdnaErrors::LEADING_HYPHEN;
            }
            if content.ends_with('-') {
                errors |= IdnaErrors::TRAILING_HYPHEN;
            }
            if content.chars().skip(2).take(2).filter(|&ch| ch == '-').count()
                == 2
            {
                errors |= IdnaErrors::HYPHEN_3_4;
            }
        }
        if content.chars().next().map_or(false, is_combining_mark) {
            errors |= IdnaErrors::LEADING_COMBINING_MARK;
        }
        if content.contains(['\u{200C}', '\u{200D}']) {
            errors |= IdnaErrors::CONTEXTJ;
        }
        if content.chars().any(|ch| self.is_disallowed(ch)) {
            errors |= IdnaErrors::DISALLOWED;
        }

        let ascii_len = if is_ace || content.is_ascii() {
            label.len()
        } else {
            // Punycode overflows only for very long labels, so their
            // length in octets is good enough then.
            punycode::encode_str(&content)
                .map(|encoded| encoded.len() + 4)
                .unwrap_or_else(|| label.len().saturating_add(4))
        };
        (errors, ascii_len)
    }

    /// Returns whether a character cannot appear in a domain name.
    ///
    /// The character is run through the engine on its own. Characters
    /// that fail only because of their position or context are exempt.
    fn is_disallowed(&self, ch: char) -> bool {
        if ch == '-'
            || ch == '\u{200C}'
            || ch == '\u{200D}'
            || is_combining_mark(ch)
        {
            return false;
        }
        let mut buf = [0u8; 4];
        Uts46::new()
            .to_ascii(
                ch.encode_utf8(&mut buf).as_bytes(),
                self.config.ascii_deny_list(),
                Hyphens::Allow,
                DnsLength::Ignore,
            )
            .is_err()
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns whether a character separates labels.
///
/// UTS #46 maps the ideographic and fullwidth full stops to the ASCII dot.
fn is_label_separator(ch: char) -> bool {
    matches!(ch, '.' | '\u{3002}' | '\u{FF0E}' | '\u{FF61}')
}

/// Returns whether a character is mapped by transitional processing.
fn is_deviation(ch: char) -> bool {
    matches!(
        ch,
        '\u{00DF}' | '\u{1E9E}' | '\u{03C2}' | '\u{200C}' | '\u{200D}'
    )
}

/// Returns whether a character makes a domain name a bidi domain name.
fn is_right_to_left(ch: char) -> bool {
    matches!(bidi_class(ch), BidiClass::R | BidiClass::AL | BidiClass::AN)
}

//============ Testing =======================================================
