//! IDNA processing error flags.

use core::fmt;

//------------ IdnaErrors ----------------------------------------------------

error_flags! {
    /// The set of errors reported by an IDNA conversion.
    ///
    /// The flags and their values are those used by ICU’s UTS #46
    /// implementation. An empty set means the conversion succeeded. Any set
    /// bit means it failed and several bits may be set at once.
    ///
    /// Bits not covered by any of the named flags may be present, too. They
    /// mark failures nobody knows a more specific reason for.
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize)
    )]
    =>
    IdnaErrors, u32;

    /// A non-final domain name label (or the whole domain name) is empty.
    (EMPTY_LABEL => 0x0001,
        "a non-final domain name label (or the whole domain name) is empty")

    /// A domain name label is longer than 63 bytes.
    (LABEL_TOO_LONG => 0x0002,
        "a domain name label is longer than 63 bytes")

    /// A domain name is longer than 255 bytes in its storage form.
    (DOMAIN_NAME_TOO_LONG => 0x0004,
        "a domain name is longer than 255 bytes in its storage form")

    /// A label starts with a hyphen-minus.
    (LEADING_HYPHEN => 0x0008,
        "a label starts with a hyphen-minus (\"-\")")

    /// A label ends with a hyphen-minus.
    (TRAILING_HYPHEN => 0x0010,
        "a label ends with a hyphen-minus (\"-\")")

    /// A label has hyphen-minus in the third and fourth positions.
    (HYPHEN_3_4 => 0x0020,
        "a label contains hyphen-minus (\"-\") in the third and fourth positions")

    /// A label starts with a combining mark.
    (LEADING_COMBINING_MARK => 0x0040,
        "a label starts with a combining mark")

    /// A label or domain name contains disallowed characters.
    (DISALLOWED => 0x0080,
        "a label or domain name contains disallowed characters")

    /// A label starts with `xn--` but does not contain valid Punycode.
    (PUNYCODE => 0x0100,
        "a label starts with \"xn--\" but does not contain valid Punycode")

    /// A label contains a dot.
    (LABEL_HAS_DOT => 0x0200,
        "a label contains a dot=full stop")

    /// An ACE label does not contain a valid label string.
    (INVALID_ACE_LABEL => 0x0400,
        "An ACE label does not contain a valid label string")

    /// A label does not meet the IDNA BiDi requirements.
    (BIDI => 0x0800,
        "a label does not meet the IDNA BiDi requirements (for right-to-left characters)")

    /// A label does not meet the IDNA CONTEXTJ requirements.
    (CONTEXTJ => 0x1000,
        "a label does not meet the IDNA CONTEXTJ requirements")
}

impl IdnaErrors {
    /// A failure without a known reason.
    ///
    /// This bit lies outside all the named flags.
    pub const UNKNOWN: IdnaErrors = IdnaErrors(0x8000_0000);

    /// Returns a human readable description of all the errors.
    ///
    /// The descriptions of all named flags present are joined by commas in
    /// the order of the flag values and terminated by a period. If none of
    /// the named flags is present, returns the text “Unknown IDNA conversion
    /// error.” instead.
    ///
    /// This is only meaningful for a non-empty set. An empty set describes
    /// a successful conversion and shouldn’t be asked for a reason.
    pub fn describe(self) -> String {
        let mut res = String::new();
        for flag in self.iter() {
            if !res.is_empty() {
                res.push_str(", ");
            }
            // Named flags always have a description.
            res.push_str(flag.description().unwrap_or_default());
        }
        if res.is_empty() {
            String::from("Unknown IDNA conversion error.")
        } else {
            res.push('.');
            res
        }
    }
}

/// Describes the errors in a raw bitmask.
///
/// This is a shortcut for `IdnaErrors::from_bits(bits).describe()`.
pub fn decode_errors(bits: u32) -> String {
    IdnaErrors::from_bits(bits).describe()
}

//--- Display

impl fmt::Display for IdnaErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_flag() {
        assert_eq!(
            IdnaErrors::EMPTY_LABEL.describe(),
            "a non-final domain name label (or the whole domain name) \
             is empty."
        );
        assert_eq!(
            decode_errors(0x1000),
            "a label does not meet the IDNA CONTEXTJ requirements."
        );
    }

    #[test]
    fn several_flags() {
        assert_eq!(
            (IdnaErrors::LABEL_TOO_LONG | IdnaErrors::EMPTY_LABEL).describe(),
            "a non-final domain name label (or the whole domain name) \
             is empty, a domain name label is longer than 63 bytes."
        );
        assert_eq!(
            decode_errors(0x0008 | 0x0010),
            "a label starts with a hyphen-minus (\"-\"), \
             a label ends with a hyphen-minus (\"-\")."
        );
    }

    #[test]
    fn unknown_bits() {
        assert_eq!(decode_errors(0x4000), "Unknown IDNA conversion error.");
        assert_eq!(
            IdnaErrors::UNKNOWN.describe(),
            "Unknown IDNA conversion error."
        );
        // Unknown bits are ignored when there are known ones.
        assert_eq!(
            (IdnaErrors::UNKNOWN | IdnaErrors::BIDI).describe(),
            "a label does not meet the IDNA BiDi requirements \
             (for right-to-left characters)."
        );
    }

    #[test]
    fn iter_in_table_order() {
        let errors = IdnaErrors::CONTEXTJ
            | IdnaErrors::DISALLOWED
            | IdnaErrors::LEADING_HYPHEN;
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                IdnaErrors::LEADING_HYPHEN,
                IdnaErrors::DISALLOWED,
                IdnaErrors::CONTEXTJ
            ]
        );
        assert_eq!(IdnaErrors::from_bits(0x1fff).iter().count(), 13);
    }

    #[test]
    fn bit_ops() {
        let mut errors = IdnaErrors::empty();
        assert!(errors.is_empty());
        errors |= IdnaErrors::PUNYCODE;
        errors.insert(IdnaErrors::HYPHEN_3_4);
        assert_eq!(errors.bits(), 0x0120);
        assert!(errors.contains(IdnaErrors::PUNYCODE));
        assert!(!errors.contains(IdnaErrors::PUNYCODE | IdnaErrors::BIDI));
        assert!(errors.intersects(IdnaErrors::PUNYCODE | IdnaErrors::BIDI));
        assert_eq!(u32::from(errors), 0x0120);
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", IdnaErrors::BIDI | IdnaErrors::EMPTY_LABEL),
            "IdnaErrors(EMPTY_LABEL | BIDI)"
        );
        assert_eq!(
            format!("{:?}", IdnaErrors::from_bits(0x4001)),
            "IdnaErrors(EMPTY_LABEL | 0x4000)"
        );
        assert_eq!(format!("{:?}", IdnaErrors::empty()), "IdnaErrors()");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &(IdnaErrors::EMPTY_LABEL | IdnaErrors::BIDI),
            &[
                Token::NewtypeStruct { name: "IdnaErrors" },
                Token::U32(0x0801),
            ],
        );
    }
}
