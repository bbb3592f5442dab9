//! The grammar of ASCII domain names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.
//!
//! A domain name is accepted if it consists of between 1 and 127 labels
//! separated by dots, optionally followed by a single trailing dot. Each
//! label has between 1 and 63 elements, each element being one of
//!
//! * an unreserved character: an ASCII letter, digit, `_`, `~`, or `-`,
//! * a sub-delimiter: one of `!$&'()*+,;=`, or
//! * a percent-encoded octet: `%` followed by two hex digits.
//!
//! Letters and hex digits are matched case-insensitively. Since none of the
//! elements contains a dot, matching is done label by label.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// The maximum number of labels in a domain name.
pub const MAX_LABELS: usize = 127;

/// The maximum number of elements in a label.
pub const MAX_LABEL_LEN: usize = 63;

/// The pattern a single label has to match.
pub const LABEL_PATTERN: &str =
    r"(?i-u)^(?:[a-z0-9_~\-!$&'()*+,;=]|%[0-9a-f]{2}){1,63}$";

static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(LABEL_PATTERN).expect("invalid label pattern"));

/// Returns whether the octets are a well-formed ASCII domain name.
pub fn is_match(domain: &[u8]) -> bool {
    let domain = domain.strip_suffix(b".").unwrap_or(domain);
    let mut count = 0;
    for label in domain.split(|&ch| ch == b'.') {
        count += 1;
        if count > MAX_LABELS || !LABEL.is_match(label) {
            return false;
        }
    }
    true
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("example.com")]
    #[case::single_label("localhost")]
    #[case::trailing_dot("example.com.")]
    #[case::mixed_case("wWw.uLb.Ac.be")]
    #[case::unreserved("a_b~c-d.example")]
    #[case::sub_delims("!$&'()*+,;=.example")]
    #[case::percent_encoded("%41b%7e.example")]
    #[case::lower_hex("%e2%82%ac.example")]
    #[case::leading_hyphen("-a.example")]
    #[case::numeric("123.456")]
    fn matches(#[case] domain: &str) {
        assert!(is_match(domain.as_bytes()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::root(".")]
    #[case::two_trailing_dots("example.com..")]
    #[case::empty_label("example..com")]
    #[case::leading_dot(".example.com")]
    #[case::space("exa mple.com")]
    #[case::slash("exa/mple.com")]
    #[case::colon("example.com:80")]
    #[case::at("user@example.com")]
    #[case::bad_escape("%zz.example")]
    #[case::short_escape("a%4.example")]
    #[case::non_ascii("bücher.example")]
    #[case::delete("exa\x7fmple.com")]
    fn does_not_match(#[case] domain: &str) {
        assert!(!is_match(domain.as_bytes()));
    }

    #[test]
    fn non_utf8() {
        assert!(!is_match(b"\xff.example"));
    }

    #[test]
    fn label_length() {
        let label = "a".repeat(MAX_LABEL_LEN);
        assert!(is_match(format!("{}.com", label).as_bytes()));
        let label = "a".repeat(MAX_LABEL_LEN + 1);
        assert!(!is_match(format!("{}.com", label).as_bytes()));

        // Percent-encoded octets count as one element.
        let label = "%41".repeat(MAX_LABEL_LEN);
        assert!(is_match(format!("{}.com", label).as_bytes()));
        let label = "%41".repeat(MAX_LABEL_LEN + 1);
        assert!(!is_match(format!("{}.com", label).as_bytes()));
    }

    #[test]
    fn label_count() {
        let domain = vec!["a"; MAX_LABELS].join(".");
        assert!(is_match(domain.as_bytes()));
        assert!(is_match(format!("{}.", domain).as_bytes()));
        let domain = vec!["a"; MAX_LABELS + 1].join(".");
        assert!(!is_match(domain.as_bytes()));
    }
}
