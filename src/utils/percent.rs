//! Percent decoding and printable ASCII checks.
//!
//! Domain names arriving from URLs or user input may carry percent-encoded
//! octets. Decoding follows the rules of PHP’s `rawurldecode` and the
//! WHATWG URL standard alike: a `%` followed by two hex digits is replaced
//! by the octet they encode, every other `%` is left alone. Notably, a `+`
//! is *not* treated as a space.
//!
//! The result of decoding is an octets sequence that need not be valid
//! UTF-8 any more, so the helpers here work on byte slices.

use percent_encoding::percent_decode;
use std::borrow::Cow;

//------------ Convenience Functions -----------------------------------------

/// Percent-decodes the octets of a string.
///
/// Returns the input unchanged as a borrowed slice if it doesn’t contain
/// any valid percent-encoded octets.
pub fn decode(s: &str) -> Cow<'_, [u8]> {
    decode_slice(s.as_bytes())
}

/// Percent-decodes an octets slice.
pub fn decode_slice(slice: &[u8]) -> Cow<'_, [u8]> {
    percent_decode(slice).into()
}

/// Returns whether all octets are printable ASCII.
///
/// Printable ASCII are the octets from the space, 0x20, through the tilde,
/// 0x7E. The delete character and all control characters are excluded, as
/// are all octets with the high bit set.
pub fn is_printable_ascii(slice: &[u8]) -> bool {
    slice.iter().all(|ch| (0x20..=0x7E).contains(ch))
}

/// Returns a lossy string for an octets slice for use in error messages.
pub fn display_lossy(slice: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(slice)
}

//============ Testing =======================================================
