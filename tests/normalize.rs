//! Integration tests for domain name normalization.

mod common;

use common::{init_logging, labels};
use domain_idna::idna::{decode_errors, IdnaErrors};
use domain_idna::name::{is_ipv4_literal, is_well_formed, Normalizer};
use domain_idna::{
    idn_to_ascii, idn_to_unicode, normalize, Error, NormalizedDomain,
    RawDomain,
};
use rstest::rstest;

fn invalid(err: Error) -> domain_idna::InvalidDomain {
    match err {
        Error::InvalidDomain(err) => err,
        Error::TypeMismatch(err) => panic!("unexpected type mismatch: {err}"),
    }
}

#[rstest]
#[case("wWw.uLb.Ac.be", &["be", "ac", "ulb", "www"])]
#[case("example.com", &["com", "example"])]
#[case("EXAMPLE.COM.", &["", "com", "example"])]
#[case("localhost", &["localhost"])]
#[case("a%2Eb.example", &["example", "b", "a"])]
#[case("_dmarc.example.com", &["com", "example", "_dmarc"])]
#[case("xn--bcher-kva.example", &["example", "xn--bcher-kva"])]
#[case("Bücher.example", &["example", "bücher"])]
#[case("B%C3%BCcher.example", &["example", "bücher"])]
#[case("ＥＸＡＭＰＬＥ。ｃｏｍ", &["com", "example"])]
#[case("faß.de", &["de", "fass"])]
#[case("ß.de", &["de", "ss"])]
#[case("ς.gr", &["gr", "σ"])]
#[case("例え.テスト", &["テスト", "例え"])]
fn valid_domains(#[case] input: &str, #[case] expected: &[&str]) {
    init_logging();
    assert_eq!(normalize(input).unwrap(), labels(expected));
}

#[rstest]
#[case::ipv4("192.168.0.1")]
#[case::space("exa mple.com")]
#[case::slash("exa/mple.com")]
#[case::question_mark("example.com?")]
#[case::fragment("example.com#top")]
#[case::brackets("[example].com")]
#[case::encoded_space("exa%20mple.com")]
#[case::empty_label("a..b")]
#[case::long_label("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.com")]
#[case::leading_hyphen("-bücher.example")]
#[case::percent_residue("bü%zz.example")]
#[case::bad_punycode("xn--mañana.example")]
fn invalid_domains(#[case] input: &str) {
    init_logging();
    let err = invalid(normalize(input).unwrap_err());
    assert!(!err.to_string().is_empty());
}

#[test]
fn error_kinds() {
    init_logging();
    assert!(invalid(normalize("192.168.0.1").unwrap_err()).is_ipv4_host());
    assert!(invalid(normalize("exa mple.com").unwrap_err())
        .is_invalid_characters());
    assert!(invalid(normalize("exa/mple.com").unwrap_err())
        .is_invalid_characters());
    assert!(invalid(normalize("bü%zz.example").unwrap_err())
        .is_invalid_characters());

    let long = format!("{}.com", "a".repeat(64));
    let err = invalid(normalize(long.as_str()).unwrap_err());
    assert!(err.is_malformed_labels());
    assert_eq!(
        err.to_string(),
        format!("the domain `{}` is invalid: the labels are malformed", long)
    );

    let err = invalid(normalize("-bücher.example").unwrap_err());
    assert_eq!(err.idna_errors(), Some(IdnaErrors::LEADING_HYPHEN));
    assert_eq!(
        err.to_string(),
        "the host `-bücher.example` is invalid: \
         a label starts with a hyphen-minus (\"-\")."
    );
}

#[test]
fn absent_and_empty() {
    init_logging();
    assert_eq!(normalize("").unwrap(), labels(&[""]));
    assert_eq!(normalize(None::<&str>).unwrap(), labels(&[]));
    assert_eq!(normalize(RawDomain::Absent).unwrap(), labels(&[]));
    assert_eq!(normalize(RawDomain::Empty).unwrap(), labels(&[""]));
}

#[test]
fn type_mismatch() {
    init_logging();
    let err = normalize(RawDomain::unsupported::<std::net::TcpStream>())
        .unwrap_err();
    match err {
        Error::TypeMismatch(err) => {
            assert!(err.type_name().ends_with("TcpStream"))
        }
        Error::InvalidDomain(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn label_sequences_pass_through() {
    init_logging();
    let domain = NormalizedDomain::new("www.Example.com").unwrap();
    assert_eq!(
        normalize(&domain).unwrap(),
        labels(&["com", "example", "www"])
    );

    // No validation happens for label sequences.
    let raw = labels(&["not valid", ""]);
    assert_eq!(normalize(&raw).unwrap(), raw);
    assert_eq!(normalize(raw.clone()).unwrap(), raw);
    assert_eq!(normalize(Some(raw.clone())).unwrap(), raw);
    assert_eq!(normalize(None::<Vec<String>>).unwrap(), labels(&[]));
}

#[rstest]
#[case("example.com")]
#[case("WWW.Example.COM.")]
#[case("a-b_c.example")]
#[case("123.example")]
fn ascii_labels_join_to_lowercase(#[case] input: &str) {
    assert!(is_well_formed(input.as_bytes()));
    let mut res = normalize(input).unwrap();
    res.reverse();
    assert_eq!(res.join("."), input.to_ascii_lowercase());
}

#[rstest]
#[case("Bücher.example")]
#[case("ＥＸＡＭＰＬＥ。ｃｏｍ")]
#[case("例え.テスト")]
#[case("straße.de")]
#[case("www.ÉCOLE.fr")]
fn idempotent(#[case] input: &str) {
    init_logging();
    let first = NormalizedDomain::new(input).unwrap();
    let second = NormalizedDomain::new(first.as_str()).unwrap();
    assert_eq!(first, second);

    let ascii = idn_to_ascii(input).unwrap();
    assert_eq!(idn_to_unicode(&ascii).unwrap(), first.as_str());
}

#[test]
fn conversions() {
    init_logging();
    assert_eq!(
        idn_to_ascii("Bücher.example").unwrap(),
        "xn--bcher-kva.example"
    );
    assert_eq!(
        idn_to_ascii("B%C3%BCcher.example").unwrap(),
        "xn--bcher-kva.example"
    );
    assert_eq!(
        idn_to_ascii("WWW.Example.COM").unwrap(),
        "www.example.com"
    );
    assert_eq!(
        idn_to_unicode("xn--bcher-kva.example").unwrap(),
        "bücher.example"
    );
    assert!(idn_to_unicode("xn--mañana.example").is_err());
}

#[test]
fn error_descriptions() {
    assert_eq!(
        decode_errors(
            IdnaErrors::EMPTY_LABEL.bits() | IdnaErrors::LABEL_TOO_LONG.bits()
        ),
        "a non-final domain name label (or the whole domain name) is empty, \
         a domain name label is longer than 63 bytes."
    );
    assert_eq!(decode_errors(1 << 20), "Unknown IDNA conversion error.");
}

#[test]
fn ipv4_predicate() {
    assert!(is_ipv4_literal("192.168.0.1"));
    assert!(is_ipv4_literal("0.0.0.0"));
    assert!(!is_ipv4_literal("192.168.0"));
    assert!(!is_ipv4_literal("192.168.0.01"));
    assert!(!is_ipv4_literal("::1"));
}

#[test]
fn custom_config() {
    init_logging();
    let norm = Normalizer::with_config(
        domain_idna::idna::Config::new().check_hyphens(false),
    );
    assert_eq!(
        norm.normalize("-bücher.example").unwrap(),
        labels(&["example", "-bücher"])
    );

    let norm = Normalizer::with_config(
        domain_idna::idna::Config::new().transitional(false),
    );
    assert_eq!(norm.normalize("faß.de").unwrap(), labels(&["de", "faß"]));
    assert_eq!(norm.to_ascii("faß.de").unwrap(), "xn--fa-hia.de");
}

#[test]
fn overlong_labels_fail_cleanly() {
    init_logging();
    let label = format!("{}\u{F0000}", "a".repeat(5000));
    let err = normalize(format!("{0}.{0}.com", label)).unwrap_err();
    let errors = invalid(err).idna_errors().unwrap();
    assert!(errors.contains(IdnaErrors::LABEL_TOO_LONG));
    assert!(errors.contains(IdnaErrors::DOMAIN_NAME_TOO_LONG));
}

#[test]
fn parallel_normalization() {
    init_logging();
    let handles: Vec<_> = (0..4)
        .map(|idx| {
            std::thread::spawn(move || {
                let input = format!("www{}.Bücher.example", idx);
                normalize(input).unwrap()
            })
        })
        .collect();
    for (idx, handle) in handles.into_iter().enumerate() {
        let www = format!("www{}", idx);
        assert_eq!(
            handle.join().unwrap(),
            labels(&["example", "bücher", www.as_str()])
        );
    }
}
