//! # Line Parsing Tests
//!
//! Tests for trace line decomposition, detail-map validation, typed
//! accessors, and the recoverable/fatal error split.

use memtrace_core::common::error::{AnalyzeError, Diagnostic};
use memtrace_core::event::{AccessStatus, EventKind};
use memtrace_core::parse::parse_line;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn well_formed_line_parses() {
    let event = parse_line(1, "167772161001::CACHE_ACCESS::level=L2,status=HIT")
        .unwrap()
        .unwrap();
    assert_eq!(event.timestamp, "167772161001");
    assert_eq!(event.kind, EventKind::CacheAccess);
    assert_eq!(event.details.get("level"), Some("L2"));
    assert_eq!(event.details.get("status"), Some("HIT"));
    assert_eq!(event.details.len(), 2);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let event = parse_line(1, "  1000::TLB_LOOKUP::status=MISS \n")
        .unwrap()
        .unwrap();
    assert_eq!(event.kind, EventKind::TlbLookup);
    assert_eq!(event.details.status(), AccessStatus::Miss);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn blank_lines_skip_silently(#[case] raw: &str) {
    assert_eq!(parse_line(7, raw).unwrap(), None);
}

#[test]
fn two_segments_is_malformed() {
    let diag = parse_line(3, "1000::CACHE_ACCESS").unwrap_err();
    assert_eq!(
        diag,
        Diagnostic::MalformedLine {
            line: 3,
            content: "1000::CACHE_ACCESS".to_string(),
        }
    );
}

#[test]
fn four_segments_is_malformed() {
    let diag = parse_line(4, "1000::CACHE_ACCESS::status=HIT::extra").unwrap_err();
    assert!(matches!(diag, Diagnostic::MalformedLine { line: 4, .. }));
}

#[test]
fn details_item_without_equals_rejects_whole_line() {
    // status=HIT is well-formed, but the map build is atomic.
    let diag = parse_line(5, "1000::CACHE_ACCESS::status=HIT,extra").unwrap_err();
    assert_eq!(
        diag,
        Diagnostic::MalformedDetails {
            line: 5,
            details: "status=HIT,extra".to_string(),
        }
    );
}

#[test]
fn details_item_with_two_equals_is_malformed() {
    let diag = parse_line(2, "1000::MEM_READ::latency_ns=5=9").unwrap_err();
    assert!(matches!(diag, Diagnostic::MalformedDetails { line: 2, .. }));
}

#[test]
fn empty_details_segment_is_malformed() {
    let diag = parse_line(1, "1000::CACHE_ACCESS::").unwrap_err();
    assert!(matches!(diag, Diagnostic::MalformedDetails { .. }));
}

#[test]
fn duplicate_detail_key_last_wins() {
    let event = parse_line(1, "1000::CACHE_ACCESS::status=MISS,status=HIT")
        .unwrap()
        .unwrap();
    assert_eq!(event.details.get("status"), Some("HIT"));
    assert_eq!(event.details.len(), 1);
}

#[rstest]
#[case("CACHE_ACCESS", EventKind::CacheAccess)]
#[case("TLB_LOOKUP", EventKind::TlbLookup)]
#[case("MEM_READ", EventKind::MemRead)]
#[case("PAGE_FAULT", EventKind::Other)]
#[case("cache_access", EventKind::Other)]
fn event_tag_dispatch(#[case] tag: &str, #[case] expected: EventKind) {
    let event = parse_line(1, &format!("1000::{tag}::k=v")).unwrap().unwrap();
    assert_eq!(event.kind, expected);
}

#[rstest]
#[case(Some("HIT"), AccessStatus::Hit)]
#[case(Some("MISS"), AccessStatus::Miss)]
#[case(Some("hit"), AccessStatus::Other)]
#[case(Some("PARTIAL"), AccessStatus::Other)]
#[case(None, AccessStatus::Other)]
fn status_classification(#[case] value: Option<&str>, #[case] expected: AccessStatus) {
    assert_eq!(AccessStatus::from_value(value), expected);
}

#[test]
fn latency_accessor_defaults_to_zero() {
    let event = parse_line(1, "1000::MEM_READ::addr=0xff").unwrap().unwrap();
    assert_eq!(event.details.latency_ns(1).unwrap(), 0);
}

#[test]
fn latency_accessor_parses_integer() {
    let event = parse_line(1, "1000::MEM_READ::latency_ns=250")
        .unwrap()
        .unwrap();
    assert_eq!(event.details.latency_ns(1).unwrap(), 250);
}

#[test]
fn latency_accessor_rejects_non_integer() {
    let event = parse_line(9, "1000::MEM_READ::latency_ns=abc")
        .unwrap()
        .unwrap();
    let err = event.details.latency_ns(9).unwrap_err();
    match err {
        AnalyzeError::BadLatency { line, value } => {
            assert_eq!(line, 9);
            assert_eq!(value, "abc");
        }
        other => panic!("expected BadLatency, got {other:?}"),
    }
}

#[test]
fn diagnostic_display_names_the_line() {
    let diag = Diagnostic::MalformedLine {
        line: 12,
        content: "bad".to_string(),
    };
    assert_eq!(diag.to_string(), "Warning: skipping malformed line 12: bad");
    assert_eq!(diag.line(), 12);
}

proptest! {
    #[test]
    fn parse_line_never_panics(raw in ".*") {
        let _ = parse_line(1, &raw);
    }

    #[test]
    fn generated_well_formed_lines_parse(
        ts in "[0-9]{1,12}",
        key in "[a-z_]{1,8}",
        value in "[A-Za-z0-9]{1,8}",
    ) {
        let raw = format!("{ts}::CACHE_ACCESS::{key}={value}");
        let event = parse_line(1, &raw).unwrap().unwrap();
        prop_assert_eq!(event.timestamp, ts);
        prop_assert_eq!(event.details.get(&key), Some(value.as_str()));
    }
}
