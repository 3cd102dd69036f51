//! # Report Tests
//!
//! Entry labels, info lines, display-window visibility, and access summaries.

use pmpviz_core::common::AccessType;
use pmpviz_core::config::VisualizerConfig;
use pmpviz_core::pmp::{AccessRequest, NoMatchPolicy, PmpAddrMatch, Region, Resolution};
use pmpviz_core::report::{AccessReport, DisplayRange, EntryReport, Report};
use pretty_assertions::assert_eq;

use crate::common::{A_NA4, A_NAPOT, A_TOR, L, R, W, X, table};

fn window() -> DisplayRange {
    DisplayRange::new(0x8000_0000, 0x8010_0000).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Display window
// ══════════════════════════════════════════════════════════

#[test]
fn display_range_requires_start_below_end() {
    assert!(DisplayRange::new(0x1000, 0x1000).is_err());
    assert!(DisplayRange::new(0x1000, 0x1001).is_ok());
}

#[test]
fn partial_visibility() {
    let display = window();
    assert!(!display.is_partially_visible(Region::new(0x8000_0000, 0x8010_0000)));
    assert!(display.is_partially_visible(Region::new(0, 0x8000_1000)));
    assert!(display.is_partially_visible(Region::new(0x800F_0000, 0x8020_0000)));
    assert!(!display.is_partially_visible(Region::EMPTY));
}

#[test]
fn clamp_into_window() {
    let display = window();
    assert_eq!(
        display.clamp(Region::new(0, 0x8000_1000)),
        Region::new(0x8000_0000, 0x8000_1000)
    );
    assert_eq!(
        display.clamp(Region::new(0x9000_0000, 0x9000_0004)),
        Region::new(0x8010_0000, 0x8010_0000)
    );
}

// ══════════════════════════════════════════════════════════
// 2. Entry reports
// ══════════════════════════════════════════════════════════

#[test]
fn entry_report_for_tor() {
    let pmp = table(&[(0x2000_0000, A_TOR | R | W | X | L)]);
    let report = EntryReport::new(&pmp.entries()[0], &window());

    assert_eq!(report.index, 0);
    assert_eq!(report.mode, PmpAddrMatch::Tor);
    assert_eq!((report.start, report.end), (0, 0x8000_0000));
    assert!(report.readable && report.writable && report.executable && report.locked);
    assert!(report.partially_visible);
    assert_eq!(report.visible, Region::new(0x8000_0000, 0x8000_0000));
    assert_eq!(report.label, "PMP0 (R,W,X,L)");
    assert_eq!(
        report.info,
        "PMP0: TOR, Start: 0x00000000, End: 0x80000000 [Partially visible]"
    );
}

#[test]
fn entry_report_inside_window() {
    let pmp = table(&[(0, 0), (0x2000_0400, A_NA4 | R)]);
    let report = EntryReport::new(&pmp.entries()[1], &window());

    assert!(!report.partially_visible);
    assert_eq!(report.label, "PMP1 (R)");
    assert_eq!(report.info, "PMP1: NA4, Start: 0x80001000, End: 0x80001004");
}

#[test]
fn entry_report_for_disabled_entry() {
    let pmp = table(&[(0x1234, 0)]);
    let report = EntryReport::new(&pmp.entries()[0], &window());
    assert_eq!(report.label, "PMP0 ()");
    assert_eq!(report.info, "PMP0: OFF, Start: 0x00000000, End: 0x00000000");
}

// ══════════════════════════════════════════════════════════
// 3. Access reports
// ══════════════════════════════════════════════════════════

#[test]
fn access_report_for_grant() {
    let pmp = table(&[(0x2000_0000, A_TOR | R | W | X)]);
    let request = AccessRequest::point(0x1000, AccessType::Read);
    let report = AccessReport::new(&pmp, &request, NoMatchPolicy::Deny);

    assert!(report.permitted);
    assert_eq!(report.summary, "PMP0: R,W,X");
    assert_eq!(report.lines(), vec!["Access: 0x1000", "Type: R", "PMP0: R,W,X"]);
}

#[test]
fn access_report_for_denial() {
    let pmp = table(&[(0x2000_0400, A_NA4 | W), (0x2000_047F, A_NAPOT | R)]);
    let request = AccessRequest::new(0x8000_1000, Some(4), AccessType::Read).unwrap();
    let report = AccessReport::new(&pmp, &request, NoMatchPolicy::Allow);

    assert_eq!(report.resolution, Resolution::Denied { index: 0 });
    assert!(!report.permitted);
    assert_eq!(
        report.lines(),
        vec![
            "Access: 0x80001000",
            "Size: 4 bytes",
            "Type: R",
            "PMP0: denied"
        ]
    );
}

#[test]
fn access_report_for_miss_follows_policy() {
    let pmp = table(&[(0x400, A_NA4 | R)]);
    let request = AccessRequest::point(0x8000_0000, AccessType::Execute);

    let allow = AccessReport::new(&pmp, &request, NoMatchPolicy::Allow);
    assert!(allow.permitted);
    assert_eq!(allow.summary, "Perms: No Match");

    let deny = AccessReport::new(&pmp, &request, NoMatchPolicy::Deny);
    assert!(!deny.permitted);
}

// ══════════════════════════════════════════════════════════
// 4. Full reports
// ══════════════════════════════════════════════════════════

const LAYOUT: &str = r#"{
    "pmp_entries": [
        { "addr": "0x20000400", "cfg": "0x12" },
        { "addr": "0x2000047f", "cfg": "0x19" }
    ],
    "access_check": "0x80001000",
    "access_type": "R"
}"#;

#[test]
fn report_text_lists_entries_then_access() {
    let config = VisualizerConfig::from_json(LAYOUT).unwrap();
    let report = Report::build(&config).unwrap();

    assert_eq!(
        report.to_string(),
        "PMP0: NA4, Start: 0x80001000, End: 0x80001004  PMP0 (W)\n\
         PMP1: NAPOT, Start: 0x80001000, End: 0x80002000  PMP1 (R)\n\
         \n\
         Access: 0x80001000\n\
         Type: R\n\
         PMP0: denied\n"
    );
}

#[test]
fn report_without_access_check() {
    let config = VisualizerConfig::from_json(r#"{ "pmp_entries": [] }"#).unwrap();
    let report = Report::build(&config).unwrap();
    assert!(report.entries.is_empty());
    assert!(report.access.is_none());
    assert_eq!(report.to_string(), "");
}

#[test]
fn report_serializes_for_renderers() {
    let config = VisualizerConfig::from_json(LAYOUT).unwrap();
    let report = Report::build(&config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["policy"], "allow");
    assert_eq!(json["entries"][1]["mode"], "NAPOT");
    assert_eq!(json["entries"][1]["end"], 0x8000_2000u64);
    assert_eq!(json["access"]["resolution"]["outcome"], "denied");
    assert_eq!(json["access"]["access_type"], "R");
}
