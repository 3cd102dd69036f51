//! # PMP Entry Decoding Tests
//!
//! Verifies extraction of the R/W/X/L bits and the A field from the pmpcfg
//! byte, including bits the layout leaves unused.

use pmpviz_core::pmp::{Permissions, PmpAddrMatch, PmpEntry};

use crate::common::{A_NA4, A_NAPOT, A_TOR, L, R, W, X};

// ══════════════════════════════════════════════════════════
// 1. Address Match Mode Decoding
// ══════════════════════════════════════════════════════════

#[test]
fn addr_match_from_bits() {
    assert_eq!(PmpAddrMatch::from_bits(0), PmpAddrMatch::Off);
    assert_eq!(PmpAddrMatch::from_bits(1), PmpAddrMatch::Tor);
    assert_eq!(PmpAddrMatch::from_bits(2), PmpAddrMatch::Na4);
    assert_eq!(PmpAddrMatch::from_bits(3), PmpAddrMatch::Napot);
}

#[test]
fn addr_match_ignores_bits_above_field() {
    assert_eq!(PmpAddrMatch::from_bits(0b101), PmpAddrMatch::Tor);
    assert_eq!(PmpAddrMatch::from_bits(0xFC), PmpAddrMatch::Off);
}

#[test]
fn addr_match_names() {
    assert_eq!(PmpAddrMatch::Off.to_string(), "OFF");
    assert_eq!(PmpAddrMatch::Tor.to_string(), "TOR");
    assert_eq!(PmpAddrMatch::Na4.to_string(), "NA4");
    assert_eq!(PmpAddrMatch::Napot.to_string(), "NAPOT");
}

#[test]
fn match_mode_accessor() {
    assert_eq!(PmpEntry::new(0, 0).match_mode(), PmpAddrMatch::Off);
    assert_eq!(PmpEntry::new(0, A_TOR).match_mode(), PmpAddrMatch::Tor);
    assert_eq!(PmpEntry::new(0, A_NA4).match_mode(), PmpAddrMatch::Na4);
    assert_eq!(PmpEntry::new(0, A_NAPOT).match_mode(), PmpAddrMatch::Napot);
}

// ══════════════════════════════════════════════════════════
// 2. Permission and lock bits
// ══════════════════════════════════════════════════════════

#[test]
fn permission_accessors() {
    let entry = PmpEntry::new(0, R | W | X | L);
    assert!(entry.is_readable());
    assert!(entry.is_writable());
    assert!(entry.is_executable());
    assert!(entry.is_locked());

    let entry = PmpEntry::new(0, R);
    assert!(entry.is_readable());
    assert!(!entry.is_writable());
    assert!(!entry.is_executable());
    assert!(!entry.is_locked());
}

#[test]
fn unused_bits_are_ignored() {
    // Bits 5 and 6 are reserved.
    let entry = PmpEntry::new(0x1234, 0x60);
    assert_eq!(entry.match_mode(), PmpAddrMatch::Off);
    assert_eq!(entry.permissions(), Permissions::NONE);
    assert!(!entry.is_locked());
}

#[test]
fn cfg_0x1d_decodes_as_napot_read_execute() {
    let entry = PmpEntry::new(0x2000_0000, 0x1D);
    assert_eq!(entry.match_mode(), PmpAddrMatch::Napot);
    assert!(entry.is_readable());
    assert!(!entry.is_writable());
    assert!(entry.is_executable());
}

#[test]
fn raw_fields_round_trip() {
    let entry = PmpEntry::new(0x2000_0000, A_TOR | R | W | X);
    assert_eq!(entry.address_register(), 0x2000_0000);
    assert_eq!(entry.config_byte(), 0x0F);
}

// ══════════════════════════════════════════════════════════
// 3. Permission sets
// ══════════════════════════════════════════════════════════

#[test]
fn permission_set_display() {
    assert_eq!(Permissions::from_cfg(R | W | X).to_string(), "R,W,X");
    assert_eq!(Permissions::from_cfg(R | X).to_string(), "R,X");
    assert_eq!(Permissions::from_cfg(W | L).to_string(), "W");
    assert_eq!(Permissions::from_cfg(L).to_string(), "None");
}

#[test]
fn permission_set_allows_matching_access() {
    use pmpviz_core::common::AccessType;

    let perms = Permissions::from_cfg(R | X);
    assert!(perms.allows(AccessType::Read));
    assert!(!perms.allows(AccessType::Write));
    assert!(perms.allows(AccessType::Execute));
    assert!(!perms.is_empty());
    assert!(Permissions::NONE.is_empty());
    assert_eq!(Permissions::from_cfg(0xFF), Permissions::ALL);
}
