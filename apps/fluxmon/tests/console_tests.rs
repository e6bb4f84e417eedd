//! Scripted sessions against the interactive console.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use fluxmon::cli::demo_registry;
use fluxmon::console::Console;
use fluxmon_core::SystemReport;
use std::io::Cursor;

/// Drive the console with a scripted stdin and capture the transcript.
fn run_script(input: &str) -> (SystemReport, String) {
    let mut output = Vec::new();
    let report = {
        let mut console = Console::new(Cursor::new(input.as_bytes()), &mut output, false);
        console.run().unwrap()
    };
    (report, String::from_utf8(output).unwrap())
}

// =============================================================================
// MENU FLOW TESTS
// =============================================================================

#[test]
fn exit_immediately_reports_empty_registry() {
    let (report, transcript) = run_script("5\n");

    assert_eq!(report, SystemReport::default());
    assert!(transcript.contains("FLUXMON CONTAINMENT CONTROL PANEL"));
    assert!(transcript.contains("=== SYSTEM REPORT ==="));
    assert!(transcript.contains("Total Objects:  0"));
}

#[test]
fn end_of_input_is_treated_as_exit() {
    let (report, transcript) = run_script("");

    assert_eq!(report.total, 0);
    assert!(transcript.contains("=== SYSTEM REPORT ==="));
    assert!(transcript.contains("Shutting down..."));
}

#[test]
fn aggregate_report_over_four_objects() {
    // Depot 25, Depot 75, Method 15, Method 80 -> critical=2, safe=2
    let script = "1\n1\nAMB-001\n25\nA. Yilmaz\n\
                  1\n1\nAMB-002\n75\nA. Demir\n\
                  1\n2\nMET-001\n15\nCooling Analysis\n\
                  1\n2\nMET-002\n80\nStability Check\n\
                  5\n";
    let (report, transcript) = run_script(script);

    assert_eq!(report.total, 4);
    assert_eq!(report.critical, 2);
    assert_eq!(report.safe, 2);
    assert_eq!(report.moderate, 0);
    assert!(transcript.contains("✓ Depot AMB-001 added!"));
    assert!(transcript.contains("✓ Method MET-002 added!"));
}

#[test]
fn listing_shows_status_reports_in_insertion_order() {
    let script = "1\n1\nAMB-001\n25\nA. Yilmaz\n\
                  1\n2\nMET-001\n80\nCooling Analysis\n\
                  2\n5\n";
    let (_, transcript) = run_script(script);

    assert!(transcript.contains("=== OBJECT LIST (STATUS REPORT) ==="));
    assert!(transcript.contains("1. Object ID: AMB-001, Stability: 25%"));
    assert!(transcript.contains("Shift Supervisor: A. Yilmaz"));
    assert!(transcript.contains("2. Object ID: MET-001, Stability: 80%"));
    assert!(transcript.contains("Analysis Type: Cooling Analysis, Status Active: true"));
}

#[test]
fn listing_empty_registry_says_so() {
    let (_, transcript) = run_script("2\n5\n");
    assert!(transcript.contains("No objects registered yet."));
}

#[test]
fn danger_analysis_uses_kind_specific_bands() {
    let script = "1\n1\nAMB-001\n25\nA. Yilmaz\n\
                  1\n2\nMET-002\n80\nStability Check\n\
                  3\n5\n";
    let (_, transcript) = run_script(script);

    assert!(transcript.contains("=== DANGER ANALYSIS ==="));
    assert!(transcript.contains("WARNING: depot AMB-001 at critical level! Stability: 25%"));
    assert!(transcript.contains("STABLE: method MET-002 operating normally. Stability: 80%"));
}

// =============================================================================
// INPUT VALIDATION TESTS
// =============================================================================

#[test]
fn malformed_menu_input_reprompts() {
    let (report, transcript) = run_script("abc\n9\n5\n");

    assert_eq!(report.total, 0);
    assert!(transcript.contains("Invalid input! Please enter a numeric value."));
    assert!(transcript.contains("Invalid input! Enter a number between 1 and 5."));
}

#[test]
fn malformed_stability_input_reprompts_until_valid() {
    let script = "1\n1\nAMB-001\nnot-a-number\n150\n95\nA. Yilmaz\n5\n";
    let (report, transcript) = run_script(script);

    assert_eq!(report.total, 1);
    assert_eq!(report.safe, 1);
    assert!(transcript.contains("Invalid input! Please enter a numeric value."));
    assert!(transcript.contains("Invalid input! Enter a number between 0 and 100."));
    assert!(transcript.contains("✓ Depot AMB-001 added!"));
}

// =============================================================================
// EMERGENCY COOLDOWN TESTS
// =============================================================================

#[test]
fn cooldown_clamps_at_ceiling() {
    // Depot at 95 -> cooldown -> 100 (safe, not 115)
    let script = "1\n1\nAMB-001\n95\nA. Yilmaz\n4\n5\n";
    let (report, transcript) = run_script(script);

    assert!(transcript.contains("Emergency cooldown initiated for depot AMB-001!"));
    assert_eq!(report.safe, 1);
}

#[test]
fn cooldown_reports_when_no_object_qualifies() {
    let script = "1\n2\nMET-001\n15\nCooling Analysis\n4\n5\n";
    let (_, transcript) = run_script(script);

    assert!(transcript.contains("No objects support emergency cooldown."));
}

#[test]
fn cooldown_on_empty_registry_says_so() {
    let (_, transcript) = run_script("4\n5\n");
    assert!(transcript.contains("No objects registered yet."));
}

// =============================================================================
// JSON REPORT TESTS
// =============================================================================

#[test]
fn json_report_replaces_text_block() {
    let mut output = Vec::new();
    let report = {
        let mut console = Console::new(Cursor::new(b"5\n".as_slice()), &mut output, true);
        console.run().unwrap()
    };
    let transcript = String::from_utf8(output).unwrap();

    assert_eq!(report.total, 0);
    assert!(transcript.contains("\"total\": 0"));
    assert!(!transcript.contains("=== SYSTEM REPORT ==="));
}

// =============================================================================
// DEMO REGISTRY TESTS
// =============================================================================

#[test]
fn demo_registry_spans_all_report_bands() {
    let report = demo_registry().report();
    assert_eq!(report.total, 4);
    assert_eq!(report.critical, 2);
    assert_eq!(report.safe, 2);
    assert_eq!(report.moderate, 0);
}

#[test]
fn demo_walkthrough_cools_only_depots() {
    let mut registry = demo_registry();
    let notices = registry.emergency_cooldown_all();
    assert_eq!(notices.len(), 2);

    // 25 -> 45 (moderate), 75 -> 95 (safe); methods untouched
    let report = registry.report();
    assert_eq!(report.critical, 1);
    assert_eq!(report.safe, 2);
    assert_eq!(report.moderate, 1);
}
