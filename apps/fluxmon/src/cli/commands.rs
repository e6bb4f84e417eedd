//! # CLI Command Implementations

use crate::console::Console;
use fluxmon_core::{Depot, FluxmonError, Method, Registry};

// =============================================================================
// CONSOLE COMMAND
// =============================================================================

/// Run the interactive console over stdin/stdout.
pub fn cmd_console(json_report: bool) -> Result<(), FluxmonError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut console = Console::new(stdin.lock(), stdout.lock(), json_report);
    let report = console.run()?;
    tracing::info!(
        total = report.total,
        critical = report.critical,
        "console session finished"
    );
    Ok(())
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Registry seeded with the canonical demo objects.
///
/// Two depots and two methods spanning all three report bands.
#[must_use]
pub fn demo_registry() -> Registry {
    let mut registry = Registry::new();

    let mut depot = Depot::new("AMB-001", "A. Yilmaz");
    depot.apply_stability(demo_stability(25.0));
    registry.add(depot);

    let mut depot = Depot::new("AMB-002", "A. Demir");
    depot.apply_stability(demo_stability(75.0));
    registry.add(depot);

    let mut method = Method::new("MET-001", "Cooling Analysis");
    method.apply_stability(demo_stability(15.0));
    registry.add(method);

    let mut method = Method::new("MET-002", "Stability Check");
    method.apply_stability(demo_stability(80.0));
    registry.add(method);

    registry
}

/// Seed scores are compiled-in and always in range.
fn demo_stability(value: f64) -> fluxmon_core::Stability {
    fluxmon_core::Stability::new(value).unwrap_or_default()
}

/// Run the scripted walkthrough: status report, danger report, and - where
/// supported - an emergency cooldown for each object, then the final
/// system report.
pub fn cmd_demo(json_report: bool) -> Result<(), FluxmonError> {
    println!("=== FLUXMON DEMO WALKTHROUGH ===");
    println!();

    let mut registry = demo_registry();
    for object in registry.iter_mut() {
        println!("{}", object.status_report());
        println!("{}", object.danger_report());
        if let Some(stabilizable) = object.as_stabilizable_mut() {
            println!("{}", stabilizable.emergency_cooldown());
        }
        println!("---");
    }

    let report = registry.report();
    println!();
    if json_report {
        let json = serde_json::to_string_pretty(&report).unwrap_or_default();
        println!("{}", json);
        return Ok(());
    }

    println!("=== SYSTEM REPORT ===");
    println!("Total Objects:  {}", report.total);
    println!("Critical Level: {}", report.critical);
    println!("Safe Level:     {}", report.safe);
    println!("Moderate Risk:  {}", report.moderate);
    Ok(())
}
