//! # Interactive Console
//!
//! The menu loop over the object registry.
//!
//! ## Menu
//!
//! 1. Add a new object (Depot or Method)
//! 2. List objects (status reports)
//! 3. Analyze danger levels
//! 4. Run emergency cooldown (stabilizable objects only)
//! 5. Exit (prints the system report)
//!
//! ## Input Handling
//!
//! Numeric prompts loop until a parseable value in range is supplied;
//! malformed input is answered with a re-prompt, never a crash. End of
//! input on the reader is treated as choosing "exit": the final report is
//! printed and the loop terminates normally.
//!
//! The console is generic over [`BufRead`] and [`Write`] so tests can drive
//! it with scripted input and capture the transcript.

use fluxmon_core::{Depot, FluxObject, FluxmonError, Method, Registry, Stability, SystemReport};
use std::io::{BufRead, Write};

/// Width of the menu panel rule.
const PANEL_WIDTH: usize = 50;

// =============================================================================
// CONSOLE
// =============================================================================

/// Menu-driven console over a single in-process [`Registry`].
pub struct Console<R, W> {
    reader: R,
    writer: W,
    registry: Registry,
    json_report: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty registry.
    ///
    /// With `json_report` set, the final system report is emitted as JSON
    /// instead of the text block.
    pub fn new(reader: R, writer: W, json_report: bool) -> Self {
        Self {
            reader,
            writer,
            registry: Registry::new(),
            json_report,
        }
    }

    /// Run the menu loop until exit (or end of input).
    ///
    /// Returns the final system report after printing it.
    pub fn run(&mut self) -> Result<SystemReport, FluxmonError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_menu_choice("Your choice (1-5): ", 5)? else {
                break;
            };
            match choice {
                1 => self.add_object()?,
                2 => self.list_objects()?,
                3 => self.danger_analysis()?,
                4 => self.emergency_cooldown()?,
                _ => break,
            }
        }

        let report = self.registry.report();
        self.print_system_report(&report)?;
        Ok(report)
    }

    // =========================================================================
    // MENU ACTIONS
    // =========================================================================

    fn print_menu(&mut self) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "=".repeat(PANEL_WIDTH))?;
        writeln!(self.writer, "FLUXMON CONTAINMENT CONTROL PANEL")?;
        writeln!(self.writer, "{}", "=".repeat(PANEL_WIDTH))?;
        writeln!(self.writer, "1. Add New Object")?;
        writeln!(self.writer, "2. List Objects (Status Report)")?;
        writeln!(self.writer, "3. Analyze Danger Levels")?;
        writeln!(
            self.writer,
            "4. Run Emergency Cooldown (Stabilizable objects only)"
        )?;
        writeln!(self.writer, "5. Exit")?;
        Ok(())
    }

    fn add_object(&mut self) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== ADD NEW OBJECT ===")?;
        writeln!(self.writer, "1. Depot")?;
        writeln!(self.writer, "2. Method")?;

        let Some(kind) = self.read_menu_choice("Object kind (1-2): ", 2)? else {
            return Ok(());
        };
        let Some(id) = self.prompt_line("Enter ID: ")? else {
            return Ok(());
        };
        let Some(stability) = self.read_stability("Enter stability (0-100): ")? else {
            return Ok(());
        };

        let mut object: FluxObject = if kind == 1 {
            let Some(supervisor) = self.prompt_line("Enter shift supervisor: ")? else {
                return Ok(());
            };
            Depot::new(id, supervisor).into()
        } else {
            let Some(analysis_type) = self.prompt_line("Enter analysis type: ")? else {
                return Ok(());
            };
            Method::new(id, analysis_type).into()
        };
        object.apply_stability(stability);

        tracing::debug!(kind = object.kind_name(), id = %object.id(), "object added");
        writeln!(
            self.writer,
            "✓ {} {} added!",
            object.kind_name(),
            object.id()
        )?;
        self.registry.add(object);
        Ok(())
    }

    fn list_objects(&mut self) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== OBJECT LIST (STATUS REPORT) ===")?;
        if self.registry.is_empty() {
            writeln!(self.writer, "No objects registered yet.")?;
            return Ok(());
        }

        for (index, object) in self.registry.iter().enumerate() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}. {}", index + 1, object.status_report())?;
        }
        Ok(())
    }

    fn danger_analysis(&mut self) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== DANGER ANALYSIS ===")?;
        if self.registry.is_empty() {
            writeln!(self.writer, "No objects registered yet.")?;
            return Ok(());
        }

        for object in self.registry.iter() {
            writeln!(self.writer, "{}", object.danger_report())?;
            writeln!(self.writer, "---")?;
        }
        Ok(())
    }

    fn emergency_cooldown(&mut self) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== EMERGENCY COOLDOWN ===")?;
        if self.registry.is_empty() {
            writeln!(self.writer, "No objects registered yet.")?;
            return Ok(());
        }

        let notices = self.registry.emergency_cooldown_all();
        if notices.is_empty() {
            writeln!(self.writer, "No objects support emergency cooldown.")?;
            return Ok(());
        }

        tracing::debug!(cooled = notices.len(), "emergency cooldown executed");
        for notice in notices {
            writeln!(self.writer, "{}", notice)?;
            writeln!(self.writer, "---")?;
        }
        Ok(())
    }

    fn print_system_report(&mut self, report: &SystemReport) -> Result<(), FluxmonError> {
        writeln!(self.writer)?;
        if self.json_report {
            let json = serde_json::to_string_pretty(report).unwrap_or_default();
            writeln!(self.writer, "{}", json)?;
        } else {
            writeln!(self.writer, "=== SYSTEM REPORT ===")?;
            writeln!(self.writer, "Total Objects:  {}", report.total)?;
            writeln!(self.writer, "Critical Level: {}", report.critical)?;
            writeln!(self.writer, "Safe Level:     {}", report.safe)?;
            writeln!(self.writer, "Moderate Risk:  {}", report.moderate)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Shutting down...")?;
        Ok(())
    }

    // =========================================================================
    // PROMPT HELPERS
    // =========================================================================

    /// Read one trimmed line. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>, FluxmonError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a prompt and read the answer. `None` means end of input.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, FluxmonError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Prompt for a menu choice in `1..=max`, re-prompting on malformed or
    /// out-of-range input. `None` means end of input.
    fn read_menu_choice(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, FluxmonError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<u32>() {
                Ok(value) if (1..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => writeln!(
                    self.writer,
                    "Invalid input! Enter a number between 1 and {}.",
                    max
                )?,
                Err(_) => writeln!(self.writer, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }

    /// Prompt for a stability score, re-prompting until a parseable value
    /// in `[0, 100]` is supplied. `None` means end of input.
    fn read_stability(&mut self, prompt: &str) -> Result<Option<Stability>, FluxmonError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(value) => match Stability::new(value) {
                    Ok(stability) => return Ok(Some(stability)),
                    Err(_) => writeln!(
                        self.writer,
                        "Invalid input! Enter a number between 0 and 100."
                    )?,
                },
                Err(_) => writeln!(self.writer, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }
}
