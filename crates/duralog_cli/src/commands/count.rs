//! Count command implementation.

use duralog_core::Log;
use std::path::Path;

/// Runs the count command.
///
/// Opening the log runs recovery, so a log with a torn tail is repaired as
/// a side effect. Use `verify` for a read-only check.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log = Log::open(path)?;
    println!("{}", log.record_count());
    Ok(())
}
