//! Append command implementation.

use duralog_core::Log;
use std::path::Path;
use tracing::info;

/// Runs the append command.
pub fn run(path: &Path, values: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut log = Log::open(path)?;
    info!("Opened log at {:?} with {} records", path, log.record_count());

    for value in values {
        log.append(value.as_bytes())?;
    }

    println!(
        "Appended {} value(s); log now holds {} record(s)",
        values.len(),
        log.record_count()
    );
    log.close();
    Ok(())
}
