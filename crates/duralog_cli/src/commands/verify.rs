//! Verify command implementation.

use duralog_core::scan;
use duralog_storage::FileBackend;
use std::path::Path;

/// Runs the verify command.
///
/// Scans the log read-only and reports how much of it validates. Unlike
/// opening the log, this never truncates the file.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("log file not found: {}", path.display()).into());
    }

    let backend = FileBackend::open(path)?;
    let report = scan(&backend)?;

    println!("Records:        {}", report.valid_records);
    println!("Valid bytes:    {}", report.valid_len);
    println!("File size:      {}", report.file_len);

    if report.is_clean() {
        println!("Status:         OK");
    } else {
        println!(
            "Status:         {} trailing byte(s) would be truncated on next open",
            report.trailing_bytes()
        );
    }

    Ok(())
}
