//! Statistics reporting.

use console::style;

use crate::download::BatchReport;

/// Print statistics for a finished batch.
pub fn print_batch_stats(report: &BatchReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Batch Statistics:").bold());
    println!(
        "  Succeeded:        {}/{}",
        style(report.succeeded()).green(),
        report.total
    );
    println!("  Newly archived:   {}", report.materialized);
    println!("  Already present:  {}", report.already_present);
    println!("  Files downloaded: {}", report.files_downloaded);
    if report.unknown_skipped > 0 {
        println!(
            "  Unknown type:     {} (skipped)",
            style(report.unknown_skipped).yellow()
        );
    }
    if report.failed_count() > 0 {
        println!("  Failed:           {}", style(report.failed_count()).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
