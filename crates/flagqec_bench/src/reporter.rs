//! Sweep reporting
//!
//! Gantree: L8_Benchmark → Reporter
//!
//! Logical-vs-physical error rate tables in several output formats.

use crate::driver::TrialResult;
use crate::suite::SweepStatistics;
use crate::verification::VerificationReport;
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

/// Sweep reporter
/// Gantree: Reporter // 결과 리포팅
pub struct Reporter;

fn threshold_text(stats: &SweepStatistics) -> String {
    match stats.pseudo_threshold {
        Some(t) => format!("{:.3e}", t),
        None => "not bracketed".to_string(),
    }
}

fn slope_text(stats: &SweepStatistics) -> String {
    match stats.slope {
        Some(s) => format!("{:.2}", s),
        None => "-".to_string(),
    }
}

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(results: &[TrialResult], format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::to_markdown(results),
            ReportFormat::Json => Self::to_json(results),
            ReportFormat::Csv => Self::to_csv(results),
            ReportFormat::Text => Self::to_text(results),
        }
    }

    /// Convert results to Markdown table
    pub fn to_markdown(results: &[TrialResult]) -> String {
        let mut output = String::new();
        let stats = SweepStatistics::from_results(results);

        // Writing into a String cannot fail
        let _ = writeln!(output, "# FLAGQEC Logical Error Rates\n");
        let _ = writeln!(output, "## Summary\n");
        let _ = writeln!(output, "- **Points**: {}", stats.count);
        let _ = writeln!(output, "- **Trials**: {}", stats.total_trials);
        let _ = writeln!(output, "- **Failures**: {}", stats.total_failures);
        let _ = writeln!(output, "- **Pseudo-threshold**: {}", threshold_text(&stats));
        let _ = writeln!(output, "- **Log-log slope**: {}", slope_text(&stats));
        let _ = writeln!(
            output,
            "- **Total Time**: {:.2}s\n",
            stats.total_time_ms as f64 / 1000.0
        );

        let _ = writeln!(output, "## Detailed Results\n");
        let _ = writeln!(
            output,
            "| Gamma | Trials | Failures | Logical | Std Err | Flags | Syndromes | Time(ms) |"
        );
        let _ = writeln!(
            output,
            "|-------|--------|----------|---------|---------|-------|-----------|----------|"
        );
        for r in results {
            let _ = writeln!(
                output,
                "| {:.3e} | {} | {} | {:.3e} | {:.1e} | {} | {} | {} |",
                r.gamma,
                r.trials,
                r.failures,
                r.logical_error_rate,
                r.standard_error(),
                r.flag_events,
                r.syndrome_events,
                r.time_ms
            );
        }

        output
    }

    /// Convert results to JSON
    pub fn to_json(results: &[TrialResult]) -> String {
        let stats = SweepStatistics::from_results(results);

        let report = serde_json::json!({
            "statistics": stats,
            "results": results,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert results to CSV
    pub fn to_csv(results: &[TrialResult]) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "gamma,trials,failures,logical_error_rate,standard_error,flag_events,syndrome_events,time_ms"
        );
        for r in results {
            let _ = writeln!(
                output,
                "{},{},{},{},{},{},{},{}",
                r.gamma,
                r.trials,
                r.failures,
                r.logical_error_rate,
                r.standard_error(),
                r.flag_events,
                r.syndrome_events,
                r.time_ms
            );
        }

        output
    }

    /// Convert results to plain text summary
    pub fn to_text(results: &[TrialResult]) -> String {
        let mut output = String::new();
        let stats = SweepStatistics::from_results(results);

        let _ = writeln!(output, "FLAGQEC Logical Error Rates");
        let _ = writeln!(output, "===========================\n");

        let _ = writeln!(output, "Summary:");
        let _ = writeln!(output, "  Points run: {}", stats.count);
        let _ = writeln!(
            output,
            "  Failures: {} / {}",
            stats.total_failures, stats.total_trials
        );
        let _ = writeln!(output, "  Pseudo-threshold: {}", threshold_text(&stats));
        let _ = writeln!(output, "  Log-log slope: {}", slope_text(&stats));
        let _ = writeln!(
            output,
            "  Total time: {:.2}s\n",
            stats.total_time_ms as f64 / 1000.0
        );

        let _ = writeln!(output, "Individual Results:");
        for r in results {
            let _ = writeln!(
                output,
                "  {}{}",
                r,
                if r.is_below_physical() { "" } else { " [above γ]" }
            );
        }

        output
    }

    // ========================================================================
    // Specialized Reports
    // ========================================================================

    /// Single-fault verification summary as Markdown
    pub fn verification_report(report: &VerificationReport) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "# Single-Fault Verification\n");
        let _ = writeln!(output, "| Metric | Value |");
        let _ = writeln!(output, "|--------|-------|");
        let _ = writeln!(output, "| Locations | {} |", report.locations);
        let _ = writeln!(output, "| Faults checked | {} |", report.faults_checked);
        let _ = writeln!(output, "| Flagged | {} |", report.flagged);
        let _ = writeln!(
            output,
            "| Max residual weight | {} |",
            report.max_residual_weight
        );
        let _ = writeln!(output, "| Logical failures | {} |", report.failures.len());
        let _ = writeln!(
            output,
            "\n**Fault tolerant**: {}",
            if report.is_fault_tolerant() { "yes" } else { "no" }
        );

        for failure in &report.failures {
            let _ = writeln!(
                output,
                "- {} → {} (residual {})",
                failure.fault, failure.decode, failure.residual
            );
        }

        output
    }
}

// ============================================================================
// Tests
// ============================================================================
