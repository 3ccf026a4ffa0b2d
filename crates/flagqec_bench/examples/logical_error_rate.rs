//! FLAGQEC Logical Error Rate Sweep
//!
//! Verifies single-fault tolerance of the flagged decoder, then estimates
//! the logical error rate over a sweep of physical error rates.
//!
//! Usage:
//!   cargo run --release --example logical_error_rate            # quick sweep
//!   cargo run --release --example logical_error_rate -- full    # 21-point sweep
//!   cargo run --release --example logical_error_rate -- cfg.json
//!
//! No `log` backend is installed here, so `RUST_LOG` has no effect. Sweep
//! progress comes from the verbose config, and single-fault failures are
//! printed through the verification report.

use flagqec_bench::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║           FLAGQEC Steane [[7,1,3]] Logical Error Rate Report         ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let config = match std::env::args().nth(1).as_deref() {
        None => TrialConfig::quick(),
        Some("full") => TrialConfig::default_sweep(),
        Some(path) => TrialConfig::load(path)?,
    }
    .with_verbose(true);

    println!("Configuration:");
    println!("  • Points: {}", config.points.len());
    println!("  • Total trials: {}", config.total_trials());
    println!("  • Rate ratios: prep={:.4}γ, meas={:.4}γ", config.prep_ratio, config.meas_ratio);
    println!("  • Random seed: {:?}", config.seed);
    println!();

    // =========================================================================
    // Part 1: Single-Fault Verification
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  PART 1: Single-Fault Verification");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let report = verify_single_faults();
    println!("  {}", report);
    if !report.is_fault_tolerant() {
        println!("{}", Reporter::verification_report(&report));
        anyhow::bail!("{} single faults leave a logical error", report.failures.len());
    }
    println!();

    // =========================================================================
    // Part 2: Monte Carlo Sweep
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  PART 2: Monte Carlo Sweep");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let mut suite = SweepSuite::new(config)?;
    let results = suite.run()?;

    println!();
    println!("┌────────────┬────────────┬──────────┬────────────┬──────────┐");
    println!("│ Gamma      │ Trials     │ Failures │ Logical    │ Flags    │");
    println!("├────────────┼────────────┼──────────┼────────────┼──────────┤");
    for r in &results {
        println!(
            "│ {:10.3e} │ {:10} │ {:8} │ {:10.3e} │ {:7.2}% │",
            r.gamma,
            r.trials,
            r.failures,
            r.logical_error_rate,
            r.flag_rate() * 100.0
        );
    }
    println!("└────────────┴────────────┴──────────┴────────────┴──────────┘\n");

    // =========================================================================
    // Summary
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  SUMMARY");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let stats = suite.statistics();
    match stats.pseudo_threshold {
        Some(t) => println!("  Pseudo-threshold: γ ≈ {:.3e}", t),
        None => println!("  Pseudo-threshold: not bracketed by this sweep"),
    }
    if let Some(slope) = stats.slope {
        println!("  Log-log slope:    {:.2}", slope);
    }
    println!(
        "  Total time:       {:.2}s",
        stats.total_time_ms as f64 / 1000.0
    );
    println!();

    println!("{}", Reporter::to_csv(&results));
    Ok(())
}
