//! Exhaustive single-fault verification
//!
//! Gantree: L8_Benchmark → Verification
//!
//! Records the locations of a fault-free decode pass, then replays the pass
//! once per possible single fault at each of them. A decoder is fault
//! tolerant when no single fault leaves a logical error after a perfect
//! second pass.

use flagqec_backend::{Fault, FaultInjector, IdealBackend};
use flagqec_core::PauliFrame;
use flagqec_decoder::{correct_errors, is_logical_error, reduce_error, DecodeOutcome};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoder behaviour under one injected fault
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultOutcome {
    /// Fault injected
    pub fault: Fault,

    /// How the faulty pass halted
    pub decode: DecodeOutcome,

    /// Reduced data residual after the faulty pass
    pub residual: PauliFrame,

    /// Logical error after the perfect second pass
    pub logical: bool,
}

/// Summary of an exhaustive single-fault run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Locations on the fault-free path
    pub locations: usize,

    /// Faults injected
    pub faults_checked: usize,

    /// Faults that raised a flag
    pub flagged: usize,

    /// Heaviest reduced residual left by the faulty pass
    pub max_residual_weight: u32,

    /// Faults ending in a logical error
    pub failures: Vec<FaultOutcome>,
}

impl VerificationReport {
    /// No single fault causes a logical error
    pub fn is_fault_tolerant(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} faults over {} locations: {} flagged, {} logical failures, max residual weight {}",
            self.faults_checked,
            self.locations,
            self.flagged,
            self.failures.len(),
            self.max_residual_weight
        )
    }
}

/// Decode a clean record with `fault` injected, then finish with a perfect pass
pub fn inject(fault: Fault) -> FaultOutcome {
    let ideal = ChannelParameters::ideal();
    let mut backend = FaultInjector::new(fault);
    let mut frame = PauliFrame::zero();
    let decode = correct_errors(&mut backend, &mut frame, &ideal);

    let mut copy = frame;
    correct_errors(&mut IdealBackend::new(), &mut copy, &ideal);

    FaultOutcome {
        fault,
        decode,
        residual: reduce_error(&frame.data()),
        logical: is_logical_error(&copy),
    }
}

/// Inject every single fault along the fault-free decode path
/// Gantree: verify_single_faults() -> VerificationReport // 단일 결함 검증
pub fn verify_single_faults() -> VerificationReport {
    let mut recorder = FaultInjector::recording();
    let mut frame = PauliFrame::zero();
    correct_errors(&mut recorder, &mut frame, &ChannelParameters::ideal());
    let trace = recorder.trace();

    let mut report = VerificationReport {
        locations: trace.len(),
        faults_checked: 0,
        flagged: 0,
        max_residual_weight: 0,
        failures: Vec::new(),
    };

    for fault in Fault::enumerate(trace) {
        let outcome = inject(fault);
        report.faults_checked += 1;
        if outcome.decode.is_flagged() {
            report.flagged += 1;
        }
        report.max_residual_weight = report.max_residual_weight.max(outcome.residual.weight());
        if outcome.logical {
            log::warn!("fault {} at {} leaves a logical error", fault, trace[fault.location]);
            report.failures.push(outcome);
        }
    }

    log::info!("{}", report);
    report
}
