//! Deterministic single-fault injection
//!
//! Gantree: L6_Backend → FaultInjector
//!
//! Every call to a primitive is one noisy *location*, numbered in execution
//! order. A [`FaultInjector`] applies ideal propagation everywhere and
//! injects exactly one [`Fault`] at a chosen location. It also records the
//! locations it executed, so a fault-free run yields the list of places a
//! single fault could occur.

use crate::execution::{
    ideal_outcome, preparation_fault, propagate_cnot, two_qubit_pauli, Backend, BackendStats,
};
use flagqec_core::{noise, Basis, Pauli, PauliFrame, QubitId};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One executed primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Preparation of `qubit` in `basis`
    Preparation {
        /// Basis prepared
        basis: Basis,
        /// Qubit prepared
        qubit: QubitId,
    },
    /// CNOT from `control` to `target`
    Cnot {
        /// Control qubit
        control: QubitId,
        /// Target qubit
        target: QubitId,
    },
    /// Measurement of `qubit` in `basis`
    Measurement {
        /// Basis measured
        basis: Basis,
        /// Qubit measured
        qubit: QubitId,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Preparation { basis, qubit } => write!(f, "prep{}({})", basis, qubit),
            Location::Cnot { control, target } => write!(f, "cnot({}, {})", control, target),
            Location::Measurement { basis, qubit } => write!(f, "meas{}({})", basis, qubit),
        }
    }
}

/// What goes wrong at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// Orthogonal state prepared
    Preparation,
    /// Pauli pair (control, target) applied after the CNOT
    Gate(Pauli, Pauli),
    /// Outcome flipped
    Measurement,
}

/// A fault pinned to a location index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Location index, in execution order
    pub location: usize,
    /// Fault applied there
    pub kind: FaultKind,
}

impl Fault {
    /// Every single fault possible at one location
    pub fn candidates(index: usize, location: &Location) -> Vec<Fault> {
        match location {
            Location::Preparation { .. } => vec![Fault {
                location: index,
                kind: FaultKind::Preparation,
            }],
            Location::Measurement { .. } => vec![Fault {
                location: index,
                kind: FaultKind::Measurement,
            }],
            Location::Cnot { .. } => (1..=noise::TWO_QUBIT_PAULIS)
                .map(|i| {
                    let (c, t) = two_qubit_pauli(i);
                    Fault {
                        location: index,
                        kind: FaultKind::Gate(c, t),
                    }
                })
                .collect(),
        }
    }

    /// Every single fault along a recorded trace
    pub fn enumerate(trace: &[Location]) -> Vec<Fault> {
        trace
            .iter()
            .enumerate()
            .flat_map(|(i, loc)| Self::candidates(i, loc))
            .collect()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FaultKind::Preparation => write!(f, "#{} prep flip", self.location),
            FaultKind::Gate(c, t) => write!(f, "#{} {}{}", self.location, c, t),
            FaultKind::Measurement => write!(f, "#{} meas flip", self.location),
        }
    }
}

/// Backend injecting at most one deterministic fault
#[derive(Debug, Clone, Default)]
pub struct FaultInjector {
    fault: Option<Fault>,
    cursor: usize,
    injected: bool,
    trace: Vec<Location>,
    stats: BackendStats,
}

impl FaultInjector {
    /// Injector for `fault`
    pub fn new(fault: Fault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::default()
        }
    }

    /// Injector that never faults, only records locations
    pub fn recording() -> Self {
        Self::default()
    }

    /// Locations executed so far
    pub fn trace(&self) -> &[Location] {
        &self.trace
    }

    /// Whether the fault has been applied
    pub fn injected(&self) -> bool {
        self.injected
    }

    /// Take the next location index and record it; returns the pending
    /// fault kind if this is the chosen location
    fn step(&mut self, location: Location) -> Option<FaultKind> {
        let index = self.cursor;
        self.cursor += 1;
        self.trace.push(location);
        match self.fault {
            Some(fault) if fault.location == index => Some(fault.kind),
            _ => None,
        }
    }

    fn mark(&mut self) {
        self.injected = true;
        self.stats.faults += 1;
    }
}

impl Backend for FaultInjector {
    fn name(&self) -> &str {
        "flagqec_fault_injector"
    }

    fn prepare(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) {
        self.stats.preparations += 1;
        frame.clear(qubit);
        if let Some(FaultKind::Preparation) = self.step(Location::Preparation { basis, qubit }) {
            frame.apply(qubit, preparation_fault(basis));
            self.mark();
        }
    }

    fn cnot(
        &mut self,
        control: QubitId,
        target: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) {
        self.stats.cnots += 1;
        propagate_cnot(frame, control, target);
        if let Some(FaultKind::Gate(on_control, on_target)) =
            self.step(Location::Cnot { control, target })
        {
            frame.apply(control, on_control);
            frame.apply(target, on_target);
            self.mark();
        }
    }

    fn measure(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) -> bool {
        self.stats.measurements += 1;
        let outcome = ideal_outcome(frame, basis, qubit);
        if let Some(FaultKind::Measurement) = self.step(Location::Measurement { basis, qubit }) {
            self.mark();
            return !outcome;
        }
        outcome
    }

    fn stats(&self) -> &BackendStats {
        &self.stats
    }
}

// ============================================================================
// Tests
// ============================================================================
