//! Unflagged syndrome readout
//!
//! Gantree: L5_Decoder → SyndromeReadout
//!
//! Each generator is measured with one fresh primary ancilla and no flag.
//! Used as the full readout after a non-trivial syndrome and as the
//! corrective readout after a flag. Every sub-circuit runs through the
//! backend, so the readout itself may add errors.

use crate::stabilizer::{StabilizerGenerator, Syndrome, GENERATORS};
use flagqec_backend::Backend;
use flagqec_core::{steane, Basis, PauliFrame};
use flagqec_noise::ChannelParameters;

/// Measure one generator with a single ancilla.
///
/// X-type: ancilla prepared in X, `cnot(ancilla, d)` over the support in
/// descending order, measured in X. Z-type: ancilla prepared in Z,
/// `cnot(d, ancilla)` in the same order, measured in Z.
pub fn measure_generator<B: Backend + ?Sized>(
    backend: &mut B,
    generator: &StabilizerGenerator,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> bool {
    let ancilla = steane::PRIMARY_ANCILLA;
    backend.prepare(generator.basis, ancilla, frame, params);
    for &d in generator.support.iter().rev() {
        match generator.basis {
            Basis::X => backend.cnot(ancilla, d, frame, params),
            Basis::Z => backend.cnot(d, ancilla, frame, params),
        }
    }
    backend.measure(generator.basis, ancilla, frame, params)
}

/// Read the three generators of one type; the other half stays zero
pub fn extract_syndromes_of<B: Backend + ?Sized>(
    backend: &mut B,
    basis: Basis,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> Syndrome {
    let mut syndrome = Syndrome::zero();
    for (position, generator) in GENERATORS.iter().enumerate() {
        if generator.basis == basis {
            let bit = measure_generator(backend, generator, frame, params);
            syndrome.set(position, bit);
        }
    }
    log::trace!("{} readout: {}", basis, syndrome);
    syndrome
}

/// X-type syndromes in positions 0..3
pub fn extract_x_syndromes<B: Backend + ?Sized>(
    backend: &mut B,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> Syndrome {
    extract_syndromes_of(backend, Basis::X, frame, params)
}

/// Z-type syndromes in positions 3..6
pub fn extract_z_syndromes<B: Backend + ?Sized>(
    backend: &mut B,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> Syndrome {
    extract_syndromes_of(backend, Basis::Z, frame, params)
}

/// Full six-bit readout, X half first
pub fn extract_syndromes<B: Backend + ?Sized>(
    backend: &mut B,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> Syndrome {
    let x = extract_x_syndromes(backend, frame, params);
    let z = extract_z_syndromes(backend, frame, params);
    x.combine(&z)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use flagqec_backend::{FaultInjector, IdealBackend, Location};

    #[test]
    fn test_ideal_readout_matches_syndrome() {
        let params = ChannelParameters::ideal();
        let mut backend = IdealBackend::new();
        for x in 0..(1u16 << 7) {
            for z in [0u16, 0b000_0001, 0b110_0000, 0b101_1010] {
                let start = PauliFrame::new(x, z);
                let mut frame = start;
                let s = extract_syndromes(&mut backend, &mut frame, &params);
                assert_eq!(s, Syndrome::of(&start));
                assert_eq!(frame.data(), start);
            }
        }
    }

    #[test]
    fn test_single_type_leaves_other_half_zero() {
        let params = ChannelParameters::ideal();
        let mut backend = IdealBackend::new();
        let mut frame = PauliFrame::new(0b111_1111, 0b111_1111);

        let x = extract_x_syndromes(&mut backend, &mut frame, &params);
        assert_eq!(x.z_index(), 0);
        assert_eq!(x.x_index(), Syndrome::of(&frame).x_index());

        let z = extract_z_syndromes(&mut backend, &mut frame, &params);
        assert_eq!(z.x_index(), 0);
        assert_eq!(z.z_index(), Syndrome::of(&frame).z_index());
    }

    #[test]
    fn test_readout_schedule() {
        let params = ChannelParameters::ideal();
        let mut backend = FaultInjector::recording();
        let mut frame = PauliFrame::zero();
        extract_syndromes(&mut backend, &mut frame, &params);

        let trace = backend.trace();
        // 6 sub-circuits of prep + 4 cnot + measure
        assert_eq!(trace.len(), 36);
        assert_eq!(
            trace[0],
            Location::Preparation {
                basis: Basis::X,
                qubit: 7
            }
        );
        assert_eq!(
            trace[1],
            Location::Cnot {
                control: 7,
                target: 6
            }
        );
        assert_eq!(
            trace[4],
            Location::Cnot {
                control: 7,
                target: 3
            }
        );
        assert_eq!(
            trace[22],
            Location::Cnot {
                control: 3,
                target: 7
            }
        );
        assert_eq!(
            trace[35],
            Location::Measurement {
                basis: Basis::Z,
                qubit: 7
            }
        );
    }

    #[test]
    fn test_measurement_fault_corrupts_one_bit() {
        use flagqec_backend::{Fault, FaultKind};

        let params = ChannelParameters::ideal();
        // Measurement of the second X sub-circuit
        let fault = Fault {
            location: 11,
            kind: FaultKind::Measurement,
        };
        let mut backend = FaultInjector::new(fault);
        let mut frame = PauliFrame::zero();
        let s = extract_syndromes(&mut backend, &mut frame, &params);
        assert!(backend.injected());
        assert_eq!(s, Syndrome::new([0, 1, 0, 0, 0, 0]));
        assert!(frame.data().is_trivial());
    }
}
