//! End-to-end tests for the translation pipeline across optimization levels.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use alsvin_compile::{CompileError, translate};
use alsvin_ir::{Circuit, Gate, Instruction, QubitId};

/// Helper: check that a circuit only uses the translated vocabulary.
fn in_target_basis(circuit: &Circuit) -> bool {
    circuit
        .instructions()
        .iter()
        .all(|inst| matches!(inst.gate, Gate::Rx(_) | Gate::Rz(_) | Gate::CZ))
}

#[test]
fn test_level0_identity_on_basis_circuit() {
    // A circuit already in the target vocabulary translates to itself.
    let mut circuit = Circuit::new("native", 2);
    circuit.rx(FRAC_PI_4, QubitId(0)).unwrap();
    circuit.rz(FRAC_PI_2, QubitId(1)).unwrap();
    circuit.cz(QubitId(0), QubitId(1)).unwrap();
    circuit.rx(-FRAC_PI_4, QubitId(0)).unwrap();

    let compiled = translate(&circuit, false, 0).unwrap();
    assert_eq!(compiled, circuit);
}

#[test]
fn test_level0_cx_expansion() {
    let mut circuit = Circuit::new("cx", 2);
    circuit.cx(QubitId(0), QubitId(1)).unwrap();

    let compiled = translate(&circuit, false, 0).unwrap();

    let t = QubitId(1);
    let expected = vec![
        Instruction::single_qubit_gate(Gate::Rz(PI), t),
        Instruction::single_qubit_gate(Gate::Rx(FRAC_PI_2), t),
        Instruction::single_qubit_gate(Gate::Rz(FRAC_PI_2), t),
        Instruction::single_qubit_gate(Gate::Rx(-FRAC_PI_2), t),
        Instruction::two_qubit_gate(Gate::CZ, QubitId(0), t),
        Instruction::single_qubit_gate(Gate::Rz(PI), t),
        Instruction::single_qubit_gate(Gate::Rx(FRAC_PI_2), t),
        Instruction::single_qubit_gate(Gate::Rz(FRAC_PI_2), t),
        Instruction::single_qubit_gate(Gate::Rx(-FRAC_PI_2), t),
    ];
    assert_eq!(compiled.instructions(), expected.as_slice());
}

#[test]
fn test_level1_cancels_before_translation() {
    // X·X on qubit 0 cancels across the commuting Z on qubit 1; the rest
    // translates.
    let mut circuit = Circuit::new("cancel", 2);
    circuit.x(QubitId(0)).unwrap();
    circuit.z(QubitId(1)).unwrap();
    circuit.x(QubitId(0)).unwrap();

    let compiled = translate(&circuit, false, 1).unwrap();
    assert_eq!(
        compiled.instructions(),
        &[Instruction::single_qubit_gate(Gate::Rz(PI), QubitId(1))]
    );
}

#[test]
fn test_level2_merges_translated_rotations() {
    // X·X survives level-1-style cancellation being skipped, but the two
    // Rx(π) rewrites merge to a full turn and vanish.
    let mut circuit = Circuit::new("merge", 1);
    circuit.x(QubitId(0)).unwrap();
    circuit.x(QubitId(0)).unwrap();

    let compiled = translate(&circuit, false, 2).unwrap();
    assert!(compiled.is_empty());
}

#[test]
fn test_level2_output_stays_in_basis() {
    let mut circuit = Circuit::new("mixed", 3);
    circuit.h(QubitId(0)).unwrap();
    circuit.ry(FRAC_PI_4, QubitId(1)).unwrap();
    circuit.cx(QubitId(0), QubitId(2)).unwrap();
    circuit.y(QubitId(2)).unwrap();
    circuit.cz(QubitId(1), QubitId(2)).unwrap();

    let compiled = translate(&circuit, false, 2).unwrap();
    assert!(in_target_basis(&compiled));
}

#[test]
fn test_level3_erases_double_cx() {
    // Back-to-back CX gates are invisible to level 2: the H expansions around
    // the CZs interleave and nothing merges. Preserving H for the first
    // merge round lets the whole construct unwind: H·(CZ·CZ)·H on the target
    // wire collapses to nothing.
    let mut circuit = Circuit::new("double_cx", 2);
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();

    let level2 = translate(&circuit, false, 2).unwrap();
    assert_eq!(level2.num_ops(), 18);

    let level3 = translate(&circuit, false, 3).unwrap();
    assert!(level3.is_empty());
}

#[test]
fn test_level3_output_stays_in_basis() {
    // Whatever survives the H-preserving round is re-expanded by the second
    // translation.
    let mut circuit = Circuit::new("mixed", 2);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.rz(FRAC_PI_4, QubitId(1)).unwrap();

    let compiled = translate(&circuit, false, 3).unwrap();
    assert!(in_target_basis(&compiled));
}

#[test]
fn test_identity_flag_at_pipeline_level() {
    let mut circuit = Circuit::new("identity", 1);
    circuit.i(QubitId(0)).unwrap();

    // Pipeline default drops identities...
    let dropped = translate(&circuit, false, 0).unwrap();
    assert!(dropped.is_empty());

    // ...but they can be kept as explicit zero rotations.
    let kept = translate(&circuit, true, 0).unwrap();
    assert_eq!(
        kept.instructions(),
        &[Instruction::single_qubit_gate(Gate::Rz(0.0), QubitId(0))]
    );
}

#[test]
fn test_identity_rotations_merge_away_at_level2() {
    let mut circuit = Circuit::new("identity", 1);
    circuit.i(QubitId(0)).unwrap();
    circuit.i(QubitId(0)).unwrap();

    // Two RZ(0) gates merge to a zero sum and vanish.
    let compiled = translate(&circuit, true, 2).unwrap();
    assert!(compiled.is_empty());
}

#[test]
fn test_unsupported_gate_aborts() {
    let mut circuit = Circuit::new("unsupported", 2);
    circuit.h(QubitId(0)).unwrap();
    circuit.swap(QubitId(0), QubitId(1)).unwrap();

    for level in 0..=3 {
        let err = translate(&circuit, false, level).unwrap_err();
        assert!(
            matches!(err, CompileError::UnsupportedGate { gate: Gate::Swap }),
            "level {level}: {err}"
        );
    }
}

#[test]
fn test_invalid_level_rejected() {
    let mut circuit = Circuit::new("level", 1);
    circuit.h(QubitId(0)).unwrap();

    let err = translate(&circuit, false, 5).unwrap_err();
    assert!(matches!(
        err,
        CompileError::InvalidOptimizationLevel { level: 5 }
    ));
    assert_eq!(err.to_string(), "optimization level must be 0, 1, 2 or 3, got 5");
}

#[test]
fn test_levels_agree_on_bell_preparation() {
    // All levels produce a basis circuit for the Bell preparation; the
    // optimizing levels must not be larger than the plain translation.
    let mut circuit = Circuit::new("bell_prep", 2);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();

    let level0 = translate(&circuit, false, 0).unwrap();
    assert!(in_target_basis(&level0));

    for level in 1..=3 {
        let compiled = translate(&circuit, false, level).unwrap();
        assert!(in_target_basis(&compiled), "level {level}");
        assert!(
            compiled.num_ops() <= level0.num_ops(),
            "level {level} grew the circuit"
        );
    }
}
