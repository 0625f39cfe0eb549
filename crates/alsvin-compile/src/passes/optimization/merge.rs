//! Rotation merging pass.

use alsvin_ir::{Circuit, Gate, Instruction};

use crate::error::CompileResult;
use crate::pass::Pass;

use super::is_zero_mod_2pi;
use super::peephole::{self, PairAction};

/// Rotation merging pass.
///
/// Merges commutation-adjacent rotations of the same kind on the same qubit
/// by summing their angles (Rz(a)·Rz(b) = Rz(a+b)), dropping the pair
/// outright when the sum is a multiple of 2π, and cancels H·H and CZ·CZ
/// pairs.
///
/// Runs on the translated vocabulary (RX, RZ, CZ, plus H when the preceding
/// translation preserved it). Other instruction kinds only block merging
/// across the wires they touch.
pub struct MergeRotations;

impl MergeRotations {
    /// Create a new rotation merging pass.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MergeRotations {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine two same-kind rotations. The summed angle lands on the later
/// instruction and the earlier one is deleted; a sum that is a multiple of
/// 2π removes the pair outright.
fn merge_angles(earlier: f64, later: f64, make: fn(f64) -> Gate, at: &Instruction) -> PairAction {
    let sum = earlier + later;
    if is_zero_mod_2pi(sum) {
        PairAction::CancelBoth
    } else {
        PairAction::Merge(Instruction::single_qubit_gate(make(sum), at.qubits[0]))
    }
}

impl Pass for MergeRotations {
    fn name(&self) -> &'static str {
        "MergeRotations"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        peephole::rewrite_pairs(circuit, |earlier, incoming| {
            match (earlier.gate, incoming.gate) {
                (Gate::Rx(a), Gate::Rx(b)) => merge_angles(a, b, Gate::Rx, incoming),
                (Gate::Rz(a), Gate::Rz(b)) => merge_angles(a, b, Gate::Rz, incoming),
                (Gate::H, Gate::H) => PairAction::CancelBoth,
                (Gate::CZ, Gate::CZ) if earlier.same_qubit_set(incoming) => PairAction::CancelBoth,
                _ => PairAction::Keep,
            }
        })
    }
}
