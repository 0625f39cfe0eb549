//! Basis translation pass.

use std::f64::consts::{FRAC_PI_2, PI};

use alsvin_ir::{Circuit, Gate, Instruction, QubitId};

use crate::error::{CompileError, CompileResult};
use crate::pass::Pass;

/// Basis translation pass.
///
/// Rewrites every instruction into the target vocabulary RX, RZ, CZ. Each
/// source gate has a fixed rewrite; qubit operands are preserved in their
/// original order. A gate outside the source vocabulary fails the whole pass
/// with [`CompileError::UnsupportedGate`] and no circuit is produced.
///
/// Two switches adjust the rewrite table:
/// - `identity_as_zero_rotation`: emit I as RZ(0) instead of dropping it.
/// - `preserve_hadamard`: keep H in the output vocabulary (both bare H gates
///   and the H conjugation around the CZ in the CX rewrite) instead of
///   expanding it into RX/RZ sequences.
pub struct BasisTranslation {
    identity_as_zero_rotation: bool,
    preserve_hadamard: bool,
}

impl BasisTranslation {
    /// Create the pass with its direct-call defaults: identities become zero
    /// rotations, Hadamards are expanded.
    pub fn new() -> Self {
        Self {
            identity_as_zero_rotation: true,
            preserve_hadamard: false,
        }
    }

    /// Choose whether I translates to RZ(0) or to nothing.
    #[must_use]
    pub fn with_identity_as_zero_rotation(mut self, enabled: bool) -> Self {
        self.identity_as_zero_rotation = enabled;
        self
    }

    /// Choose whether H stays in the output vocabulary.
    #[must_use]
    pub fn with_preserve_hadamard(mut self, enabled: bool) -> Self {
        self.preserve_hadamard = enabled;
        self
    }

    /// Translate a single instruction to its target-vocabulary rewrite.
    fn translate_instruction(&self, instruction: &Instruction) -> CompileResult<Vec<Instruction>> {
        let q0 = instruction.qubits[0];

        Ok(match instruction.gate {
            // Rx and Rz are native
            Gate::Rx(theta) => vec![Instruction::single_qubit_gate(Gate::Rx(theta), q0)],
            Gate::Rz(phi) => vec![Instruction::single_qubit_gate(Gate::Rz(phi), q0)],

            // Ry(θ) = Rx(π/2) · Rz(θ) · Rx(−π/2) in circuit order
            Gate::Ry(theta) => vec![
                Instruction::single_qubit_gate(Gate::Rx(FRAC_PI_2), q0),
                Instruction::single_qubit_gate(Gate::Rz(theta), q0),
                Instruction::single_qubit_gate(Gate::Rx(-FRAC_PI_2), q0),
            ],

            // I becomes a zero-angle z-rotation, or nothing
            Gate::I => {
                if self.identity_as_zero_rotation {
                    vec![Instruction::single_qubit_gate(Gate::Rz(0.0), q0)]
                } else {
                    vec![]
                }
            }

            // X = Rx(π)
            Gate::X => vec![Instruction::single_qubit_gate(Gate::Rx(PI), q0)],

            // Z = Rz(π)
            Gate::Z => vec![Instruction::single_qubit_gate(Gate::Rz(PI), q0)],

            // Y = Rx(π/2) · Rz(π) · Rx(−π/2), the Ry rewrite at θ = π
            Gate::Y => vec![
                Instruction::single_qubit_gate(Gate::Rx(FRAC_PI_2), q0),
                Instruction::single_qubit_gate(Gate::Rz(PI), q0),
                Instruction::single_qubit_gate(Gate::Rx(-FRAC_PI_2), q0),
            ],

            Gate::H => {
                if self.preserve_hadamard {
                    vec![Instruction::single_qubit_gate(Gate::H, q0)]
                } else {
                    hadamard_expansion(q0).to_vec()
                }
            }

            // CZ is native
            Gate::CZ => {
                let q1 = instruction.qubits[1];
                vec![Instruction::two_qubit_gate(Gate::CZ, q0, q1)]
            }

            // CX = H(target) · CZ · H(target)
            Gate::CX => {
                let target = instruction.qubits[1];
                let cz = Instruction::two_qubit_gate(Gate::CZ, q0, target);
                if self.preserve_hadamard {
                    vec![
                        Instruction::single_qubit_gate(Gate::H, target),
                        cz,
                        Instruction::single_qubit_gate(Gate::H, target),
                    ]
                } else {
                    let h = hadamard_expansion(target);
                    let mut result = Vec::with_capacity(h.len() * 2 + 1);
                    result.extend_from_slice(&h);
                    result.push(cz);
                    result.extend_from_slice(&h);
                    result
                }
            }

            gate @ (Gate::S | Gate::Sdg | Gate::T | Gate::Tdg | Gate::Swap) => {
                return Err(CompileError::UnsupportedGate { gate });
            }
        })
    }
}

impl Default for BasisTranslation {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass for BasisTranslation {
    fn name(&self) -> &'static str {
        "BasisTranslation"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let mut translated = Circuit::new(circuit.name(), circuit.num_qubits());
        for instruction in circuit.instructions() {
            for rewrite in self.translate_instruction(instruction)? {
                translated.push(rewrite)?;
            }
        }
        Ok(translated)
    }
}

/// The Rx/Rz expansion of a Hadamard, in circuit order:
/// Rz(π) · Rx(π/2) · Rz(π/2) · Rx(−π/2), equal to H up to a global phase
/// of −i.
fn hadamard_expansion(qubit: QubitId) -> [Instruction; 4] {
    [
        Instruction::single_qubit_gate(Gate::Rz(PI), qubit),
        Instruction::single_qubit_gate(Gate::Rx(FRAC_PI_2), qubit),
        Instruction::single_qubit_gate(Gate::Rz(FRAC_PI_2), qubit),
        Instruction::single_qubit_gate(Gate::Rx(-FRAC_PI_2), qubit),
    ]
}
