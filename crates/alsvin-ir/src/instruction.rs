//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// A gate applied to an ordered list of qubits.
///
/// The operand order carries the gate's semantics: for CX the list is
/// `[control, target]`. Instructions with disjoint qubit sets commute and are
/// treated as transparent to each other by the peephole passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate to apply.
    pub gate: Gate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: Gate, qubit: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: Gate, q1: QubitId, q2: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![q1, q2],
        }
    }

    /// Check whether this instruction touches any qubit of `other`.
    ///
    /// Instructions that do not share a qubit commute.
    pub fn shares_qubit(&self, other: &Self) -> bool {
        self.qubits.iter().any(|q| other.qubits.contains(q))
    }

    /// Check whether both instructions touch exactly the same qubits,
    /// ignoring operand order.
    pub fn same_qubit_set(&self, other: &Self) -> bool {
        self.qubits.len() == other.qubits.len()
            && self.qubits.iter().all(|q| other.qubits.contains(q))
    }

    /// Get the name of the instruction's gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}
