//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered instruction sequence over a fixed set of
/// qubits.
///
/// Instruction order is the only semantic order. Compilation passes never
/// mutate a circuit in place; they read one circuit and produce a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// The instruction sequence.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit with the given number of qubits.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Create a circuit from an existing instruction sequence.
    ///
    /// Every instruction is validated as if appended through [`Circuit::push`].
    pub fn from_instructions(
        name: impl Into<String>,
        num_qubits: u32,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<Self> {
        let mut circuit = Self::new(name, num_qubits);
        for instruction in instructions {
            circuit.push(instruction)?;
        }
        Ok(circuit)
    }

    /// Get the name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Get the circuit depth: the length of the longest wire path.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0_usize; self.num_qubits as usize];
        for instruction in &self.instructions {
            let level = instruction
                .qubits
                .iter()
                .map(|q| levels[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &instruction.qubits {
                levels[q.index()] = level;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }

    /// Append an instruction, validating its operands.
    ///
    /// Fails if the operand count does not match the gate arity, if a qubit
    /// index is out of range, or if a multi-qubit gate repeats a qubit.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<()> {
        let expected = instruction.gate.num_qubits();
        let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: instruction.name().to_string(),
                expected,
                got,
            });
        }
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        if instruction.qubits.len() == 2 && instruction.qubits[0] == instruction.qubits[1] {
            return Err(IrError::DuplicateQubit {
                qubit: instruction.qubits[0],
                gate_name: instruction.name().to_string(),
            });
        }
        self.instructions.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply an identity gate.
    pub fn i(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::I, qubit))?;
        Ok(self)
    }

    /// Apply a Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::X, qubit))?;
        Ok(self)
    }

    /// Apply a Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Y, qubit))?;
        Ok(self)
    }

    /// Apply a Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Z, qubit))?;
        Ok(self)
    }

    /// Apply a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::H, qubit))?;
        Ok(self)
    }

    /// Apply an S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::S, qubit))?;
        Ok(self)
    }

    /// Apply an S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply a T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::T, qubit))?;
        Ok(self)
    }

    /// Apply a T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Tdg, qubit))?;
        Ok(self)
    }

    /// Apply an Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Rx(theta), qubit))?;
        Ok(self)
    }

    /// Apply an Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Ry(theta), qubit))?;
        Ok(self)
    }

    /// Apply an Rz rotation gate.
    pub fn rz(&mut self, phi: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(Gate::Rz(phi), qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply a CZ gate.
    pub fn cz(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(Gate::CZ, q1, q2))?;
        Ok(self)
    }

    /// Apply a CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(Gate::CX, control, target))?;
        Ok(self)
    }

    /// Apply a SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(Gate::Swap, q1, q2))?;
        Ok(self)
    }
}
