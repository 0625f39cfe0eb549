//! Quantum gate kinds.

use serde::{Deserialize, Serialize};

/// The closed set of gate kinds the IR can represent.
///
/// Rotation angles are stored inline, in radians. The transpiler's source
/// vocabulary is the subset `I, X, Y, Z, H, Rx, Ry, Rz, CZ, CX`; the
/// remaining kinds can be built into circuits but are rejected by basis
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
    /// Controlled-Z gate. Symmetric in its qubit pair.
    CZ,
    /// Controlled-X (CNOT) gate, operands `[control, target]`.
    CX,
    /// SWAP gate.
    Swap,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::CZ => "cz",
            Gate::CX => "cx",
            Gate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg
            | Gate::Rx(_)
            | Gate::Ry(_)
            | Gate::Rz(_) => 1,

            Gate::CZ | Gate::CX | Gate::Swap => 2,
        }
    }

    /// Get the rotation angle, if this is a rotation gate.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }
}
