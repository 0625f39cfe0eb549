//! Alsvin Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Alsvin. A circuit is a flat, ordered instruction sequence over
//! a fixed set of qubits; instruction order is the only semantic order. The
//! compilation passes in `alsvin-compile` consume one circuit and produce a
//! new one, so a circuit handed to a pass is never mutated behind the
//! caller's back.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing wires
//! - **Gates**: [`Gate`], a closed set of gate kinds with inline rotation
//!   angles
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`], the builder and container API
//!
//! # Example: Building a Bell-Pair Preparation
//!
//! ```rust
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell_prep", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_ops(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CZ` | 2 | Controlled-Z |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::Instruction;
pub use qubit::QubitId;
