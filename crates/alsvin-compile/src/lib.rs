//! Alsvin Basis Translation and Peephole Optimization
//!
//! This crate rewrites quantum circuits into a restricted basis gate
//! vocabulary (RX, RZ, CZ) and applies peephole optimizations that cancel
//! or merge redundant instructions. It implements a small pass-based
//! architecture: each pass is a pure function from an input circuit to a
//! new circuit, and a [`PassManager`] composes passes according to an
//! optimization level.
//!
//! # Architecture
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── optimization level (0-3)
//! └─────────────┘
//!       │
//!       ├── CancelSelfInverse  (source vocabulary)
//!       ├── BasisTranslation   (every level)
//!       └── MergeRotations     (target vocabulary)
//!       │
//!       ▼
//! Output Circuit (RX, RZ, CZ)
//! ```
//!
//! # Optimization Levels
//!
//! | Level | Passes Included |
//! |-------|-----------------|
//! | 0 | Basis translation only |
//! | 1 | Self-inverse cancellation, then translation |
//! | 2 | Translation, then rotation merging |
//! | 3 | H-preserving translation, merge, re-translation, merge |
//!
//! # Example
//!
//! ```rust
//! use alsvin_compile::translate;
//! use alsvin_ir::{Circuit, Gate, QubitId};
//!
//! let mut circuit = Circuit::new("bell_prep", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let compiled = translate(&circuit, false, 2).unwrap();
//! assert!(compiled.instructions().iter().all(|inst| {
//!     matches!(inst.gate, Gate::Rx(_) | Gate::Rz(_) | Gate::CZ)
//! }));
//! ```
//!
//! # Custom Passes
//!
//! Implement the [`Pass`] trait to create custom compilation passes:
//!
//! ```rust
//! use alsvin_compile::{CompileResult, Pass};
//! use alsvin_ir::Circuit;
//!
//! struct MyCustomPass;
//!
//! impl Pass for MyCustomPass {
//!     fn name(&self) -> &str {
//!         "my_custom_pass"
//!     }
//!
//!     fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
//!         // Your pass logic here
//!         Ok(circuit.clone())
//!     }
//! }
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod unitary;

// Built-in passes
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder, translate};
pub use pass::Pass;
pub use passes::{BasisTranslation, CancelSelfInverse, MergeRotations};
