//! Self-inverse gate cancellation pass.

use alsvin_ir::{Circuit, Gate};

use crate::error::CompileResult;
use crate::pass::Pass;

use super::peephole::{self, PairAction};

/// Self-inverse gate cancellation pass.
///
/// Cancels pairs of identical self-inverse gates that are adjacent once
/// instructions on disjoint wires are ignored: X, Y, Z and H on the same
/// qubit, and CZ on the same qubit pair (the pair is unordered). X·X = I,
/// and likewise for the others.
///
/// Runs on the source vocabulary, before basis translation. Every other
/// instruction kind — rotations, I, CX and the rest — only blocks
/// cancellation across the wires it touches.
pub struct CancelSelfInverse;

impl CancelSelfInverse {
    /// Create a new self-inverse cancellation pass.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CancelSelfInverse {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate kinds this pass cancels.
fn cancellable(gate: Gate) -> bool {
    matches!(gate, Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::CZ)
}

impl Pass for CancelSelfInverse {
    fn name(&self) -> &'static str {
        "CancelSelfInverse"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        peephole::rewrite_pairs(circuit, |earlier, incoming| {
            if cancellable(incoming.gate)
                && earlier.gate == incoming.gate
                && earlier.same_qubit_set(incoming)
            {
                PairAction::CancelBoth
            } else {
                PairAction::Keep
            }
        })
    }
}
