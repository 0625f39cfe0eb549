//! Pass trait for compilation passes.

use alsvin_ir::Circuit;

use crate::error::CompileResult;

/// A compilation pass: a pure transformation from one circuit to a new one.
///
/// Passes are the fundamental unit of compilation in Alsvin. A pass never
/// mutates its input; on failure no output circuit is produced at all, so a
/// partially rewritten circuit can never escape to the caller.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run the pass on the given circuit, producing a new circuit.
    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit>;
}
