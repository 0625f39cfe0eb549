//! Pass manager and the pipeline entry point.

use tracing::{debug, info, instrument};

use alsvin_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::pass::Pass;
use crate::passes::{BasisTranslation, CancelSelfInverse, MergeRotations};

/// Manages and executes a sequence of compilation passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl std::fmt::Debug for PassManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassManager")
            .field(
                "passes",
                &self.passes.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes in order, producing a new circuit.
    ///
    /// The input circuit is left untouched. If any pass fails, the error
    /// propagates unmodified and no circuit is returned.
    #[instrument(skip(self, circuit))]
    pub fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        info!(
            "Running pass manager with {} passes on circuit with {} qubits",
            self.passes.len(),
            circuit.num_qubits()
        );

        let mut current = circuit.clone();
        for pass in &self.passes {
            debug!("Running pass: {}", pass.name());
            current = pass.run(&current)?;
            debug!("Pass {} completed, ops: {}", pass.name(), current.num_ops());
        }

        info!(
            "Pass manager completed, final depth: {}, ops: {}",
            current.depth(),
            current.num_ops()
        );

        Ok(current)
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that selects the pass pipeline for an optimization level.
pub struct PassManagerBuilder {
    /// Optimization level (0-3).
    optimization_level: u8,
    /// Whether identity gates translate to RZ(0).
    identity_as_zero_rotation: bool,
}

impl PassManagerBuilder {
    /// Create a builder with the pipeline defaults: level 0, identities
    /// dropped.
    pub fn new() -> Self {
        Self {
            optimization_level: 0,
            identity_as_zero_rotation: false,
        }
    }

    /// Set the optimization level.
    ///
    /// - Level 0: basis translation only
    /// - Level 1: self-inverse cancellation on the source circuit, then
    ///   translation
    /// - Level 2: translation, then rotation merging
    /// - Level 3: translate keeping H, merge, re-translate, merge again
    #[must_use]
    pub fn with_optimization_level(mut self, level: u8) -> Self {
        self.optimization_level = level;
        self
    }

    /// Choose whether identity gates translate to RZ(0).
    #[must_use]
    pub fn with_identity_as_zero_rotation(mut self, enabled: bool) -> Self {
        self.identity_as_zero_rotation = enabled;
        self
    }

    /// Build the pass manager.
    ///
    /// Fails with [`CompileError::InvalidOptimizationLevel`] for levels
    /// outside 0-3.
    pub fn build(self) -> CompileResult<PassManager> {
        let translation = || {
            BasisTranslation::new()
                .with_identity_as_zero_rotation(self.identity_as_zero_rotation)
        };

        let mut pm = PassManager::new();
        match self.optimization_level {
            0 => {
                pm.add_pass(translation());
            }
            1 => {
                pm.add_pass(CancelSelfInverse::new());
                pm.add_pass(translation());
            }
            2 => {
                pm.add_pass(translation());
                pm.add_pass(MergeRotations::new());
            }
            3 => {
                // Optimize first in the H-preserving representation, then
                // re-expand H and optimize once more.
                pm.add_pass(translation().with_preserve_hadamard(true));
                pm.add_pass(MergeRotations::new());
                pm.add_pass(translation());
                pm.add_pass(MergeRotations::new());
            }
            level => return Err(CompileError::InvalidOptimizationLevel { level }),
        }

        Ok(pm)
    }
}

impl Default for PassManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a circuit into the RX/RZ/CZ basis at the given optimization
/// level.
///
/// This is the top-level pipeline entry point. Note that its
/// `identity_as_zero_rotation` default differs from the direct
/// [`BasisTranslation::new`] call: a pipeline caller that does not care
/// about identity bookkeeping passes `false` and identity gates disappear.
pub fn translate(
    circuit: &Circuit,
    identity_as_zero_rotation: bool,
    level: u8,
) -> CompileResult<Circuit> {
    PassManagerBuilder::new()
        .with_identity_as_zero_rotation(identity_as_zero_rotation)
        .with_optimization_level(level)
        .build()?
        .run(circuit)
}
