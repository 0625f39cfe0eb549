//! Commutation-aware pair rewriting shared by the optimization passes.

use alsvin_ir::{Circuit, Instruction};

use crate::error::CompileResult;

/// Outcome of examining a commutation-adjacent instruction pair.
pub(crate) enum PairAction {
    /// Delete both instructions.
    CancelBoth,
    /// Delete the earlier instruction and carry on with this rewrite of the
    /// later one.
    Merge(Instruction),
    /// The pair does not combine; the earlier instruction keeps blocking its
    /// wires.
    Keep,
}

/// Rewrite a circuit by combining commutation-adjacent instruction pairs.
///
/// Instructions are scanned once, left to right, into an index-addressed
/// arena. `live[q]` stacks the arena slots of surviving instructions that
/// touch qubit `q`, newest on top. Two instructions are commutation-adjacent
/// when everything between them acts on disjoint wires, so an incoming
/// instruction can only combine with the slot that is newest on *every* one
/// of its wires; `decide` picks the action for that pair. Removing a pair
/// pops the stacks and re-exposes earlier slots, which lets chains like
/// H·(X·X)·H collapse within the same sweep — the behavior a rescan from the
/// start would produce, without the rescans.
///
/// Each instruction enters the arena at most once and is removed at most
/// once, so the sweep makes O(n) pair decisions.
pub(crate) fn rewrite_pairs<F>(circuit: &Circuit, decide: F) -> CompileResult<Circuit>
where
    F: Fn(&Instruction, &Instruction) -> PairAction,
{
    let mut slots: Vec<Option<Instruction>> = Vec::with_capacity(circuit.num_ops());
    let mut live: Vec<Vec<usize>> = vec![Vec::new(); circuit.num_qubits() as usize];

    'scan: for instruction in circuit.instructions() {
        let mut incoming = instruction.clone();
        loop {
            let Some(slot) = partner_slot(&live, &incoming) else {
                break;
            };
            let Some(earlier) = slots[slot].as_ref() else {
                break;
            };
            match decide(earlier, &incoming) {
                PairAction::Keep => break,
                PairAction::CancelBoth => {
                    remove_slot(&mut slots, &mut live, slot);
                    continue 'scan;
                }
                PairAction::Merge(merged) => {
                    remove_slot(&mut slots, &mut live, slot);
                    incoming = merged;
                }
            }
        }
        let slot = slots.len();
        for q in &incoming.qubits {
            live[q.index()].push(slot);
        }
        slots.push(Some(incoming));
    }

    let kept = slots.into_iter().flatten();
    Ok(Circuit::from_instructions(
        circuit.name(),
        circuit.num_qubits(),
        kept,
    )?)
}

/// The arena slot an instruction may combine with: the newest live slot on
/// every wire the instruction touches, provided those agree.
fn partner_slot(live: &[Vec<usize>], instruction: &Instruction) -> Option<usize> {
    let mut qubits = instruction.qubits.iter();
    let first = *live[qubits.next()?.index()].last()?;
    for q in qubits {
        if live[q.index()].last() != Some(&first) {
            return None;
        }
    }
    Some(first)
}

/// Remove an arena slot and pop it off the stacks of every wire it touches.
fn remove_slot(slots: &mut [Option<Instruction>], live: &mut [Vec<usize>], slot: usize) {
    if let Some(removed) = slots[slot].take() {
        for q in &removed.qubits {
            let stack = &mut live[q.index()];
            // A slot is only removable while it is the newest on all its wires.
            debug_assert_eq!(stack.last(), Some(&slot));
            stack.pop();
        }
    }
}
