//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial layout and turn handling
//! - `rules.rs` - Per-piece movement legality
//! - `check.rs` - Check, check-avoidance, and checkmate
//! - `movegen.rs` - Move enumeration and capture-first ordering
//! - `eval.rs` - Evaluation terms and the per-piece check bonus
//! - `search.rs` - Minimax, pruning equivalence, and move choice
//! - `probes.rs` - Speculative apply/undo integrity
//! - `proptest.rs` - Property-based tests

mod probes;

#[cfg(feature = "serde")]
mod serde;
