//! Recurrence rules and the due-date evaluator.
//!
//! This module holds the pure decision logic of the crate: given the current
//! calendar date, a task definition's [`domain::RecurrenceRule`], and the
//! creation timestamp of the most recent [`domain::Occurrence`] found in the
//! tracker, decide whether a new occurrence is due today. Nothing here
//! performs I/O; the sync service supplies both inputs.

pub mod domain;

#[cfg(test)]
mod tests;
