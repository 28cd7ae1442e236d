//! Unit tests for recurrence rules and evaluation.
