//! Unit tests for task definitions.
