//! Unit tests for sync domain types and the pipeline service.
