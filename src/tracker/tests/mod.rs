//! Unit tests for tracker domain values and the in-memory adapter.
