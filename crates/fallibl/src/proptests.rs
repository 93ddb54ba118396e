//! Property-based tests for outcomes.
