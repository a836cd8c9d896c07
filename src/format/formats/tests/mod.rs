//! Unit tests for figure format implementations.
//!
//! These tests verify the correctness of decoding, encoding,
//! and round-trip conversions.

mod roundtrip_tests;
