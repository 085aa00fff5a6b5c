//! Integration test suite.
//!
//! 1. Seeded scenario properties
//! 2. Foreign key enforcement
//! 3. Verification report

pub mod helpers;
pub mod reference_tests;
pub mod verification_tests;
