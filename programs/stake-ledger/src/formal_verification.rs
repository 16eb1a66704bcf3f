// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Property-based tests (invariants)
// 2. Lifecycle scenarios (multi-operation sequences)
// 3. Fuzzing harnesses (edge cases)
// ============================================================================
