//! Test fixtures shared between unit tests.

/// Provides a stable, representative instance of a type.
///
/// Fixtures built from `sample()` are deterministic, so tests can tweak
/// a single field with struct update syntax and compare exact output.
pub trait Sample {
    fn sample() -> Self;
}
