//! Shared utilities for integration tests.

pub mod harness;

/// Returns a string of `n` repetitions of `c`.
#[allow(dead_code)]
pub fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}
