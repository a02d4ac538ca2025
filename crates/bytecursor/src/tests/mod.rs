mod cursor;
mod model;

/// Iteration count for the quickcheck properties.
pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;
    tests
}
