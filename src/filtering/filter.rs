//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
///
/// No `Default` bound: filters built from side tables have no meaningful
/// default and are always constructed from a file or an explicit set.
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}
