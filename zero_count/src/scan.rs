use num::Zero;

/// Counts the zeroes in `values` with a full pass. Makes no assumption about ordering.
#[must_use]
pub fn count_zeroes_linear<T: Zero>(values: &[T]) -> usize {
    values.iter().filter(|v| v.is_zero()).count()
}
