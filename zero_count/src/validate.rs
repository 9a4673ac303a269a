use anyhow::bail;
use itertools::Itertools;
use num::{One, Zero};

use crate::search::count_zeroes;

fn is_bit<T: Zero + One + PartialEq>(value: &T) -> bool {
    value.is_zero() || value.is_one()
}

/// Whether `values` holds only zeroes and ones, with no one followed by a zero.
pub fn is_sorted_binary<T: Zero + One + PartialEq>(values: &[T]) -> bool {
    values.iter().all(is_bit)
        && !values
            .iter()
            .tuple_windows()
            .any(|(a, b)| a.is_one() && b.is_zero())
}

/// Checks that `values` holds only zeroes and ones, with every zero before every one.
///
/// The error names the first offending index.
pub fn validate_sorted_binary<T: Zero + One + PartialEq>(values: &[T]) -> anyhow::Result<()> {
    if let Some(i) = values.iter().position(|v| !is_bit(v)) {
        bail!("Value at index {} is neither zero nor one.", i);
    }
    if let Some(i) = values
        .iter()
        .tuple_windows()
        .position(|(a, b)| a.is_one() && b.is_zero())
    {
        bail!("Zero at index {} follows a one.", i + 1);
    }
    Ok(())
}

/// Like [`count_zeroes`], but rejects input that is not a sorted binary sequence.
pub fn count_zeroes_checked<T: Zero + One + PartialEq>(values: &[T]) -> anyhow::Result<usize> {
    validate_sorted_binary(values)?;
    Ok(count_zeroes(values))
}
