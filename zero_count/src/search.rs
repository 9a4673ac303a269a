use num::Zero;

/// Finds the lowest index holding a zero.
///
/// In a sorted sequence the zeroes lead, so a leading zero answers immediately. Otherwise the
/// zeroes can only sit past the ones, and the search bisects toward them, moving left on a zero
/// and right on anything else. Returns `None` when no probe lands on a zero.
pub fn first_zero_index<T: Zero>(values: &[T]) -> Option<usize> {
    if values.first()?.is_zero() {
        return Some(0);
    }

    let mut lo = 0;
    let mut hi = values.len();
    let mut first_zero = None;

    // Invariant: any zero earlier than `first_zero` lies in `lo..hi`.
    while lo < hi {
        // Lower midpoint of `lo..hi`, i.e. floor((lo + (hi - 1)) / 2).
        let mid = lo + (hi - lo - 1) / 2;
        if values[mid].is_zero() {
            first_zero = Some(mid);
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    first_zero
}

/// Finds the end of the zero run starting at `start`, i.e. the first non-zero index after it.
fn zero_run_end<T: Zero>(values: &[T], start: usize) -> usize {
    let mut lo = start;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if values[mid].is_zero() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Counts the zeroes in `values`, which must consist of zeroes followed by ones.
///
/// Runs in `O(log n)`: one search for the first zero, one for the end of its run. The ordering
/// precondition is not checked. On unsorted input the result is the length of whichever zero
/// run the searches settle on, which need not match the number of zeroes.
#[must_use]
pub fn count_zeroes<T: Zero>(values: &[T]) -> usize {
    first_zero_index(values).map_or(0, |first| zero_run_end(values, first) - first)
}
