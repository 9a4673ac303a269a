use serde::{Deserialize, Serialize};

/// How a [`ZeroCounter`](crate::counter::ZeroCounter) turns a sequence into a count.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Binary search for the first zero. The input is assumed sorted and never inspected.
    #[default]
    BinarySearch,
    /// Validate the input, then binary search. Unsorted or non-binary input is an error.
    Checked,
    /// Validate the input, then binary search. Falls back to a linear scan, with a warning,
    /// when the input is malformed, so the result is always the number of zeroes.
    Guarded,
    /// Count with a full linear scan.
    Linear,
}

/// Configuration for a [`ZeroCounter`](crate::counter::ZeroCounter).
///
/// The [`Default`] implementation is [`CounterConfig::standard`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub strategy: SearchStrategy,
}

impl CounterConfig {
    /// Plain binary search over input trusted to be sorted.
    pub const fn standard() -> Self {
        Self {
            strategy: SearchStrategy::BinarySearch,
        }
    }

    pub const fn checked() -> Self {
        Self {
            strategy: SearchStrategy::Checked,
        }
    }

    pub const fn guarded() -> Self {
        Self {
            strategy: SearchStrategy::Guarded,
        }
    }
}
