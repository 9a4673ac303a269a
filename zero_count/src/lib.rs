//! Counting the zeroes of a sorted binary sequence, i.e. a run of zeroes followed by a run of ones.
//!
//! [`count_zeroes`] does this in logarithmic time by binary searching for the first zero, and
//! trusts the caller on ordering. [`ZeroCounter`] adds opt-in validation and a linear fallback.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod counter;
pub mod scan;
pub mod search;
pub mod validate;

pub use crate::config::{CounterConfig, SearchStrategy};
pub use crate::counter::ZeroCounter;
pub use crate::scan::count_zeroes_linear;
pub use crate::search::{count_zeroes, first_zero_index};
pub use crate::validate::{count_zeroes_checked, is_sorted_binary, validate_sorted_binary};
