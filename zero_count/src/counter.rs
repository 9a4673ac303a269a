use log::{trace, warn};
use num::{One, Zero};

use crate::config::{CounterConfig, SearchStrategy};
use crate::scan::count_zeroes_linear;
use crate::search::count_zeroes;
use crate::validate::{count_zeroes_checked, validate_sorted_binary};

/// Counts zeroes in binary sequences according to a [`CounterConfig`].
#[derive(Clone, Debug, Default)]
pub struct ZeroCounter {
    config: CounterConfig,
}

impl ZeroCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Counts the zeroes in `values`.
    ///
    /// Only [`SearchStrategy::Checked`] can fail, and only when `values` is not a sorted binary
    /// sequence.
    pub fn count<T: Zero + One + PartialEq>(&self, values: &[T]) -> anyhow::Result<usize> {
        let count = match self.config.strategy {
            SearchStrategy::BinarySearch => count_zeroes(values),
            SearchStrategy::Checked => count_zeroes_checked(values)?,
            SearchStrategy::Guarded => match validate_sorted_binary(values) {
                Ok(()) => count_zeroes(values),
                Err(e) => {
                    warn!("{}; falling back to a linear scan", e);
                    count_zeroes_linear(values)
                }
            },
            SearchStrategy::Linear => count_zeroes_linear(values),
        };
        trace!(
            "{:?} counted {} zeroes in {} values",
            self.config.strategy,
            count,
            values.len()
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::config::{CounterConfig, SearchStrategy};
    use crate::counter::ZeroCounter;
    use crate::scan::count_zeroes_linear;
    use crate::validate::is_sorted_binary;

    fn init_logger() {
        let _ = env_logger::builder()
            .format_timestamp(None)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn test_standard_counter() {
        let counter = ZeroCounter::default();
        assert_eq!(counter.count::<u8>(&[]).unwrap(), 0);
        assert_eq!(counter.count(&[0, 0, 0, 1, 1]).unwrap(), 3);
        // Unsorted input is trusted as-is.
        assert_eq!(counter.count(&[0, 1, 0, 1]).unwrap(), 3);
    }

    #[test]
    fn test_checked_counter() {
        let counter = ZeroCounter::new(CounterConfig::checked());
        assert_eq!(counter.count(&[0, 1]).unwrap(), 1);
        assert_eq!(counter.count(&[0, 0, 0, 1, 1]).unwrap(), 3);
        assert!(counter.count(&[1, 0, 1, 1]).is_err());
        assert!(counter.count(&[0, 2]).is_err());
    }

    #[test]
    fn test_guarded_counter_falls_back() {
        init_logger();
        let counter = ZeroCounter::new(CounterConfig::guarded());
        assert_eq!(counter.count(&[1, 0, 1, 1]).unwrap(), 1);
        assert_eq!(counter.count(&[1, 1, 0, 0]).unwrap(), 2);
        assert_eq!(counter.count(&[0, 0, 1]).unwrap(), 2);
        assert_eq!(counter.count(&[0, 1, 0, 1]).unwrap(), 2);
    }

    #[test]
    fn test_linear_counter() {
        let counter = ZeroCounter::new(CounterConfig {
            strategy: SearchStrategy::Linear,
        });
        assert_eq!(counter.count(&[1, 0, 1, 0, 0]).unwrap(), 3);
    }

    #[test]
    fn test_strategies_on_random_input() {
        init_logger();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let checked = ZeroCounter::new(CounterConfig::checked());
        let guarded = ZeroCounter::new(CounterConfig::guarded());
        for _ in 0..200 {
            let len = rng.gen_range(0..32);
            let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(0..2)).collect();
            if rng.gen() {
                values.sort_unstable();
            }

            assert_eq!(
                guarded.count(&values).unwrap(),
                count_zeroes_linear(&values)
            );
            assert_eq!(checked.count(&values).is_ok(), is_sorted_binary(&values));
        }
    }
}
