//! Test harness for exercising the instantiator without writing the same
//! setup in every test: logging, deterministic configs, call counting and
//! sampling helpers.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::rc::Rc;

use instantiator::{Describe, Instantiator, InstantiatorConfig, Result};

/// Route `log` output through the test writer. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded config, so failures can be replayed.
pub fn seeded_config(seed: u64) -> InstantiatorConfig {
    init_logging();
    InstantiatorConfig::seeded(seed)
}

/// Config whose every elementary slot returns a fixed value.
pub fn fixed_config() -> InstantiatorConfig {
    seeded_config(0)
        .with_int_generator(|| 42)
        .with_float_generator(|| 1.5)
        .with_double_generator(|| 2.5)
        .with_string_generator(|| "fixed".to_string())
        .with_char_generator(|| 'x')
        .with_boolean_generator(|| true)
        .with_long_generator(|| 7_000_000_000)
        .with_short_generator(|| 12)
        .with_byte_generator(|| -3)
}

/// Counts how often any elementary generator was invoked.
#[derive(Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }

    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Fixed-value config that bumps this counter on every generator call.
    pub fn config(&self) -> InstantiatorConfig {
        let c = |counter: &CallCounter| counter.clone();
        let (int, float, double, string) = (c(self), c(self), c(self), c(self));
        let (ch, boolean, long, short, byte) = (c(self), c(self), c(self), c(self), c(self));
        seeded_config(0)
            .with_int_generator(move || {
                int.hit();
                0
            })
            .with_float_generator(move || {
                float.hit();
                0.0
            })
            .with_double_generator(move || {
                double.hit();
                0.0
            })
            .with_string_generator(move || {
                string.hit();
                String::new()
            })
            .with_char_generator(move || {
                ch.hit();
                'a'
            })
            .with_boolean_generator(move || {
                boolean.hit();
                false
            })
            .with_long_generator(move || {
                long.hit();
                0
            })
            .with_short_generator(move || {
                short.hit();
                0
            })
            .with_byte_generator(move || {
                byte.hit();
                0
            })
    }
}

/// Build `n` instances of `T` from one instantiator.
pub fn sample<T: Describe>(instantiator: &Instantiator, n: usize) -> Result<Vec<T>> {
    (0..n).map(|_| instantiator.create::<T>()).collect()
}

/// Distinct values among `n` samples.
pub fn distinct<T: Describe + Ord>(instantiator: &Instantiator, n: usize) -> Result<BTreeSet<T>> {
    (0..n).map(|_| instantiator.create::<T>()).collect()
}

/// Assert that `n` samples produce exactly the values in `expected`.
pub fn assert_covers<T>(instantiator: &Instantiator, n: usize, expected: &[T])
where
    T: Describe + Ord + Clone + Debug,
{
    let seen = distinct::<T>(instantiator, n).expect("sampling failed");
    let expected: BTreeSet<T> = expected.iter().cloned().collect();
    assert_eq!(
        seen, expected,
        "expected {} samples to cover {:?} but got {:?}",
        n, expected, seen
    );
}
