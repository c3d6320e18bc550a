//! Default random generators for the elementary types.
//!
//! All generators built from one [`RandomSource`] share its RNG, so the order
//! in which they are called decides which values they produce. A seeded
//! source replays the same sequence.

use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use rand::distributions::{Alphanumeric, Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zero-argument value factory.
pub type Generator<T> = Box<dyn Fn() -> T>;

/// Length range of generated strings.
pub const STRING_LENGTH: RangeInclusive<usize> = 1..=20;

/// Shared, seedable random number generator.
#[derive(Clone)]
pub struct RandomSource {
    rng: Rc<RefCell<StdRng>>,
    seed: u64,
}

impl RandomSource {
    /// Seed from OS entropy. The seed is logged so a run can be replayed.
    pub fn from_entropy() -> Self {
        let seed = getrandom::u64().unwrap_or_else(|error| {
            log::warn!("OS entropy unavailable ({error}), seeding from the clock");
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        });
        log::debug!("random source seeded with {seed}");
        Self::seeded(seed)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(seed))),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run `f` with exclusive access to the RNG.
    pub fn with<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        f(&mut self.rng.borrow_mut())
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&self, len: usize) -> usize {
        self.with(|rng| rng.gen_range(0..len))
    }
}

pub fn random_int(source: &RandomSource) -> Generator<i32> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<i32>()))
}

/// Uniform in `[0, 1)`.
pub fn random_float(source: &RandomSource) -> Generator<f32> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<f32>()))
}

/// Uniform in `[0, 1)`.
pub fn random_double(source: &RandomSource) -> Generator<f64> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<f64>()))
}

/// Alphanumeric text, length drawn from [`STRING_LENGTH`].
pub fn random_string(source: &RandomSource) -> Generator<String> {
    let source = source.clone();
    Box::new(move || {
        source.with(|rng| {
            let len = rng.gen_range(STRING_LENGTH);
            (0..len).map(|_| rng.sample(Alphanumeric) as char).collect::<String>()
        })
    })
}

/// Alphanumeric character.
pub fn random_char(source: &RandomSource) -> Generator<char> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.sample(Alphanumeric) as char))
}

pub fn random_boolean(source: &RandomSource) -> Generator<bool> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.gen_bool(0.5)))
}

pub fn random_long(source: &RandomSource) -> Generator<i64> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<i64>()))
}

pub fn random_short(source: &RandomSource) -> Generator<i16> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<i16>()))
}

pub fn random_byte(source: &RandomSource) -> Generator<i8> {
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<i8>()))
}

/// Uniform over the whole domain of `T`. Backs the integer types without a
/// dedicated config slot.
pub fn random_any<T>(source: &RandomSource) -> Generator<T>
where
    Standard: Distribution<T>,
{
    let source = source.clone();
    Box::new(move || source.with(|rng| rng.r#gen::<T>()))
}

/// Always returns a clone of `value`.
pub fn constant<T: Clone + 'static>(value: T) -> Generator<T> {
    Box::new(move || value.clone())
}
