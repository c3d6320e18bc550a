//! Instantiator configuration: one generator slot per elementary type plus
//! any extra registrations and the recursion ceiling.

use std::any::Any;

use crate::generators::{self, Generator, RandomSource};
use crate::registry::GeneratorRegistry;

/// Default nesting ceiling for composite construction.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Generators and limits for one instantiation call.
///
/// `InstantiatorConfig::default()` seeds its random source from OS entropy;
/// use [`seeded`](Self::seeded) for reproducible fixtures. Any slot can be
/// replaced, either directly or through the `with_*` methods.
pub struct InstantiatorConfig {
    pub int_generator: Generator<i32>,
    pub float_generator: Generator<f32>,
    pub double_generator: Generator<f64>,
    pub string_generator: Generator<String>,
    pub char_generator: Generator<char>,
    pub boolean_generator: Generator<bool>,
    pub long_generator: Generator<i64>,
    pub short_generator: Generator<i16>,
    pub byte_generator: Generator<i8>,
    /// Deepest nesting level a construction may reach.
    pub max_depth: usize,
    random: RandomSource,
    extra: GeneratorRegistry,
}

impl InstantiatorConfig {
    /// Random generators drawing from `random`.
    pub fn from_source(random: RandomSource) -> Self {
        Self {
            int_generator: generators::random_int(&random),
            float_generator: generators::random_float(&random),
            double_generator: generators::random_double(&random),
            string_generator: generators::random_string(&random),
            char_generator: generators::random_char(&random),
            boolean_generator: generators::random_boolean(&random),
            long_generator: generators::random_long(&random),
            short_generator: generators::random_short(&random),
            byte_generator: generators::random_byte(&random),
            max_depth: DEFAULT_MAX_DEPTH,
            random,
            extra: GeneratorRegistry::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_source(RandomSource::seeded(seed))
    }

    /// Seed of the random source backing the default generators and enum
    /// variant selection.
    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    pub fn random_source(&self) -> &RandomSource {
        &self.random
    }

    pub fn with_int_generator(mut self, generator: impl Fn() -> i32 + 'static) -> Self {
        self.int_generator = Box::new(generator);
        self
    }

    pub fn with_float_generator(mut self, generator: impl Fn() -> f32 + 'static) -> Self {
        self.float_generator = Box::new(generator);
        self
    }

    pub fn with_double_generator(mut self, generator: impl Fn() -> f64 + 'static) -> Self {
        self.double_generator = Box::new(generator);
        self
    }

    pub fn with_string_generator(mut self, generator: impl Fn() -> String + 'static) -> Self {
        self.string_generator = Box::new(generator);
        self
    }

    pub fn with_char_generator(mut self, generator: impl Fn() -> char + 'static) -> Self {
        self.char_generator = Box::new(generator);
        self
    }

    pub fn with_boolean_generator(mut self, generator: impl Fn() -> bool + 'static) -> Self {
        self.boolean_generator = Box::new(generator);
        self
    }

    pub fn with_long_generator(mut self, generator: impl Fn() -> i64 + 'static) -> Self {
        self.long_generator = Box::new(generator);
        self
    }

    pub fn with_short_generator(mut self, generator: impl Fn() -> i16 + 'static) -> Self {
        self.short_generator = Box::new(generator);
        self
    }

    pub fn with_byte_generator(mut self, generator: impl Fn() -> i8 + 'static) -> Self {
        self.byte_generator = Box::new(generator);
        self
    }

    /// Register a factory for any other type. Takes precedence over the
    /// slots above and over every structural construction rule.
    pub fn with_generator<T: Any>(mut self, factory: impl Fn() -> T + 'static) -> Self {
        self.extra.register(factory);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Split into the registry (slots, then the remaining integer types, then
    /// extra registrations on top),
    /// the random source and the depth ceiling.
    pub(crate) fn into_parts(self) -> (GeneratorRegistry, RandomSource, usize) {
        let InstantiatorConfig {
            int_generator,
            float_generator,
            double_generator,
            string_generator,
            char_generator,
            boolean_generator,
            long_generator,
            short_generator,
            byte_generator,
            max_depth,
            random,
            extra,
        } = self;

        let mut registry = GeneratorRegistry::new();
        registry.register(int_generator);
        registry.register(float_generator);
        registry.register(double_generator);
        registry.register(string_generator);
        registry.register(char_generator);
        registry.register(boolean_generator);
        registry.register(long_generator);
        registry.register(short_generator);
        registry.register(byte_generator);
        registry.register(generators::random_any::<i128>(&random));
        registry.register(generators::random_any::<isize>(&random));
        registry.register(generators::random_any::<u8>(&random));
        registry.register(generators::random_any::<u16>(&random));
        registry.register(generators::random_any::<u32>(&random));
        registry.register(generators::random_any::<u64>(&random));
        registry.register(generators::random_any::<u128>(&random));
        registry.register(generators::random_any::<usize>(&random));
        registry.extend(extra);

        (registry, random, max_depth)
    }
}

impl Default for InstantiatorConfig {
    fn default() -> Self {
        Self::from_source(RandomSource::from_entropy())
    }
}
