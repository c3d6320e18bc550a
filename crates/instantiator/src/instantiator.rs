//! Recursive instantiator.
//!
//! Resolution order for a requested type:
//! 1. registered factory (always wins)
//! 2. singleton instance
//! 3. random variant of an enumerated type
//! 4. primary constructor, parameters resolved recursively in declaration order
//!
//! Only composite construction counts toward the depth ceiling: leaves,
//! registry hits, singletons and enum variants never recurse.
//!
//! Anything else is an error. Nothing is cached between resolutions: every
//! field gets a freshly built value, even when two fields share a type.

use std::any::Any;

use crate::arguments::Arguments;
use crate::config::InstantiatorConfig;
use crate::descriptor::{Describe, Instance, Shape, TypeDescriptor};
use crate::error::{InstantiationError, Result};
use crate::generators::RandomSource;
use crate::registry::GeneratorRegistry;

/// Build one instance of `T` with a fresh instantiator.
pub fn instance<T: Describe>(config: InstantiatorConfig) -> Result<T> {
    Instantiator::new(config).create::<T>()
}

/// Builds instances from descriptors using one registry and random source.
pub struct Instantiator {
    registry: GeneratorRegistry,
    random: RandomSource,
    max_depth: usize,
}

impl Instantiator {
    pub fn new(config: InstantiatorConfig) -> Self {
        let (registry, random, max_depth) = config.into_parts();
        Self {
            registry,
            random,
            max_depth,
        }
    }

    /// Register (or replace) the factory for `T`.
    pub fn register<T: Any>(&mut self, factory: impl Fn() -> T + 'static) -> &mut Self {
        self.registry.register(factory);
        self
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Typed entry point.
    pub fn create<T: Describe>(&self) -> Result<T> {
        let descriptor = T::descriptor();
        self.create_instance(&descriptor)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| InstantiationError::TypeMismatch {
                expected: std::any::type_name::<T>(),
            })
    }

    /// Build one instance of the described type.
    pub fn create_instance(&self, descriptor: &TypeDescriptor) -> Result<Instance> {
        self.resolve(descriptor, 0).inspect_err(|error| {
            log::debug!("failed to instantiate {descriptor}: {error}");
        })
    }

    fn resolve(&self, descriptor: &TypeDescriptor, depth: usize) -> Result<Instance> {
        if let Some(factory) = self.registry.lookup(descriptor.key()) {
            log::trace!("{:depth$}{descriptor}: registered generator", "");
            return Ok(factory());
        }

        match descriptor.shape() {
            Shape::Singleton(instance) => {
                log::trace!("{:depth$}{descriptor}: singleton", "");
                Ok(instance())
            }
            Shape::Enumerated(variants) if !variants.is_empty() => {
                let variant = &variants[self.random.index(variants.len())];
                log::trace!("{:depth$}{descriptor}: variant {}", "", variant.name());
                Ok(variant.make())
            }
            Shape::Composite(_) if depth > self.max_depth => {
                Err(InstantiationError::RecursionLimitExceeded {
                    type_name: descriptor.name(),
                    limit: self.max_depth,
                })
            }
            Shape::Composite(constructors) => {
                let [constructor] = constructors.as_slice() else {
                    return Err(InstantiationError::UnsupportedConstruction {
                        type_name: descriptor.name(),
                        constructors: constructors.len(),
                    });
                };
                log::trace!("{:depth$}{descriptor}: constructor", "");

                let params = constructor.parameters();
                let mut args = Arguments::with_capacity(descriptor.name(), params.len());
                for param in params {
                    let value = self.resolve(&param.descriptor(), depth + 1)?;
                    args.push(param.binding(), value);
                }
                constructor.invoke(&mut args)
            }
            Shape::Primitive | Shape::Enumerated(_) | Shape::Unsupported => {
                Err(InstantiationError::UnresolvedType {
                    type_name: descriptor.name(),
                })
            }
        }
    }
}
