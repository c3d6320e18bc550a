//! Generator registry: exact type identity -> zero-argument factory.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

use crate::descriptor::{Instance, TypeKey};

/// Type-erased factory stored in the registry.
pub type Factory = Box<dyn Fn() -> Instance>;

/// A registered factory and the name of the type it produces.
pub struct GeneratorEntry {
    type_name: &'static str,
    factory: Factory,
}

impl GeneratorEntry {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }
}

/// Mapping from type identity to factory.
///
/// Lookup is exact-match only, there is no subtype resolution. Entries can be
/// added or replaced, never removed.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: FxHashMap<TypeId, GeneratorEntry>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `T`.
    pub fn register<T: Any>(&mut self, factory: impl Fn() -> T + 'static) {
        let entry = GeneratorEntry {
            type_name: std::any::type_name::<T>(),
            factory: Box::new(move || Box::new(factory()) as Instance),
        };
        if self.entries.insert(TypeId::of::<T>(), entry).is_some() {
            log::trace!("replaced generator for {}", std::any::type_name::<T>());
        }
    }

    pub fn lookup(&self, key: TypeKey) -> Option<&Factory> {
        self.entries.get(&key.type_id()).map(GeneratorEntry::factory)
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all registered types, for diagnostics.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(GeneratorEntry::type_name)
    }

    /// Move every entry of `other` in, replacing existing ones.
    pub fn extend(&mut self, other: GeneratorRegistry) {
        self.entries.extend(other.entries);
    }
}
