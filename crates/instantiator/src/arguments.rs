//! Argument set handed to a constructor.

use std::any::Any;
use std::borrow::Cow;

use smallvec::SmallVec;

use crate::descriptor::Instance;
use crate::error::{InstantiationError, Result};

/// Resolved constructor arguments, in declaration order.
///
/// Each argument can be taken once, either by name or positionally.
pub struct Arguments {
    type_name: &'static str,
    slots: SmallVec<[(Cow<'static, str>, Option<Instance>); 8]>,
    cursor: usize,
}

impl Arguments {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            slots: SmallVec::new(),
            cursor: 0,
        }
    }

    pub fn with_capacity(type_name: &'static str, capacity: usize) -> Self {
        Self {
            type_name,
            slots: SmallVec::with_capacity(capacity),
            cursor: 0,
        }
    }

    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: Instance) {
        self.slots.push((name.into(), Some(value)));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Take the argument bound to `name`.
    pub fn take<T: Any>(&mut self, name: &str) -> Result<T> {
        let type_name = self.type_name;
        let slot = self
            .slots
            .iter_mut()
            .find(|(slot_name, _)| slot_name == name)
            .and_then(|(_, value)| value.take())
            .ok_or_else(|| InstantiationError::MissingArgument {
                type_name,
                parameter: name.to_string(),
            })?;
        downcast(type_name, name, slot)
    }

    /// Take the next argument in declaration order.
    pub fn next<T: Any>(&mut self) -> Result<T> {
        let type_name = self.type_name;
        let index = self.cursor;
        let Some((name, value)) = self.slots.get_mut(index) else {
            return Err(InstantiationError::MissingArgument {
                type_name,
                parameter: index.to_string(),
            });
        };
        self.cursor += 1;
        let value = value.take().ok_or_else(|| InstantiationError::MissingArgument {
            type_name,
            parameter: name.to_string(),
        })?;
        downcast(type_name, name, value)
    }
}

fn downcast<T: Any>(type_name: &'static str, parameter: &str, value: Instance) -> Result<T> {
    value
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| InstantiationError::ArgumentMismatch {
            type_name,
            parameter: parameter.to_string(),
            expected: std::any::type_name::<T>(),
        })
}
