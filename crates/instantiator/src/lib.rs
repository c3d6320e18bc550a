//! Reflective test-data generator.
//!
//! Builds fully populated instances of described types: primitives come from
//! a generator registry, singletons are returned as-is, enums pick a random
//! variant and composites are constructed recursively from their constructor
//! parameters.
//!
//! ```ignore
//! use instantiator::{describe, instance, InstantiatorConfig};
//!
//! struct Point { x: i32, y: i32 }
//! describe!(Point { x: i32, y: i32 });
//!
//! let config = InstantiatorConfig::default().with_int_generator(|| 42);
//! let point: Point = instance(config)?;
//! assert_eq!((point.x, point.y), (42, 42));
//! ```

pub mod arguments;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generators;
pub mod instantiator;
mod macros;
pub mod registry;

pub use arguments::Arguments;
pub use config::{DEFAULT_MAX_DEPTH, InstantiatorConfig};
pub use descriptor::{
    CompositeBuilder, Constructor, Describe, Instance, Parameter, Shape, TypeDescriptor, TypeKey,
    Variant,
};
pub use error::{InstantiationError, Result};
pub use generators::{Generator, RandomSource};
pub use instantiator::{Instantiator, instance};
pub use registry::{Factory, GeneratorEntry, GeneratorRegistry};
