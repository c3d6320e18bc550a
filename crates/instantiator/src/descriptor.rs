//! Type descriptors: the construction-relevant shape of a Rust type.
//!
//! Rust has no runtime reflection, so descriptors are produced ahead of time,
//! either by the [`describe!`](crate::describe) macro or by a hand-written
//! [`Describe`] impl using the builders in this module.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::arguments::Arguments;
use crate::config::InstantiatorConfig;
use crate::error::Result;
use crate::instantiator::Instantiator;

/// A constructed value of any described type.
pub type Instance = Box<dyn Any>;

/// Types that can hand out their own descriptor.
pub trait Describe: Any + Sized {
    fn descriptor() -> TypeDescriptor;
}

/// Exact-match identity of a described type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey(TypeId);

impl TypeKey {
    pub fn of<T: Any>() -> Self {
        Self(TypeId::of::<T>())
    }

    pub fn type_id(&self) -> TypeId {
        self.0
    }
}

/// How a type gets built when the registry has no factory for it.
#[derive(Clone)]
pub enum Shape {
    /// Only the registry can produce it.
    Primitive,
    /// One process-wide shared instance, returned without construction.
    Singleton(fn() -> Instance),
    /// Closed set of fieldless variants.
    Enumerated(Vec<Variant>),
    /// Built through its primary constructor. Anything other than exactly
    /// one constructor is unsupported.
    Composite(SmallVec<[Constructor; 1]>),
    /// Abstract type (e.g. a trait object); only the registry can produce it.
    Unsupported,
}

impl Shape {
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Primitive => "primitive",
            Shape::Singleton(_) => "singleton",
            Shape::Enumerated(_) => "enumerated",
            Shape::Composite(_) => "composite",
            Shape::Unsupported => "unsupported",
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Enumerated(variants) => f.debug_tuple("Enumerated").field(variants).finish(),
            Shape::Composite(constructors) => {
                f.debug_tuple("Composite").field(constructors).finish()
            }
            other => f.write_str(other.label()),
        }
    }
}

/// One named variant of an enumerated type.
#[derive(Clone)]
pub struct Variant {
    name: &'static str,
    make: fn() -> Instance,
}

impl Variant {
    pub fn new(name: &'static str, make: fn() -> Instance) -> Self {
        Self { name, make }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn make(&self) -> Instance {
        (self.make)()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A constructor parameter.
///
/// The parameter type is resolved lazily so that self-referential types can
/// be described at all.
#[derive(Clone)]
pub struct Parameter {
    name: Cow<'static, str>,
    type_name: &'static str,
    descriptor: fn() -> TypeDescriptor,
}

impl Parameter {
    pub fn of<T: Describe>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            descriptor: T::descriptor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned name for argument binding; borrowed names stay unallocated.
    pub(crate) fn binding(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        (self.descriptor)()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

type BuildFn = dyn Fn(&mut Arguments) -> Result<Instance> + Send + Sync;

/// The primary construction path of a composite type.
#[derive(Clone)]
pub struct Constructor {
    params: SmallVec<[Parameter; 8]>,
    build: Arc<BuildFn>,
}

impl Constructor {
    /// Wrap a build function. Parameters are added with [`param`](Self::param)
    /// and [`positional`](Self::positional) in declaration order.
    pub fn new<T, F>(build: F) -> Self
    where
        T: Any,
        F: Fn(&mut Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            params: SmallVec::new(),
            build: Arc::new(move |args: &mut Arguments| {
                build(args).map(|value| Box::new(value) as Instance)
            }),
        }
    }

    /// Add a named parameter.
    pub fn param<T: Describe>(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.params.push(Parameter::of::<T>(name));
        self
    }

    /// Add a parameter named after its position (tuple structs).
    pub fn positional<T: Describe>(mut self) -> Self {
        let index = self.params.len();
        self.params.push(Parameter::of::<T>(index.to_string()));
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    pub fn invoke(&self, args: &mut Arguments) -> Result<Instance> {
        (self.build)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.params.iter()).finish()
    }
}

struct DescriptorData {
    key: TypeKey,
    name: &'static str,
    shape: Shape,
}

/// Read-only handle describing one concrete type.
#[derive(Clone)]
pub struct TypeDescriptor(Arc<DescriptorData>);

impl TypeDescriptor {
    fn new<T: Any>(shape: Shape) -> Self {
        Self(Arc::new(DescriptorData {
            key: TypeKey::of::<T>(),
            name: std::any::type_name::<T>(),
            shape,
        }))
    }

    /// Descriptor of a described type.
    pub fn of<T: Describe>() -> Self {
        T::descriptor()
    }

    pub fn primitive<T: Any>() -> Self {
        Self::new::<T>(Shape::Primitive)
    }

    pub fn singleton<T: Any>(instance: fn() -> Instance) -> Self {
        Self::new::<T>(Shape::Singleton(instance))
    }

    pub fn enumerated<T: Any>(variants: Vec<Variant>) -> Self {
        Self::new::<T>(Shape::Enumerated(variants))
    }

    pub fn composite<T: Any>() -> CompositeBuilder {
        CompositeBuilder {
            key: TypeKey::of::<T>(),
            name: std::any::type_name::<T>(),
            constructors: SmallVec::new(),
        }
    }

    pub fn unsupported<T: Any>() -> Self {
        Self::new::<T>(Shape::Unsupported)
    }

    pub fn key(&self) -> TypeKey {
        self.0.key
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }

    pub fn shape(&self) -> &Shape {
        &self.0.shape
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.0.shape, Shape::Primitive)
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self.0.shape, Shape::Singleton(_))
    }

    pub fn is_enumerated(&self) -> bool {
        matches!(self.0.shape, Shape::Enumerated(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.0.shape, Shape::Composite(_))
    }

    /// Variants of an enumerated type, empty for every other shape.
    pub fn variants(&self) -> &[Variant] {
        match &self.0.shape {
            Shape::Enumerated(variants) => variants,
            _ => &[],
        }
    }

    /// All declared constructors of a composite type.
    pub fn constructors(&self) -> &[Constructor] {
        match &self.0.shape {
            Shape::Composite(constructors) => constructors,
            _ => &[],
        }
    }

    /// Parameters of the primary constructor, if the type has exactly one.
    pub fn constructor_parameters(&self) -> Option<&[Parameter]> {
        match self.constructors() {
            [primary] => Some(primary.parameters()),
            _ => None,
        }
    }

    /// Build one instance of this type with a fresh instantiator.
    pub fn instance(&self, config: InstantiatorConfig) -> Result<Instance> {
        Instantiator::new(config).create_instance(self)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.0.key == other.0.key
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.0.name)
            .field("shape", &self.0.shape)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// Builder for composite descriptors.
pub struct CompositeBuilder {
    key: TypeKey,
    name: &'static str,
    constructors: SmallVec<[Constructor; 1]>,
}

impl CompositeBuilder {
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor(Arc::new(DescriptorData {
            key: self.key,
            name: self.name,
            shape: Shape::Composite(self.constructors),
        }))
    }
}

macro_rules! describe_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn descriptor() -> TypeDescriptor {
                    static DESCRIPTOR: std::sync::OnceLock<TypeDescriptor> = std::sync::OnceLock::new();
                    DESCRIPTOR.get_or_init(TypeDescriptor::primitive::<$ty>).clone()
                }
            }
        )*
    };
}

describe_primitives!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);
