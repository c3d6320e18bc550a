//! `describe!`: declarative descriptors for structs, enums, singletons and
//! registry-only types.

/// Implement [`Describe`](crate::Describe) for a type.
///
/// | form | described as |
/// |---|---|
/// | `describe!(Point { x: i32, y: i32 })` | composite, named fields |
/// | `describe!(Meters(f64))` | composite, positional fields |
/// | `describe!(Marker)` or `describe!(Marker {})` | composite without parameters |
/// | `describe!(enum Color { Red, Green, Blue })` | enumerated |
/// | `describe!(singleton Theme = DEFAULT_THEME)` | `&'static Theme`, always `&DEFAULT_THEME` |
/// | `describe!(boxed Node)` | `Box<Node>`, wraps a constructed `Node` |
/// | `describe!(primitive Uuid)` | registry only |
/// | `describe!(unsupported Box<dyn Shape>)` | abstract, registry only |
///
/// Descriptors are built once per type and cached.
#[macro_export]
macro_rules! describe {
    (@cached $target:ty, $build:expr) => {
        impl $crate::Describe for $target {
            fn descriptor() -> $crate::TypeDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::TypeDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| $build).clone()
            }
        }
    };

    (enum $ty:ident { $($variant:ident),* $(,)? }) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::enumerated::<$ty>(::std::vec![
            $(
                $crate::Variant::new(::core::stringify!($variant), || {
                    ::std::boxed::Box::new($ty::$variant) as $crate::Instance
                }),
            )*
        ]));
    };

    (singleton $ty:ident = $instance:path) => {
        $crate::describe!(@cached &'static $ty, $crate::TypeDescriptor::singleton::<&'static $ty>(|| {
            ::std::boxed::Box::new(&$instance as &'static $ty) as $crate::Instance
        }));
    };

    (boxed $ty:ident) => {
        $crate::describe!(@cached ::std::boxed::Box<$ty>, $crate::TypeDescriptor::composite::<::std::boxed::Box<$ty>>()
            .constructor(
                $crate::Constructor::new(|args| ::core::result::Result::Ok(::std::boxed::Box::new(args.next::<$ty>()?)))
                    .positional::<$ty>(),
            )
            .build());
    };

    (primitive $ty:ty) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::primitive::<$ty>());
    };

    (unsupported $ty:ty) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::unsupported::<$ty>());
    };

    ($ty:ident { $($field:ident : $fty:ty),+ $(,)? }) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::composite::<$ty>()
            .constructor(
                $crate::Constructor::new(|args| {
                    ::core::result::Result::Ok($ty {
                        $($field: args.take::<$fty>(::core::stringify!($field))?,)+
                    })
                })
                $(.param::<$fty>(::core::stringify!($field)))+,
            )
            .build());
    };

    ($ty:ident ( $($fty:ty),+ $(,)? )) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::composite::<$ty>()
            .constructor(
                $crate::Constructor::new(|args| ::core::result::Result::Ok($ty($(args.next::<$fty>()?),+)))
                    $(.positional::<$fty>())+,
            )
            .build());
    };

    ($ty:ident {}) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::composite::<$ty>()
            .constructor($crate::Constructor::new(|_| ::core::result::Result::Ok($ty {})))
            .build());
    };

    ($ty:ident) => {
        $crate::describe!(@cached $ty, $crate::TypeDescriptor::composite::<$ty>()
            .constructor($crate::Constructor::new(|_| ::core::result::Result::Ok($ty)))
            .build());
    };
}

#[cfg(test)]
mod tests {
    use crate::{InstantiationError, InstantiatorConfig, TypeDescriptor, instance};

    #[derive(Debug, PartialEq)]
    struct Celsius(f64);
    describe!(Celsius(f64));

    #[derive(Debug, PartialEq)]
    struct Reading {
        sensor: String,
        value: Celsius,
        ok: bool,
    }
    describe!(Reading { sensor: String, value: Celsius, ok: bool });

    #[derive(Debug, PartialEq)]
    struct Tick;
    describe!(Tick);

    #[derive(Debug, PartialEq)]
    struct Empty {}
    describe!(Empty {});

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Level {
        Low,
        High,
    }
    describe!(enum Level { Low, High });

    #[derive(Debug)]
    struct Limits {
        ceiling: i32,
    }
    static LIMITS: Limits = Limits { ceiling: 10 };
    describe!(singleton Limits = LIMITS);

    #[derive(Debug, PartialEq)]
    struct Token(u128);
    describe!(primitive Token);

    trait Sensor {}
    describe!(unsupported Box<dyn Sensor>);

    #[allow(dead_code)]
    struct Chain {
        link: Box<Chain>,
    }
    describe!(Chain { link: Box<Chain> });
    describe!(boxed Chain);

    #[test]
    fn named_and_positional_fields() {
        let config = InstantiatorConfig::seeded(0)
            .with_double_generator(|| 21.5)
            .with_string_generator(|| "probe".to_string())
            .with_boolean_generator(|| true);
        assert_eq!(
            instance::<Reading>(config),
            Ok(Reading {
                sensor: "probe".to_string(),
                value: Celsius(21.5),
                ok: true,
            })
        );
        let params = TypeDescriptor::of::<Reading>();
        let names: Vec<_> = params
            .constructor_parameters()
            .unwrap()
            .iter()
            .map(|param| param.name().to_string())
            .collect();
        assert_eq!(names, ["sensor", "value", "ok"]);
    }

    #[test]
    fn unit_and_empty_structs() {
        assert_eq!(instance::<Tick>(InstantiatorConfig::seeded(0)), Ok(Tick));
        assert_eq!(instance::<Empty>(InstantiatorConfig::seeded(0)), Ok(Empty {}));
    }

    #[test]
    fn enum_form_lists_variants() {
        let descriptor = TypeDescriptor::of::<Level>();
        let names: Vec<_> = descriptor.variants().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["Low", "High"]);
    }

    #[test]
    fn singleton_form_returns_the_static() {
        let limits = instance::<&'static Limits>(InstantiatorConfig::seeded(0)).unwrap();
        assert!(std::ptr::eq(limits, &LIMITS));
        assert_eq!(limits.ceiling, 10);
    }

    #[test]
    fn primitive_form_needs_a_generator() {
        assert!(matches!(
            instance::<Token>(InstantiatorConfig::seeded(0)),
            Err(InstantiationError::UnresolvedType { .. })
        ));
        let config = InstantiatorConfig::seeded(0).with_generator(|| Token(9));
        assert_eq!(instance::<Token>(config), Ok(Token(9)));
    }

    #[test]
    fn unsupported_form_is_unresolved_until_registered() {
        struct Thermometer;
        impl Sensor for Thermometer {}

        assert!(matches!(
            instance::<Box<dyn Sensor>>(InstantiatorConfig::seeded(0)),
            Err(InstantiationError::UnresolvedType { .. })
        ));
        let config = InstantiatorConfig::seeded(0)
            .with_generator(|| Box::new(Thermometer) as Box<dyn Sensor>);
        assert!(instance::<Box<dyn Sensor>>(config).is_ok());
    }

    #[test]
    fn cached_descriptor_is_shared() {
        let a = TypeDescriptor::of::<Reading>();
        let b = TypeDescriptor::of::<Reading>();
        assert_eq!(a, b);
        assert!(a.is_composite());
        assert!(TypeDescriptor::of::<&'static Limits>().is_singleton());
    }

    #[test]
    fn self_reference_hits_the_depth_limit() {
        let config = InstantiatorConfig::seeded(0).with_max_depth(6);
        assert!(matches!(
            instance::<Chain>(config),
            Err(InstantiationError::RecursionLimitExceeded { limit: 6, .. })
        ));
    }
}
