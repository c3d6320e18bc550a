//! Descriptor-driven entry point and capability queries.

use fixtures::examples::{AccountId, Address, Color, DEFAULT_THEME, Point, Theme};
use fixtures::test_harness::seeded_config;
use instantiator::{InstantiationError, Instantiator, TypeDescriptor};

#[test]
fn descriptor_instance_builds_the_described_type() {
    let descriptor = TypeDescriptor::of::<Address>();
    let config = seeded_config(0)
        .with_string_generator(|| "Elm".to_string())
        .with_int_generator(|| 7);
    let value = descriptor.instance(config).unwrap();
    assert_eq!(
        value.downcast_ref::<Address>(),
        Some(&Address {
            street: "Elm".to_string(),
            zip: 7,
        })
    );
}

#[test]
fn descriptors_can_be_mixed_at_runtime() {
    let instantiator = Instantiator::new(seeded_config(3).with_int_generator(|| 5));
    let descriptors = [
        TypeDescriptor::of::<Point>(),
        TypeDescriptor::of::<Color>(),
        TypeDescriptor::of::<&'static Theme>(),
    ];
    let built: Vec<_> = descriptors
        .iter()
        .map(|descriptor| instantiator.create_instance(descriptor).unwrap())
        .collect();
    assert_eq!(built[0].downcast_ref::<Point>(), Some(&Point { x: 5, y: 5 }));
    assert!(built[1].is::<Color>());
    let theme = built[2].downcast_ref::<&'static Theme>().unwrap();
    assert!(std::ptr::eq(*theme, &DEFAULT_THEME));
}

#[test]
fn capability_queries() {
    let point = TypeDescriptor::of::<Point>();
    assert!(point.is_composite());
    assert!(!point.is_enumerated());
    let params: Vec<_> = point
        .constructor_parameters()
        .unwrap()
        .iter()
        .map(|param| (param.name().to_string(), param.type_name()))
        .collect();
    assert_eq!(
        params,
        [("x".to_string(), "i32"), ("y".to_string(), "i32")]
    );

    assert!(TypeDescriptor::of::<Color>().is_enumerated());
    assert!(TypeDescriptor::of::<i32>().is_primitive());
    assert_eq!(TypeDescriptor::of::<Point>().to_string(), std::any::type_name::<Point>());
}

#[test]
fn typed_entry_reports_failures_like_dynamic_one() {
    let descriptor = TypeDescriptor::of::<AccountId>();
    let dynamic = descriptor.instance(seeded_config(0)).err().unwrap();
    let typed = instantiator::instance::<AccountId>(seeded_config(0)).err().unwrap();
    assert_eq!(dynamic, typed);
    assert!(matches!(typed, InstantiationError::UnresolvedType { .. }));
}
