//! Unsupported and unresolvable types fail loudly.

use fixtures::examples::{AccountId, Ambiguous, Connection, Drawing, Gallery, Session, Shape};
use fixtures::test_harness::seeded_config;
use instantiator::{InstantiationError, TypeDescriptor, instance};

#[test]
fn type_without_constructor_is_unsupported() {
    assert_eq!(
        instance::<Connection>(seeded_config(0)),
        Err(InstantiationError::UnsupportedConstruction {
            type_name: std::any::type_name::<Connection>(),
            constructors: 0,
        })
    );
}

#[test]
fn type_with_two_constructors_is_unsupported() {
    assert_eq!(
        instance::<Ambiguous>(seeded_config(0)),
        Err(InstantiationError::UnsupportedConstruction {
            type_name: std::any::type_name::<Ambiguous>(),
            constructors: 2,
        })
    );
    assert!(TypeDescriptor::of::<Ambiguous>().constructor_parameters().is_none());
}

#[test]
fn registered_generator_rescues_unsupported_type() {
    let config = seeded_config(0).with_generator(|| Connection { fd: 3 });
    assert_eq!(instance::<Connection>(config), Ok(Connection { fd: 3 }));
}

#[test]
fn abstract_type_is_unresolved() {
    let error = instance::<Box<dyn Shape>>(seeded_config(0)).err().unwrap();
    assert_eq!(
        error,
        InstantiationError::UnresolvedType {
            type_name: std::any::type_name::<Box<dyn Shape>>(),
        }
    );
    assert!(error.to_string().contains("no registered generator"));
}

#[test]
fn nested_failure_surfaces_unwrapped() {
    let error = instance::<Session>(seeded_config(0)).err().unwrap();
    assert_eq!(error.type_name(), std::any::type_name::<Connection>());

    // Two levels down: Gallery -> Drawing -> Box<dyn Shape>.
    let error = instance::<Gallery>(seeded_config(0)).err().unwrap();
    assert!(matches!(error, InstantiationError::UnresolvedType { .. }));
    assert_eq!(error.type_name(), std::any::type_name::<Box<dyn Shape>>());
}

#[test]
fn first_failure_aborts_the_call() {
    // The string field before `shape` resolves fine, the call still fails.
    let error = instance::<Drawing>(seeded_config(0)).err().unwrap();
    assert!(matches!(error, InstantiationError::UnresolvedType { .. }));
}

#[test]
fn registry_only_type_is_unresolved_without_generator() {
    assert_eq!(
        instance::<AccountId>(seeded_config(0)),
        Err(InstantiationError::UnresolvedType {
            type_name: std::any::type_name::<AccountId>(),
        })
    );
}
