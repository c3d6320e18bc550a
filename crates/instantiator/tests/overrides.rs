//! Registered generators win over every structural rule.

use fixtures::examples::{
    Account, AccountId, Address, Circle, Color, DEFAULT_THEME, Drawing, Person, Point, Shape, Theme,
};
use fixtures::test_harness::seeded_config;
use instantiator::{Instantiator, instance};

#[test]
fn composite_override_applies_directly() {
    let config = seeded_config(0).with_generator(|| Point { x: 1, y: 2 });
    assert_eq!(instance::<Point>(config), Ok(Point { x: 1, y: 2 }));
}

#[test]
fn composite_override_applies_when_nested() {
    let fixed = Address {
        street: "Main St".to_string(),
        zip: 12345,
    };
    let expected = fixed.clone();
    let config = seeded_config(3).with_generator(move || fixed.clone());
    let person = instance::<Person>(config).unwrap();
    assert_eq!(person.home, expected);
    assert_eq!(person.work, expected);
}

#[test]
fn enum_override_always_wins() {
    let mut instantiator = Instantiator::new(seeded_config(7));
    instantiator.register(|| Color::Green);
    for _ in 0..50 {
        assert_eq!(instantiator.create::<Color>(), Ok(Color::Green));
        assert_eq!(
            instantiator.create::<Person>().unwrap().favorite_color,
            Color::Green
        );
    }
}

#[test]
fn singleton_override_always_wins() {
    static HIGH_CONTRAST: Theme = Theme {
        name: "high-contrast",
        accent: Color::Red,
    };
    let config = seeded_config(0).with_generator(|| &HIGH_CONTRAST);
    let theme = instance::<&'static Theme>(config).unwrap();
    assert!(std::ptr::eq(theme, &HIGH_CONTRAST));
    assert!(!std::ptr::eq(theme, &DEFAULT_THEME));
}

#[test]
fn abstract_type_resolves_once_registered() {
    let config = seeded_config(0).with_generator(|| Box::new(Circle { radius: 1.0 }) as Box<dyn Shape>);
    let drawing = instance::<Drawing>(config).unwrap();
    assert!((drawing.shape.area() - std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn registry_only_type_resolves_once_registered() {
    let config = seeded_config(0)
        .with_generator(|| AccountId(77))
        .with_long_generator(|| 500);
    let account = instance::<Account>(config).unwrap();
    assert_eq!(account.id, AccountId(77));
    assert_eq!(account.balance, 500);
}

#[test]
fn later_registration_replaces_earlier() {
    let mut instantiator = Instantiator::new(seeded_config(0).with_int_generator(|| 1));
    instantiator.register(|| 2i32).register(|| 3i32);
    assert_eq!(instantiator.create::<Point>(), Ok(Point { x: 3, y: 3 }));
    assert!(instantiator.registry().contains::<i32>());
}
