//! Example types used across the integration tests and benches.
//! Each one is described with `describe!` or, where the macro has no form
//! for it, with a hand-written descriptor.

use instantiator::{Constructor, Describe, TypeDescriptor, describe};

/// Two-dimensional point:
/// ```text
/// Point(x: Int, y: Int)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
describe!(Point { x: i32, y: i32 });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
}
describe!(enum Color { Red, Green, Blue });

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

/// One field per elementary kind with a default generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitives {
    pub int: i32,
    pub float: f32,
    pub double: f64,
    pub string: String,
    pub char: char,
    pub boolean: bool,
    pub long: i64,
    pub short: i16,
    pub byte: i8,
}
describe!(Primitives {
    int: i32,
    float: f32,
    double: f64,
    string: String,
    char: char,
    boolean: bool,
    long: i64,
    short: i16,
    byte: i8,
});

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub zip: i32,
}
describe!(Address { street: String, zip: i32 });

/// Nested composite mixing every construction rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i16,
    pub favorite_color: Color,
    pub home: Address,
    pub work: Address,
    pub theme: &'static Theme,
}
describe!(Person {
    name: String,
    age: i16,
    favorite_color: Color,
    home: Address,
    work: Address,
    theme: &'static Theme,
});

/// Process-wide UI theme, only ever handed out as `&DEFAULT_THEME`.
#[derive(Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub accent: Color,
}

pub static DEFAULT_THEME: Theme = Theme {
    name: "default",
    accent: Color::Blue,
};
describe!(singleton Theme = DEFAULT_THEME);

/// Tuple struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meters(pub f64);
describe!(Meters(f64));

/// Zero-parameter composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker;
describe!(Marker);

/// Self-referential type; only a depth limit stops its construction.
#[derive(Debug)]
pub struct Node {
    pub value: i32,
    pub next: Box<Node>,
}
describe!(Node { value: i32, next: Box<Node> });
describe!(boxed Node);

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

// Abstract: constructible only through a registered generator.
describe!(unsupported Box<dyn Shape>);

pub struct Drawing {
    pub title: String,
    pub shape: Box<dyn Shape>,
}
describe!(Drawing { title: String, shape: Box<dyn Shape> });

/// Wrapper that nests `Drawing` one level deeper.
pub struct Gallery {
    pub owner: Person,
    pub centerpiece: Drawing,
}
describe!(Gallery { owner: Person, centerpiece: Drawing });

/// Opaque handle: no constructor is declared for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub fd: i32,
}

impl Describe for Connection {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Connection>().build()
    }
}

/// Declares two constructors, so there is no single primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ambiguous {
    pub value: i64,
}

impl Describe for Ambiguous {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::composite::<Ambiguous>()
            .constructor(
                Constructor::new(|args| Ok(Ambiguous { value: args.take("value")? }))
                    .param::<i64>("value"),
            )
            .constructor(Constructor::new(|_| Ok(Ambiguous { value: 0 })))
            .build()
    }
}

/// Holds a `Connection`, so construction fails one level down.
#[derive(Debug)]
pub struct Session {
    pub user: String,
    pub connection: Connection,
}
describe!(Session { user: String, connection: Connection });

/// Registry-only identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub u64);
describe!(primitive AccountId);

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub owner: String,
    pub balance: i64,
}
describe!(Account { id: AccountId, owner: String, balance: i64 });
