pub mod examples;
pub mod test_harness;

pub use examples::*;
pub use test_harness::*;
