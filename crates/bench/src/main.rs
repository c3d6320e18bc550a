//! Quick timing of instantiation throughput.

use std::time::Instant;

use anyhow::Result;
use fixtures::examples::{Person, Point, Primitives};
use fixtures::test_harness::fixed_config;
use instantiator::{Describe, Instantiator, InstantiatorConfig};

fn time<T: Describe>(label: &str, instantiator: &Instantiator, n: usize) -> Result<()> {
    let start = Instant::now();
    for _ in 0..n {
        std::hint::black_box(instantiator.create::<T>()?);
    }
    let elapsed = start.elapsed();
    println!(
        "{label:<12} {n:>6} instances in {elapsed:?} ({:.2}µs each)",
        elapsed.as_micros() as f64 / n as f64
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = InstantiatorConfig::default();
    log::info!("random seed {}", config.seed());
    let random = Instantiator::new(config);
    let fixed = Instantiator::new(fixed_config());

    println!("=== Quick Instantiation Timing ===\n");
    for n in [100, 1_000, 10_000] {
        println!("--- {n} iterations ---");
        time::<Point>("point", &random, n)?;
        time::<Point>("point/fixed", &fixed, n)?;
        time::<Primitives>("primitives", &random, n)?;
        time::<Person>("person", &random, n)?;
        println!();
    }
    Ok(())
}
