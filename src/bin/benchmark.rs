//! Performance benchmark comparing serial and parallel generation

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::domain::{Algorithm, Dimensions, Grid, Rule, Simulator, SpawnRatio};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> anyhow::Result<f64> {
    let rule = Rule::conway();
    let mut grid = Grid::new(Dimensions::new(size, size)?);
    grid.randomize(SpawnRatio::new(40)?, &mut StdRng::seed_from_u64(size as u64));
    let mut sim = Simulator::from_grid(grid).with_algorithm(algorithm);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.advance(&rule);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Toroidal Life Benchmark ===\n");

    let sizes = [32, 128, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<47}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
