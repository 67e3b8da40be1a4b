//! Step throughput benchmark comparing the serial and parallel strategies

use std::time::Instant;

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use life_sandbox::{Algorithm, Grid};

const DENSITY: f64 = 0.3;

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut rng, DENSITY);
    grid.set_algorithm(algorithm);

    let start = Instant::now();
    grid.step(iterations);
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("Life Sandbox step benchmark");
    println!("{:<12} {:>12} {:>12} {:>12}", "Size", "Serial", "Parallel", "Auto");

    for &size in &[50usize, 100, 200, 500, 1000] {
        let iterations = if size >= 500 { 10 } else { 100 };
        let times: Vec<f64> = [Algorithm::Serial, Algorithm::Parallel, Algorithm::Auto]
            .iter()
            .map(|&algorithm| benchmark(algorithm, size, iterations))
            .collect();

        println!(
            "{:<12} {:>10.3}ms {:>10.3}ms {:>10.3}ms",
            format!("{}x{}", size, size),
            times[0],
            times[1],
            times[2]
        );
    }
}
