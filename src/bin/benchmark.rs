//! Serial vs parallel stepping throughput

use std::time::Instant;

use life_engine::{Simulation, Strategy};

fn benchmark(strategy: Strategy, size: usize, iterations: u32) -> f64 {
    let mut sim = match Simulation::with_seed(size, size, 0xC0FFEE) {
        Ok(sim) => sim.with_strategy(strategy),
        Err(e) => {
            eprintln!("{e}");
            return f64::NAN;
        }
    };
    if let Err(e) = sim.randomize_board(0.3) {
        eprintln!("{e}");
        return f64::NAN;
    }

    let start = Instant::now();
    sim.step_n(iterations);
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [60, 200, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Strategy::Serial, size, iterations);
        let parallel_ms = benchmark(Strategy::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000.0 * 2000.0;
    let parallel_ms = benchmark(Strategy::Parallel, 2000, iterations);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
