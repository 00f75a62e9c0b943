use std::io::Write as _;

use clap::Parser as _;
use rand::SeedableRng as _;

mod cli;

/// Program entry point
fn main() {
    let cli::Args {
        algorithm,
        data,
        variant,
        runs,
        size,
        seed,
        output,
    } = cli::Args::parse();

    let Some(variant) = cli::AlgorithmVariants::validate(algorithm, variant) else {
        if variant != -1 {
            eprintln!("Invalid variant {variant} for {algorithm}");
        }
        println!("Available variants for {algorithm}:");
        for (index, name) in cli::AlgorithmVariants::variants(algorithm).enumerate() {
            println!("  {index}: {name}");
        }
        std::process::exit(if variant == -1 { 0 } else { 1 });
    };

    let (Some(sorter), Some(stable), Some(name)) = (
        cli::AlgorithmVariants::sorter::<u32>(algorithm, variant),
        cli::AlgorithmVariants::is_stable(algorithm, variant),
        cli::AlgorithmVariants::variants(algorithm).nth(variant),
    ) else {
        eprintln!("Variant {variant} of {algorithm} could not be resolved");
        std::process::exit(1);
    };

    println!("Running measurements for the following algorithm:\n{name} (stable: {stable})");
    println!("Runs: {runs}, Slice size: {size}, Data type: {data}");

    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let (samples, stats) = perform_experiment(sorter, data, runs, size, &mut rng);

    println!("Stats (ms): {stats:?}");

    #[cfg(feature = "counters")]
    {
        use runsort::algorithms::merging;

        let per_run = |total: u64| total as f64 / (runs + 1) as f64;

        println!(
            "Merged elements per run: {:.1}",
            per_run(merging::MERGE_SLICE_COUNTER.take())
        );
        println!(
            "Buffered elements per run: {:.1}",
            per_run(merging::MERGE_BUFFER_COUNTER.take())
        );
        println!(
            "Rotated elements per run: {:.1}",
            per_run(merging::ROTATION_COUNTER.take())
        );
        println!(
            "Allocated elements per run: {:.1}",
            per_run(merging::ALLOC_COUNTER.take())
        );
    }

    if let Some(path) = output {
        if let Err(error) = write_samples(&path, &samples) {
            eprintln!("Failed to write samples to {}: {error}", path.display());
            std::process::exit(1);
        }
        println!("Samples written to {}", path.display());
    }
}

/// Perform a time sampling experiment on the given sorting function
///
/// - runs: The number of samples to measure
/// - size: The size of the slices to sort
/// - rng: The rng used for sampling the data
fn perform_experiment(
    sorter: fn(&mut [u32]),
    data: cli::DataType,
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
) -> (Vec<std::time::Duration>, rolling_stats::Stats<f64>) {
    let mut samples = Vec::with_capacity(runs);
    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut values = data.initialize(size, rng);

        let now = std::time::Instant::now();
        sorter(std::hint::black_box(&mut values));
        let elapsed = now.elapsed();

        debug_assert!(values.is_sorted(), "Input is not sorted after the run");

        // The first run only warms up caches and allocator
        if run != 0 {
            samples.push(elapsed);
            stats.update(elapsed.as_secs_f64() * 1000.0);

            bar.inc(1);
        }
    }

    bar.finish();

    (samples, stats)
}

/// Write one sample per line, in nanoseconds
fn write_samples(
    path: &std::path::Path,
    samples: &[std::time::Duration],
) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    for sample in samples {
        writeln!(file, "{}", sample.as_nanos())?;
    }

    file.flush()
}
