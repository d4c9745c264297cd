use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;
use rand::SeedableRng as _;

mod cli;
mod data;

/// Quadratic sorts are refused above this slice size
const MAX_QUADRATIC_SIZE: usize = 100_000;

/// Program entry point
fn main() -> anyhow::Result<()> {
    let cli::Args {
        algorithms,
        data,
        runs,
        size,
        seed,
        output,
        log_level,
    } = cli::Args::parse();

    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let seed = match seed {
        Some(seed) => seed,
        None => {
            log::info!("No seed provided, generating one using system rng");
            rand::random()
        }
    };

    println!("Runs: {runs}, Slice size: {size}, Data type: {data}, Seed: {seed}");

    let mut output = match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            writeln!(writer, "algorithm,data,size,run,nanos")?;
            Some(writer)
        }
        None => None,
    };

    for algorithm in algorithms {
        if algorithm.is_quadratic() && size > MAX_QUADRATIC_SIZE {
            log::warn!(
                "Skipping {algorithm}, it is quadratic and {size} exceeds {MAX_QUADRATIC_SIZE}"
            );
            continue;
        }

        println!(
            "Running measurements for the following algorithm:\n{description} (stable: {stable})",
            description = algorithm.description(),
            stable = algorithm.is_stable(),
        );

        // Every algorithm sorts the same sequence of inputs
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        #[cfg(feature = "counters")]
        reset_counters();

        let (samples, stats) = match data {
            cli::DataType::UniformU64 => {
                perform_experiment::<u64, data::UniformData>(algorithm, runs, size, &mut rng)
            }
            cli::DataType::PermutationU64 => {
                perform_experiment::<u64, data::PermutationData>(algorithm, runs, size, &mut rng)
            }
            cli::DataType::BoundedI32 => {
                perform_experiment::<i32, data::BoundedData>(algorithm, runs, size, &mut rng)
            }
            cli::DataType::ZipfU64 => {
                perform_experiment::<u64, data::ZipfData>(algorithm, runs, size, &mut rng)
            }
        }
        .with_context(|| format!("Measuring {algorithm} failed"))?;

        println!("Stats (ms): {stats:?}");

        #[cfg(feature = "counters")]
        print_counters(runs);

        if let Some(writer) = output.as_mut() {
            for (run, sample) in samples.iter().enumerate() {
                writeln!(
                    writer,
                    "{algorithm},{data},{size},{run},{}",
                    sample.as_nanos()
                )?;
            }
        }
    }

    if let Some(mut writer) = output {
        writer.flush().context("Failed to write samples")?;
    }

    Ok(())
}

/// Perform a time sampling experiment on the given sorting algorithm
///
/// - runs: The number of samples to measure
/// - size: The size of the slices to sort
/// - rng: The rng used for sampling the data
fn perform_experiment<T: Ord + Send + std::fmt::Debug, D: data::Data<T>>(
    algorithm: cli::Algorithm,
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
) -> anyhow::Result<(Vec<std::time::Duration>, rolling_stats::Stats<f64>)> {
    let sorter = algorithm.sorter();
    let mut samples = Vec::with_capacity(runs);

    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut data = D::initialize(size, rng)?;

        let now = std::time::Instant::now();
        sorter(std::hint::black_box(&mut data))?;
        let elapsed = now.elapsed();

        anyhow::ensure!(data.is_sorted(), "Run {run} was not sorted by {algorithm}");

        // The first run warms up caches and the thread pool
        if run != 0 {
            samples.push(elapsed);
            stats.update(elapsed.as_secs_f64() * 1_000.0);

            bar.inc(1);
        }
    }

    bar.finish_and_clear();

    Ok((samples, stats))
}

#[cfg(feature = "counters")]
fn reset_counters() {
    use classic_sorts::algorithms::{
        ALLOC_COUNTER, COMPARISON_COUNTER, MERGE_COUNTER, MOVE_COUNTER, SWAP_COUNTER,
    };

    for counter in [
        &COMPARISON_COUNTER,
        &SWAP_COUNTER,
        &MOVE_COUNTER,
        &MERGE_COUNTER,
        &ALLOC_COUNTER,
    ] {
        counter.take();
    }
}

/// Print the counters averaged over all runs, including the warm-up run
#[cfg(feature = "counters")]
fn print_counters(runs: usize) {
    use classic_sorts::algorithms::{
        ALLOC_COUNTER, COMPARISON_COUNTER, MERGE_COUNTER, MOVE_COUNTER, SWAP_COUNTER,
    };

    let runs = runs as f64 + 1.0;
    println!(
        "Per run: {:.1} comparisons, {:.1} swaps, {:.1} shifted elements, {:.1} merged elements, \
         {:.1} allocated",
        COMPARISON_COUNTER.take() as f64 / runs,
        SWAP_COUNTER.take() as f64 / runs,
        MOVE_COUNTER.take() as f64 / runs,
        MERGE_COUNTER.take() as f64 / runs,
        ALLOC_COUNTER.take() as f64 / runs,
    );
}
