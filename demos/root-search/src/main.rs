//! Drives a root search with the sampled step functions, printing the samples at the end.
//!
//! Usage: `root-search [monotonic|left|right] [tolerance] [max-iterations]`
//!
//! Set `RUST_LOG=trace` to see the fallbacks taken by the step functions.
use clap::{Parser, ValueEnum};
use geometrylib_datatool::DataArray2;
use geometrylib_math::root_eq::{can_be_negative, next_x_monotonic, next_x_parabolic, Branch, StepError};
use log::LevelFilter;
use std::io;
use thiserror::Error;

/// Root search over a sampled function, driven by the step functions of `geometrylib-math`
#[derive(Parser, Debug)]
#[command(name = "root-search")]
#[command(version, about, long_about = None)]
struct Args {
    /// Kind of function to search a root of
    #[arg(value_enum, default_value_t = ModeArg::Monotonic)]
    mode: ModeArg,

    /// Stop once |f(x)| falls below this value
    #[arg(default_value_t = 1e-9)]
    tolerance: f64,

    /// Give up after this many steps
    #[arg(default_value_t = 200)]
    max_iterations: usize,
}

/// Search mode
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Monotonic function with a single root
    Monotonic,
    /// Root left of the minimum of a convex function
    Left,
    /// Root right of the minimum of a convex function
    Right,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("step failed: {0}")]
    Step(#[from] StepError),
    #[error("could not print samples: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Monotonic,
    Parabolic(Branch),
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Monotonic => Self::Monotonic,
            ModeArg::Left => Self::Parabolic(Branch::Left),
            ModeArg::Right => Self::Parabolic(Branch::Right),
        }
    }
}

impl Mode {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Monotonic => x.powi(3) + x - 3.0,
            Self::Parabolic(_) => (x - 2.0).powi(2) - 1.5,
        }
    }

    fn initial_xs(&self) -> [f64; 4] {
        match self {
            Self::Monotonic => [-2.0, 0.0, 3.0, 4.0],
            Self::Parabolic(_) => [-3.0, -2.0, 6.0, 7.0],
        }
    }

    fn next_x(&self, samples: &DataArray2) -> Result<f64, StepError> {
        match self {
            Self::Monotonic => next_x_monotonic(samples.as_slice()),
            Self::Parabolic(branch) => next_x_parabolic(samples.as_slice(), *branch),
        }
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let mode = Mode::from(args.mode);
    let (tolerance, max_iterations) = (args.tolerance, args.max_iterations);

    let mut samples = DataArray2::new();
    for x in mode.initial_xs() {
        samples.insert_sorted(x, mode.eval(x));
    }

    if matches!(mode, Mode::Parabolic(_)) && !can_be_negative(samples.as_slice()) {
        log::info!("function cannot dip below zero, no root to search for");
        return Ok(());
    }

    let mut found = None;
    for iteration in 0..max_iterations {
        let x = mode.next_x(&samples)?;
        let y = mode.eval(x);
        log::debug!("iteration {iteration}: f({x}) = {y}");
        samples.insert_sorted(x, y);
        if y.abs() < tolerance {
            found = Some((iteration, x));
            break;
        }
    }

    match found {
        Some((iteration, x)) => log::info!("root found at x = {x} after {} iterations", iteration + 1),
        None => log::warn!("no root within tolerance {tolerance} after {max_iterations} iterations"),
    }
    samples.write_columns(&["x", "y"], io::stdout().lock())?;
    Ok(())
}

fn main() {
    env_logger::builder()
        .default_format()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
