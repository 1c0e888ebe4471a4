use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use sparse_ops::algorithm::Operation;
use sparse_ops::data::linear_algebra::matrix::SparseMatrix;
use sparse_ops::io::{export, import};

/// Exact addition, subtraction, multiplication and transposition of sparse integer matrices.
#[derive(Parser, Debug)]
#[command(name = "sparse-ops", version, about)]
struct Opts {
    /// Operation to apply: add, subtract, multiply, transpose or negate. Asked for when omitted
    #[arg(short, long)]
    operation: Option<Operation>,

    /// File containing the left, or only, matrix
    left: PathBuf,

    /// File containing the right matrix, needed by add, subtract and multiply
    right: Option<PathBuf>,

    /// Write the result to this file instead of printing it
    #[arg(short = 'w', long)]
    output: Option<PathBuf>,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.log_level);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(opts: &Opts) -> Result<()> {
    let operation = match opts.operation {
        Some(operation) => operation,
        None => prompt_operation()?,
    };
    info!(%operation, "selected operation");

    let left: SparseMatrix = import(&opts.left)?;
    let right = match (&opts.right, operation.arity()) {
        (Some(path), 2) => Some(import(path)?),
        (None, 2) => bail!("{operation} needs a second matrix file"),
        (Some(path), _) => {
            warn!(path = %path.display(), "{operation} takes a single matrix, ignoring the second one");
            None
        },
        (None, _) => None,
    };

    let result = operation.apply(&left, right.as_ref())
        .with_context(|| format!("Could not {operation} the given matrices"))?;
    info!(dimensions = %result.dimensions(), nnz = result.nnz(), "computed result");

    match &opts.output {
        Some(path) => export(&result, path)
            .with_context(|| format!("Could not write \"{}\"", path.display()))?,
        None => println!("{result}"),
    }

    Ok(())
}

/// Ask for the operation on the terminal.
fn prompt_operation() -> Result<Operation> {
    let mut stderr = io::stderr();
    write!(stderr, "Operation (add, subtract, multiply, transpose, negate): ")?;
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("No operation given");
    }

    Ok(line.parse()?)
}
