//! Reduce an image to `k` colors.
//!
//! ```text
//! cargo run --example quantize -- input.png output.png 8 50
//! ```

use std::env;
use std::process::ExitCode;

use kquant::{quantize_image, Kmeans};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: quantize <input> <output> [k] [iter]");
        return ExitCode::FAILURE;
    }
    let (k, iter) = match (parse_arg(&args, 2, "k", 8), parse_arg(&args, 3, "iter", 50)) {
        (Ok(k), Ok(iter)) => (k, iter),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let kmeans = Kmeans::new(k).with_iter(iter);
    match quantize_image(&args[0], &args[1], &kmeans) {
        Ok(fit) => {
            println!("=== palette (k={k}, iter={}) ===", kmeans.n_iter());
            for (c, size) in fit.centroids.iter().zip(fit.cluster_sizes()) {
                println!("  ({:5.1}, {:5.1}, {:5.1}) => {size} pixels", c[0], c[1], c[2]);
            }
            println!("inertia: {:.1}", fit.inertia);
            if !fit.degenerate.is_empty() {
                println!("empty-cluster events: {}", fit.degenerate.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Positional count argument, `default` when absent.
fn parse_arg(args: &[String], idx: usize, name: &str, default: usize) -> Result<usize, String> {
    match args.get(idx) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| format!("invalid {name} {raw:?}: {e}")),
    }
}
