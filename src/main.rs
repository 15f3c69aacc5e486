//! Sparseboard -- round-trips a board through a sparse record file.
//!
//! Usage:
//!   sparseboard [OPTIONS]
//!
//! Options:
//!   --size N       Board dimension (default: 10)
//!   --path FILE    Record file (default: sparsearray.dat)
//!   --random D     Random board with stone density D in [0, 1]
//!   --seed N       Random seed, 0 for entropy (default: 0)
//!   --json         Print the sparse records as JSON
//!   --quiet        Only report failures
//!
//! Set `RUST_LOG=debug` to trace each pipeline stage.

use std::env;
use std::path::PathBuf;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use sparseboard::board::{demo_board, random_board, Grid};
use sparseboard::pipeline::{self, PipelineConfig};
use sparseboard::sparse::encode;

/// Parses the value following a flag.
fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i)
        .ok_or_else(|| format!("missing value for {}", flag))?;
    raw.parse()
        .map_err(|_| format!("invalid {} value: '{}'", flag, raw))
}

/// Builds the run configuration from command-line arguments.
/// Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<PipelineConfig>, String> {
    let mut config = PipelineConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                config.size = flag_value(args, i, "--size")?;
            }
            "--path" => {
                i += 1;
                config.path = flag_value::<PathBuf>(args, i, "--path")?;
            }
            "--random" => {
                i += 1;
                let density: f64 = flag_value(args, i, "--random")?;
                if !(0.0..=1.0).contains(&density) {
                    return Err(format!("--random density must be in [0, 1], got {}", density));
                }
                config.density = Some(density);
            }
            "--seed" => {
                i += 1;
                config.seed = flag_value(args, i, "--seed")?;
            }
            "--json" => {
                config.json = true;
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                return Ok(None);
            }
            other => {
                return Err(format!("Unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

/// Builds the starting board: random if a density was given, else the demo.
fn initial_board(config: &PipelineConfig) -> Grid {
    match config.density {
        Some(density) => {
            let mut rng = if config.seed == 0 {
                SmallRng::from_entropy()
            } else {
                SmallRng::seed_from_u64(config.seed)
            };
            random_board(config.size, density, &mut rng)
        }
        None => demo_board(config.size),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            process::exit(1);
        }
    };

    let grid = initial_board(&config);
    if !config.quiet {
        println!("Initial board:");
        print!("{}", grid);

        let records = encode(&grid);
        println!("Sparse records:");
        if config.json {
            match serde_json::to_string(&records) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        } else {
            print!("{}", records);
        }
    }

    let restored = match pipeline::run_with(&config, &grid) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if restored != grid {
        log::warn!("restored board differs from the original");
        eprintln!("error: restored board differs from the original");
        process::exit(1);
    }

    if !config.quiet {
        println!("Restored board:");
        print!("{}", restored);
    }
}

fn print_usage() {
    eprintln!("Usage: sparseboard [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N       Board dimension (default: 10)");
    eprintln!("  --path FILE    Record file (default: sparsearray.dat)");
    eprintln!("  --random D     Random board with stone density D in [0, 1]");
    eprintln!("  --seed N       Random seed, 0 for entropy (default: 0)");
    eprintln!("  --json         Print the sparse records as JSON");
    eprintln!("  --quiet        Only report failures");
    eprintln!("  --help         Show this help");
}
