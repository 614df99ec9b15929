//! Cyber Defense balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs, 200 encounters each
//!   cargo run --bin simulate -- -n 100 -e 50   # 100 runs of 50 encounters
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use std::env;
use std::process::ExitCode;

use cyberdefense::simulator::{run_simulation, SimConfig};
use cyberdefense::GameConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CYBER DEFENSE BALANCE SIMULATOR                  ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Encounters: {}", config.max_encounters_per_run);
    println!("  Boss Interval:  {}", config.game.boss_interval);
    println!("  Shop Interval:  {}", config.game.shop_interval);
    println!("  Shopping:       {}", config.use_shop);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, report.to_json()) {
            eprintln!("error: failed to write {}: {}", filename, err);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-e" | "--encounters" => {
                if i + 1 < args.len() {
                    config.max_encounters_per_run = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config.game =
                        GameConfig::from_json_file(&args[i + 1]).map_err(|e| e.to_string())?;
                    i += 1;
                }
            }
            "--no-shop" => {
                config.use_shop = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--boss-rush" => {
                config = SimConfig::boss_rush(config.num_runs);
            }
            _ => {}
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Cyber Defense Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 1000)");
    println!("    -e, --encounters <E>  Max encounters per run (default: 200)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -c, --config <FILE>   Session pacing from a JSON file");
    println!("    --no-shop             Never buy from the merchant");
    println!("    -v, --verbose         Print every run");
    println!("    -q, --quiet           Skip the text report");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick test (100 runs of 50 encounters)");
    println!("    --boss-rush           Every encounter is a boss");
    println!("    -h, --help            Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG              Engine log filter (default: warn)");
}
