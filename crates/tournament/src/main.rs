//! Tournament CLI
//!
//! Simulate events from a config file and inspect bracket seeding.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;
use tourney_core::seed_order;
use tournament::{ResultSimulator, TournamentConfig, TournamentEvent, TournamentReport};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament run <config.toml> [--seed N] [--json PATH]");
    println!("  tournament seeds <count>");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  tournament run event.toml --seed 7");
    println!("  tournament seeds 16");
}

/// Play `rounds` rounds of the current segment, stopping early once a
/// single contender is left.
fn play_segment(
    event: &mut TournamentEvent,
    simulator: &ResultSimulator,
    rounds: usize,
    rng: &mut StdRng,
) -> Result<()> {
    for _ in 0..rounds {
        if event.contender_count() <= 1 {
            info!("one contender left, segment finished");
            break;
        }
        let number = event.create_round(rng)?.number();
        simulator.play_round(event, number, rng)?;
    }
    Ok(())
}

fn run_event(args: &[String]) -> Result<()> {
    let Some(config_path) = args.first() else {
        print_usage();
        bail!("run requires a config file");
    };

    // Parse optional arguments
    let mut seed: Option<u64> = None;
    let mut json_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = Some(
                        args[i + 1]
                            .parse()
                            .with_context(|| format!("invalid seed: {}", args[i + 1]))?,
                    );
                    i += 1;
                }
            }
            "--json" | "-j" => {
                if i + 1 < args.len() {
                    json_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            other => warn!("ignoring unknown argument: {other}"),
        }
        i += 1;
    }

    let config = TournamentConfig::load(config_path)
        .with_context(|| format!("loading {config_path}"))?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    info!(seed, "starting {}", config.name);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut event = config.build_event()?;
    let simulator = ResultSimulator::new(config.simulation.clone());

    event.create_regulation_segment()?;
    let regulation_rounds = config
        .regulation_rounds
        .unwrap_or_else(|| event.suggested_round_count());
    play_segment(&mut event, &simulator, regulation_rounds, &mut rng)?;

    if let Some(playoff) = &config.playoff {
        event
            .create_playoff_segment(playoff.cut, playoff.elimination, playoff.pairing)
            .context("starting playoffs")?;
        let rounds = playoff.rounds.unwrap_or_else(|| {
            event
                .suggested_round_count()
                .saturating_sub(event.round_count())
        });
        play_segment(&mut event, &simulator, rounds, &mut rng)?;
    }

    let report = TournamentReport::from_event(&event);
    report.print_report();

    if let Some(path) = json_path {
        report
            .save(Path::new(&path))
            .with_context(|| format!("saving report to {path}"))?;
        info!("report saved to {path}");
    }
    Ok(())
}

fn show_seeds(args: &[String]) -> Result<()> {
    let Some(count) = args.first() else {
        print_usage();
        bail!("seeds requires a bracket size");
    };
    let count: usize = count
        .parse()
        .with_context(|| format!("invalid bracket size: {count}"))?;
    let order = seed_order(count)?;

    println!("=== Bracket of {} ===", count);
    for (i, pair) in order.chunks(2).enumerate() {
        match pair {
            [a, b] => println!("Match {:>3}: seed {:>3} vs seed {:>3}", i + 1, a, b),
            [a] => println!("Match {:>3}: seed {:>3}", i + 1, a),
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "run" => run_event(&args[2..]),
        "seeds" => show_seeds(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
