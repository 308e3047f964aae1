//! airport-runner: drives the airport simulation until every flight
//! has departed, pacing ticks in real time.
//!
//! Usage:
//!   airport-runner --seed 12345 --tick-ms 2000
//!   airport-runner --seed 7 --tick-ms 0 --json
//!   airport-runner --data-dir ./data --ticks 20

mod render;

use airport_core::{
    config::{Roster, SimConfig},
    engine::SimEngine,
    rng::SimRng,
};
use anyhow::Result;
use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let tick_ms = parse_arg(&args, "--tick-ms", 2000u64);
    let max_ticks = parse_arg(&args, "--ticks", u64::MAX);
    let json = args.iter().any(|a| a == "--json");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    let (config, roster) = match data_dir {
        Some(dir) => (
            SimConfig::load(&format!("{dir}/config/airport.json"))?,
            Roster::load(&format!("{dir}/flights/roster.json"))?,
        ),
        None => (SimConfig::default(), Roster::default()),
    };

    let run_id = format!("run-{seed}-{}", chrono::Utc::now().format("%Y%m%dT%H%M%S"));
    if !json {
        println!("Airport Simulator - airport-runner");
        println!("  run_id:   {run_id}");
        println!("  seed:     {seed}");
        println!("  flights:  {}", roster.flights.len());
        println!("  tick_ms:  {tick_ms}");
        println!();
    }

    let mut engine = SimEngine::build(run_id, config, &roster)?;
    let mut rng = SimRng::new(seed);
    let mut stdout = io::stdout();

    while !engine.is_complete() && engine.clock.current_tick < max_ticks {
        let report = engine.tick(&mut rng)?;
        if json {
            writeln!(stdout, "{}", serde_json::to_string(&report)?)?;
        } else {
            write!(stdout, "{}", render::render_report(&report))?;
        }
        stdout.flush()?;

        if tick_ms > 0 && !engine.is_complete() {
            thread::sleep(Duration::from_millis(tick_ms));
        }
    }

    if json {
        writeln!(stdout, "{}", serde_json::to_string(engine.summary())?)?;
    } else {
        write!(stdout, "{}", render::render_summary(engine.summary()))?;
    }
    if !engine.is_complete() {
        log::warn!("stopped at tick cap {max_ticks} before every flight departed");
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
