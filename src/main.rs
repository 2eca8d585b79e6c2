//! Command line entry point.
//!
//! `skirmish <rounds> <tag>... [--seed N]` plays `rounds` games between the
//! tagged agents and prints one win fraction per agent. Set `RUST_LOG` to
//! `debug` for per-battle results or `trace` for every turn.

use clap::Parser;

use skirmish::sim::{SimulationConfig, SimulationRunner};

#[derive(Parser, Debug)]
#[command(
    name = "skirmish",
    about = "Multiplayer elimination card game simulator"
)]
struct Args {
    /// Number of games to play.
    rounds: u32,

    /// One strategy tag per agent: h (highest), l (lowest), r (random).
    #[arg(required = true)]
    agents: Vec<String>,

    /// Master RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match SimulationConfig::from_tags(args.rounds, &args.agents) {
        Ok(config) => config.with_seed(args.seed.unwrap_or_else(rand::random)),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let report = SimulationRunner::new(config).run();
    print!("{report}");
}
