use std::process::ExitCode;

use ability_score_roller::{roll_scores, Config, Registry, Strategy, DEFAULT_MAX_ATTEMPTS};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roll-scores",
    about = "Roll ability scores until a set passes the chosen rule",
    version
)]
struct Cli {
    /// Dice method: classic (3d6), modern (4d6k3) or heroic (2d6+6)
    #[arg(short, long, env = "ROLL_METHOD", default_value_t = Strategy::Modern)]
    method: Strategy,

    /// Acceptance rule, e.g. `colville-orig` or `all(sfc-hard, none-under-six)`
    #[arg(short, long, env = "ROLL_VALIDATOR", default_value = "straight")]
    validator: String,

    /// Don't label the scores STR through CHA
    #[arg(long)]
    no_order: bool,

    /// Don't show the dice behind each score
    #[arg(long)]
    no_dice: bool,

    /// Give up after this many rejected sets (0 rolls forever)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,

    /// Seed the dice for a reproducible rollout
    #[arg(long)]
    seed: Option<u64>,

    /// Number of characters to roll
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// List the dice methods and validators, then exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            strategy: self.method,
            validator: self.validator.clone(),
            show_order: !self.no_order,
            show_dice: !self.no_dice,
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
        }
    }
}

fn list(registry: &Registry) {
    println!("dice methods:");
    for strategy in Strategy::ALL {
        println!("  {strategy:<8} {}", strategy.notation());
    }

    println!("validators:");
    for name in registry.names() {
        println!("  {name}");
    }

    println!("aliases:");
    for (alias, name) in registry.aliases() {
        println!("  {alias} -> {name}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::standard();

    if cli.list {
        list(&registry);
        return ExitCode::SUCCESS;
    }

    let config = cli.config();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for i in 0..cli.count {
        if i > 0 {
            println!();
        }
        match roll_scores(&config, &registry, &mut rng) {
            Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
            Err(err) => {
                error!(%err, "rollout failed");
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
