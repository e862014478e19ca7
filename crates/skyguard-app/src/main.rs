//! skyguard: headless SKYGUARD host.
//!
//! Usage:
//!   skyguard [--config skyguard.json] [--seed N] [--ticks N] [--unpaced] [--no-autopilot]

use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyguard_app::config::AppConfig;
use skyguard_app::error::AppError;
use skyguard_app::game_loop;
use skyguard_app::state;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        if matches!(err, AppError::InvalidArgument(_)) {
            print_usage();
        }
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let config = AppConfig::from_args(args)?;
    let latest = state::shared_snapshot();
    let handle = game_loop::spawn_game_loop(config, latest)?;
    let summary = handle.join()?;
    summary.log();
    Ok(())
}

fn print_usage() {
    eprintln!(
        "skyguard: headless missile defense simulation\n\
         \n\
           --config <path>  JSON config file (missing fields use defaults)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --ticks <N>      Stop after N ticks (default: run until killed)\n\
           --unpaced        Tick as fast as possible (requires --ticks)\n\
           --no-autopilot   Disable the demo player\n\
         \n\
         Examples:\n\
         \n\
           skyguard --unpaced --ticks 36000 --seed 7\n\
           RUST_LOG=debug skyguard --ticks 600\n"
    );
}
