//! Host configuration: a JSON file plus command-line overrides.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use skyguard_core::constants::TICK_RATE;
use skyguard_sim::SimConfig;

use crate::error::AppError;

/// How the game loop spaces its ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Sleep between ticks and feed measured host time to the engine.
    #[default]
    RealTime,
    /// Tick as fast as possible with a fixed nominal frame time.
    Unpaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    pub pacing: Pacing,
    /// Let the built-in demo player drive the game.
    pub autopilot: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            max_ticks: None,
            pacing: Pacing::default(),
            autopilot: true,
        }
    }
}

impl AppConfig {
    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a config from command-line arguments (program name excluded).
    ///
    /// `--config` is read first; the remaining flags override it.
    pub fn from_args(args: &[String]) -> Result<Self, AppError> {
        check_known_flags(args)?;

        let mut config = match flag_value(args, "--config") {
            Some(path) => Self::load(Path::new(path))?,
            None => Self::default(),
        };

        if let Some(seed) = parse_flag::<u64>(args, "--seed")? {
            config.sim.seed = seed;
        }
        if let Some(ticks) = parse_flag::<u64>(args, "--ticks")? {
            config.max_ticks = Some(ticks);
        }
        if args.iter().any(|a| a == "--unpaced") {
            config.pacing = Pacing::Unpaced;
        }
        if args.iter().any(|a| a == "--no-autopilot") {
            config.autopilot = false;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_rate == 0 {
            return Err(AppError::InvalidArgument("tick_rate must be positive".into()));
        }
        if self.sim.level_complete_delay_ms < 0.0 {
            return Err(AppError::InvalidArgument(
                "level_complete_delay_ms must not be negative".into(),
            ));
        }
        if self.pacing == Pacing::Unpaced && self.max_ticks.is_none() {
            return Err(AppError::InvalidArgument(
                "an unpaced run needs --ticks".into(),
            ));
        }
        Ok(())
    }

    /// Nominal duration of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate.max(1)))
    }
}

const VALUE_FLAGS: [&str; 3] = ["--config", "--seed", "--ticks"];
const SWITCH_FLAGS: [&str; 2] = ["--unpaced", "--no-autopilot"];

fn check_known_flags(args: &[String]) -> Result<(), AppError> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            if i + 1 >= args.len() {
                return Err(AppError::InvalidArgument(format!("{arg} needs a value")));
            }
            i += 2;
        } else if SWITCH_FLAGS.contains(&arg) {
            i += 1;
        } else {
            return Err(AppError::InvalidArgument(format!("unknown argument: {arg}")));
        }
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_flag<T: FromStr>(args: &[String], name: &str) -> Result<Option<T>, AppError> {
    match flag_value(args, name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::InvalidArgument(format!("{name}: cannot parse {raw:?}"))),
        None => Ok(None),
    }
}
