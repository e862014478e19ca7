//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, records player input, runs all
//! systems, drives the game state machine, and produces `GameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::time::Duration;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::components::{City, EnemyMissile};
use skyguard_core::constants::LEVEL_COMPLETE_DELAY_MS;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::SimEvent;
use skyguard_core::state::GameSnapshot;
use skyguard_core::types::{LevelParams, Position, SimTime};

use crate::difficulty::params_for_level;
use crate::scoring::ScoreLedger;
use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
    /// Pause between LevelComplete and the next level (ms).
    pub level_complete_delay_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level_complete_delay_ms: LEVEL_COMPLETE_DELAY_MS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    level: u32,
    params: LevelParams,
    rng: ChaCha8Rng,
    wave: WaveState,
    ledger: ScoreLedger,
    /// Host time at which the current LevelComplete pause began.
    level_complete_at_ms: Option<f64>,

    // --- Input recorded between ticks ---
    pending_aim: Option<Position>,
    pending_confirm: bool,

    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine on the title screen.
    pub fn new(config: SimConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            level: 1,
            params: params_for_level(1),
            wave: WaveState::default(),
            ledger: ScoreLedger::new(),
            level_complete_at_ms: None,
            pending_aim: None,
            pending_confirm: false,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Record a player command for processing at the next tick boundary.
    ///
    /// Only the most recent aim point survives until the tick, so repeated
    /// aims within one tick launch at most one counter missile.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Aim { x, y } => self.pending_aim = Some(Position::new(x, y)),
            PlayerCommand::Confirm => self.pending_confirm = true,
        }
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        for command in commands {
            self.queue_command(command);
        }
    }

    /// Advance the simulation by one tick of `dt` host time and return the resulting snapshot.
    pub fn tick(&mut self, dt: Duration) -> GameSnapshot {
        self.time.advance(dt.as_secs_f64() * 1000.0);
        self.process_input();

        match self.phase {
            GamePhase::Playing => {
                self.run_systems();
                self.evaluate_level();
            }
            GamePhase::LevelComplete => self.check_level_delay(),
            GamePhase::Title | GamePhase::GameOver => {}
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without advancing it.
    pub fn snapshot(&self) -> GameSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Difficulty parameters of the current level.
    pub fn params(&self) -> LevelParams {
        self.params
    }

    pub fn score(&self) -> u64 {
        self.ledger.score()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage scenarios directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the spawn bookkeeping for the current level.
    #[cfg(test)]
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.level,
            &self.params,
            &self.ledger,
            events,
        )
    }

    /// Consume the input recorded since the last tick.
    fn process_input(&mut self) {
        if let Some(aim) = self.pending_aim.take() {
            self.handle_aim(aim);
        }
        if std::mem::take(&mut self.pending_confirm) {
            self.handle_confirm();
        }
    }

    fn handle_aim(&mut self, aim: Position) {
        if self.phase != GamePhase::Playing {
            tracing::debug!(phase = ?self.phase, "aim ignored outside of play");
            return;
        }

        match systems::targeting::launch(&mut self.world, aim) {
            Some(silo_slot) => {
                self.ledger.record_launch();
                self.events.push(SimEvent::CounterMissileLaunched {
                    silo_slot,
                    target: aim,
                });
                tracing::debug!(silo_slot, x = aim.x, y = aim.y, "counter missile launched");
            }
            None => tracing::debug!(x = aim.x, y = aim.y, "no silo can fire"),
        }
    }

    fn handle_confirm(&mut self) {
        match self.phase {
            GamePhase::Title => self.start_game(),
            GamePhase::GameOver => {
                self.phase = GamePhase::Title;
                tracing::info!("returned to title");
            }
            GamePhase::Playing | GamePhase::LevelComplete => {
                tracing::debug!(phase = ?self.phase, "confirm ignored");
            }
        }
    }

    /// Title -> Playing: fresh score, level 1, full cities and silos.
    fn start_game(&mut self) {
        self.ledger.reset();
        self.level = 1;
        world_setup::setup_game(&mut self.world);
        self.start_level();
        tracing::info!(seed = self.config.seed, "new game started");
    }

    /// Reset per-level state and enter Playing. Cities, silos and score carry over.
    fn start_level(&mut self) {
        self.params = params_for_level(self.level);
        systems::cleanup::clear_projectiles(&mut self.world, &mut self.despawn_buffer);
        self.wave = WaveState::new(self.time.elapsed_ms);
        self.level_complete_at_ms = None;
        self.phase = GamePhase::Playing;
        self.events.push(SimEvent::LevelStarted { level: self.level });
        tracing::info!(
            level = self.level,
            speed = self.params.speed,
            total_missiles = self.params.total_missiles,
            "level started"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.params,
            self.time.elapsed_ms,
        );
        // 2. Movement (missiles and explosions)
        systems::movement::run(&mut self.world);
        // 3. Collisions
        systems::collision::run(&mut self.world, &mut self.ledger, &mut self.events);
        // 4. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Win/lose check after cleanup.
    fn evaluate_level(&mut self) {
        let cities = self.world.query::<&City>().iter().count() as u32;

        if cities == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(SimEvent::GameOver {
                level: self.level,
                score: self.ledger.score(),
            });
            tracing::info!(level = self.level, score = self.ledger.score(), "game over");
            return;
        }

        let enemies_left = self.world.query::<&EnemyMissile>().iter().count();
        if self.wave.quota_reached(&self.params) && enemies_left == 0 {
            let bonus = self.ledger.credit_level_complete(cities);
            self.phase = GamePhase::LevelComplete;
            self.level_complete_at_ms = Some(self.time.elapsed_ms);
            self.events.push(SimEvent::LevelComplete {
                level: self.level,
                surviving_cities: cities,
                bonus,
            });
            tracing::info!(
                level = self.level,
                surviving_cities = cities,
                bonus,
                score = self.ledger.score(),
                "level complete"
            );
        }
    }

    /// LevelComplete -> Playing once the delay has elapsed.
    fn check_level_delay(&mut self) {
        let Some(started) = self.level_complete_at_ms else {
            return;
        };
        if self.time.elapsed_ms - started >= self.config.level_complete_delay_ms {
            self.level += 1;
            self.start_level();
        }
    }
}
