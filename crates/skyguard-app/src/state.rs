//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::SimEvent;
use skyguard_core::state::{GameSnapshot, StatsView};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<GameSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// What happened over a whole run of the game loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub games_started: u32,
    pub games_over: u32,
    pub best_score: u64,
    pub highest_level: u32,
    pub final_phase: GamePhase,
    pub final_score: u64,
    /// Statistics of the game in progress (or last finished) at exit.
    pub final_stats: StatsView,
}

impl RunSummary {
    /// Fold one tick's snapshot into the summary.
    pub fn observe(&mut self, snapshot: &GameSnapshot) {
        self.ticks += 1;
        for event in &snapshot.events {
            match event {
                SimEvent::LevelStarted { level: 1 } => self.games_started += 1,
                SimEvent::GameOver { .. } => self.games_over += 1,
                _ => {}
            }
        }
        if snapshot.game_state != GamePhase::Title {
            self.highest_level = self.highest_level.max(snapshot.level);
        }
        self.best_score = self.best_score.max(snapshot.score);
        self.final_phase = snapshot.game_state;
        self.final_score = snapshot.score;
        self.final_stats = snapshot.stats.clone();
    }

    pub fn log(&self) {
        tracing::info!(
            ticks = self.ticks,
            games_started = self.games_started,
            games_over = self.games_over,
            best_score = self.best_score,
            highest_level = self.highest_level,
            final_phase = ?self.final_phase,
            final_score = self.final_score,
            missiles_destroyed = self.final_stats.missiles_destroyed,
            counter_missiles_fired = self.final_stats.counter_missiles_fired,
            "run finished"
        );
    }
}
