//! Game loop thread: runs the simulation engine at a fixed rate and publishes snapshots.
//!
//! The engine is created inside the thread, which owns it for the whole run.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling by a renderer.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameSnapshot;
use skyguard_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::config::{AppConfig, Pacing};
use crate::error::AppError;
use crate::state::{GameLoopCommand, RunSummary, SharedSnapshot};

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<RunSummary>,
}

impl GameLoopHandle {
    /// Forward a player command. Returns false if the loop has already stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> Result<RunSummary, AppError> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to stop on its own (tick limit reached).
    pub fn join(self) -> Result<RunSummary, AppError> {
        self.thread.join().map_err(|_| AppError::GameLoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: SharedSnapshot,
) -> Result<GameLoopHandle, AppError> {
    let (command_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || run_game_loop(&config, cmd_rx, &latest_snapshot))
        .map_err(AppError::ThreadSpawn)?;

    Ok(GameLoopHandle { command_tx, thread })
}

/// The game loop. Runs until the tick limit, a Shutdown command, or channel disconnect.
pub fn run_game_loop(
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(config.sim.clone());
    let mut autopilot = config.autopilot.then(Autopilot::new);
    let mut summary = RunSummary::default();
    let mut snapshot = engine.snapshot();

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick;

    tracing::info!(
        seed = config.sim.seed,
        tick_rate = config.tick_rate,
        pacing = ?config.pacing,
        autopilot = config.autopilot,
        "game loop started"
    );

    loop {
        if config.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        // 1. Drain all pending commands
        match drain_commands(&cmd_rx, &mut engine) {
            ControlFlow::Continue => {}
            ControlFlow::Stop => break,
        }

        // 2. Autopilot reacts to the previous frame
        if let Some(pilot) = autopilot.as_mut() {
            if let Some(cmd) = pilot.decide(&snapshot) {
                engine.queue_command(cmd);
            }
        }

        // 3. Advance one tick
        let dt = match config.pacing {
            Pacing::RealTime => {
                let now = Instant::now();
                let elapsed = now - last_tick;
                last_tick = now;
                elapsed
            }
            Pacing::Unpaced => tick_duration,
        };
        snapshot = engine.tick(dt);
        summary.observe(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 5. Sleep until next tick
        if config.pacing == Pacing::RealTime {
            next_tick_time = pace(next_tick_time, tick_duration);
        }
    }

    tracing::info!(ticks = summary.ticks, "game loop stopped");
    summary
}

enum ControlFlow {
    Continue,
    Stop,
}

fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> ControlFlow {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return ControlFlow::Stop,
            Err(mpsc::TryRecvError::Empty) => return ControlFlow::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return ControlFlow::Stop,
        }
    }
}

/// Sleep until the next scheduled tick and return the schedule after it.
fn pace(next_tick_time: Instant, tick_duration: Duration) -> Instant {
    let next = next_tick_time + tick_duration;
    let now = Instant::now();
    if next > now {
        std::thread::sleep(next - now);
        next
    } else if now - next > tick_duration * 2 {
        // Too far behind: reset to avoid catch-up spiral
        now
    } else {
        next
    }
}
