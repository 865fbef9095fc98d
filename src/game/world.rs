// GameWorld - the single aggregate owning all mutable game state
//
// Everything the loop body mutates (bird, pipes, clouds, passed-set, score,
// mode, spawn timers) lives here and is threaded by reference into the
// per-tick systems. No module-level mutable state anywhere.

use crate::bird::Bird;
use crate::cloud::Cloud;
use crate::config::GameConfig;
use crate::pipe::Pipe;
use rand::Rng;
use std::collections::HashSet;

use super::systems;
use super::types::GameMode;

/// How long each countdown digit stays on screen while resuming.
const COUNTDOWN_STEP_MS: u64 = 1000;
/// Countdown digits shown when leaving pause (3, 2, 1).
const COUNTDOWN_STEPS: u8 = 3;

/// Result of a pause-toggle input, so the caller can mirror it into the
/// music player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PauseToggle {
    /// Gameplay froze.
    Paused,
    /// Countdown started; gameplay resumes when it finishes.
    Resuming,
    /// Input arrived in a mode where the toggle does nothing.
    Ignored,
}

pub struct GameWorld {
    pub config: GameConfig,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub clouds: Vec<Cloud>,
    /// Segment ids already credited to the score.
    pub passed: HashSet<u64>,
    /// Accumulates in 0.5 steps; displayed as the floor.
    pub score: f32,
    pub high_score: u32,
    pub last_pipe_spawn_ms: u64,
    pub last_cloud_spawn_ms: u64,
    pub next_pipe_id: u64,
    mode: GameMode,
}

impl GameWorld {
    pub fn new(config: GameConfig) -> Self {
        let bird = Bird::new(&config);
        GameWorld {
            config,
            bird,
            pipes: Vec::new(),
            clouds: Vec::new(),
            passed: HashSet::new(),
            score: 0.0,
            high_score: 0,
            last_pipe_spawn_ms: 0,
            last_cloud_spawn_ms: 0,
            next_pipe_id: 0,
            mode: GameMode::NotStarted,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Integer score shown on screen (internal half-points floored away).
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Countdown digit to draw while resuming, if any.
    pub fn countdown_digit(&self) -> Option<u8> {
        match self.mode {
            GameMode::Resuming { steps_left, .. } => Some(steps_left),
            _ => None,
        }
    }

    /// Start input from the start screen.
    pub fn start(&mut self, now_ms: u64) {
        if self.mode == GameMode::NotStarted {
            self.mode = GameMode::Playing;
            self.last_pipe_spawn_ms = now_ms;
            self.last_cloud_spawn_ms = now_ms;
        }
    }

    /// Flap input. Only takes effect while playing.
    pub fn flap(&mut self) -> bool {
        if self.mode.is_playing() {
            self.bird.flap(self.config.flap_impulse);
            true
        } else {
            false
        }
    }

    /// Pause-button input: Playing freezes, Paused starts the resume
    /// countdown. Anything else (including an already-running countdown)
    /// ignores the toggle.
    pub fn toggle_pause(&mut self, now_ms: u64) -> PauseToggle {
        match self.mode {
            GameMode::Playing => {
                self.mode = GameMode::Paused;
                PauseToggle::Paused
            }
            GameMode::Paused => {
                self.mode = GameMode::Resuming {
                    steps_left: COUNTDOWN_STEPS,
                    step_started_ms: now_ms,
                };
                PauseToggle::Resuming
            }
            _ => PauseToggle::Ignored,
        }
    }

    /// Restart input from the death screen: full reset, then straight back
    /// into play.
    pub fn restart(&mut self, now_ms: u64) {
        if self.mode == GameMode::Dead {
            self.reset();
            self.mode = GameMode::Playing;
            self.last_pipe_spawn_ms = now_ms;
            self.last_cloud_spawn_ms = now_ms;
        }
    }

    /// Re-initializes every per-life piece of state in one place. The high
    /// score survives; everything else goes back to its launch value.
    fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.clouds.clear();
        self.passed.clear();
        self.score = 0.0;
    }

    /// One simulation tick.
    ///
    /// While `Playing` the systems run in a fixed order: spawners, cloud
    /// drift, bird physics, pipe movement + cull, score, collision. While
    /// `Resuming` only the countdown advances. `NotStarted`, `Paused` and
    /// `Dead` ticks do nothing, so clouds also only spawn and move during
    /// play.
    pub fn update(&mut self, now_ms: u64, rng: &mut impl Rng) {
        match self.mode {
            GameMode::Playing => {
                systems::spawn_pipes(self, now_ms, rng);
                systems::spawn_clouds(self, now_ms, rng);
                systems::move_clouds(self);
                systems::apply_physics(self);
                systems::move_pipes(self);
                systems::update_score(self);
                if systems::check_collision(self) {
                    self.die();
                }
            }
            GameMode::Resuming {
                steps_left,
                step_started_ms,
            } => {
                if now_ms - step_started_ms >= COUNTDOWN_STEP_MS {
                    if steps_left <= 1 {
                        // No spawns are owed from the paused span.
                        self.mode = GameMode::Playing;
                        self.last_pipe_spawn_ms = now_ms;
                        self.last_cloud_spawn_ms = now_ms;
                    } else {
                        self.mode = GameMode::Resuming {
                            steps_left: steps_left - 1,
                            step_started_ms: now_ms,
                        };
                    }
                }
            }
            GameMode::NotStarted | GameMode::Paused | GameMode::Dead => {}
        }
    }

    /// Playing -> Dead. The high score is only ever updated here.
    fn die(&mut self) {
        self.high_score = self.high_score.max(self.display_score());
        self.mode = GameMode::Dead;
    }
}
