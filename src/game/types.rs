// Shared game state types

/// Top-level game mode. Exactly one is active at a time and it decides
/// which systems run each tick and which screen is drawn.
///
/// `Resuming` is the pause-exit countdown: instead of blocking the loop for
/// three seconds, the countdown is a mode of its own advanced by the tick
/// source. The frozen frame stays on screen behind the digit and quit input
/// keeps working, but no gameplay system runs until it finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameMode {
    /// Start screen, waiting for the start button.
    NotStarted,
    /// Live gameplay: all systems run.
    Playing,
    /// Frozen; nothing runs until the pause toggle fires again.
    Paused,
    /// Counting down 3..1 before returning to `Playing`.
    Resuming {
        /// Countdown digit currently shown (3, 2, then 1).
        steps_left: u8,
        /// Wall-clock ms when the current digit appeared.
        step_started_ms: u64,
    },
    /// Death screen, waiting for a restart input.
    Dead,
}

impl GameMode {
    /// Whether the gameplay pipeline (spawn/move/physics/collide/score)
    /// advances this tick.
    pub fn is_playing(&self) -> bool {
        matches!(self, GameMode::Playing)
    }
}
