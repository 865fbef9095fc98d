//! Input handling
//!
//! Translates raw SDL2 events into high-level [`GameAction`]s. The mapping
//! depends on the current [`GameMode`]: the same pointer tap starts the
//! game on the start screen, pauses or flaps while playing, and restarts
//! from the death screen. Keeping the translation here means the game loop
//! only ever deals in actions.

use crate::config::GameConfig;
use crate::game::GameMode;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;
use sdl2::EventPump;

/// High-level actions the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Begin play from the start screen.
    Start,
    /// Set the bird's velocity to the flap impulse.
    Flap,
    /// Pause, or begin the resume countdown.
    TogglePause,
    /// Full reset from the death screen.
    Restart,
    /// Terminate the process.
    Quit,
}

/// Screen positions of the clickable controls.
pub struct Buttons {
    pub start: Rect,
    pub pause: Rect,
}

impl Buttons {
    pub fn new(config: &GameConfig) -> Self {
        let w = config.screen_width as i32;
        let h = config.screen_height as i32;
        Buttons {
            // Centered start button, sized for "START GAME" at text scale 2
            start: Rect::new(w / 2 - 90, h / 2 - 25, 180, 50),
            // Small square in the top-right corner
            pause: Rect::new(w - 50, 10, 40, 40),
        }
    }
}

/// Maps a pointer-down at (x, y) to an action, given the current mode.
///
/// Taps during `Resuming` are discarded: the countdown must finish before
/// gameplay input means anything again.
pub fn classify_pointer(mode: GameMode, buttons: &Buttons, x: i32, y: i32) -> Option<GameAction> {
    match mode {
        GameMode::NotStarted => buttons
            .start
            .contains_point((x, y))
            .then_some(GameAction::Start),
        GameMode::Playing => {
            if buttons.pause.contains_point((x, y)) {
                Some(GameAction::TogglePause)
            } else {
                Some(GameAction::Flap)
            }
        }
        GameMode::Paused => buttons
            .pause
            .contains_point((x, y))
            .then_some(GameAction::TogglePause),
        GameMode::Resuming { .. } => None,
        GameMode::Dead => Some(GameAction::Restart),
    }
}

/// Maps the flap/restart key (space) to an action for the current mode.
pub fn classify_space(mode: GameMode) -> Option<GameAction> {
    match mode {
        GameMode::NotStarted => Some(GameAction::Start),
        GameMode::Playing => Some(GameAction::Flap),
        GameMode::Dead => Some(GameAction::Restart),
        GameMode::Paused | GameMode::Resuming { .. } => None,
    }
}

/// Polls SDL2 and returns the actions for this tick, in arrival order.
///
/// Events are drained every tick regardless of mode, so nothing backs up
/// in the SDL queue while paused or dead.
pub fn poll_actions(event_pump: &mut EventPump, mode: GameMode, buttons: &Buttons) -> Vec<GameAction> {
    let mut actions = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => actions.push(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(Keycode::Space),
                ..
            } => {
                if let Some(action) = classify_space(mode) {
                    actions.push(action);
                }
            }
            Event::MouseButtonDown { x, y, .. } => {
                if let Some(action) = classify_pointer(mode, buttons, x, y) {
                    actions.push(action);
                }
            }
            _ => {}
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons() -> Buttons {
        Buttons::new(&GameConfig::default())
    }

    const RESUMING: GameMode = GameMode::Resuming {
        steps_left: 2,
        step_started_ms: 0,
    };

    #[test]
    fn start_screen_only_reacts_inside_the_button() {
        let buttons = buttons();
        let inside = (200, 300);
        let outside = (10, 10);

        assert_eq!(
            classify_pointer(GameMode::NotStarted, &buttons, inside.0, inside.1),
            Some(GameAction::Start)
        );
        assert_eq!(
            classify_pointer(GameMode::NotStarted, &buttons, outside.0, outside.1),
            None
        );
    }

    #[test]
    fn playing_tap_flaps_unless_on_pause_button() {
        let buttons = buttons();

        assert_eq!(
            classify_pointer(GameMode::Playing, &buttons, 200, 300),
            Some(GameAction::Flap)
        );
        // Inside the 40x40 pause button at (350, 10)
        assert_eq!(
            classify_pointer(GameMode::Playing, &buttons, 370, 30),
            Some(GameAction::TogglePause)
        );
    }

    #[test]
    fn paused_tap_only_resumes_via_pause_button() {
        let buttons = buttons();

        assert_eq!(
            classify_pointer(GameMode::Paused, &buttons, 370, 30),
            Some(GameAction::TogglePause)
        );
        assert_eq!(classify_pointer(GameMode::Paused, &buttons, 200, 300), None);
    }

    #[test]
    fn dead_tap_restarts_anywhere() {
        let buttons = buttons();

        assert_eq!(
            classify_pointer(GameMode::Dead, &buttons, 5, 5),
            Some(GameAction::Restart)
        );
        assert_eq!(
            classify_pointer(GameMode::Dead, &buttons, 370, 30),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn resuming_discards_pointer_input() {
        let buttons = buttons();

        assert_eq!(classify_pointer(RESUMING, &buttons, 200, 300), None);
        assert_eq!(classify_pointer(RESUMING, &buttons, 370, 30), None);
    }

    #[test]
    fn space_acts_by_mode() {
        assert_eq!(classify_space(GameMode::NotStarted), Some(GameAction::Start));
        assert_eq!(classify_space(GameMode::Playing), Some(GameAction::Flap));
        assert_eq!(classify_space(GameMode::Dead), Some(GameAction::Restart));
        assert_eq!(classify_space(GameMode::Paused), None);
        assert_eq!(classify_space(RESUMING), None);
    }
}
