//! Screen-Space GUI overlays
//!
//! Components that render at fixed screen positions on top of (or instead
//! of) the play field: the start screen, the pause button with its paused /
//! countdown overlays, and the death screen. Each component is a struct
//! with a `render(&self, canvas)` method and no game logic of its own.

pub mod death_screen;
pub mod pause;
pub mod start_screen;

pub use death_screen::DeathScreen;
pub use pause::PauseControl;
pub use start_screen::StartScreen;
