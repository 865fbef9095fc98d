// Game module - simulation state and the per-tick pipeline
//
// - world.rs: GameWorld aggregate, mode transitions, tick entry point
// - systems.rs: explicitly-mutating per-tick systems (spawn/move/score/...)
// - types.rs: GameMode and related shared types

pub mod systems;
pub mod types;
pub mod world;

pub use types::GameMode;
pub use world::{GameWorld, PauseToggle};
