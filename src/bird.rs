use crate::collision::Collidable;
use crate::config::GameConfig;
use sdl2::rect::Rect;

/// The player-controlled bird.
///
/// Vertical velocity accumulates gravity each tick; position moves by the
/// truncated velocity so slow falls creep pixel by pixel. A flap replaces
/// the accumulated velocity with a fixed upward impulse rather than adding
/// to it.
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub velocity: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Bird {
            x: config.bird_start_x,
            y: config.screen_height as i32 / 2,
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
        }
    }

    /// One physics tick: accelerate, then move by the whole-pixel part.
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity.trunc() as i32;
    }

    /// Overrides any accumulated velocity with the flap impulse.
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width as i32 / 2
    }
}

impl Collidable for Bird {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
