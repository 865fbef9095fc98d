//! Death Screen Component
//!
//! Full-screen game-over report: final score, high score, and the restart
//! hint. Unlike the other overlays it replaces the play field entirely;
//! restarting is handled by the input layer (any tap, or space).

use crate::render::{BLACK, RED, SKY};
use crate::text::draw_text_centered;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct DeathScreen;

impl DeathScreen {
    pub fn new() -> Self {
        DeathScreen
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        score: u32,
        high_score: u32,
    ) -> Result<(), String> {
        canvas.set_draw_color(SKY);
        canvas.clear();

        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = screen_width as i32 / 2;
        let center_y = screen_height as i32 / 2;

        draw_text_centered(canvas, "GAME OVER", center_x, screen_height as i32 / 3, RED, 4)?;
        draw_text_centered(canvas, &format!("SCORE: {}", score), center_x, center_y, BLACK, 2)?;
        draw_text_centered(
            canvas,
            &format!("HIGH SCORE: {}", high_score),
            center_x,
            center_y + 40,
            BLACK,
            2,
        )?;
        draw_text_centered(
            canvas,
            "PRESS SPACE OR TAP TO RESTART",
            center_x,
            center_y + 100,
            BLACK,
            1,
        )
    }
}

impl Default for DeathScreen {
    fn default() -> Self {
        Self::new()
    }
}
