//! Pause Control Component
//!
//! The in-game pause button (top-right corner) plus the overlays for the
//! paused state and the resume countdown. The frozen gameplay frame is
//! drawn by the caller first; these only add the button glyph and the
//! centered text on top.

use crate::render::{BLACK, RED};
use crate::text::draw_text_centered;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct PauseControl {
    button: Rect,
}

impl PauseControl {
    pub fn new(button: Rect) -> Self {
        PauseControl { button }
    }

    /// Draws the button glyph: pause bars while running, a play triangle
    /// while paused.
    pub fn render_button(&self, canvas: &mut Canvas<Window>, paused: bool) -> Result<(), String> {
        canvas.set_draw_color(BLACK);
        let bx = self.button.x();
        let by = self.button.y();

        if paused {
            // Play triangle, filled column by column
            for i in 0..20 {
                let shrink = i / 2;
                canvas.fill_rect(Rect::new(
                    bx + 10 + i,
                    by + 10 + shrink,
                    1,
                    (20 - 2 * shrink) as u32,
                ))?;
            }
        } else {
            canvas.fill_rect(Rect::new(bx + 10, by + 10, 5, 20))?;
            canvas.fill_rect(Rect::new(bx + 25, by + 10, 5, 20))?;
        }

        Ok(())
    }

    /// "PAUSED" across the frozen frame.
    pub fn render_paused(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        draw_text_centered(
            canvas,
            "PAUSED",
            screen_width as i32 / 2,
            screen_height as i32 / 2,
            RED,
            3,
        )
    }

    /// The current countdown digit across the frozen frame.
    pub fn render_countdown(&self, canvas: &mut Canvas<Window>, digit: u8) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        draw_text_centered(
            canvas,
            &digit.to_string(),
            screen_width as i32 / 2,
            screen_height as i32 / 2,
            RED,
            5,
        )
    }
}
