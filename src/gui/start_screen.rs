//! Start Screen Component
//!
//! The single pre-game screen: title plus a clickable start button. The
//! button rectangle comes from the shared [`Buttons`] layout so input
//! hit-testing and rendering can never disagree.

use crate::render::{BLACK, DARK_GREEN, PIPE_GREEN, SKY, WHITE};
use crate::text::draw_text_centered;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct StartScreen {
    button: Rect,
}

impl StartScreen {
    pub fn new(button: Rect) -> Self {
        StartScreen { button }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(SKY);
        canvas.clear();

        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = screen_width as i32 / 2;

        draw_text_centered(
            canvas,
            "BIRDY",
            center_x,
            screen_height as i32 / 3,
            BLACK,
            4,
        )?;

        // Two nested rects fake a border around the button
        canvas.set_draw_color(DARK_GREEN);
        canvas.fill_rect(self.button)?;
        canvas.set_draw_color(PIPE_GREEN);
        let inner = Rect::new(
            self.button.x() + 5,
            self.button.y() + 5,
            self.button.width() - 10,
            self.button.height() - 10,
        );
        canvas.fill_rect(inner)?;

        draw_text_centered(
            canvas,
            "START GAME",
            center_x,
            self.button.y() + (self.button.height() as i32 - 14) / 2,
            WHITE,
            2,
        )
    }
}
