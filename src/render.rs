//! Play-field rendering
//!
//! Draws the frame visible during play: sky, clouds, pipes, the bird
//! sprite, and the score lines. Screen-space overlays (start screen, pause
//! state, death screen) live in the `gui` module and draw on top.

use crate::game::GameWorld;
use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub const SKY: Color = Color::RGB(135, 206, 235);
pub const PIPE_GREEN: Color = Color::RGB(0, 200, 0);
pub const DARK_GREEN: Color = Color::RGB(0, 150, 0);
pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const RED: Color = Color::RGB(255, 0, 0);

/// Fills an axis-aligned ellipse inscribed in `rect`, one scanline at a
/// time. SDL2 only ships rectangle primitives, so clouds are built the same
/// way the bitmap font is.
pub fn fill_ellipse(canvas: &mut Canvas<Window>, rect: Rect) -> Result<(), String> {
    let a = rect.width() as f32 / 2.0;
    let b = rect.height() as f32 / 2.0;
    let cx = rect.x() as f32 + a;
    let cy = rect.y() as f32 + b;

    for row in 0..rect.height() as i32 {
        let dy = (row as f32 + 0.5 - b) / b;
        let half_width = a * (1.0 - dy * dy).max(0.0).sqrt();
        if half_width >= 0.5 {
            canvas.fill_rect(Rect::new(
                (cx - half_width) as i32,
                rect.y() + row,
                (half_width * 2.0) as u32,
                1,
            ))?;
        }
    }

    Ok(())
}

/// Draws the whole gameplay frame in back-to-front order.
pub fn draw_scene(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    bird_texture: &Texture,
) -> Result<(), String> {
    canvas.set_draw_color(SKY);
    canvas.clear();

    canvas.set_draw_color(WHITE);
    for cloud in &world.clouds {
        fill_ellipse(canvas, cloud.rect)?;
    }

    canvas.set_draw_color(PIPE_GREEN);
    for pipe in &world.pipes {
        canvas.fill_rect(pipe.rect)?;
    }

    let bird_rect = Rect::new(
        world.bird.x,
        world.bird.y,
        world.bird.width,
        world.bird.height,
    );
    canvas.copy(bird_texture, None, bird_rect)?;

    draw_hud(canvas, world)
}

/// Score lines in the top-left corner.
fn draw_hud(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    draw_text(
        canvas,
        &format!("SCORE: {}", world.display_score()),
        10,
        10,
        BLACK,
        2,
    )?;
    draw_text(
        canvas,
        &format!("HIGH SCORE: {}", world.high_score),
        10,
        50,
        BLACK,
        2,
    )
}
