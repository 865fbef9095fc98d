use sdl2::image::LoadTexture;

mod audio;
mod bird;
mod cloud;
mod collision;
mod config;
mod game;
mod gui;
mod input;
mod pipe;
mod render;
mod text;

use audio::Audio;
use config::GameConfig;
use game::{GameMode, GameWorld, PauseToggle};
use gui::{DeathScreen, PauseControl, StartScreen};
use input::{Buttons, GameAction};

const CONFIG_PATH: &str = "assets/config/game.json";
const TARGET_FPS: u32 = 60;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

fn main() -> Result<(), String> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;
    let _audio_subsystem = sdl_context.audio()?;
    let timer = sdl_context.timer()?;

    let window = video_subsystem
        .window("Birdy", config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Any missing asset is fatal here, before the loop starts
    let bird_texture = load_texture(&texture_creator, &config.bird_image)?;
    let audio = Audio::new(&config)?;
    audio.start_music()?;

    let buttons = Buttons::new(&config);
    let start_screen = StartScreen::new(buttons.start);
    let pause_control = PauseControl::new(buttons.pause);
    let death_screen = DeathScreen::new();

    let mut world = GameWorld::new(config);
    let mut rng = rand::thread_rng();

    println!("Controls:");
    println!("SPACE or tap - flap (start/restart on the other screens)");
    println!("Pause button (top right) - pause and resume");

    'running: loop {
        let now_ms = timer.ticks64();

        // Drain input first so every event applies before this tick's
        // simulation step
        for action in input::poll_actions(&mut event_pump, world.mode(), &buttons) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Start => world.start(now_ms),
                GameAction::Flap => {
                    if world.flap() {
                        audio.play_flap();
                    }
                }
                GameAction::TogglePause => match world.toggle_pause(now_ms) {
                    PauseToggle::Paused => audio.pause_music(),
                    PauseToggle::Resuming => audio.resume_music(),
                    PauseToggle::Ignored => {}
                },
                GameAction::Restart => world.restart(now_ms),
            }
        }

        world.update(now_ms, &mut rng);

        match world.mode() {
            GameMode::NotStarted => start_screen.render(&mut canvas)?,
            GameMode::Playing => {
                render::draw_scene(&mut canvas, &world, &bird_texture)?;
                pause_control.render_button(&mut canvas, false)?;
            }
            GameMode::Paused => {
                // Frozen frame stays visible behind the overlay
                render::draw_scene(&mut canvas, &world, &bird_texture)?;
                pause_control.render_paused(&mut canvas)?;
                pause_control.render_button(&mut canvas, true)?;
            }
            GameMode::Resuming { .. } => {
                render::draw_scene(&mut canvas, &world, &bird_texture)?;
                if let Some(digit) = world.countdown_digit() {
                    pause_control.render_countdown(&mut canvas, digit)?;
                }
                pause_control.render_button(&mut canvas, false)?;
            }
            GameMode::Dead => {
                death_screen.render(&mut canvas, world.display_score(), world.high_score)?
            }
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / TARGET_FPS));
    }

    Ok(())
}
