//! Audio playback
//!
//! Thin wrapper over `sdl2::mixer`: a one-shot flap sound and a looped
//! background track that follows the pause state. Missing or corrupt audio
//! files are fatal at startup like every other asset; once loaded, playback
//! failures only log.

use crate::config::GameConfig;
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS};

pub struct Audio {
    _mixer_context: Sdl2MixerContext,
    flap: Chunk,
    music: Music<'static>,
}

impl Audio {
    /// Initializes the mixer and loads both audio assets.
    pub fn new(config: &GameConfig) -> Result<Self, String> {
        let mixer_context = mixer::init(InitFlag::MP3)?;
        mixer::open_audio(44_100, AUDIO_S16LSB, DEFAULT_CHANNELS, 1_024)?;
        mixer::allocate_channels(4);

        let flap = Chunk::from_file(&config.flap_sound)
            .map_err(|e| format!("Failed to load {}: {}", config.flap_sound, e))?;
        let music = Music::from_file(&config.music)
            .map_err(|e| format!("Failed to load {}: {}", config.music, e))?;

        Ok(Audio {
            _mixer_context: mixer_context,
            flap,
            music,
        })
    }

    /// Starts the background track looping at half volume.
    pub fn start_music(&self) -> Result<(), String> {
        Music::set_volume(64);
        self.music.play(-1)
    }

    pub fn play_flap(&self) {
        if let Err(e) = Channel::all().play(&self.flap, 0) {
            eprintln!("Flap sound failed: {}", e);
        }
    }

    pub fn pause_music(&self) {
        Music::pause();
    }

    pub fn resume_music(&self) {
        Music::resume();
    }
}
