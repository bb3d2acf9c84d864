//! Sound playback driven by game events.
//!
//! The simulation never talks to the audio device; the main loop maps each
//! [`GameEvent`] to a [`SoundKind`] and hands it to whichever [`SoundPlayer`]
//! was created at startup. Playback failures of any kind are logged and
//! swallowed so a broken audio stack can never take down the game loop.

use crate::game::GameEvent;
use crate::settings::Settings;

/// The discrete sounds the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Jump,
    GameOver,
}

impl SoundKind {
    pub const ALL: [SoundKind; 2] = [SoundKind::Jump, SoundKind::GameOver];

    /// File looked up under `<assets_dir>/sounds/`.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundKind::Jump => "jump.wav",
            SoundKind::GameOver => "game_over.wav",
        }
    }
}

/// Map a game event to the sound it triggers, if any. Scoring is silent.
pub fn sound_for_event(event: GameEvent) -> Option<SoundKind> {
    match event {
        GameEvent::Jump => Some(SoundKind::Jump),
        GameEvent::GameOver => Some(SoundKind::GameOver),
        GameEvent::ScoreIncrement => None,
    }
}

/// Playback capability handed to the main loop.
pub trait SoundPlayer {
    fn play(&mut self, kind: SoundKind);
}

/// Player used when audio is disabled, unavailable, or compiled out.
#[derive(Debug, Default)]
pub struct SilentSoundPlayer;

impl SoundPlayer for SilentSoundPlayer {
    fn play(&mut self, kind: SoundKind) {
        log::debug!("sound suppressed: {:?}", kind);
    }
}

/// Build the best available player for the current build and settings.
/// Always succeeds; every degradation path lands on [`SilentSoundPlayer`].
pub fn create_player(settings: &Settings) -> Box<dyn SoundPlayer> {
    if !settings.sound_enabled {
        log::info!("sound disabled in settings");
        return Box::new(SilentSoundPlayer);
    }

    #[cfg(feature = "audio")]
    match audio::RodioSoundPlayer::new(&settings.assets_dir) {
        Ok(player) => return Box::new(player),
        Err(err) => log::warn!("audio device unavailable ({}), running silent", err),
    }

    #[cfg(not(feature = "audio"))]
    log::info!("built without the audio feature, running silent");

    Box::new(SilentSoundPlayer)
}

#[cfg(feature = "audio")]
mod audio {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;

    use super::{SoundKind, SoundPlayer};

    /// Rodio-backed player. Sound files are read into memory once at
    /// startup and decoded per play, so a corrupt file costs a warning per
    /// playback and nothing else.
    pub struct RodioSoundPlayer {
        _stream: rodio::OutputStream,
        handle: rodio::OutputStreamHandle,
        clips: HashMap<SoundKind, Vec<u8>>,
    }

    impl RodioSoundPlayer {
        pub fn new(assets_dir: &Path) -> Result<Self, rodio::StreamError> {
            let (stream, handle) = rodio::OutputStream::try_default()?;

            let mut clips = HashMap::new();
            for kind in SoundKind::ALL {
                let path = assets_dir.join("sounds").join(kind.file_name());
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        clips.insert(kind, bytes);
                    }
                    Err(err) => {
                        log::warn!("could not load sound {}: {}", path.display(), err);
                    }
                }
            }

            Ok(Self {
                _stream: stream,
                handle,
                clips,
            })
        }
    }

    impl SoundPlayer for RodioSoundPlayer {
        fn play(&mut self, kind: SoundKind) {
            let Some(bytes) = self.clips.get(&kind) else {
                log::debug!("no clip loaded for {:?}", kind);
                return;
            };

            let source = match rodio::Decoder::new(Cursor::new(bytes.clone())) {
                Ok(source) => source,
                Err(err) => {
                    log::warn!("could not decode {}: {}", kind.file_name(), err);
                    return;
                }
            };

            match rodio::Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(err) => log::warn!("sound output unavailable: {}", err),
            }
        }
    }
}
