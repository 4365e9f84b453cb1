//! Sound cues raised by the match.
//!
//! Playback is left to whatever front end consumes the events; this module
//! only decides which cue fires and whether sound is muted.

use tracing::debug;

/// A sound the front end should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum SoundCue {
    /// A mark was placed.
    Placement,
    /// A round was won.
    Victory,
    /// A round ended in a draw.
    GameOver,
}

impl SoundCue {
    /// Asset name the front end is expected to play.
    pub fn asset(&self) -> &'static str {
        match self {
            SoundCue::Placement => "ting.mp3",
            SoundCue::Victory => "victory.mp3",
            SoundCue::GameOver => "gameover.mp3",
        }
    }
}

/// Mute state for sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoundBoard {
    muted: bool,
}

impl SoundBoard {
    /// Creates a sound board, optionally muted.
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    /// Returns true if cues are suppressed.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flips the mute state and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(muted = self.muted, "Mute toggled");
        self.muted
    }

    /// Returns `cue` unless muted.
    pub fn cue(&self, cue: SoundCue) -> Option<SoundCue> {
        (!self.muted).then_some(cue)
    }
}
