//! Background track playback state.
//!
//! The state here is pure; every effect on the actual audio element goes
//! through an [`AudioSink`], so the transitions can be exercised without a
//! browser.

use crate::nasheeds::{find_nasheed, Nasheed};

/// The single audio element the player drives.
pub trait AudioSink {
    /// Swap the source and start playing it.
    fn load(&mut self, src: &str, looping: bool);
    fn play(&mut self);
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current: Option<Nasheed>,
    pub status: PlaybackStatus,
    pub looping: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PlaybackState {
    pub fn new(looping: bool) -> Self {
        Self {
            current: None,
            status: PlaybackStatus::Stopped,
            looping,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Start the track with `id` from the beginning. Unknown ids change nothing
    /// and return `false`.
    pub fn select(&mut self, id: &str, sink: &mut impl AudioSink) -> bool {
        let Some(nasheed) = find_nasheed(id) else {
            tracing::debug!(id, "ignoring unknown nasheed id");
            return false;
        };

        sink.load(nasheed.url, self.looping);
        self.current = Some(*nasheed);
        self.status = PlaybackStatus::Playing;
        tracing::info!(id = nasheed.id, title = nasheed.title, "nasheed selected");
        true
    }

    /// Pause when playing, resume otherwise. Does nothing before a track has
    /// been selected.
    pub fn toggle(&mut self, sink: &mut impl AudioSink) -> PlaybackStatus {
        if self.current.is_none() {
            return self.status;
        }

        if self.is_playing() {
            sink.pause();
            self.status = PlaybackStatus::Paused;
        } else {
            sink.play();
            self.status = PlaybackStatus::Playing;
        }
        self.status
    }
}
