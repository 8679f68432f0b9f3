//! Visibility-driven play/pause decisions for videos.
//!
//! Each video observes its own visibility. A video plays only while enough
//! of it is on screen and, inside a carousel, only while its slide is the
//! active one. Play and pause are idempotent, so repeated identical commands
//! are harmless.

/// Whether a video should be playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Visibility threshold for one kind of video placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackGate {
    /// Fraction of the element box that must be visible, in `0.0..=1.0`.
    pub threshold: f64,
}

impl PlaybackGate {
    /// Standalone gallery videos.
    pub const SINGLE: Self = Self { threshold: 0.5 };
    /// Videos inside a carousel slide.
    pub const CAROUSEL: Self = Self { threshold: 0.6 };

    /// Decide from one intersection observation.
    ///
    /// `active_slide` is always `true` for videos outside a carousel.
    pub fn decide(&self, intersecting: bool, ratio: f64, active_slide: bool) -> PlaybackCommand {
        if intersecting && ratio >= self.threshold && active_slide {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_when_visible_and_active() {
        assert_eq!(PlaybackGate::SINGLE.decide(true, 0.5, true), PlaybackCommand::Play);
        assert_eq!(PlaybackGate::CAROUSEL.decide(true, 1.0, true), PlaybackCommand::Play);
    }

    #[test]
    fn test_pauses_below_threshold() {
        assert_eq!(PlaybackGate::SINGLE.decide(true, 0.49, true), PlaybackCommand::Pause);
        assert_eq!(PlaybackGate::CAROUSEL.decide(true, 0.55, true), PlaybackCommand::Pause);
        assert_eq!(PlaybackGate::SINGLE.decide(false, 0.0, true), PlaybackCommand::Pause);
    }

    #[test]
    fn test_pauses_on_inactive_slide() {
        assert_eq!(PlaybackGate::CAROUSEL.decide(true, 1.0, false), PlaybackCommand::Pause);
    }
}
