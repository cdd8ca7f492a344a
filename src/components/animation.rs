//! Frame-based animation tracks.
//!
//! Frame tables are immutable and shared behind an [`Arc`]: every walker
//! points at the same list of walk frames. The playback cursor (`index` and
//! `elapsed`) lives in each [`AnimationTrack`] value, so two actors playing the
//! same animation never disturb each other's frame position.
//!
//! Durations are counted in ticks. A track always loops.

use std::sync::Arc;

/// One frame of a track: which texture to draw and for how many ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    pub width: i32,
    pub height: i32,
    /// Ticks this frame stays on screen. Always at least 1.
    pub duration: u32,
}

impl Frame {
    pub fn new(tex_key: impl Into<Arc<str>>, width: i32, height: i32, duration: u32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            duration: duration.max(1),
        }
    }
}

/// A looping animation with its own playback cursor.
#[derive(Debug, Clone)]
pub struct AnimationTrack {
    frames: Arc<[Frame]>,
    index: usize,
    elapsed: u32,
}

impl AnimationTrack {
    /// Build a track over a shared frame table, starting at frame 0.
    ///
    /// Returns `None` for an empty table.
    pub fn new(frames: Arc<[Frame]>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames,
            index: 0,
            elapsed: 0,
        })
    }

    /// Advance by one tick, moving to the next frame once the current one has
    /// been held for its duration. Wraps to frame 0 after the last frame.
    pub fn advance(&mut self) {
        self.elapsed += 1;
        if self.elapsed >= self.frames[self.index].duration {
            self.index = (self.index + 1) % self.frames.len();
            self.elapsed = 0;
        }
    }

    /// Restart from frame 0.
    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0;
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Give every frame the same hold duration for this track only.
    ///
    /// The shared table is copied first, so other tracks built from the same
    /// frames keep their timing.
    pub fn set_shared_duration(&mut self, duration: u32) {
        let duration = duration.max(1);
        let retimed: Vec<Frame> = self
            .frames
            .iter()
            .map(|frame| Frame {
                duration,
                ..frame.clone()
            })
            .collect();
        self.frames = retimed.into();
        if self.elapsed >= duration {
            self.elapsed = 0;
        }
    }

    /// True if both tracks read from the same frame table allocation.
    pub fn shares_frames_with(&self, other: &AnimationTrack) -> bool {
        Arc::ptr_eq(&self.frames, &other.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(durations: &[u32]) -> Arc<[Frame]> {
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| Frame::new(format!("f{i}"), 8, 8, *d))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(AnimationTrack::new(frames(&[])).is_none());
    }

    #[test]
    fn test_frame_duration_is_at_least_one() {
        assert_eq!(Frame::new("x", 1, 1, 0).duration, 1);
    }

    #[test]
    fn test_holds_each_frame_for_its_duration() {
        let mut track = AnimationTrack::new(frames(&[3, 1, 2])).unwrap();
        track.advance();
        track.advance();
        assert_eq!(track.index(), 0);
        track.advance();
        assert_eq!(track.index(), 1);
        assert_eq!(track.elapsed(), 0);
        track.advance();
        assert_eq!(track.index(), 2);
        track.advance();
        track.advance();
        assert_eq!(track.index(), 0);
    }

    #[test]
    fn test_unit_durations_advance_every_tick() {
        let mut track = AnimationTrack::new(frames(&[1, 1, 1])).unwrap();
        let seen: Vec<usize> = (0..6)
            .map(|_| {
                track.advance();
                track.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_frame_track_wraps_in_place() {
        let mut track = AnimationTrack::new(frames(&[1])).unwrap();
        for _ in 0..4 {
            track.advance();
            assert_eq!(track.index(), 0);
            assert_eq!(track.current_frame().tex_key.as_ref(), "f0");
        }
    }

    #[test]
    fn test_reset_from_any_position() {
        let mut track = AnimationTrack::new(frames(&[2, 2, 2])).unwrap();
        for _ in 0..5 {
            track.advance();
        }
        assert_eq!(track.index(), 2);
        assert_eq!(track.elapsed(), 1);
        track.reset();
        assert_eq!(track.index(), 0);
        assert_eq!(track.elapsed(), 0);
    }

    #[test]
    fn test_cursors_are_independent_for_shared_frames() {
        let table = frames(&[1, 1]);
        let mut a = AnimationTrack::new(table.clone()).unwrap();
        let b = AnimationTrack::new(table).unwrap();
        a.advance();
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 0);
        assert!(a.shares_frames_with(&b));
    }

    #[test]
    fn test_set_shared_duration_only_retimes_this_track() {
        let table = frames(&[1, 1]);
        let mut slow = AnimationTrack::new(table.clone()).unwrap();
        let mut fast = AnimationTrack::new(table).unwrap();
        slow.set_shared_duration(10);
        assert!(!slow.shares_frames_with(&fast));

        for _ in 0..9 {
            slow.advance();
        }
        assert_eq!(slow.index(), 0);
        slow.advance();
        assert_eq!(slow.index(), 1);

        fast.advance();
        assert_eq!(fast.index(), 1);
    }
}
