//! Sprite animation driver
//!
//! A clip is an ordered list of image identifiers with a fixed per-frame
//! duration. `AnimationState` is the per-entity runtime cursor over a clip,
//! advanced by elapsed simulation time only.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Immutable animation definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClipDeserialize")]
pub struct AnimationClip {
    frames: Vec<String>,
    frame_duration: f32,
    looping: bool,
}

impl AnimationClip {
    /// Build a clip. Fails on an empty frame list or a non-positive duration.
    pub fn new<I, S>(frames: I, frame_duration: f32, looping: bool) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(SimError::EmptyClip);
        }
        if !(frame_duration.is_finite() && frame_duration > 0.0) {
            return Err(SimError::InvalidFrameDuration(frame_duration));
        }
        Ok(Self {
            frames,
            frame_duration,
            looping,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; clips are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn frame(&self, index: usize) -> &str {
        &self.frames[index]
    }
}

/// Helper for deserializing a clip through the checked constructor
#[derive(Deserialize)]
struct ClipDeserialize {
    frames: Vec<String>,
    frame_duration: f32,
    looping: bool,
}

impl TryFrom<ClipDeserialize> for AnimationClip {
    type Error = SimError;

    fn try_from(c: ClipDeserialize) -> Result<Self, Self::Error> {
        Self::new(c.frames, c.frame_duration, c.looping)
    }
}

/// Runtime playback state of one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateDeserialize")]
pub struct AnimationState {
    clip: AnimationClip,
    elapsed_time: f32,
    current_frame: usize,
    finished: bool,
}

impl AnimationState {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            elapsed_time: 0.0,
            current_frame: 0,
            finished: false,
        }
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Counts every frame boundary `dt` covers, so a long tick lands on the
    /// same frame as several short ones. Constant time in `dt`.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.elapsed_time += dt;
        let duration = self.clip.frame_duration;
        if self.elapsed_time < duration {
            return;
        }

        let remainder = self.elapsed_time % duration;
        let crossed = ((self.elapsed_time - remainder) / duration).round() as u64;
        let len = self.clip.len() as u64;
        let to_last = (self.clip.len() - 1 - self.current_frame) as u64;

        if self.clip.looping {
            self.current_frame = ((self.current_frame as u64 + crossed % len) % len) as usize;
            self.elapsed_time = remainder;
        } else if crossed > to_last {
            // Stepped past the last frame
            self.elapsed_time = (self.elapsed_time - (to_last + 1) as f32 * duration).max(0.0);
            self.current_frame = self.clip.len() - 1;
            self.finished = true;
        } else {
            self.current_frame += crossed as usize;
            self.elapsed_time = remainder;
        }
    }

    /// Image identifier for the current frame
    pub fn current_image(&self) -> &str {
        self.clip.frame(self.current_frame)
    }

    /// Rewind to the first frame and clear `finished`
    pub fn reset(&mut self) {
        self.elapsed_time = 0.0;
        self.current_frame = 0;
        self.finished = false;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }
}

/// Helper for deserializing playback state; the cursor must lie in the clip
#[derive(Deserialize)]
struct StateDeserialize {
    clip: AnimationClip,
    elapsed_time: f32,
    current_frame: usize,
    finished: bool,
}

impl TryFrom<StateDeserialize> for AnimationState {
    type Error = SimError;

    fn try_from(s: StateDeserialize) -> Result<Self, Self::Error> {
        if s.current_frame >= s.clip.len() {
            return Err(SimError::FrameOutOfRange {
                frame: s.current_frame,
                len: s.clip.len(),
            });
        }
        if !(s.elapsed_time.is_finite() && s.elapsed_time >= 0.0) {
            return Err(SimError::InvalidTimestep(s.elapsed_time));
        }
        Ok(Self {
            clip: s.clip,
            elapsed_time: s.elapsed_time,
            current_frame: s.current_frame,
            finished: s.finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn clip(n: usize, duration: f32, looping: bool) -> AnimationClip {
        AnimationClip::new((0..n).map(|i| format!("frame{}", i)), duration, looping).unwrap()
    }

    #[test]
    fn test_clip_rejects_empty_and_bad_duration() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(AnimationClip::new(empty, 0.1, true), Err(SimError::EmptyClip));
        assert_eq!(
            AnimationClip::new(["a"], 0.0, true),
            Err(SimError::InvalidFrameDuration(0.0))
        );
        assert!(AnimationClip::new(["a"], -0.5, true).is_err());
        assert!(AnimationClip::new(["a"], f32::NAN, true).is_err());
    }

    #[test]
    fn test_advance_below_duration_stays() {
        let mut anim = AnimationState::new(clip(3, 0.1, true));
        anim.advance(0.05);
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.current_image(), "frame0");
        anim.advance(0.06);
        assert_eq!(anim.current_frame(), 1);
    }

    #[test]
    fn test_large_dt_crosses_multiple_frames() {
        let mut anim = AnimationState::new(clip(4, 0.25, true));
        anim.advance(0.8);
        assert_eq!(anim.current_frame(), 3);
        assert!((anim.elapsed_time() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_looping_wraps_to_start() {
        let mut anim = AnimationState::new(clip(2, 0.5, true));
        anim.advance(0.5);
        anim.advance(0.5);
        assert_eq!(anim.current_frame(), 0);
        assert!(!anim.finished());
    }

    #[test]
    fn test_non_looping_clamps_and_finishes() {
        let mut anim = AnimationState::new(clip(3, 0.5, false));
        anim.advance(1.0);
        assert_eq!(anim.current_frame(), 2);
        assert!(!anim.finished());

        anim.advance(0.5);
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.finished());

        anim.advance(10.0);
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.finished());
    }

    #[test]
    fn test_single_frame_non_looping() {
        let mut anim = AnimationState::new(clip(1, 0.1, false));
        anim.advance(0.1);
        assert_eq!(anim.current_frame(), 0);
        assert!(anim.finished());
    }

    #[test]
    fn test_reset_rewinds() {
        let mut anim = AnimationState::new(clip(2, 0.1, false));
        anim.advance(1.0);
        assert!(anim.finished());
        anim.reset();
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.elapsed_time(), 0.0);
        assert!(!anim.finished());
    }

    #[test]
    fn test_tiny_duration_or_huge_dt_terminates() {
        let mut anim = AnimationState::new(clip(3, 1e-10, true));
        anim.advance(1.0 / 60.0);
        assert!(anim.current_frame() < 3);
        assert!(anim.elapsed_time() < 1e-10);

        let mut anim = AnimationState::new(clip(2, 0.3, true));
        anim.advance(1e8);
        assert!(anim.current_frame() < 2);
        assert!(anim.elapsed_time() < 0.3);

        let mut anim = AnimationState::new(clip(3, 0.3, false));
        anim.advance(1e8);
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.finished());
    }

    #[test]
    fn test_computed_count_matches_small_steps() {
        // 0.35s at 0.1 per frame crosses three boundaries
        let mut long = AnimationState::new(clip(5, 0.1, true));
        long.advance(0.35);
        let mut short = AnimationState::new(clip(5, 0.1, true));
        for _ in 0..7 {
            short.advance(0.05);
        }
        assert_eq!(long.current_frame(), 3);
        assert_eq!(short.current_frame(), 3);

        let mut wrap = AnimationState::new(clip(3, 0.1, true));
        wrap.advance(0.75);
        assert_eq!(wrap.current_frame(), 1);
    }

    #[test]
    fn test_deserialize_checks_clip_and_cursor() {
        let clip_json = r#"{"frames":[],"frame_duration":0.1,"looping":true}"#;
        assert!(serde_json::from_str::<AnimationClip>(clip_json).is_err());

        let clip_json = r#"{"frames":["a"],"frame_duration":0.0,"looping":true}"#;
        assert!(serde_json::from_str::<AnimationClip>(clip_json).is_err());

        let state_json = r#"{"clip":{"frames":["a","b"],"frame_duration":0.1,"looping":true},
            "elapsed_time":0.0,"current_frame":2,"finished":false}"#;
        assert!(serde_json::from_str::<AnimationState>(state_json).is_err());

        let mut anim = AnimationState::new(clip(3, 0.1, true));
        anim.advance(0.15);
        let json = serde_json::to_string(&anim).unwrap();
        assert_eq!(serde_json::from_str::<AnimationState>(&json).unwrap(), anim);
    }

    proptest! {
        #[test]
        fn prop_zero_dt_is_idempotent(n in 1usize..6, steps in 0usize..40) {
            let mut anim = AnimationState::new(clip(n, 0.1, true));
            for _ in 0..steps {
                anim.advance(1.0 / 60.0);
            }
            let before = anim.clone();
            anim.advance(0.0);
            prop_assert_eq!(anim, before);
        }

        #[test]
        fn prop_looping_frames_advance_by_one_mod_len(
            n in 1usize..6,
            dts in proptest::collection::vec(0.0f32..0.099, 1..100),
        ) {
            let mut anim = AnimationState::new(clip(n, 0.1, true));
            for dt in dts {
                let before = anim.current_frame();
                anim.advance(dt);
                let after = anim.current_frame();
                prop_assert!(after == before || after == (before + 1) % n);
                prop_assert!(after < n);
            }
        }

        #[test]
        fn prop_finished_clip_never_moves(
            n in 1usize..6,
            dts in proptest::collection::vec(0.0f32..0.5, 1..60),
        ) {
            let mut anim = AnimationState::new(clip(n, 0.1, false));
            let mut was_finished = false;
            for dt in dts {
                anim.advance(dt);
                if anim.finished() {
                    prop_assert_eq!(anim.current_frame(), n - 1);
                }
                if was_finished {
                    prop_assert!(anim.finished());
                }
                was_finished = anim.finished();
            }
        }
    }
}
