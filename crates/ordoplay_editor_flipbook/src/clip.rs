// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation clip holding a single sprite track.

use crate::binding::TrackBinding;
use crate::resource::ResourceRef;
use crate::track::SpriteTrack;
use serde::{Deserialize, Serialize};

/// Playback settings stored with a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipSettings {
    /// Wrap playback back to the start after the end
    pub loop_time: bool,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self { loop_time: true }
    }
}

/// A sprite flipbook clip.
///
/// The clip lasts `frame_count * frame_interval` seconds: the last frame is
/// held for one full interval before a looping clip wraps back to frame 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Clip name
    pub name: String,
    /// The only track of the clip
    pub track: SpriteTrack,
    /// Seconds between consecutive frames
    pub frame_interval: f32,
    /// Playback settings
    pub settings: ClipSettings,
}

impl AnimationClip {
    /// Create an empty clip
    pub fn new(name: impl Into<String>, binding: TrackBinding, frame_interval: f32) -> Self {
        Self {
            name: name.into(),
            track: SpriteTrack::new(binding),
            frame_interval,
            settings: ClipSettings::default(),
        }
    }

    /// Binding of the sprite track
    pub fn binding(&self) -> &TrackBinding {
        &self.track.binding
    }

    /// Whether the clip loops
    pub fn is_looping(&self) -> bool {
        self.settings.loop_time
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.track.keyframe_count()
    }

    /// Playback rate the clip was built with
    pub fn frames_per_second(&self) -> f32 {
        1.0 / self.frame_interval
    }

    /// Nominal duration used for looping
    pub fn duration(&self) -> f32 {
        self.frame_count() as f32 * self.frame_interval
    }

    /// Map a playback time into the clip's local time
    pub fn local_time(&self, time: f32) -> f32 {
        let duration = self.duration();
        if duration <= 0.0 {
            return 0.0;
        }
        if self.settings.loop_time {
            time.rem_euclid(duration)
        } else {
            time.clamp(0.0, duration)
        }
    }

    /// Index of the frame shown at playback time `time`
    pub fn frame_index_at(&self, time: f32) -> Option<usize> {
        self.track.index_at(self.local_time(time))
    }

    /// Sprite shown at playback time `time`
    pub fn sample(&self, time: f32) -> Option<&ResourceRef> {
        self.track.evaluate(self.local_time(time))
    }

    /// Compare with another clip, allowing `tolerance` seconds of
    /// difference in keyframe times and frame interval
    pub fn approx_eq(&self, other: &AnimationClip, tolerance: f32) -> bool {
        let a = self.track.keyframes();
        let b = other.track.keyframes();
        self.name == other.name
            && self.track.binding == other.track.binding
            && self.settings == other.settings
            && (self.frame_interval - other.frame_interval).abs() <= tolerance
            && a.len() == b.len()
            && a.iter().zip(b).all(|(x, y)| x.approx_eq(y, tolerance))
    }
}
