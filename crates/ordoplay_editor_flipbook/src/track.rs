// SPDX-License-Identifier: MIT OR Apache-2.0
//! The sprite track: a binding plus step keyframes.

use crate::binding::TrackBinding;
use crate::keyframe::Keyframe;
use crate::resource::ResourceRef;
use serde::{Deserialize, Serialize};

/// Keyframe rejected because it does not come after the last one
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Keyframe at {time}s does not follow last keyframe at {last}s")]
pub struct KeyframeOrderError {
    /// Time of the rejected keyframe
    pub time: f32,
    /// Time of the current last keyframe
    pub last: f32,
}

/// Object-reference track with constant (step) interpolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteTrack {
    /// Property driven by this track
    pub binding: TrackBinding,
    /// Keyframes, strictly increasing in time
    keyframes: Vec<Keyframe>,
}

impl SpriteTrack {
    /// Create an empty track
    pub fn new(binding: TrackBinding) -> Self {
        Self {
            binding,
            keyframes: Vec::new(),
        }
    }

    /// Append a keyframe after the current last one
    pub fn push_keyframe(&mut self, keyframe: Keyframe) -> Result<(), KeyframeOrderError> {
        check_follows(self.keyframes.last(), &keyframe)?;
        self.keyframes.push(keyframe);
        Ok(())
    }

    /// Check the ordering of keyframes that did not come through
    /// [`SpriteTrack::push_keyframe`], e.g. a deserialized track
    pub fn validate(&self) -> Result<(), KeyframeOrderError> {
        let mut last = None;
        for keyframe in &self.keyframes {
            check_follows(last, keyframe)?;
            last = Some(keyframe);
        }
        Ok(())
    }

    /// Get all keyframes
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Get keyframe count
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Time of the last keyframe
    pub fn last_time(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// Whether keyframe times are strictly increasing
    pub fn is_ordered(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].time < w[1].time)
    }

    /// Index of the keyframe active at `time`.
    ///
    /// Times before the first keyframe hold the first one.
    pub fn index_at(&self, time: f32) -> Option<usize> {
        if self.keyframes.is_empty() {
            return None;
        }
        let next = self.keyframes.partition_point(|k| k.time <= time);
        Some(next.saturating_sub(1))
    }

    /// Evaluate the track value at a given time
    pub fn evaluate(&self, time: f32) -> Option<&ResourceRef> {
        self.index_at(time).map(|i| &self.keyframes[i].value)
    }
}

/// Times must be finite, non-negative and after `last`
fn check_follows(last: Option<&Keyframe>, keyframe: &Keyframe) -> Result<(), KeyframeOrderError> {
    let last_time = last.map_or(0.0, |k| k.time);
    let ordered = !matches!(last, Some(k) if keyframe.time <= k.time);
    if keyframe.time < 0.0 || !keyframe.time.is_finite() || !ordered {
        return Err(KeyframeOrderError {
            time: keyframe.time,
            last: last_time,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ImageResource, ResourceKind};

    fn frame(name: &str) -> ResourceRef {
        ImageResource::new(name, name, ResourceKind::Image).to_ref()
    }

    fn track() -> SpriteTrack {
        let mut track = SpriteTrack::new(TrackBinding::default());
        track.push_keyframe(Keyframe::new(0.0, frame("a.png"))).unwrap();
        track.push_keyframe(Keyframe::new(0.5, frame("b.png"))).unwrap();
        track.push_keyframe(Keyframe::new(1.0, frame("c.png"))).unwrap();
        track
    }

    #[test]
    fn test_rejects_out_of_order() {
        let mut track = track();
        let err = track.push_keyframe(Keyframe::new(1.0, frame("d.png"))).unwrap_err();
        assert_eq!(err.last, 1.0);
        assert!(track.push_keyframe(Keyframe::new(-1.0, frame("d.png"))).is_err());
        assert_eq!(track.keyframe_count(), 3);
        assert!(track.is_ordered());
    }

    #[test]
    fn test_step_evaluation() {
        let track = track();
        assert_eq!(track.evaluate(-0.2).unwrap().name, "a.png");
        assert_eq!(track.evaluate(0.0).unwrap().name, "a.png");
        assert_eq!(track.evaluate(0.49).unwrap().name, "a.png");
        assert_eq!(track.evaluate(0.5).unwrap().name, "b.png");
        assert_eq!(track.evaluate(3.0).unwrap().name, "c.png");
    }

    #[test]
    fn test_empty_track() {
        let track = SpriteTrack::new(TrackBinding::default());
        assert!(track.evaluate(0.0).is_none());
        assert_eq!(track.last_time(), 0.0);
    }

    #[test]
    fn test_validate_catches_unordered() {
        assert!(track().validate().is_ok());

        let mut track = track();
        track.keyframes.swap(0, 1);
        let err = track.validate().unwrap_err();
        assert_eq!(err.time, 0.0);
        assert_eq!(err.last, 0.5);

        let mut negative = SpriteTrack::new(TrackBinding::default());
        negative.keyframes.push(Keyframe::new(-0.1, frame("a.png")));
        assert!(negative.validate().is_err());
    }
}
