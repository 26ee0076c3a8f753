// SPDX-License-Identifier: MIT OR Apache-2.0
//! Builds looping sprite clips from ordered frame sequences.

use crate::clip::{AnimationClip, ClipSettings};
use crate::config::FlipbookConfig;
use crate::error::ValidationError;
use crate::keyframe::Keyframe;
use crate::sequencer::OrderedSequence;

/// Turns an [`OrderedSequence`] into an [`AnimationClip`]
#[derive(Debug, Clone)]
pub struct ClipBuilder {
    config: FlipbookConfig,
}

impl ClipBuilder {
    /// Create a builder, rejecting unusable settings
    pub fn new(config: FlipbookConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings this builder uses
    pub fn config(&self) -> &FlipbookConfig {
        &self.config
    }

    /// Build a looping clip with one keyframe per frame.
    ///
    /// Fails when frame times stop strictly increasing in `f32`: the frame
    /// rate is so low that `i / fps` overflows, or the sequence is longer
    /// than 2^24 frames so consecutive indices round to the same time.
    pub fn build(&self, sequence: &OrderedSequence) -> Result<AnimationClip, ValidationError> {
        let fps = self.config.frames_per_second;
        let mut clip = AnimationClip::new(
            self.config.file_name.clone(),
            self.config.binding.clone(),
            1.0 / fps,
        );

        // keyframe i sits at i / fps
        let keyframes = sequence
            .iter()
            .enumerate()
            .map(|(i, res)| Keyframe::new(i as f32 / fps, res.to_ref()));
        for keyframe in keyframes {
            clip.track.push_keyframe(keyframe).map_err(|e| {
                ValidationError::InvalidConfig(format!(
                    "frame times stop increasing for {} frames at {} fps: {}",
                    sequence.len(),
                    fps,
                    e
                ))
            })?;
        }

        clip.settings = ClipSettings { loop_time: true };

        tracing::debug!(
            "Built clip '{}' with {} frames at {} fps",
            clip.name,
            clip.frame_count(),
            fps
        );
        Ok(clip)
    }
}

/// Build a clip from `sequence` at `frames_per_second` with default settings
pub fn build(
    sequence: &OrderedSequence,
    frames_per_second: f32,
) -> Result<AnimationClip, ValidationError> {
    let config = FlipbookConfig::default().with_frames_per_second(frames_per_second);
    ClipBuilder::new(config)?.build(sequence)
}
