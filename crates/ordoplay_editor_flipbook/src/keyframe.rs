// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe definitions for sprite tracks.

use crate::resource::ResourceRef;
use serde::{Deserialize, Serialize};

/// A keyframe that swaps the bound sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Time in seconds
    pub time: f32,
    /// Sprite shown from this keyframe until the next one
    pub value: ResourceRef,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(time: f32, value: ResourceRef) -> Self {
        Self { time, value }
    }

    /// Compare with another keyframe, allowing `tolerance` seconds of
    /// difference in time
    pub fn approx_eq(&self, other: &Keyframe, tolerance: f32) -> bool {
        (self.time - other.time).abs() <= tolerance && self.value == other.value
    }
}
