// SPDX-License-Identifier: MIT OR Apache-2.0
//! Serialized clip artifacts.
//!
//! A clip is wrapped in a versioned [`ClipDocument`] and encoded either as
//! pretty RON (`.anim`) or as bincode (`.animb`). The artifact's target path
//! is the directory of the clip's first frame joined with the clip name.

use crate::clip::AnimationClip;
use crate::error::ArtifactError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk clip encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipEncoding {
    /// Human-readable RON text
    #[default]
    Ron,
    /// Compact bincode
    Binary,
}

impl ClipEncoding {
    /// File extension for this encoding
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ron => "anim",
            Self::Binary => "animb",
        }
    }

    /// Encoding for a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "anim" => Some(Self::Ron),
            "animb" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Encoding of a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Versioned envelope around a serialized clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDocument {
    /// Format version the document was written with
    pub version: u32,
    /// The clip
    pub clip: AnimationClip,
}

impl ClipDocument {
    /// Current clip format version
    pub const FORMAT_VERSION: u32 = 1;

    /// Wrap a clip at the current format version
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            version: Self::FORMAT_VERSION,
            clip,
        }
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::default().struct_names(true);
        ron::ser::to_string_pretty(self, config)
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    fn check_version(self) -> Result<Self, ArtifactError> {
        if self.version > Self::FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.version,
                supported: Self::FORMAT_VERSION,
            });
        }
        Ok(self)
    }

    fn check_clip(self) -> Result<Self, ArtifactError> {
        let interval = self.clip.frame_interval;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ArtifactError::FrameInterval(interval));
        }
        self.clip.track.validate()?;
        Ok(self)
    }
}

/// Encoded clip plus where it should be stored
#[derive(Debug, Clone, PartialEq)]
pub struct ClipArtifact {
    /// Encoded document
    pub bytes: Vec<u8>,
    /// Target storage path
    pub path: PathBuf,
    /// Encoding of `bytes`
    pub encoding: ClipEncoding,
}

impl ClipArtifact {
    /// Decode the artifact back into a clip
    pub fn decode(&self) -> Result<AnimationClip, ArtifactError> {
        deserialize(&self.bytes, self.encoding)
    }
}

/// Target path of a clip: `{directory of first frame}/{name}.{ext}`
pub fn target_path(clip: &AnimationClip, encoding: ClipEncoding) -> PathBuf {
    let directory = clip
        .track
        .keyframes()
        .first()
        .and_then(|k| k.value.path.parent())
        .unwrap_or_else(|| Path::new(""));
    directory.join(format!("{}.{}", clip.name, encoding.extension()))
}

/// Encode a clip into an artifact
pub fn serialize(clip: &AnimationClip, encoding: ClipEncoding) -> Result<ClipArtifact, ArtifactError> {
    let path = target_path(clip, encoding);
    let document = ClipDocument::new(clip.clone());
    let bytes = match encoding {
        ClipEncoding::Ron => document.to_ron()?.into_bytes(),
        ClipEncoding::Binary => bincode::serialize(&document)?,
    };
    Ok(ClipArtifact {
        bytes,
        path,
        encoding,
    })
}

/// Decode a clip from artifact bytes.
///
/// Rejects documents from a newer format and clips whose keyframes are not
/// strictly increasing, non-negative times.
pub fn deserialize(bytes: &[u8], encoding: ClipEncoding) -> Result<AnimationClip, ArtifactError> {
    let document = match encoding {
        ClipEncoding::Ron => ClipDocument::from_ron(std::str::from_utf8(bytes)?)?,
        ClipEncoding::Binary => bincode::deserialize::<ClipDocument>(bytes)?,
    };
    Ok(document.check_version()?.check_clip()?.clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::TrackBinding;
    use crate::builder::build;
    use crate::resource::{ImageResource, ResourceKind};
    use crate::sequencer::order;

    fn clip(fps: f32) -> AnimationClip {
        let images = ["walk_03.png", "walk_01.png", "walk_02.png"]
            .iter()
            .map(|n| ImageResource::new(*n, format!("Assets/UI/Walk/{n}"), ResourceKind::Image));
        build(&order(images).unwrap(), fps).unwrap()
    }

    #[test]
    fn test_target_path() {
        let clip = clip(10.0);
        assert_eq!(
            target_path(&clip, ClipEncoding::Ron),
            PathBuf::from("Assets/UI/Walk/NewUIAnimation.anim")
        );
        assert_eq!(
            target_path(&clip, ClipEncoding::Binary),
            PathBuf::from("Assets/UI/Walk/NewUIAnimation.animb")
        );
    }

    #[test]
    fn test_ron_round_trip() {
        let clip = clip(12.0);
        let artifact = serialize(&clip, ClipEncoding::Ron).unwrap();
        let text = std::str::from_utf8(&artifact.bytes).unwrap();
        assert!(text.contains("m_Sprite"));
        assert!(text.contains("loop_time: true"));

        let loaded = artifact.decode().unwrap();
        assert!(loaded.approx_eq(&clip, 1e-6));
        assert_eq!(loaded.binding(), &TrackBinding::default());
    }

    #[test]
    fn test_binary_round_trip() {
        let clip = clip(24.0);
        let artifact = serialize(&clip, ClipEncoding::Binary).unwrap();
        let loaded = deserialize(&artifact.bytes, ClipEncoding::Binary).unwrap();
        assert_eq!(loaded, clip);
    }

    #[test]
    fn test_rejects_newer_version() {
        let mut document = ClipDocument::new(clip(10.0));
        document.version = ClipDocument::FORMAT_VERSION + 1;
        let bytes = document.to_ron().unwrap().into_bytes();

        let err = deserialize(&bytes, ClipEncoding::Ron).unwrap_err();
        assert!(matches!(err, ArtifactError::UnsupportedVersion { found: 2, supported: 1 }));
    }

    fn edited_ron(edit: impl FnOnce(&mut AnimationClip)) -> Vec<u8> {
        let mut document = ClipDocument::new(clip(10.0));
        edit(&mut document.clip);
        document.to_ron().unwrap().into_bytes()
    }

    #[test]
    fn test_rejects_unordered_keyframes() {
        let text = String::from_utf8(serialize(&clip(4.0), ClipEncoding::Ron).unwrap().bytes).unwrap();
        // Second frame moved onto the first
        let edited = text.replacen("time: 0.25", "time: 0.0", 1);
        assert_ne!(edited, text);

        let err = deserialize(edited.as_bytes(), ClipEncoding::Ron).unwrap_err();
        assert!(matches!(err, ArtifactError::Keyframes(_)));
    }

    #[test]
    fn test_rejects_bad_frame_interval() {
        for interval in [0.0, -0.1, f32::INFINITY] {
            let bytes = edited_ron(|clip| clip.frame_interval = interval);
            let err = deserialize(&bytes, ClipEncoding::Ron).unwrap_err();
            assert!(matches!(err, ArtifactError::FrameInterval(_)));
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(deserialize(b"not a clip", ClipEncoding::Ron).is_err());
        assert!(deserialize(&[0xff, 0x00, 0x13], ClipEncoding::Binary).is_err());
        assert!(deserialize(&[0xff, 0xfe], ClipEncoding::Ron).is_err());
    }

    #[test]
    fn test_encoding_from_path() {
        assert_eq!(ClipEncoding::from_path(Path::new("a/b.anim")), Some(ClipEncoding::Ron));
        assert_eq!(ClipEncoding::from_path(Path::new("b.animb")), Some(ClipEncoding::Binary));
        assert_eq!(ClipEncoding::from_path(Path::new("b.png")), None);
    }
}
