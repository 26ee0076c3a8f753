// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for flipbook clip creation.

use crate::resource::ResourceKind;

/// Input or configuration rejected before any clip construction starts
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// No resources were supplied
    #[error("No images supplied")]
    EmptyInput,

    /// A resource is not of the kind the clip expects
    #[error("Resource '{name}' at index {index} is {found:?}, expected {expected:?}")]
    TypeMismatch {
        /// Position of the offending resource in the input
        index: usize,
        /// Name of the offending resource
        name: String,
        /// Kind every resource must have
        expected: ResourceKind,
        /// Kind the offending resource actually has
        found: ResourceKind,
    },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure encoding or decoding a clip artifact
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// RON serialization failed
    #[error("Failed to encode clip as RON: {0}")]
    RonEncode(#[from] ron::Error),

    /// RON parsing failed
    #[error("Failed to decode RON clip: {0}")]
    RonDecode(#[from] ron::error::SpannedError),

    /// Binary encoding or decoding failed
    #[error("Binary clip error: {0}")]
    Bincode(#[from] bincode::Error),

    /// RON text was not valid UTF-8
    #[error("Clip data is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Keyframes out of order or with invalid times
    #[error("Invalid clip track: {0}")]
    Keyframes(#[from] crate::track::KeyframeOrderError),

    /// Frame interval not a positive finite number
    #[error("Invalid frame interval: {0}")]
    FrameInterval(f32),

    /// Document written by a newer format
    #[error("Clip format version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the document
        found: u32,
        /// Highest version this crate reads
        supported: u32,
    },
}

/// Any failure of the end-to-end flipbook creation
#[derive(Debug, thiserror::Error)]
pub enum FlipbookError {
    /// Input or configuration rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Clip could not be encoded
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The store failed to persist the artifact
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}
