// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sprite flipbook clips for `OrdoPlay` Editor.
//!
//! This crate turns a selection of still images into a looping UI animation:
//! - Ordering of the selection by file name
//! - A single sprite track bound to a UI image property
//! - Versioned RON or binary clip artifacts
//! - Looping playback sampling
//!
//! ## Architecture
//!
//! The flow is a straight pipeline:
//! [`Sequencer`] validates and orders the images, [`ClipBuilder`] emits one
//! keyframe per image at `i / fps`, [`artifact::serialize`] encodes the clip,
//! and a [`ClipStore`] persists it. [`create_flipbook`] runs all of it.

pub mod artifact;
pub mod binding;
pub mod builder;
pub mod clip;
pub mod config;
pub mod error;
pub mod keyframe;
pub mod pipeline;
pub mod resource;
pub mod sequencer;
pub mod store;
pub mod track;

pub use artifact::{ClipArtifact, ClipDocument, ClipEncoding};
pub use binding::TrackBinding;
pub use builder::ClipBuilder;
pub use clip::{AnimationClip, ClipSettings};
pub use config::FlipbookConfig;
pub use error::{ArtifactError, FlipbookError, ValidationError};
pub use keyframe::Keyframe;
pub use pipeline::create_flipbook;
pub use resource::{ImageResource, ResourceId, ResourceKind, ResourceRef};
pub use sequencer::{OrderedSequence, Sequencer};
pub use store::{ClipStore, FsClipStore};
pub use track::{KeyframeOrderError, SpriteTrack};
