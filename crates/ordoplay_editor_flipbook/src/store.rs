// SPDX-License-Identifier: MIT OR Apache-2.0
//! Persisting clip artifacts.

use crate::artifact::ClipArtifact;
use std::path::{Path, PathBuf};

/// Destination for finished clip artifacts.
///
/// A store decides the final location (it may rename on collision) and
/// returns where the artifact ended up. I/O errors are returned as-is.
pub trait ClipStore {
    /// Write the artifact durably
    fn store(&mut self, artifact: &ClipArtifact) -> std::io::Result<PathBuf>;
}

/// Writes artifacts to the filesystem.
///
/// Relative artifact paths are resolved against the store's root. An
/// absolute artifact path (frames selected by absolute path) is written
/// as-is and the root is not applied. An existing file at the target path
/// is overwritten.
#[derive(Debug, Clone)]
pub struct FsClipStore {
    root: PathBuf,
}

impl FsClipStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ClipStore for FsClipStore {
    fn store(&mut self, artifact: &ClipArtifact) -> std::io::Result<PathBuf> {
        let path = self.root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if path.exists() {
            tracing::debug!("Overwriting existing clip {:?}", path);
        }
        std::fs::write(&path, &artifact.bytes)?;
        Ok(path)
    }
}
