// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input resources and the references keyframes hold to them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique handle of an input resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    /// Create a new random resource ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Concrete kind of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Still image (sprite source)
    Image,
    /// Mesh
    Mesh,
    /// Material
    Material,
    /// Audio clip
    Audio,
    /// Scene
    Scene,
    /// Prefab
    Prefab,
    /// Animation clip
    Animation,
    /// Anything else
    Unknown,
}

impl ResourceKind {
    /// Detect the resource kind from a file extension
    pub fn from_extension(ext: &str) -> Self {
        if image::ImageFormat::from_extension(ext).is_some() {
            return Self::Image;
        }
        match ext.to_lowercase().as_str() {
            "glb" | "gltf" | "obj" | "fbx" | "dae" => Self::Mesh,
            "mat" | "material" => Self::Material,
            "wav" | "mp3" | "ogg" | "flac" => Self::Audio,
            "scene" => Self::Scene,
            "prefab" => Self::Prefab,
            "anim" | "animb" | "animation" => Self::Animation,
            _ => Self::Unknown,
        }
    }

    /// Detect the resource kind of a file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Mesh => "Mesh",
            Self::Material => "Material",
            Self::Audio => "Audio",
            Self::Scene => "Scene",
            Self::Prefab => "Prefab",
            Self::Animation => "Animation",
            Self::Unknown => "Unknown",
        }
    }
}

/// A named resource supplied by the host's selection
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResource {
    /// Identity of the resource
    pub id: ResourceId,
    /// Human-readable name, used for ordering
    pub name: String,
    /// Storage location
    pub path: PathBuf,
    /// Concrete kind
    pub kind: ResourceKind,
}

impl ImageResource {
    /// Create a resource with a fresh ID
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: ResourceKind) -> Self {
        Self {
            id: ResourceId::new(),
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Create a resource for a file, naming it after the file name and
    /// detecting its kind from the extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = ResourceKind::from_path(&path);
        Self::new(name, path, kind)
    }

    /// Override the generated ID
    pub fn with_id(mut self, id: ResourceId) -> Self {
        self.id = id;
        self
    }

    /// Directory the resource is stored in
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Reference to this resource for use in a keyframe
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef {
            id: self.id,
            name: self.name.clone(),
            path: self.path.clone(),
        }
    }
}

/// Serializable reference from a keyframe to an image resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Referenced resource
    pub id: ResourceId,
    /// Name at the time the clip was built
    pub name: String,
    /// Storage location at the time the clip was built
    pub path: PathBuf,
}

impl ResourceRef {
    /// Whether this reference points to the given resource
    pub fn points_to(&self, resource: &ImageResource) -> bool {
        self.id == resource.id
    }
}
