// SPDX-License-Identifier: MIT OR Apache-2.0
//! Track binding: which property of which component a track drives.

use serde::{Deserialize, Serialize};

/// Component type of the default binding
pub const UI_IMAGE_COMPONENT: &str = "Image";

/// Sprite slot of the UI image component
pub const UI_IMAGE_SPRITE_PROPERTY: &str = "m_Sprite";

/// Binding of a track to a component property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackBinding {
    /// Component type name
    pub component: String,
    /// Object path relative to the animated root (empty = root)
    pub path: String,
    /// Property identifier within the component
    pub property: String,
}

impl TrackBinding {
    /// Create a binding to a property on the root object
    pub fn root(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            path: String::new(),
            property: property.into(),
        }
    }

    /// Create a binding to a property on a child object
    pub fn child(
        path: impl Into<String>,
        component: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            path: path.into(),
            property: property.into(),
        }
    }

    /// Binding to the sprite of a UI image on the root object
    pub fn ui_image_sprite() -> Self {
        Self::root(UI_IMAGE_COMPONENT, UI_IMAGE_SPRITE_PROPERTY)
    }

    /// Whether the binding targets the animated root
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl Default for TrackBinding {
    fn default() -> Self {
        Self::ui_image_sprite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binding() {
        let binding = TrackBinding::default();
        assert_eq!(binding.component, "Image");
        assert_eq!(binding.property, "m_Sprite");
        assert!(binding.is_root());
    }

    #[test]
    fn test_child_binding() {
        let binding = TrackBinding::child("Canvas/Icon", "SpriteRenderer", "m_Sprite");
        assert!(!binding.is_root());
        assert_eq!(binding.path, "Canvas/Icon");
    }
}
