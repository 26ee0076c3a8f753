// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordering of an unordered image selection into flipbook frame order.

use crate::error::ValidationError;
use crate::resource::{ImageResource, ResourceKind};

/// Non-empty list of resources in frame order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSequence {
    resources: Vec<ImageResource>,
}

impl OrderedSequence {
    /// Number of frames
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Always false for a sequence produced by [`Sequencer::order`]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// First frame; its directory decides where the clip is stored
    pub fn first(&self) -> &ImageResource {
        &self.resources[0]
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&ImageResource> {
        self.resources.get(index)
    }

    /// Iterate frames in order
    pub fn iter(&self) -> impl Iterator<Item = &ImageResource> {
        self.resources.iter()
    }

    /// Frames as a slice
    pub fn as_slice(&self) -> &[ImageResource] {
        &self.resources
    }

    /// Frame names in order
    pub fn names(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.name.as_str()).collect()
    }

    /// Take ownership of the frames
    pub fn into_inner(self) -> Vec<ImageResource> {
        self.resources
    }
}

/// Validates and orders image selections
#[derive(Debug, Clone, Copy)]
pub struct Sequencer {
    /// Kind every input resource must have
    pub expected_kind: ResourceKind,
}

impl Sequencer {
    /// Create a sequencer accepting only `expected_kind`
    pub fn new(expected_kind: ResourceKind) -> Self {
        Self { expected_kind }
    }

    /// Order resources by name.
    ///
    /// Names are compared byte-wise, so `frame_10` sorts before `frame_2`
    /// unless the numbers are zero-padded. Equal names keep their input order.
    pub fn order(
        &self,
        images: impl IntoIterator<Item = ImageResource>,
    ) -> Result<OrderedSequence, ValidationError> {
        let mut resources: Vec<ImageResource> = images.into_iter().collect();
        if resources.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        if let Some((index, res)) = resources
            .iter()
            .enumerate()
            .find(|(_, r)| r.kind != self.expected_kind)
        {
            return Err(ValidationError::TypeMismatch {
                index,
                name: res.name.clone(),
                expected: self.expected_kind,
                found: res.kind,
            });
        }

        // Stable, so ties keep input position
        resources.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        tracing::debug!("Ordered {} {} frames", resources.len(), self.expected_kind.name());
        Ok(OrderedSequence { resources })
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(ResourceKind::Image)
    }
}

/// Order an image selection with the default sequencer
pub fn order(
    images: impl IntoIterator<Item = ImageResource>,
) -> Result<OrderedSequence, ValidationError> {
    Sequencer::default().order(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImageResource {
        ImageResource::new(name, format!("Assets/UI/{name}"), ResourceKind::Image)
    }

    #[test]
    fn test_orders_by_name() {
        let seq = order(vec![image("b.png"), image("a.png"), image("c.png")]).unwrap();
        assert_eq!(seq.names(), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_ordinal_comparison() {
        // Uppercase sorts before lowercase, digits before letters
        let seq = order(vec![
            image("frame_b.png"),
            image("Frame_a.png"),
            image("frame_10.png"),
            image("frame_02.png"),
        ])
        .unwrap();
        assert_eq!(
            seq.names(),
            vec!["Frame_a.png", "frame_02.png", "frame_10.png", "frame_b.png"]
        );
    }

    #[test]
    fn test_keeps_every_element() {
        let input = vec![image("x.png"), image("x.png"), image("a.png")];
        let ids: Vec<_> = input.iter().map(|r| r.id).collect();
        let seq = order(input).unwrap();

        assert_eq!(seq.len(), 3);
        for id in &ids {
            assert!(seq.iter().any(|r| r.id == *id));
        }
        // Duplicate names stay in input order
        assert_eq!(seq.get(1).unwrap().id, ids[0]);
        assert_eq!(seq.get(2).unwrap().id, ids[1]);
    }

    #[test]
    fn test_deterministic() {
        let input = vec![image("3.png"), image("1.png"), image("2.png"), image("1.png")];
        let first = order(input.clone()).unwrap();
        let second = order(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(order(Vec::new()), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_type_mismatch() {
        let input = vec![
            image("a.png"),
            ImageResource::new("click.wav", "Assets/click.wav", ResourceKind::Audio),
            image("b.png"),
        ];
        match order(input) {
            Err(ValidationError::TypeMismatch { index, name, expected, found }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "click.wav");
                assert_eq!(expected, ResourceKind::Image);
                assert_eq!(found, ResourceKind::Audio);
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_expected_kind() {
        let sequencer = Sequencer::new(ResourceKind::Audio);
        let input = vec![ImageResource::new("a.wav", "a.wav", ResourceKind::Audio)];
        assert!(sequencer.order(input).is_ok());
        assert!(sequencer.order(vec![image("a.png")]).is_err());
    }
}
