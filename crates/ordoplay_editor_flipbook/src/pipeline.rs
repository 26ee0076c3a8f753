// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end flipbook creation from an image selection.

use crate::artifact::serialize;
use crate::builder::ClipBuilder;
use crate::config::FlipbookConfig;
use crate::error::FlipbookError;
use crate::resource::ImageResource;
use crate::sequencer::Sequencer;
use crate::store::ClipStore;
use std::path::PathBuf;

/// Order `images`, build a looping clip, encode it and hand it to `store`.
///
/// Validation runs before anything is built; nothing reaches the store
/// unless the whole clip was built. Returns the path the store wrote to.
pub fn create_flipbook(
    images: impl IntoIterator<Item = ImageResource>,
    config: &FlipbookConfig,
    store: &mut dyn ClipStore,
) -> Result<PathBuf, FlipbookError> {
    let builder = ClipBuilder::new(config.clone())?;
    let sequence = Sequencer::default().order(images)?;
    let clip = builder.build(&sequence)?;
    let artifact = serialize(&clip, config.encoding)?;

    let path = store.store(&artifact)?;
    tracing::info!("UI animation created at: {}", path.display());
    Ok(path)
}
