// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::kurbo::Rect;

/// An inline object embedded in the text, such as an image.
///
/// The payload is shared, so cloning an attachment (and every attribute holding one) is cheap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttachment {
    /// Encoded contents, if any.
    pub contents: Option<Arc<[u8]>>,
    /// Uniform type identifier or MIME type of `contents`.
    pub file_type: Option<Arc<str>>,
    /// Layout bounds, relative to the baseline origin of the attachment character.
    pub bounds: Rect,
}

impl TextAttachment {
    /// An attachment with the given contents and type, and empty bounds.
    pub fn new(contents: impl Into<Arc<[u8]>>, file_type: impl Into<Arc<str>>) -> Self {
        Self {
            contents: Some(contents.into()),
            file_type: Some(file_type.into()),
            bounds: Rect::ZERO,
        }
    }

    /// Returns this attachment with different bounds.
    #[must_use]
    pub fn with_bounds(self, bounds: Rect) -> Self {
        Self { bounds, ..self }
    }
}
