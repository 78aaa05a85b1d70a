//! Loaded files and the items the viewer navigates.
//!
//! A [`SourceFile`] is what the host's file picker hands over: a name and the
//! raw bytes. The core never decodes those bytes. It asks a
//! [`HandleProvider`](crate::resources::HandleProvider) for an opaque
//! [`ResourceHandle`] and keeps only the name and the handle in an [`Item`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A file supplied by the host's file source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File name as reported by the host, used for ordering.
    pub name: String,
    /// Raw file contents.
    #[serde(default)]
    pub content: Vec<u8>,
}

impl SourceFile {
    /// Creates a source file from a name and its bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Opaque, URL-like reference to a file's bytes.
///
/// Handles are minted by a handle provider and stay resolvable until released.
/// The display sink receives them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    /// Wraps a provider-issued reference.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the handle as the string the display sink consumes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One loaded image: its name and the handle that resolves to its bytes.
///
/// Items are owned exclusively by the navigation state's sequence. The handle
/// is released once, when the whole sequence is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub handle: ResourceHandle,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, handle: ResourceHandle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}
