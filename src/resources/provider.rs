//! Handle provider abstraction.
//!
//! A provider mints one handle per loaded file and resolves it to that file's
//! bytes until the handle is explicitly released. The router calls
//! [`HandleProvider::release`] exactly once per handle.

use crate::domain::error::Result;
use crate::domain::item::{ResourceHandle, SourceFile};

/// Source of opaque handles for loaded files.
///
/// # Implementations
///
/// - [`ObjectUrlRegistry`](super::ObjectUrlRegistry): in-memory registry with
///   `blob:` style handles
///
/// # Examples
///
/// ```
/// use seqview::resources::{HandleProvider, ObjectUrlRegistry};
/// use seqview::SourceFile;
///
/// let mut provider = ObjectUrlRegistry::new("blob:demo");
/// let handle = provider.create(&SourceFile::new("a.png", vec![1, 2, 3]))?;
/// provider.release(&handle)?;
/// # Ok::<(), seqview::ViewerError>(())
/// ```
pub trait HandleProvider {
    /// Creates a handle that resolves to `file`'s bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot allocate a handle.
    fn create(&mut self, file: &SourceFile) -> Result<ResourceHandle>;

    /// Releases a handle previously returned by [`create`](Self::create).
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown or was already released.
    fn release(&mut self, handle: &ResourceHandle) -> Result<()>;
}
