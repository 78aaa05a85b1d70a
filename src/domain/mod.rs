//! Domain layer for the viewer core.
//!
//! Types here know nothing about input devices or rendering surfaces.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Loaded files, opaque resource handles and viewer items
//! - [`sequence`]: Filename ordering by embedded numeric token
//!
//! # Examples
//!
//! ```
//! use seqview::domain::{order, SourceFile};
//!
//! let files = vec![
//!     SourceFile::new("frame10.png", vec![]),
//!     SourceFile::new("frame9.png", vec![]),
//! ];
//! let ordered = order(files);
//! assert_eq!(ordered[0].name, "frame9.png");
//! ```

pub mod error;
pub mod item;
pub mod sequence;

pub use error::{Result, ViewerError};
pub use item::{Item, ResourceHandle, SourceFile};
pub use sequence::{compare_names, numeric_token, order, Named};
