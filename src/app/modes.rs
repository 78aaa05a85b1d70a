//! Drag mode of the slider thumb.
//!
//! The thumb position has two possible authorities:
//! - **Idle**: the thumb is derived from the current index on every render
//! - **Dragging**: the thumb follows the pointer and index-driven renders
//!   leave it alone
//!
//! Release (or cancel) hands authority back to the index with one final
//! re-snap of the thumb.
//!
//! # Example
//!
//! ```rust
//! use seqview::app::DragMode;
//!
//! let mode = DragMode::Dragging { pointer_id: 1 };
//! assert!(mode.is_dragging());
//! assert!(mode.owns(1));
//! assert!(!mode.owns(2));
//! ```

/// Ephemeral drag session, present only between pointer-down and
/// pointer-up or pointer-cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Thumb position is derived from the current index.
    #[default]
    Idle,

    /// Thumb position follows the captured pointer.
    Dragging {
        /// Host pointer id captured at pointer-down.
        pointer_id: i64,
    },
}

impl DragMode {
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Whether events from `pointer_id` belong to the active drag.
    #[must_use]
    pub const fn owns(self, pointer_id: i64) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging { pointer_id: captured } => captured == pointer_id,
        }
    }
}
