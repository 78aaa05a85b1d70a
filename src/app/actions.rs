//! Render effects produced by the input router.
//!
//! The core never touches a rendering surface. Each handled event returns a
//! `Vec<Action>` which the host shell applies in order: assigning the display
//! source, moving the thumb, writing ARIA values, capturing the pointer.
//!
//! # Example
//!
//! ```rust
//! use seqview::app::Action;
//!
//! let actions = vec![
//!     Action::SetSliderVisible { visible: true },
//!     Action::RenderThumb { offset: 80.0, value_now: 50.0 },
//! ];
//! assert_eq!(
//!     actions[1].to_json()?,
//!     r#"{"type":"render_thumb","offset":80.0,"value_now":50.0}"#
//! );
//! # Ok::<(), seqview::ViewerError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::item::ResourceHandle;
use serde::{Deserialize, Serialize};

/// Commands for the display sink and slider surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Shows the image behind `handle` and hides the placeholder.
    ShowImage {
        handle: ResourceHandle,
    },

    /// Clears the display source and shows the placeholder.
    ShowPlaceholder,

    /// Shows or hides the whole slider.
    SetSliderVisible {
        visible: bool,
    },

    /// Index-driven thumb placement.
    ///
    /// `value_now` is written to both the thumb's and the track's
    /// `aria-valuenow`, which are kept identical.
    RenderThumb {
        offset: f64,
        value_now: f64,
    },

    /// Pointer-driven thumb placement during a drag. Pixel position only.
    DragThumb {
        offset: f64,
    },

    /// Routes all further events from this pointer to the thumb.
    CapturePointer {
        pointer_id: i64,
    },

    /// Ends a pointer capture started by [`Action::CapturePointer`].
    ReleasePointer {
        pointer_id: i64,
    },

    /// Suppresses the host's default handling of the triggering event.
    PreventDefault,
}

impl Action {
    /// Serializes the action for a JavaScript shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be serialized.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
