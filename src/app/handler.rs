//! Event routing and the drag state machine.
//!
//! [`InputRouter`] owns the navigation state, the drag mode and the handle
//! provider. Every device event goes through [`InputRouter::handle_event`],
//! which mutates state and returns the render [`Action`]s for the host.
//!
//! # Thumb authority
//!
//! Two code paths may write the thumb position:
//!
//! ```text
//! Idle      index change → render → RenderThumb (from index)
//! Dragging  pointer move → DragThumb (from pointer) → maybe ShowImage
//!           pointer up   → RenderThumb (re-snap to the final index)
//! ```
//!
//! While a drag is active the full render path skips the thumb, so a wheel
//! step or keyboard step during a drag cannot fight the pointer.
//!
//! # Event Mapping
//!
//! - `Wheel`: one step per event in the sign of `delta_y`, always prevents
//!   default scrolling while a sequence is loaded
//! - `Key(ArrowUp | ArrowDown)`: one step, no prevent-default
//! - `ThumbPointerDown` / `PointerMove` / `PointerUp` / `PointerCancel`: drag
//! - `TrackClick`: seek to the position under the pointer
//! - `Load`: order, mint handles, replace the sequence
//! - `Refresh`: re-render everything, e.g. after the host resized the slider
//! - `EndSession`: release every handle
//!
//! # Example
//!
//! ```rust
//! use seqview::app::{Action, Event, InputRouter};
//! use seqview::resources::ObjectUrlRegistry;
//! use seqview::ui::FixedSurface;
//! use seqview::SourceFile;
//!
//! let surface = FixedSurface::new(200.0, 40.0, 0.0);
//! let mut router = InputRouter::new(ObjectUrlRegistry::default());
//!
//! router.handle_event(&surface, &Event::Load {
//!     files: vec![SourceFile::new("f2.png", vec![]), SourceFile::new("f1.png", vec![])],
//! })?;
//! let actions = router.handle_event(&surface, &Event::Wheel { delta_y: 120.0 })?;
//!
//! assert_eq!(actions[0], Action::PreventDefault);
//! assert_eq!(router.state().current_item().map(|i| i.name.as_str()), Some("f2.png"));
//! # Ok::<(), seqview::ViewerError>(())
//! ```

use crate::app::{Action, DragMode, NavigationState};
use crate::domain::error::Result;
use crate::domain::item::{Item, SourceFile};
use crate::domain::sequence::order;
use crate::resources::HandleProvider;
use crate::ui::slider::{self, SliderSurface};
use serde::{Deserialize, Serialize};

/// Keys the viewer distinguishes.
///
/// Serialized as the DOM `KeyboardEvent.key` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    /// Any other key, ignored by the router.
    Other(String),
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        match key.as_str() {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => Self::Other(key),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::ArrowUp => "ArrowUp".to_string(),
            Key::ArrowDown => "ArrowDown".to_string(),
            Key::Other(key) => key,
        }
    }
}

/// Device and lifecycle events delivered by the host, in delivery order.
///
/// The JSON form is internally tagged so a JavaScript shell can post events
/// as plain objects:
///
/// ```json
/// {"type": "pointer_move", "pointer_id": 1, "client_y": 132.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Files picked by the user. An empty set keeps the current session.
    Load { files: Vec<SourceFile> },

    /// Mouse wheel over the viewer.
    Wheel { delta_y: f64 },

    /// Key pressed anywhere in the document.
    Key { key: Key },

    /// Pointer pressed on the slider thumb.
    ThumbPointerDown { pointer_id: i64 },

    /// Pointer moved; only the captured pointer is honoured.
    PointerMove { pointer_id: i64, client_y: f64 },

    /// Captured pointer released.
    PointerUp { pointer_id: i64 },

    /// Captured pointer lost, e.g. the gesture was taken over by the host.
    PointerCancel { pointer_id: i64 },

    /// Click on the slider track outside the thumb.
    TrackClick { client_y: f64 },

    /// Re-render display and thumb from the current state.
    Refresh,

    /// Viewer is going away; release every handle.
    EndSession,
}

impl Event {
    /// Decodes an event posted by the UI shell.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Decode`](crate::ViewerError::Decode) when the
    /// payload is not a valid event.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Short name used in tracing spans; avoids dumping file bytes.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::Wheel { .. } => "wheel",
            Self::Key { .. } => "key",
            Self::ThumbPointerDown { .. } => "thumb_pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp { .. } => "pointer_up",
            Self::PointerCancel { .. } => "pointer_cancel",
            Self::TrackClick { .. } => "track_click",
            Self::Refresh => "refresh",
            Self::EndSession => "end_session",
        }
    }
}

/// Owns the viewer session and turns events into render actions.
///
/// Handle lifetime: every handle minted by `P` is released exactly once, when
/// its sequence is replaced by a non-empty load, on [`end_session`], or when
/// the router is dropped with a live sequence.
///
/// [`end_session`]: InputRouter::end_session
#[derive(Debug)]
pub struct InputRouter<P: HandleProvider> {
    nav: NavigationState,
    drag: DragMode,
    provider: P,
}

impl<P: HandleProvider> InputRouter<P> {
    /// Creates a router with an empty sequence.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            nav: NavigationState::new(),
            drag: DragMode::Idle,
            provider,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.nav
    }

    #[must_use]
    pub const fn drag_mode(&self) -> DragMode {
        self.drag
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Processes one event and returns the actions to apply, in order.
    ///
    /// Slider geometry is read from `surface` whenever the event needs it.
    ///
    /// # Errors
    ///
    /// Only `Load` can fail, when the handle provider refuses to create a
    /// handle.
    pub fn handle_event<S>(&mut self, surface: &S, event: &Event) -> Result<Vec<Action>>
    where
        S: SliderSurface + ?Sized,
    {
        let _span = tracing::debug_span!(
            "handle_event",
            event_type = event.kind(),
            len = self.nav.len(),
            dragging = self.drag.is_dragging()
        )
        .entered();

        match event {
            Event::Load { files } => self.load(surface, files),
            Event::Wheel { delta_y } => Ok(self.wheel(surface, *delta_y)),
            Event::Key { key } => Ok(self.key(surface, key)),
            Event::ThumbPointerDown { pointer_id } => Ok(self.begin_drag(*pointer_id)),
            Event::PointerMove {
                pointer_id,
                client_y,
            } => Ok(self.drag_to(surface, *pointer_id, *client_y)),
            Event::PointerUp { pointer_id } | Event::PointerCancel { pointer_id } => {
                Ok(self.end_drag(surface, *pointer_id))
            }
            Event::TrackClick { client_y } => Ok(self.track_click(surface, *client_y)),
            Event::Refresh => Ok(self.render(surface)),
            Event::EndSession => Ok(self.end_session()),
        }
    }

    /// Orders `files`, mints a handle for each and replaces the sequence.
    ///
    /// An empty `files` is ignored and the current session stays as it was.
    /// If the provider fails part way, the handles created so far are
    /// released and the current session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when a handle cannot be created.
    pub fn load<S>(&mut self, surface: &S, files: &[SourceFile]) -> Result<Vec<Action>>
    where
        S: SliderSurface + ?Sized,
    {
        if files.is_empty() {
            tracing::debug!("empty selection, keeping current session");
            return Ok(vec![]);
        }

        let ordered = order(files.iter().collect::<Vec<_>>());
        let mut items = Vec::with_capacity(ordered.len());
        for file in ordered {
            match self.provider.create(file) {
                Ok(handle) => items.push(Item::new(file.name.clone(), handle)),
                Err(e) => {
                    tracing::debug!(name = %file.name, error = %e, "handle creation failed, rolling back");
                    self.release_all(items);
                    return Err(e);
                }
            }
        }

        let replaced = self.nav.load(items);
        self.release_all(replaced);

        Ok(self.render(surface))
    }

    /// Releases every handle and returns the empty display state.
    ///
    /// Every handle is attempted. A failed release is logged and the empty
    /// state is still returned, so the host stops showing revoked handles.
    pub fn end_session(&mut self) -> Vec<Action> {
        let items = self.nav.clear();
        tracing::debug!(count = items.len(), "ending session");
        self.release_all(items);
        self.render_empty()
    }

    fn wheel<S>(&mut self, surface: &S, delta_y: f64) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        if self.nav.is_empty() {
            return vec![];
        }

        let mut actions = vec![Action::PreventDefault];
        let delta = if delta_y > 0.0 {
            1
        } else if delta_y < 0.0 {
            -1
        } else {
            return actions;
        };

        if self.nav.step(delta) {
            actions.extend(self.render(surface));
        }
        actions
    }

    fn key<S>(&mut self, surface: &S, key: &Key) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        if self.nav.is_empty() {
            return vec![];
        }

        let delta = match key {
            Key::ArrowUp => -1,
            Key::ArrowDown => 1,
            Key::Other(_) => return vec![],
        };

        if self.nav.step(delta) {
            self.render(surface)
        } else {
            vec![]
        }
    }

    fn begin_drag(&mut self, pointer_id: i64) -> Vec<Action> {
        if self.nav.is_empty() || self.drag.is_dragging() {
            return vec![];
        }

        tracing::debug!(pointer_id, "drag started");
        self.drag = DragMode::Dragging { pointer_id };
        vec![Action::PreventDefault, Action::CapturePointer { pointer_id }]
    }

    fn drag_to<S>(&mut self, surface: &S, pointer_id: i64, client_y: f64) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        if !self.drag.owns(pointer_id) {
            return vec![];
        }

        let geometry = surface.geometry();
        let offset = slider::pointer_offset(client_y, surface.track_top(), geometry);
        let mut actions = vec![Action::PreventDefault, Action::DragThumb { offset }];

        let index = slider::offset_to_index(offset, self.nav.len(), geometry);
        tracing::trace!(client_y, offset, index, "drag moved");

        if self.nav.current_index().is_some_and(|current| current != index) {
            self.nav.set_current_index_silently(index);
            if let Some(item) = self.nav.current_item() {
                actions.push(Action::ShowImage {
                    handle: item.handle.clone(),
                });
            }
        }
        actions
    }

    fn end_drag<S>(&mut self, surface: &S, pointer_id: i64) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        if !self.drag.owns(pointer_id) {
            return vec![];
        }

        self.drag = DragMode::Idle;
        tracing::debug!(pointer_id, index = ?self.nav.current_index(), "drag ended");
        vec![
            Action::ReleasePointer { pointer_id },
            self.thumb_action(surface),
        ]
    }

    fn track_click<S>(&mut self, surface: &S, client_y: f64) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        if self.nav.is_empty() {
            return vec![];
        }

        let geometry = surface.geometry();
        let offset = slider::pointer_offset(client_y, surface.track_top(), geometry);
        let index = slider::offset_to_index(offset, self.nav.len(), geometry);

        if self.nav.seek(index) {
            self.render(surface)
        } else {
            vec![]
        }
    }

    /// Full render: display, slider visibility and, unless a drag owns the
    /// thumb, the index-derived thumb position.
    fn render<S>(&self, surface: &S) -> Vec<Action>
    where
        S: SliderSurface + ?Sized,
    {
        let Some(item) = self.nav.current_item() else {
            return self.render_empty();
        };

        let mut actions = vec![
            Action::ShowImage {
                handle: item.handle.clone(),
            },
            Action::SetSliderVisible { visible: true },
        ];
        if !self.drag.is_dragging() {
            actions.push(self.thumb_action(surface));
        }
        actions
    }

    fn render_empty(&self) -> Vec<Action> {
        let mut actions = vec![
            Action::ShowPlaceholder,
            Action::SetSliderVisible { visible: false },
        ];
        if !self.drag.is_dragging() {
            actions.push(Action::RenderThumb {
                offset: 0.0,
                value_now: 0.0,
            });
        }
        actions
    }

    fn thumb_action<S>(&self, surface: &S) -> Action
    where
        S: SliderSurface + ?Sized,
    {
        let Some(index) = self.nav.current_index() else {
            return Action::RenderThumb {
                offset: 0.0,
                value_now: 0.0,
            };
        };

        let len = self.nav.len();
        Action::RenderThumb {
            offset: slider::index_to_offset(index, len, surface.geometry()),
            value_now: slider::accessible_value(index, len),
        }
    }

    /// Releases items that have already left the sequence. Failures are
    /// logged; the state has moved on and must still render.
    fn release_all(&mut self, items: Vec<Item>) {
        for item in items {
            if let Err(e) = self.provider.release(&item.handle) {
                tracing::warn!(handle = %item.handle, error = %e, "failed to release handle");
            }
        }
    }
}

impl<P: HandleProvider> Drop for InputRouter<P> {
    fn drop(&mut self) {
        let items = self.nav.clear();
        if !items.is_empty() {
            tracing::debug!(count = items.len(), "releasing handles on drop");
            self.release_all(items);
        }
    }
}
