//! Application layer: navigation state, drag mode and event routing.
//!
//! # Architecture
//!
//! ```text
//! Device Event → InputRouter → NavigationState mutation → Actions → Host
//!                    │                                        ↑
//!                    └── pointer drag → slider mapping ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Render effects returned to the host
//! - [`handler`]: Events, the input router and its drag state machine
//! - [`modes`]: Drag session state
//! - [`state`]: Ordered items and the current index
//!
//! # Example
//!
//! ```rust
//! use seqview::app::{Event, InputRouter};
//! use seqview::resources::ObjectUrlRegistry;
//! use seqview::ui::FixedSurface;
//!
//! let surface = FixedSurface::new(200.0, 40.0, 0.0);
//! let mut router = InputRouter::new(ObjectUrlRegistry::default());
//! let actions = router.handle_event(&surface, &Event::Wheel { delta_y: 1.0 })?;
//! assert!(actions.is_empty());
//! # Ok::<(), seqview::ViewerError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{Event, InputRouter, Key};
pub use modes::DragMode;
pub use state::NavigationState;
