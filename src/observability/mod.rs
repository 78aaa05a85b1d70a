//! Tracing setup for hosts that want log output.
//!
//! The core emits `tracing` events and spans everywhere (one `handle_event`
//! span per routed event); nothing is printed until a subscriber is installed.
//!
//! # Configuration
//!
//! Filter level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use seqview::observability::init_tracing;
//! use seqview::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("viewer mounted");
//! ```

mod init;

pub use init::init_tracing;
