//! Resource handle layer.
//!
//! The viewer never keeps file bytes itself. Each loaded file is exchanged for
//! an opaque handle from a [`HandleProvider`], in a browser host an object URL.
//!
//! # Modules
//!
//! - `provider`: Handle provider trait implemented by hosts
//! - `registry`: In-memory object-URL style registry

pub mod provider;
pub mod registry;

pub use provider::HandleProvider;
pub use registry::ObjectUrlRegistry;
