//! Seqview: navigation core for a browser image sequence viewer.
//!
//! The user picks a set of local images, they are ordered by the number
//! embedded in each filename, and then browsed with the mouse wheel, the arrow
//! keys, or a vertical slider whose thumb stays in sync with the current image.
//! This crate is everything between the device events and the DOM:
//! - Filename ordering by embedded sequence number
//! - A clamped current index over the ordered items
//! - Index ↔ thumb offset projection for the slider
//! - A drag state machine deciding who owns the thumb position
//! - Exactly-once release of the per-file resource handles
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  UI shell (JavaScript / wasm-bindgen glue)          │  ← Not in this crate
//! └─────────────────────────────────────────────────────┘
//!          │ Event (JSON)              ▲ Action (JSON)
//!          ▼                           │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - InputRouter: event routing, drag state machine   │
//! │  - NavigationState: items + current index           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Domain Layer  │   │ Resources     │
//! │ (ui/)         │   │ (domain/)     │   │ (resources/)  │
//! │ - Geometry    │   │ - Items       │   │ - Provider    │
//! │ - Slider math │   │ - Sequencer   │   │ - Object URLs │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Navigation state, drag mode, events and actions
//! - [`domain`]: Items, handles, ordering and errors
//! - [`resources`]: Handle provider trait and the object-URL registry
//! - [`ui`]: Slider geometry and mapping functions
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The shell passes configuration either as string attributes (for example the
//! `data-*` attributes of the mount element) or as a TOML document:
//!
//! ```toml
//! trace_level = "debug"
//! handle_scheme = "blob:gallery"
//! log_format = "pretty"
//! ```
//!
//! # Example
//!
//! ```rust
//! use seqview::{initialize, Action, Config, Event, SourceFile};
//! use seqview::ui::FixedSurface;
//!
//! let surface = FixedSurface::new(200.0, 40.0, 0.0);
//! let mut router = initialize(&Config::default());
//!
//! let actions = router.handle_event(&surface, &Event::Load {
//!     files: vec![
//!         SourceFile::new("b2.png", vec![]),
//!         SourceFile::new("a10.png", vec![]),
//!         SourceFile::new("c.png", vec![]),
//!     ],
//! })?;
//! assert!(matches!(actions[0], Action::ShowImage { .. }));
//!
//! let names: Vec<&str> = router.state().items().iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, ["b2.png", "a10.png", "c.png"]);
//! # Ok::<(), seqview::ViewerError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-unknown-unknown` behind a thin JavaScript shell
//! - Runs natively as well; nothing here depends on the browser

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod resources;
pub mod ui;

pub mod observability;

pub use app::{Action, DragMode, Event, InputRouter, Key, NavigationState};
pub use domain::{Item, ResourceHandle, Result, SourceFile, ViewerError};
pub use resources::{HandleProvider, ObjectUrlRegistry};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Handle prefix used when the configuration does not name one.
pub const DEFAULT_HANDLE_SCHEME: &str = "blob:seqview";

/// Output style of the tracing fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line events.
    #[default]
    Compact,
    /// Multi-line, human-oriented events.
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Viewer configuration supplied by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. `RUST_LOG` wins when set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Prefix of handles minted by the built-in registry.
    ///
    /// Default: `"blob:seqview"`
    pub handle_scheme: String,

    /// Log output style. Default: compact
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            handle_scheme: DEFAULT_HANDLE_SCHEME.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Parses configuration from string attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: String → `Option<String>` (blank values ignored)
    /// - `handle_scheme`: String, trailing `/` trimmed (falls back to the
    ///   default when blank)
    /// - `log_format`: `compact` | `pretty` (falls back to compact)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use seqview::{Config, LogFormat};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("handle_scheme".to_string(), "blob:gallery/".to_string());
    /// map.insert("log_format".to_string(), "loud".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.handle_scheme, "blob:gallery");
    /// assert_eq!(config.log_format, LogFormat::Compact);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let trace_level = config
            .get("trace_level")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let handle_scheme = config
            .get("handle_scheme")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HANDLE_SCHEME.to_string());

        let log_format = config
            .get("log_format")
            .and_then(|s| {
                let parsed = LogFormat::parse(s);
                if parsed.is_none() {
                    tracing::debug!(log_format = %s, "unknown log format, using default");
                }
                parsed
            })
            .unwrap_or_default();

        Self {
            trace_level,
            handle_scheme,
            log_format,
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Config`] if the document is not valid TOML, has
    /// values of the wrong type, or names an empty `handle_scheme`.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(contents)
            .map_err(|e| ViewerError::Config(format!("Failed to parse config TOML: {e}")))?;

        config.handle_scheme = config.handle_scheme.trim().trim_end_matches('/').to_string();
        if config.handle_scheme.is_empty() {
            return Err(ViewerError::Config(
                "handle_scheme must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Io`] if the file cannot be read and
    /// [`ViewerError::Config`] if its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates a router backed by an [`ObjectUrlRegistry`] using the configured
/// handle scheme.
///
/// Tracing is not installed here; hosts that want log output call
/// [`observability::init_tracing`] first.
#[must_use]
pub fn initialize(config: &Config) -> InputRouter<ObjectUrlRegistry> {
    tracing::debug!(handle_scheme = %config.handle_scheme, "initializing viewer");
    InputRouter::new(ObjectUrlRegistry::new(config.handle_scheme.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn map_values_are_trimmed() {
        let config = Config::from_map(&map(&[
            ("trace_level", " debug "),
            ("handle_scheme", "  "),
            ("log_format", "Pretty"),
        ]));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.handle_scheme, DEFAULT_HANDLE_SCHEME);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn toml_fills_missing_keys() {
        let config = Config::from_toml_str("trace_level = \"warn\"").unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert_eq!(config.handle_scheme, DEFAULT_HANDLE_SCHEME);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn toml_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("log_format = \"loud\""),
            Err(ViewerError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("handle_scheme = \"/\""),
            Err(ViewerError::Config(_))
        ));
    }

    #[test]
    fn initialize_uses_configured_scheme() {
        let config = Config {
            handle_scheme: "blob:gallery".to_string(),
            ..Config::default()
        };
        let mut router = initialize(&config);
        let surface = ui::FixedSurface::new(100.0, 20.0, 0.0);
        router
            .load(&surface, &[SourceFile::new("a.png", vec![])])
            .unwrap();
        assert_eq!(
            router.state().items()[0].handle.as_str(),
            "blob:gallery/1"
        );
    }
}
