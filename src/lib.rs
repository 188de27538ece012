//! Ceyland Property: a real-estate catalog with a terminal front-end.
//!
//! Visitors browse listings for sale and rent, narrow them with per-page
//! filters and sort orders, register or log in (mock), and post their own
//! ads. An administrator session swaps the public site for a back-office
//! dashboard with listing CRUD.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← Entry point
//! │  - typed commands (input)                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, session, modals                  │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ Catalog (catalog/)    │
//! │ - Text rendering      │          │ - Listing store       │
//! │ - Theming             │          │ - Filter / sort       │
//! │ - Components          │          │ - Seed data           │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths (infrastructure/)                          │
//! │  - Listing, forms, errors (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotated JSON file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `key=value` arguments on the command line, optionally layered over a TOML
//! file named by `config=<path>`:
//!
//! ```toml
//! seed_file = "~/listings.json"
//! trace_level = "debug"
//! data_dir = "/tmp/ceyland"
//! ```
//!
//! # Example
//!
//! ```rust
//! use ceyland::{handle_event, initialize, Config, Event, Page};
//!
//! let mut state = initialize(&Config::default());
//! let (render, _actions) = handle_event(&mut state, &Event::Navigate(Page::Rentals))?;
//! assert!(render);
//! assert_eq!(state.visible_listings().len(), 3);
//! # Ok::<(), ceyland::CeylandError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Modal, Page, Session};
pub use domain::{CeylandError, Listing, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use catalog::{initial_listings, load_seed_file, MemoryCatalog};
use infrastructure::expand_tilde;

/// Runtime configuration.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use ceyland::Config;
///
/// let mut args = BTreeMap::new();
/// args.insert("trace_level".to_string(), "debug".to_string());
///
/// let config = Config::from_map(&args)?;
/// assert_eq!(config.trace_level.as_deref(), Some("debug"));
/// assert!(config.seed_file.is_none());
/// # Ok::<(), ceyland::CeylandError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON array of listings to start from instead of the built-in twelve.
    pub seed_file: Option<String>,

    /// Tracing level or `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Where the trace file is written. Default: `~/.local/share/ceyland`
    pub data_dir: Option<String>,
}

impl Config {
    /// Parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Io`] if the file cannot be read and
    /// [`CeylandError::Config`] if it is not valid TOML or has unknown keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CeylandError::Config(format!("{}: {e}", path.display())))
    }

    /// Builds a config from `key=value` arguments.
    ///
    /// `config` names a TOML file loaded first; the other keys override it.
    /// Empty values clear the setting.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Config`] for unknown keys and whatever
    /// [`Config::from_file`] returns for the named file.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = match map.get("config") {
            Some(path) => Self::from_file(Path::new(&expand_tilde(path)))?,
            None => Self::default(),
        };

        for (key, value) in map {
            let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            match key.as_str() {
                "config" => {}
                "seed_file" => config.seed_file = value,
                "trace_level" => config.trace_level = value,
                "data_dir" => config.data_dir = value,
                other => return Err(CeylandError::Config(format!("unknown setting '{other}'"))),
            }
        }

        Ok(config)
    }
}

/// Builds the initial application state.
///
/// The catalog comes from `seed_file` when it loads cleanly; any failure is
/// logged and the built-in listings are used instead.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing ceyland");

    let catalog = config.seed_file.as_ref().map_or_else(
        || MemoryCatalog::from_seed(initial_listings()),
        |seed_file| {
            let path = expand_tilde(seed_file);
            load_seed_file(Path::new(&path)).and_then(MemoryCatalog::from_seed)
        },
    );

    let catalog = catalog.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "seed file rejected, using built-in listings");
        MemoryCatalog::from_seed(initial_listings()).unwrap_or_default()
    });

    AppState::new(catalog)
}
