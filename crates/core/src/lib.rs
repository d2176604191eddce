//! Startup Weekend event listing core library
//!
//! Shared pieces for the listing service:
//! - Configuration discovery and loading (XDG-compliant)
//! - Application-wide constants

mod config;

pub use config::{find_config_file, load_config, ConfigError, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "sw-event-listing";

/// Default listing server port
pub const DEFAULT_LISTING_PORT: u16 = 9810;

/// SWOOP endpoint the widget reads events from unless configured otherwise
pub const DEFAULT_EVENTS_URL: &str = "http://swoop.startupweekend.org/events";

/// Request timeout for the events fetch, in seconds
pub const DEFAULT_FETCH_TIMEOUT: u64 = 20;
