use std::{env, time::Duration};

use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use sw_listing_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_FETCH_TIMEOUT, DEFAULT_LISTING_PORT,
};
use time::{format_description::well_known::Iso8601, OffsetDateTime};

use crate::{
    events::QueryParams,
    widget::{WidgetOptions, WidgetSettings},
};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Startup Weekend event listing - sortable HTML table of SWOOP events"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $SW_LISTING_CONFIG, ./listing.toml,
    /// $XDG_CONFIG_HOME/sw-event-listing/listing.toml, /etc/sw-event-listing/listing.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "SW_LISTING_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(long, env = "SW_LISTING_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SW_LISTING_PORT")]
    pub port: Option<u16>,

    /// Events API endpoint
    #[arg(short, long, env = "SW_LISTING_EVENTS_URL")]
    pub events_url: Option<String>,

    /// Query parameter added to the events request, as key=value (repeatable)
    #[arg(short, long = "query", value_parser = parse_query_pair)]
    #[serde(skip)]
    pub query_args: Vec<(String, String)>,

    /// Query parameters from the config file's [query] table
    #[arg(skip)]
    pub query: Option<QueryParams>,

    /// Events request timeout in seconds
    #[arg(short, long, env = "SW_LISTING_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// HTTP User-Agent header for events API requests
    #[arg(short, long, env = "SW_LISTING_USER_AGENT")]
    pub user_agent: Option<String>,
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    if key.is_empty() {
        return Err(format!("empty query key in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_LISTING_PORT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT))
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("sw-listing/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Widget settings from the file's [query] table overlaid with --query pairs
    pub fn widget_settings(&self) -> WidgetSettings {
        let query = match (&self.query, self.query_args.is_empty()) {
            (None, true) => None,
            (file_query, _) => {
                let mut query = file_query.clone().unwrap_or_default();
                query.extend_from(&self.query_args.iter().cloned().collect());
                Some(query)
            }
        };

        WidgetSettings::merge(WidgetOptions {
            url: self.events_url.clone(),
            query,
        })
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    merge_config(Cli::parse())
}

fn merge_config(cli_args: Cli) -> Cli {
    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("SW_LISTING_CONFIG", "listing.toml")
    };

    if let Some(path) = source.path() {
        // Logger isn't installed yet
        eprintln!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_else(|e| {
        eprintln!("{}, falling back to defaults", e);
        Cli::default()
    });

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        host: cli_args.host.or(file_config.host),
        port: cli_args.port.or(file_config.port),
        events_url: cli_args.events_url.or(file_config.events_url),
        query_args: cli_args.query_args,
        query: file_config.query,
        timeout_secs: cli_args.timeout_secs.or(file_config.timeout_secs),
        user_agent: cli_args.user_agent.or(file_config.user_agent),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
