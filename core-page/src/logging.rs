//! # Logging Infrastructure
//!
//! Configures structured logging with the `tracing` crate.
//!
//! ## Overview
//!
//! Hosts call [`init_logging`] once at startup. The default filter covers
//! the storefront crates at the configured level; a custom filter string
//! overrides it entirely.
//!
//! ## Usage
//!
//! ```ignore
//! use core_page::logging::{init_logging, LoggingConfig, LogLevel};
//!
//! let config = LoggingConfig::default().with_level(LogLevel::Debug);
//! init_logging(config)?;
//!
//! tracing::info!("storefront initialized");
//! ```

use crate::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::PageError;

#[cfg(not(target_arch = "wasm32"))]
use std::io;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Compact;
    }
}

/// Minimum log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level
    pub level: LogLevel,
    /// Custom filter string (e.g., "core_player=debug,core_page=trace")
    pub filter: Option<String>,
    /// Display target module in logs
    pub display_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            display_target: true,
        }
    }
}

impl LoggingConfig {
    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set custom filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Enable or disable target display
    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }
}

/// Initialize the logging system.
///
/// Call once during host startup; subsequent calls return an error because
/// a global subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.display_target)
        .with_writer(io::stdout);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(fmt_layer.pretty())
            .try_init()
            .map_err(|e| PageError::Config(format!("Failed to initialize logging: {}", e)))?,
        LogFormat::Compact => registry
            .with(fmt_layer.compact())
            .try_init()
            .map_err(|e| PageError::Config(format!("Failed to initialize logging: {}", e)))?,
    }

    Ok(())
}

/// Initialize logging for the WASM target.
///
/// Browser hosts forward `console` output themselves; tracing-subscriber's
/// registry machinery is not set up there.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_config: LoggingConfig) -> Result<()> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let base_level = match config.level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };

    let filter_string = if let Some(custom_filter) = &config.filter {
        custom_filter.clone()
    } else {
        format!(
            "core_page={},core_catalog={},core_player={},bridge_traits={}",
            base_level, base_level, base_level, base_level
        )
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| PageError::Config(format!("Invalid log filter: {}", e)))
}
