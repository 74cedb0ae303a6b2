//! # Logger
//!
//! Tracing bootstrap shared by the site binaries.
//! Console output goes to stderr so stdout stays reserved for program output,
//! with ANSI colours only when stderr is a terminal.
//! File output is optional, rotated, and written by a non-blocking worker.
//!
//! `RUST_LOG` is honoured unless an explicit [`LoggerBuilder::env_filter`] is set.
//!
//! ## Example
//!
//! ```rust
//! # use site_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("site-brand")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io::{self, IsTerminal};
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

/// Builder state: no name yet.
#[derive(Debug)]
pub struct NoName;
/// Builder state: named.
#[derive(Debug)]
pub struct WithName(String);
/// Builder state: console only.
#[derive(Debug)]
pub struct NoFile;
/// Builder state: file output configured.
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures and installs the global tracing subscriber.
///
/// `init` is only reachable once a name is set; file-only knobs only once a path is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), config: self.config, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Caps how many rotated files stay on disk; older ones are pruned by the appender.
    /// Must be non-zero.
    #[must_use = "setters return the updated builder"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// How often a new file is started. Defaults to daily.
    #[must_use = "setters return the updated builder"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Switches the file layer to one JSON object per line. Console output stays compact.
    #[must_use = "setters return the updated builder"]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Fallback level when neither `RUST_LOG` nor [`LoggerBuilder::env_filter`] names a target.
    #[must_use = "setters return the updated builder"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit filter directives (e.g. `site_brand=debug,site_logger=warn`).
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "setters return the updated builder"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Turns the stderr layer on or off. Turning it off without a path leaves nothing to
    /// write to, and [`LoggerBuilder::init`] refuses that.
    #[must_use = "setters return the updated builder"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Adds rolling files under `path` (created on init), named `<name>.<date>.log`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: PhantomData }
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   an invalid filter, or when no layer is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be built.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            let ansi = io::stderr().is_terminal();
            layers.push(layer().compact().with_writer(io::stderr).with_ansi(ansi).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(&path)
                .context(format!("Log directory: {}", path.display()))?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);
            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            layers.push(if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system. Holds the file worker guard, if any.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`]: console on, `INFO`, no files.
    #[must_use = "call `.name(..)` and `.init()` to install the subscriber"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file_state: PhantomData }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing file output");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    let invalid = |message: &'static str| LoggerError::InvalidConfiguration {
        message: message.into(),
        context: Some(format!("logger `{name}`").into()),
    };

    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "name must not be blank; it prefixes every log file".into(),
            context: None,
        });
    }
    if config.path.is_some() && config.max_files == 0 {
        return Err(invalid("max_files must be at least 1 when file output is enabled"));
    }

    Ok(())
}

/// Explicit directives win over `RUST_LOG`; otherwise `RUST_LOG` is read leniently on top of
/// the default level.
fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let defaults = EnvFilter::builder().with_default_directive(config.level.into());
    let Some(directives) = config.env_filter.as_deref() else {
        return Ok(defaults.from_env_lossy());
    };

    defaults.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("cannot parse filter `{directives}`: {e}").into(),
        context: None,
    })
}
