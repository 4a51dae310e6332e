//! Logger construction from an explicit configuration
//!
//! The library only emits through the `log` facade. Binaries build a
//! [`LogConfig`] and install it once at startup.

use crate::error::{RdsrError, Result};
use env_logger::{Builder, Logger, Target};
use log::LevelFilter;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Level override for one module path (e.g. `rdsr_core::scan`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLevel {
    pub module: String,
    pub level: LevelFilter,
}

/// File sink settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,

    /// Truncate an existing file instead of appending to it
    pub overwrite: bool,
}

/// Logging configuration
///
/// # Example
///
/// ```
/// use rdsr_core::logging::LogConfig;
/// use log::LevelFilter;
///
/// let config = LogConfig::default()
///     .level(LevelFilter::Debug)
///     .module_level("rdsr_core::extraction", LevelFilter::Error)
///     .console(false);
///
/// assert_eq!(config.modules.len(), 1);
/// assert!(!config.console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for modules without an override
    pub level: LevelFilter,

    pub modules: Vec<ModuleLevel>,

    pub file: Option<LogFile>,

    /// Write to stderr
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            modules: Vec::new(),
            file: None,
            console: true,
        }
    }
}

impl LogConfig {
    /// Builder: Set default level
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Builder: Override the level of one module
    pub fn module_level(mut self, module: impl Into<String>, level: LevelFilter) -> Self {
        self.modules.push(ModuleLevel {
            module: module.into(),
            level,
        });
        self
    }

    /// Builder: Also log to a file
    pub fn file(mut self, path: impl Into<PathBuf>, overwrite: bool) -> Self {
        self.file = Some(LogFile {
            path: path.into(),
            overwrite,
        });
        self
    }

    /// Builder: Enable or disable stderr output
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Builds a logger without installing it
    ///
    /// Lines read `<timestamp> - <module> - <LEVEL> - <message>`. `RUST_LOG`
    /// directives are applied on top of the configured levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn build(&self) -> Result<Logger> {
        let file = match &self.file {
            Some(log_file) => Some(open_log_file(log_file)?),
            None => None,
        };

        let mut builder = Builder::new();
        builder.filter_level(self.level);
        for module in &self.modules {
            builder.filter_module(&module.module, module.level);
        }
        if let Ok(filters) = env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp_seconds(),
                record.target(),
                record.level(),
                record.args()
            )
        });
        builder.write_style(env_logger::WriteStyle::Never);
        builder.target(Target::Pipe(Box::new(LogSink {
            console: self.console,
            file,
        })));

        Ok(builder.build())
    }

    /// Builds the logger and installs it as the process logger
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a logger is
    /// already installed.
    pub fn install(&self) -> Result<()> {
        let logger = self.build()?;
        let max_level = logger.filter();
        log::set_boxed_logger(Box::new(logger))
            .map_err(|e| RdsrError::Setup(format!("Failed to install logger: {}", e)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

fn open_log_file(log_file: &LogFile) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if log_file.overwrite {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    Ok(options.open(&log_file.path)?)
}

/// Fans formatted records out to stderr and an optional file
struct LogSink {
    console: bool,
    file: Option<File>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.console {
            io::stderr().write_all(buf)?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.console {
            io::stderr().flush()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
