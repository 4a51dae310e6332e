pub mod report;

use crate::logging::LogConfig;
use crate::types::{CollisionPolicy, ScanOptions};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line arguments for rdsrfind
#[derive(Parser, Debug)]
#[command(name = "rdsrfind")]
#[command(about = "Find Radiation Dose Structured Reports and copy them to one folder")]
#[command(version)]
pub struct Cli {
    /// Folder to search; prompted for when omitted
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Destination folder; prompted for when omitted ("RDSR" in the current folder if left empty)
    #[arg(short, long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// What to do when two reports map to the same file name
    #[arg(short, long, default_value = "overwrite")]
    pub collision: CollisionArg,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Visit files in name order
    #[arg(long)]
    pub sorted: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Append to the log file instead of overwriting it
    #[arg(long, requires = "log_file")]
    pub append_log: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// No console logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Collision policy options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    /// Later file replaces the earlier copy
    Overwrite,
    /// Later files get a numeric suffix
    Suffix,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionArg::Suffix => CollisionPolicy::Suffix,
        }
    }
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .collision_policy(self.collision.into())
            .follow_symlinks(self.follow_symlinks)
            .sort_entries(self.sorted)
    }

    pub fn log_config(&self) -> LogConfig {
        let level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let mut config = LogConfig::default().level(level).console(!self.quiet);
        if let Some(path) = &self.log_file {
            config = config.file(path, !self.append_log);
        }
        config
    }
}
