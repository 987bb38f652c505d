use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Promote versioned build artifacts from the staging directory into the legacy archive
#[derive(Parser, Debug)]
#[command(name = "legacy-promote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Staging directory with fresh build output (default: <root>/dist)
    #[arg(long, value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Archive directory (default: <root>/legacy)
    #[arg(long, value_name = "DIR")]
    pub archive: Option<PathBuf>,

    /// Config file (default: <root>/legacy-promote.toml, then the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resolve every already-archived release without asking
    /// (`--overwrite` or `--overwrite=true` replaces, `--overwrite=false` keeps)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub overwrite: Option<bool>,

    /// Ask once per already-archived release, even if config says otherwise
    #[arg(long, conflicts_with = "overwrite")]
    pub ask: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v shows created directories and collection counts)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output: auto, always, never
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,
}
