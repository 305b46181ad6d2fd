use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "nadeshiko-panel",
    version,
    about = "Live Java to Nadeshiko translation panel"
)]
pub struct Cli {
    /// RON config file. Defaults to ./.nadeshiko_panel.ron when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the converter's Java sources and jars.
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Quiet period before an edit triggers a translation.
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Start with auto-update switched off.
    #[arg(long, global = true)]
    pub no_auto_update: bool,

    /// Queue refreshes behind a running translation instead of restarting it.
    #[arg(long, global = true)]
    pub coalesce: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Speak the panel protocol as JSON lines on stdin/stdout.
    Serve,
    /// Show the panel in the terminal for files on disk.
    Watch {
        /// Files to track; the first one starts as the active editor.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Translate one file and print the result.
    Translate { file: PathBuf },
}
