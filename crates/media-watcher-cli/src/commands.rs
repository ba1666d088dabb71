use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "media-watcher")]
#[command(about = "Media gallery and file cleanup utility", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List media files under the root
    List {
        /// Media root (defaults to the configured root, then the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Interactively review files and mark them for deletion
    Review {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Mark a file as soon as it is viewed
        #[arg(long)]
        delete_on_view: bool,
    },
    /// Render deletion scripts for the given relative paths (stdin when omitted)
    Export {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Relative paths to include, one per argument
        rels: Vec<String>,
        /// Also place the POSIX script on the clipboard
        #[arg(long)]
        copy: bool,
        /// Directory the scripts are written into
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Permanently delete the given relative paths (stdin when omitted)
    Delete {
        #[arg(long)]
        root: Option<PathBuf>,
        rels: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Write a standalone gallery page into each selected folder
    Generate {
        #[arg(long)]
        root: Option<PathBuf>,
        /// Generate for the root and every immediate subfolder without prompting
        #[arg(long)]
        all: bool,
    },
    /// Print configuration values
    PrintConfig,
}
