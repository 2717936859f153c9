//! Command-line arguments and subcommands for the `logic` binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::id::NodeId;

#[derive(Debug, Parser)]
#[command(
    name = "logic",
    version,
    about = "Inspect and edit Logic syntax trees stored as {type, data} JSON."
)]
pub struct LogicArgs {
    /// Editor configuration file (YAML or JSON).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log edits and cache activity to stderr (-vv for more).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print an outline of the tree.
    Inspect {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the node with the given id as JSON.
    Find { file: PathBuf, id: NodeId },
    /// Print the chain of nodes from the root down to a node.
    Path {
        file: PathBuf,
        id: NodeId,
        /// Also list root wrappers such as the program itself.
        #[arg(long)]
        include_top_level: bool,
    },
    /// Delete a node and write the resulting tree.
    Delete {
        file: PathBuf,
        id: NodeId,
        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a copy of a node with fresh ids.
    Copy {
        file: PathBuf,
        id: NodeId,
        /// Only give the node itself a new id.
        #[arg(long)]
        shallow: bool,
    },
    /// Normalise placeholders throughout the tree.
    Normalize {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
