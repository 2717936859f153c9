//! The `logic` command line.
//!
//! Every subcommand loads a JSON tree from a file into a [`Document`],
//! runs one query or edit and prints the result. Failures are returned as
//! [`LogicError`]s and rendered by miette.

use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::args::{Command, LogicArgs};
use crate::codec;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::errors::{EditError, LogicError};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = LogicArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    execute(args.command, config)?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "logic=debug",
        _ => "logic=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

pub fn execute(command: Command, config: EditorConfig) -> Result<(), LogicError> {
    match command {
        Command::Inspect { file } => {
            let document = load_document(&file, config)?;
            output::print_outline(document.root())
                .map_err(|source| LogicError::io("<stdout>", source))?;
        }
        Command::Find { file, id } => {
            let mut document = load_document(&file, config)?;
            let node = document.find(id).ok_or(EditError::NotFound { id })?;
            println!("{}", codec::encode_pretty(&node)?);
        }
        Command::Path {
            file,
            id,
            include_top_level,
        } => {
            let document = load_document(&file, config)?;
            let path = document
                .path_to(id, include_top_level)
                .ok_or(EditError::NotFound { id })?;
            output::print_path(&path).map_err(|source| LogicError::io("<stdout>", source))?;
        }
        Command::Delete { file, id, output } => {
            let mut document = load_document(&file, config)?;
            document.try_delete(id)?;
            write_tree(&document, output.as_deref())?;
        }
        Command::Copy { file, id, shallow } => {
            let mut document = load_document(&file, config)?;
            let copy = document
                .copy_node(id, !shallow)
                .ok_or(EditError::NotFound { id })?;
            println!("{}", codec::encode_pretty(&copy)?);
        }
        Command::Normalize { file, output } => {
            let mut document = load_document(&file, config)?;
            document.normalize();
            write_tree(&document, output.as_deref())?;
        }
    }
    Ok(())
}

fn load_document(path: &Path, config: EditorConfig) -> Result<Document, LogicError> {
    let name = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| LogicError::io(&name, source))?;
    let root = codec::decode_named(&name, &text)?;
    Ok(Document::with_config(root, config))
}

fn write_tree(document: &Document, output: Option<&Path>) -> Result<(), LogicError> {
    let json = codec::encode_pretty(document.root())?;
    match output {
        Some(path) => {
            fs::write(path, json).map_err(|source| LogicError::io(path.display().to_string(), source))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

