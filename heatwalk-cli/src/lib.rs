//! Command-line interface for the Heatwalk analysis pipeline.
#![forbid(unsafe_code)]

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error;

mod analyse;
mod catalog;
mod render;

pub(crate) const ARG_SESSION_LOG: &str = "session-log";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_OUT_DIR: &str = "out-dir";
pub(crate) const ENV_CATALOG: &str = "HEATWALK_CMDS_ANALYSE_CATALOG";

/// Run the Heatwalk CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyse(args) => analyse::run_analyse(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "heatwalk",
    about = "Interest inference and heatmap rendering for historical sites",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Infer site interest from collected sessions and render heatmaps.
    Analyse(analyse::AnalyseArgs),
}

/// Errors emitted by the Heatwalk CLI.
///
/// Keep this error type reasonably small, as the CLI helpers return
/// `Result<_, CliError>` throughout.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The site catalogue file does not exist.
    #[error("catalogue {path:?} does not exist")]
    MissingCatalog {
        path: Utf8PathBuf,
    },
    /// Reading the site catalogue failed.
    #[error("failed to read catalogue {path:?}: {source}")]
    ReadCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalogue JSON could not be decoded.
    #[error("failed to parse catalogue {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serializing a JSON artefact failed.
    #[error("failed to serialize {artefact}: {source}")]
    SerializeArtefact {
        artefact: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// Writing an output artefact failed.
    #[error("failed to write {path:?}: {source}")]
    WriteArtefact {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
