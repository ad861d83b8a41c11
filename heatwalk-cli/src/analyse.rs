//! Analyse command implementation for the Heatwalk CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use heatwalk_core::ProximityBands;
use heatwalk_scorer::{load_sessions, run_analysis};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::write_artefacts;
use crate::{ARG_CATALOG, ARG_OUT_DIR, ARG_SESSION_LOG, CliError, ENV_CATALOG, catalog};

const DEFAULT_SESSION_LOG: &str = "user_sessions_data.json";

/// CLI arguments for the `analyse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Aggregate collected visitor sessions against the site \
                 catalogue, fit the interest model, and write heatmap \
                 artefacts. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Infer interest and render heatmaps from session data"
)]
#[ortho_config(prefix = "HEATWALK")]
pub(crate) struct AnalyseArgs {
    /// Path to the site catalogue JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the append-only session log.
    #[arg(long = ARG_SESSION_LOG, value_name = "path")]
    #[serde(default)]
    pub(crate) session_log: Option<Utf8PathBuf>,
    /// Directory receiving the JSON and HTML artefacts.
    #[arg(long = ARG_OUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) out_dir: Option<Utf8PathBuf>,
}

impl AnalyseArgs {
    fn into_config(self) -> Result<AnalyseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyseConfig::try_from(merged)
    }
}

/// Resolved `analyse` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyseConfig {
    /// Path to the site catalogue JSON file.
    pub(crate) catalog: Utf8PathBuf,
    /// Path to the session log; absent is an expected state.
    pub(crate) session_log: Utf8PathBuf,
    /// Directory receiving the four artefacts.
    pub(crate) out_dir: Utf8PathBuf,
}

impl TryFrom<AnalyseArgs> for AnalyseConfig {
    type Error = CliError;

    fn try_from(args: AnalyseArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        Ok(Self {
            catalog,
            session_log: args
                .session_log
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SESSION_LOG)),
            out_dir: args.out_dir.unwrap_or_else(|| Utf8PathBuf::from(".")),
        })
    }
}

pub(crate) fn run_analyse(args: AnalyseArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let sites = catalog::load_catalog(&config.catalog)?;
    let sessions = load_sessions(&config.session_log);
    let analysis = run_analysis(&sessions, &sites, &ProximityBands::default());
    write_artefacts(&config.out_dir, &analysis, &sites)
}
