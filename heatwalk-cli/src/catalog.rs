//! Site catalogue loading for the Heatwalk CLI.

use camino::Utf8Path;
use geo::Coord;
use heatwalk_core::Site;
use serde::Deserialize;

use crate::CliError;

/// One catalogue entry as stored on disk.
///
/// The on-disk location order is `[latitude, longitude]`, the reverse of
/// the `Coord` axis order.
#[derive(Debug, Clone, Deserialize)]
struct SiteRecord {
    name: String,
    location: [f64; 2],
    year: YearField,
}

/// Catalogue years appear both as JSON numbers and as free text such as
/// "unknown" or "circa 1905".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum YearField {
    Number(i64),
    Text(String),
}

impl From<SiteRecord> for Site {
    fn from(record: SiteRecord) -> Self {
        let [latitude, longitude] = record.location;
        let year = match record.year {
            YearField::Number(year) => year.to_string(),
            YearField::Text(year) => year,
        };
        Site::new(
            record.name,
            Coord {
                x: longitude,
                y: latitude,
            },
            year,
        )
    }
}

/// Load the site catalogue, failing on a missing or malformed file.
///
/// Unlike the session log, the catalogue is a required input: without it
/// there is nothing to score against.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<Site>, CliError> {
    let contents = heatwalk_fs::read_optional(path)
        .map_err(|source| CliError::ReadCatalog {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| CliError::MissingCatalog {
            path: path.to_path_buf(),
        })?;
    let records: Vec<SiteRecord> =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.into_iter().map(Site::from).collect())
}
