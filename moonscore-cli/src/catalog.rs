//! Catalog loading for the moonscore CLI.

use camino::Utf8Path;
use moonscore_core::CityRecord;

use crate::CliError;

/// Loads a JSON array of [`CityRecord`]s from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<CityRecord>, CliError> {
    let contents = moonscore_fs::read_utf8_file(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Vec<CityRecord> =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} cities from {path}", catalog.len());
    Ok(catalog)
}
