use super::listings::{canonicalize_all, ComparableListing, RawListing};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingImportError {
    #[error("failed to read comparable export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid comparable CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid comparable JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads comparable exports (CSV or JSON) and normalizes every record to the
/// canonical listing shape. Rows with unusable prices are kept; the engine
/// degrades them instead of rejecting the import.
pub struct ListingImporter;

impl ListingImporter {
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ComparableListing>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ComparableListing>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut raw = Vec::new();
        for record in csv_reader.deserialize::<RawListing>() {
            raw.push(record?);
        }

        Ok(canonicalize_all(raw))
    }

    pub fn from_json_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ComparableListing>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ComparableListing>, ListingImportError> {
        let raw: Vec<RawListing> = serde_json::from_reader(reader)?;
        Ok(canonicalize_all(raw))
    }
}
