use crate::types::{Family, Result};
use std::path::Path;

/// Parse family records from CSV text with a header row.
pub fn parse_families(contents: &str) -> Result<Vec<Family>> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut families = Vec::new();

    for result in reader.deserialize() {
        let family: Family = result?;
        families.push(family);
    }

    Ok(families)
}

/// Load all recipients from a CSV file
pub async fn load_families(path: impl AsRef<Path>) -> Result<Vec<Family>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let families = tokio::task::spawn_blocking(move || parse_families(&contents)).await??;

    log::debug!("Loaded {} records from {}", families.len(), path.display());
    Ok(families)
}

/// Load the sender from a CSV file. Only the first record is used.
pub async fn load_sender(path: impl AsRef<Path>) -> Result<Option<Family>> {
    let families = load_families(path).await?;
    Ok(families.into_iter().next())
}

