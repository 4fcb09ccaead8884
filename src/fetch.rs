use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::GenerateError;

/// Single blocking GET without timeout. Non-success status codes are errors,
/// nothing is retried.
pub fn fetch_page(url: &str) -> Result<String, GenerateError> {
    info!("Fetching opcode tables from '{}'", url);
    let client = Client::builder().timeout(None::<Duration>).build()?;
    let response = client.get(url).send()?.error_for_status()?;
    debug!("Response status: {}", response.status());

    let body = response.text()?;
    debug!("Received {} bytes", body.len());
    Ok(body)
}

/// Keeps a copy of the fetched page, e.g. to capture a test fixture.
pub fn save_page(path: &Path, html: &str) -> Result<(), GenerateError> {
    fs::write(path, html)?;
    info!("Saved fetched page to '{}'", path.display());
    Ok(())
}
