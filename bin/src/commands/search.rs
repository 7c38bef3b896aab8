//! Search command implementation.

use crate::display::Output;
use anyhow::{Context, Result};
use histoquote_lib::prelude::*;

/// Search instruments by keyword.
pub(crate) async fn search(
    search: &AssetSearch<HttpSource>,
    query: &str,
    output: &Output,
) -> Result<()> {
    let assets = search
        .search(query)
        .await
        .with_context(|| format!("Search for '{query}' failed"))?;
    if assets.is_empty() {
        log::warn!("No instrument matches '{query}'");
    }

    output.assets(&assets)
}
