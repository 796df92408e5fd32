//! Network command handler: every walkable segment as map polylines.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use roomtrack_lib::{network_polylines, open_dataset, resolve_dataset_path};

use roomtrack_cli::output::{write_json, write_polylines_text, OutputFormat};

/// Handle the network subcommand.
pub fn handle_network_command(data: Option<&Path>, format: OutputFormat) -> Result<()> {
    let dataset_path = resolve_dataset_path(data).context("failed to locate the dataset")?;
    let source = open_dataset(&dataset_path)
        .with_context(|| format!("failed to open dataset {}", dataset_path.display()))?;
    let locations = source.locations().context("failed to load locations")?;
    let indications = source.indications().context("failed to load indications")?;

    let polylines = network_polylines(&locations, &indications);
    tracing::debug!(segments = polylines.len(), "rendering network");

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(&mut stdout, &polylines)?,
        OutputFormat::Text => write_polylines_text(&mut stdout, &polylines)?,
    }
    Ok(())
}
