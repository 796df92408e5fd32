//! Route command handler for walking directions to a named destination.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use roomtrack_lib::{
    open_dataset, plan_route, resolve_dataset_path, suggest_targets, Position, RecordSet,
    RouteRequest,
};

use roomtrack_cli::output::{write_json, write_route_text, OutputFormat, RouteContext};
use roomtrack_cli::terminal::ColorPalette;

/// Maximum number of "did you mean" suggestions printed for unknown targets.
const MAX_SUGGESTIONS: usize = 3;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Location or group alias to walk to.
    pub target: String,
    pub lat: Decimal,
    pub lng: Decimal,
    pub alt: Decimal,
    pub format: OutputFormat,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(
            self.target.clone(),
            Position::new(self.lat, self.lng, self.alt),
        )
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(data: Option<&Path>, args: &RouteCommandArgs) -> Result<()> {
    let dataset_path = resolve_dataset_path(data).context("failed to locate the dataset")?;
    let source = open_dataset(&dataset_path)
        .with_context(|| format!("failed to open dataset {}", dataset_path.display()))?;
    let records = RecordSet::from_source(source.as_ref())
        .with_context(|| format!("failed to load records from {}", dataset_path.display()))?;

    let response = plan_route(&records, &args.to_request()).context("failed to plan route")?;

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Json => write_json(&mut stdout, &response)?,
        OutputFormat::Text => {
            let suggestions = if response.is_empty() {
                suggest_targets(
                    &args.target,
                    &records.locations,
                    &records.groups,
                    MAX_SUGGESTIONS,
                )
            } else {
                Vec::new()
            };
            let context = RouteContext {
                requested: &args.target,
                total_distance: response.distance,
                suggestions,
            };
            write_route_text(&mut stdout, &response, &context, &ColorPalette::detect())?;
        }
    }
    Ok(())
}
