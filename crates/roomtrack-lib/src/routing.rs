//! Per-request route planning pipeline.
//!
//! A request resolves its target, builds the graph from freshly fetched
//! records, snaps the caller's position to the nearest node, runs the
//! shortest-path search and projects the result. Nothing is cached between
//! requests.
//!
//! Only record-fetch failures are returned as errors. An empty dataset, a
//! position out of decimal range, an unknown target, or an unreachable
//! target all yield an empty [`RouteResponse`].

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{build_graph, nearest_node};
use crate::path::{path_weight, shortest_path};
use crate::projection::{directions, node_details, polylines, NodeDetails, Polyline, RouteSegment};
use crate::records::Position;
use crate::source::RecordSource;
use crate::target::resolve_target;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Location or group alias to walk to.
    pub target: String,
    /// Where the caller currently is.
    pub position: Position,
}

impl RouteRequest {
    pub fn new(target: impl Into<String>, position: Position) -> Self {
        Self {
            target: target.into(),
            position,
        }
    }
}

/// Renderable route data returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub path: Vec<String>,
    pub nodes: NodeDetails,
    pub route: Vec<RouteSegment>,
    pub polylines: Vec<Polyline>,
    /// Sum of the edge weights along `path`; `None` when no route was found.
    #[serde(skip)]
    pub distance: Option<Decimal>,
}

impl RouteResponse {
    /// `true` when no route was found.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of walked segments.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute a route for `request` over the records in `source`.
pub fn plan_route<S>(source: &S, request: &RouteRequest) -> Result<RouteResponse>
where
    S: RecordSource + ?Sized,
{
    let locations = source.locations()?;
    let indications = source.indications()?;
    let groups = source.groups()?;

    let target = resolve_target(&request.target, &locations, &groups);
    if target != request.target {
        debug!(requested = %request.target, resolved = %target, "resolved target alias");
    }

    let graph = build_graph(&locations, &indications)?;
    let start = match nearest_node(&graph, &request.position) {
        Ok(start) => start,
        Err(Error::EmptyGraph) => {
            warn!("no locations available; no route possible");
            return Ok(RouteResponse::default());
        }
        Err(Error::DistanceOverflow) => {
            warn!("position is out of range of every location; no route possible");
            return Ok(RouteResponse::default());
        }
        Err(err) => return Err(err),
    };
    debug!(%start, %target, "planning route");

    let path = shortest_path(&graph, start, target);
    if path.is_empty() {
        if graph.index_of(target).is_none() {
            warn!(target = %request.target, "target does not match a location or group");
        } else {
            warn!(%start, %target, "target is unreachable from start");
        }
        return Ok(RouteResponse::default());
    }

    // Each segment's text comes from the records touching its origin, which
    // keeps the store's first-match order for that pair.
    let mut segment_records = Vec::new();
    for from in &path[..path.len() - 1] {
        segment_records.extend(source.indications_for(from)?);
    }

    Ok(RouteResponse {
        route: directions(&path, &segment_records),
        polylines: polylines(&graph, &path),
        nodes: node_details(&graph, &path),
        distance: path_weight(&graph, &path),
        path,
    })
}
