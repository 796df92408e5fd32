//! roomtrack library entry points.
//!
//! This crate loads location, indication and group records, builds the
//! walking graph for a building complex, and plans the shortest route from an
//! arbitrary position to a named destination. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod db;
pub mod distance;
pub mod error;
pub mod graph;
pub mod path;
pub mod projection;
pub mod records;
pub mod routing;
pub mod source;
pub mod target;

pub use dataset::{default_dataset_path, open_dataset, resolve_dataset_path, DatasetFormat};
pub use db::{load_records, SqliteSource};
pub use distance::distance;
pub use error::{Error, Result};
pub use graph::{build_graph, nearest_node, Edge, Graph, Node, NodeIndex};
pub use path::{path_weight, shortest_path};
pub use projection::{
    directions, network_polylines, node_details, polylines, NodeDetail, NodeDetails, Polyline,
    RouteSegment,
};
pub use records::{Group, Indication, Location, Position};
pub use routing::{plan_route, RouteRequest, RouteResponse};
pub use source::{RecordSet, RecordSource};
pub use target::{resolve_target, suggest_targets};
