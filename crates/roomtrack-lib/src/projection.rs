//! Projections of a planned path into renderable route data.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::graph::{Graph, Node};
use crate::records::{format_decimal, Indication, Location};

/// One walked segment with its human-readable instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSegment {
    pub from: String,
    pub to: String,
    pub info: String,
}

/// Two `[lat, lng]` points joined by a straight line.
pub type Polyline = [[String; 2]; 2];

/// Coordinates and arrival radius of a node on the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetail {
    pub name: String,
    pub rad: String,
    pub latitude: String,
    pub altitude: String,
    pub longitude: String,
}

impl NodeDetail {
    fn from_node(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            rad: format_decimal(node.radius),
            latitude: format_decimal(node.position.lat),
            altitude: format_decimal(node.position.alt),
            longitude: format_decimal(node.position.lng),
        }
    }
}

/// Node details keyed by name, serialised as a JSON object in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDetails(Vec<NodeDetail>);

impl NodeDetails {
    pub fn get(&self, name: &str) -> Option<&NodeDetail> {
        self.0.iter().find(|detail| detail.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeDetail> {
        self.0.iter()
    }
}

impl Serialize for NodeDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for detail in &self.0 {
            map.serialize_entry(&detail.name, detail)?;
        }
        map.end()
    }
}

/// Instruction text for each consecutive pair of the path.
///
/// The first indication joining the pair (in either orientation) supplies
/// the text: `forward_info` when the record's `name_a` is the segment's
/// destination, `backward_info` otherwise. Pairs without a record are left
/// out; the path itself is not affected.
pub fn directions(path: &[String], indications: &[Indication]) -> Vec<RouteSegment> {
    path.windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let Some(indication) = indications.iter().find(|ind| ind.connects(from, to)) else {
                warn!(%from, %to, "no indication for path segment; omitting instruction");
                return None;
            };
            let info = if indication.name_a == *to {
                &indication.forward_info
            } else {
                &indication.backward_info
            };
            Some(RouteSegment {
                from: from.clone(),
                to: to.clone(),
                info: info.clone(),
            })
        })
        .collect()
}

/// Line geometry for each consecutive pair of the path.
pub fn polylines(graph: &Graph, path: &[String]) -> Vec<Polyline> {
    path.windows(2)
        .filter_map(|pair| {
            let from = graph.node_by_name(&pair[0])?;
            let to = graph.node_by_name(&pair[1])?;
            Some([lat_lng(from), lat_lng(to)])
        })
        .collect()
}

/// Per-node metadata for every node on the path, in path order.
pub fn node_details(graph: &Graph, path: &[String]) -> NodeDetails {
    NodeDetails(
        path.iter()
            .filter_map(|name| graph.node_by_name(name))
            .map(NodeDetail::from_node)
            .collect(),
    )
}

/// One polyline per indication whose endpoints are both known locations.
pub fn network_polylines(locations: &[Location], indications: &[Indication]) -> Vec<Polyline> {
    // Later duplicates win, matching graph construction.
    let find = |name: &str| locations.iter().rev().find(|location| location.name == name);
    indications
        .iter()
        .filter_map(|indication| {
            let a = find(&indication.name_a)?;
            let b = find(&indication.name_b)?;
            Some([
                [format_decimal(a.lat), format_decimal(a.lng)],
                [format_decimal(b.lat), format_decimal(b.lng)],
            ])
        })
        .collect()
}

fn lat_lng(node: &Node) -> [String; 2] {
    [
        format_decimal(node.position.lat),
        format_decimal(node.position.lng),
    ]
}
