use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::distance::distance;
use crate::error::{Error, Result};
use crate::records::{Indication, Location, Position};

/// Index of a node inside the graph arena.
pub type NodeIndex = usize;

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: Decimal,
}

/// A location plus its derived neighbour weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub position: Position,
    pub radius: Decimal,
    neighbours: Vec<Edge>,
}

impl Node {
    pub fn neighbours(&self) -> &[Edge] {
        &self.neighbours
    }
}

/// Weighted undirected graph built fresh for every routing request.
///
/// Nodes live in an arena in location-record order; a name lookup maps onto
/// arena slots. Every edge is stored on both endpoints with the same weight.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Lookup a node index by its case-sensitive name.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.index_of(name).map(|index| &self.nodes[index])
    }

    /// Return the neighbours for a given node index.
    pub fn neighbours(&self, index: NodeIndex) -> &[Edge] {
        self.nodes
            .get(index)
            .map(|node| node.neighbours.as_slice())
            .unwrap_or(&[])
    }

    /// Weight of the edge joining two named nodes, if they are adjacent.
    pub fn weight(&self, from: &str, to: &str) -> Option<Decimal> {
        let to = self.index_of(to)?;
        self.neighbours(self.index_of(from)?)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    fn insert_location(&mut self, location: &Location) {
        if let Some(&index) = self.by_name.get(&location.name) {
            warn!(name = %location.name, "duplicate location name; later record wins");
            let node = &mut self.nodes[index];
            node.position = location.position();
            node.radius = location.rad;
            return;
        }

        self.by_name.insert(location.name.clone(), self.nodes.len());
        self.nodes.push(Node {
            name: location.name.clone(),
            position: location.position(),
            radius: location.rad,
            neighbours: Vec::new(),
        });
    }

    fn connect(&mut self, a: NodeIndex, b: NodeIndex, weight: Decimal) {
        upsert_edge(&mut self.nodes[a].neighbours, b, weight);
        upsert_edge(&mut self.nodes[b].neighbours, a, weight);
    }
}

fn upsert_edge(edges: &mut Vec<Edge>, target: NodeIndex, weight: Decimal) {
    match edges.iter_mut().find(|edge| edge.target == target) {
        Some(existing) => existing.weight = weight,
        None => edges.push(Edge { target, weight }),
    }
}

/// Build the routing graph from location and indication records.
///
/// Indications naming a location that does not exist are skipped; the source
/// data may reference places whose location is still pending.
pub fn build_graph(locations: &[Location], indications: &[Indication]) -> Result<Graph> {
    let mut graph = Graph::default();
    for location in locations {
        graph.insert_location(location);
    }

    let mut dropped = 0usize;
    for indication in indications {
        let (Some(a), Some(b)) = (
            graph.index_of(&indication.name_a),
            graph.index_of(&indication.name_b),
        ) else {
            dropped += 1;
            continue;
        };
        match distance(&graph.nodes[a].position, &graph.nodes[b].position) {
            Ok(weight) => graph.connect(a, b, weight),
            Err(Error::DistanceOverflow) => {
                warn!(
                    from = %indication.name_a,
                    to = %indication.name_b,
                    "indication length exceeds the decimal range; skipping"
                );
            }
            Err(err) => return Err(err),
        }
    }

    if dropped > 0 {
        warn!(dropped, "skipped indications referencing unknown locations");
    }
    debug!(nodes = graph.len(), "built routing graph");

    Ok(graph)
}

/// Name of the node closest to `position`.
///
/// Ties go to the node that appears first in location-record order. Nodes
/// whose distance leaves the decimal range count as infinitely far; if that
/// is every node the result is [`Error::DistanceOverflow`].
pub fn nearest_node<'g>(graph: &'g Graph, position: &Position) -> Result<&'g str> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let mut best: Option<(&Node, Decimal)> = None;
    for node in &graph.nodes {
        let Ok(d) = distance(position, &node.position) else {
            continue;
        };
        let closer = match &best {
            Some((_, min)) => d < *min,
            None => true,
        };
        if closer {
            best = Some((node, d));
        }
    }

    best.map(|(node, _)| node.name.as_str())
        .ok_or(Error::DistanceOverflow)
}
