use rust_decimal::Decimal;

use crate::graph::{Graph, NodeIndex};

/// Run Dijkstra's algorithm from `start` to `target` by node name.
///
/// Returns the node names from start to target inclusive, `[start]` when both
/// are the same node, and an empty path when either name is unknown or the
/// target is unreachable. The next node to settle is picked by a linear scan;
/// ties go to the lowest arena index so results are stable for a given input.
pub fn shortest_path(graph: &Graph, start: &str, target: &str) -> Vec<String> {
    let (Some(start), Some(target)) = (graph.index_of(start), graph.index_of(target)) else {
        return Vec::new();
    };

    // `None` stands in for an infinite tentative distance.
    let mut distances: Vec<Option<Decimal>> = vec![None; graph.len()];
    let mut previous: Vec<Option<NodeIndex>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    distances[start] = Some(Decimal::ZERO);

    while let Some((current, current_distance)) = closest_unvisited(&distances, &visited) {
        if current == target {
            break;
        }
        visited[current] = true;

        for edge in graph.neighbours(current) {
            if visited[edge.target] {
                continue;
            }
            let Some(candidate) = current_distance.checked_add(edge.weight) else {
                continue;
            };
            let improves = match distances[edge.target] {
                Some(known) => candidate < known,
                None => true,
            };
            if improves {
                distances[edge.target] = Some(candidate);
                previous[edge.target] = Some(current);
            }
        }
    }

    reconstruct_path(graph, &previous, start, target)
}

/// Unvisited node with the smallest finite distance; unreachable nodes are never
/// selected, which ends the search once the reachable component is settled.
fn closest_unvisited(
    distances: &[Option<Decimal>],
    visited: &[bool],
) -> Option<(NodeIndex, Decimal)> {
    let mut best: Option<(NodeIndex, Decimal)> = None;
    for (index, distance) in distances.iter().enumerate() {
        let Some(distance) = *distance else {
            continue;
        };
        if visited[index] {
            continue;
        }
        let closer = match best {
            Some((_, min)) => distance < min,
            None => true,
        };
        if closer {
            best = Some((index, distance));
        }
    }
    best
}

fn reconstruct_path(
    graph: &Graph,
    previous: &[Option<NodeIndex>],
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<String> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = previous[current] {
        path.push(parent);
        current = parent;
    }
    if current != start {
        return Vec::new();
    }

    path.reverse();
    path.into_iter()
        .filter_map(|index| graph.node(index).map(|node| node.name.clone()))
        .collect()
}

/// Sum of the edge weights along `path`.
///
/// Zero for empty or single-node paths; `None` if two consecutive names are
/// not joined by an edge.
pub fn path_weight(graph: &Graph, path: &[String]) -> Option<Decimal> {
    path.windows(2).try_fold(Decimal::ZERO, |total, pair| {
        total.checked_add(graph.weight(&pair[0], &pair[1])?)
    })
}
