use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    Direction, Edge, EdgeKey, EdgeWeights, Error, Graph, GraphBase, Result, Vertex, VertexId,
    Weight,
};

fn weight_between<G: EdgeWeights>(graph: &G, u: VertexId, v: VertexId) -> Result<Weight> {
    graph
        .weight_of(EdgeKey(u, v))
        .ok_or(Error::MissingWeight { from: u, to: v })
}

/// Minimum spanning tree of the component containing `start`, grown one vertex at a time.
///
/// Each round takes the unvisited vertex with the smallest tentative distance, scanning
/// ids in ascending order so ties go to the lowest id. Vertices that are never reached
/// end up in the result without incident edges.
pub fn prim_mst<G>(graph: &G, start: VertexId) -> Result<Graph>
where
    G: GraphBase + EdgeWeights,
{
    if !graph.contains_vertex(start) {
        return Err(Error::InvalidStart(start));
    }

    let mut ids: Vec<VertexId> = graph.vertex_ids().collect();
    ids.sort();
    let index: HashMap<VertexId, usize> =
        ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let n = ids.len();
    // None = not reached yet
    let mut distance: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    distance[index[&start]] = Some(0);

    debug!("prim: {} vertices, starting at {}", n, start);

    let mut tree = Graph::undirected();

    for _ in 0..n {
        let mut current: Option<(usize, Weight)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            if let Some(d) = distance[i] {
                if current.map_or(true, |(_, best)| d < best) {
                    current = Some((i, d));
                }
            }
        }

        let Some((u, _)) = current else {
            trace!("prim: remaining vertices are unreachable from {}", start);
            break;
        };

        visited[u] = true;
        tree.add_vertex(Vertex::new(ids[u]));
        trace!("prim: visit {}", ids[u]);

        for neighbor in graph.adjacent(ids[u], Direction::Any) {
            let v = index[&neighbor];
            if visited[v] {
                continue;
            }
            let w = weight_between(graph, ids[u], neighbor)?;
            if distance[v].map_or(true, |d| w < d) {
                distance[v] = Some(w);
                parent[v] = Some(u);
            }
        }
    }

    for (i, &id) in ids.iter().enumerate() {
        if !visited[i] {
            tree.add_vertex(Vertex::new(id));
        }
    }

    for (i, &id) in ids.iter().enumerate() {
        if id == start {
            continue;
        }
        if let Some(p) = parent[i] {
            let w = weight_between(graph, ids[p], id)?;
            tree.add_edge(Edge::weighted(ids[p], id, w));
        }
    }

    debug!("prim: {} tree edges", tree.size());
    Ok(tree)
}
