use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    Edge, EdgeKey, EdgeWeights, Error, Graph, GraphBase, Result, Vertex, VertexId, Weight,
};

/// Disjoint Set Union (DSU) / Union-Find over dense element indices.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Follows parent links up to the root. No path compression.
    pub(crate) fn find(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Joins the sets of `i` and `j`. On equal rank the root of `j` goes under the root of `i`.
    pub(crate) fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        match self.rank[root_i].cmp(&self.rank[root_j]) {
            Ordering::Less => self.parent[root_i] = root_j,
            Ordering::Greater => self.parent[root_j] = root_i,
            Ordering::Equal => {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
        true
    }
}

/// Minimum spanning forest of `graph`, returned as a new undirected graph holding
/// only the accepted edges and their endpoints.
///
/// Edges are taken in ascending weight order; equal weights keep the graph's edge order.
/// Every edge is examined, even after the forest is complete.
pub fn kruskal_mst<G>(graph: &G) -> Result<Graph>
where
    G: GraphBase + EdgeWeights,
{
    let index: HashMap<VertexId, usize> = graph
        .vertex_ids()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    let mut edges: Vec<(EdgeKey, Weight)> = Vec::with_capacity(graph.size());
    for key in graph.edge_keys() {
        let w = graph.weight_of(key).ok_or(Error::MissingWeight {
            from: key.0,
            to: key.1,
        })?;
        edges.push((key, w));
    }

    // stable: ties stay in edge order
    edges.sort_by_key(|&(_, w)| w);

    debug!(
        "kruskal: {} vertices, {} candidate edges",
        graph.order(),
        edges.len()
    );

    let mut uf = UnionFind::new(graph.order());
    let mut tree = Graph::undirected();

    for (key, w) in edges {
        let EdgeKey(u, v) = key;
        let root_u = uf.find(index[&u]);
        let root_v = uf.find(index[&v]);

        if root_u != root_v {
            trace!("kruskal: accept ({}, {}) weight {}", u, v, w);
            tree.add_vertex(Vertex::new(u));
            tree.add_vertex(Vertex::new(v));
            tree.add_edge(Edge::weighted(u, v, w));
            uf.union(root_u, root_v);
        } else {
            trace!("kruskal: skip ({}, {}) closes a cycle", u, v);
        }
    }

    debug!("kruskal: accepted {} edges", tree.size());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attributes;

    fn graph(n: usize, edges: &[(usize, usize, Weight)]) -> Graph {
        let mut g = Graph::undirected();
        for i in 0..n {
            g.add_vertex(Vertex::new(i));
        }
        for &(u, v, w) in edges {
            g.add_edge(Edge::weighted(u, v, w));
        }
        g
    }

    fn triples(g: &Graph) -> Vec<(usize, usize, Weight)> {
        g.edges()
            .map(|e| (e.source.0, e.target.0, e.weight().unwrap()))
            .collect()
    }

    #[test]
    fn union_by_rank() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        // equal rank: 1 goes under 0
        assert_eq!(uf.find(1), 0);
        assert!(uf.union(2, 0));
        // rank(2) < rank(0): 2 goes under 0
        assert_eq!(uf.find(2), 0);
        assert!(!uf.union(1, 2));
        assert_eq!(uf.find(3), 3);
        // rank(0) > rank(3): 3 goes under 0
        assert!(uf.union(0, 3));
        assert_eq!(uf.find(3), 0);
    }

    #[test]
    fn picks_lightest_non_cycle_edges() {
        let g = graph(
            4,
            &[
                (0, 1, 4),
                (0, 2, 2),
                (0, 3, 3),
                (1, 2, 6),
                (1, 3, 8),
                (2, 3, 1),
            ],
        );
        let t = g.kruskal().unwrap();
        assert_eq!(triples(&t), vec![(2, 3, 1), (0, 2, 2), (0, 1, 4)]);
        assert_eq!(t.total_weight().unwrap(), 7);
        assert!(!t.is_directed());
    }

    #[test]
    fn ties_follow_edge_order() {
        let g = graph(3, &[(1, 2, 5), (0, 1, 5), (0, 2, 5)]);
        let t = g.kruskal().unwrap();
        assert_eq!(triples(&t), vec![(1, 2, 5), (0, 1, 5)]);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let g = graph(5, &[(0, 1, 1), (2, 3, 2), (3, 4, 3), (2, 4, 1)]);
        let t = g.kruskal().unwrap();
        assert_eq!(triples(&t), vec![(0, 1, 1), (2, 4, 1), (2, 3, 2)]);
    }

    #[test]
    fn isolated_vertices_are_not_copied() {
        let g = graph(3, &[(0, 1, 1)]);
        let t = g.kruskal().unwrap();
        assert_eq!(t.order(), 2);
        assert!(!t.contains_vertex(VertexId(2)));
    }

    #[test]
    fn missing_weight_aborts() {
        let mut g = graph(3, &[(0, 1, 1)]);
        g.add_edge(Edge::new(1, 2, Attributes::new()));
        assert!(matches!(
            g.kruskal(),
            Err(Error::MissingWeight { from: VertexId(1), to: VertexId(2) })
        ));
    }

    #[test]
    fn does_not_touch_input() {
        let g = graph(3, &[(0, 1, 2), (1, 2, 1), (0, 2, 3)]);
        let before = g.clone();
        let _ = g.kruskal().unwrap();
        assert_eq!(g, before);
    }
}
