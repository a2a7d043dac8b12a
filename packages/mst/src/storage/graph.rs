//! Graph: vertex set and edge set keyed by `(source, target)`.
//! Both maps keep insertion order, so every iteration (and everything computed
//! from it) is deterministic.
//! Edge insertion is best-effort: invalid or duplicate edges are dropped and
//! reported only through the returned bool.

use indexmap::IndexMap;
use log::trace;

use crate::attributes::{Attributes, DIRECTED};
use crate::core::{Direction, EdgeKey, VertexId, Weight};
use crate::error::{Error, Result};
use crate::traits::{EdgeWeights, GraphBase};
use crate::{kruskal_mst, prim_mst};

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub attributes: Attributes,
}

impl Vertex {
    pub fn new(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(id: impl Into<VertexId>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        attributes: Attributes,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes,
        }
    }

    pub fn weighted(
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        weight: Weight,
    ) -> Self {
        Self::new(source, target, Attributes::weighted(weight))
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey(self.source, self.target)
    }

    pub fn weight(&self) -> Option<Weight> {
        self.attributes.weight()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edges: IndexMap<EdgeKey, Edge>,
    attributes: Attributes,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Empty graph flagged `DIRECTED = false`.
    pub fn undirected() -> Self {
        let mut attributes = Attributes::new();
        attributes.set(DIRECTED, false);
        Self::with_attributes(attributes)
    }

    /// Inserts `vertex` unless its id is already present (first insertion wins).
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertices.contains_key(&vertex.id) {
            return false;
        }
        self.vertices.insert(vertex.id, vertex);
        true
    }

    /// Undirected insertion without self-loops.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        self.add_edge_with(edge, false, false)
    }

    /// Inserts `edge` if both endpoints exist, the key is new, the reverse key is absent
    /// (undirected only) and it is not a loop unless `allow_loop`.
    pub fn add_edge_with(&mut self, edge: Edge, directed: bool, allow_loop: bool) -> bool {
        let key = edge.key();
        let accepted = self.vertices.contains_key(&key.0)
            && self.vertices.contains_key(&key.1)
            && (allow_loop || !key.is_loop())
            && !self.edges.contains_key(&key)
            && (directed || !self.edges.contains_key(&key.reversed()));

        if accepted {
            self.edges.insert(key, edge);
        } else {
            trace!("rejected edge ({}, {})", key.0, key.1);
        }
        accepted
    }

    /// Exact `(u, v)` match when `directed`, otherwise either orientation.
    /// If both `(u, v)` and `(v, u)` are stored, the undirected lookup still
    /// returns `(u, v)`, whatever their insertion order.
    pub fn get_edge(&self, key: EdgeKey, directed: bool) -> Option<&Edge> {
        self.edges.get(&key).or_else(|| {
            if directed {
                None
            } else {
                self.edges.get(&key.reversed())
            }
        })
    }

    pub fn get_adjacent_vertices(&self, id: VertexId, direction: Direction) -> Vec<VertexId> {
        let mut adjacent = Vec::new();
        for &EdgeKey(source, target) in self.edges.keys() {
            match direction {
                Direction::Any => {
                    if source == id {
                        adjacent.push(target);
                    } else if target == id {
                        adjacent.push(source);
                    }
                }
                Direction::Outgoing => {
                    if source == id {
                        adjacent.push(target);
                    }
                }
                Direction::Incoming => {
                    if target == id {
                        adjacent.push(source);
                    }
                }
            }
        }
        adjacent
    }

    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_directed(&self) -> bool {
        self.attributes
            .get(DIRECTED)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    /// Sum of all edge weights; fails on the first edge without one or when the sum leaves `i64`.
    pub fn total_weight(&self) -> Result<Weight> {
        self.edges().try_fold(0 as Weight, |acc, e| {
            let (from, to) = (e.source, e.target);
            let w = e.weight().ok_or(Error::MissingWeight { from, to })?;
            acc.checked_add(w).ok_or(Error::WeightOverflow { from, to })
        })
    }

    /// Minimum spanning forest by Kruskal's algorithm.
    pub fn kruskal(&self) -> Result<Graph> {
        kruskal_mst(self)
    }

    /// Minimum spanning tree of `start`'s component by Prim's algorithm.
    pub fn prim(&self, start: VertexId) -> Result<Graph> {
        prim_mst(self, start)
    }
}

impl GraphBase for Graph {
    fn order(&self) -> usize {
        self.order()
    }
    fn size(&self) -> usize {
        self.size()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.contains_vertex(id)
    }
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.keys().copied())
    }

    fn edge_keys(&self) -> Box<dyn Iterator<Item = EdgeKey> + '_> {
        Box::new(self.edges.keys().copied())
    }

    fn adjacent(
        &self,
        v: VertexId,
        direction: Direction,
    ) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.get_adjacent_vertices(v, direction).into_iter())
    }
}

impl EdgeWeights for Graph {
    fn weight_of(&self, key: EdgeKey) -> Option<Weight> {
        self.get_edge(key, false).and_then(Edge::weight)
    }
}
