//! core small types

use std::fmt::{self, Display};

/// Typed vertex identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}

/// Stored edge key, `(source, target)` as inserted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey(pub VertexId, pub VertexId);

impl EdgeKey {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        EdgeKey(source.into(), target.into())
    }

    pub fn reversed(self) -> Self {
        EdgeKey(self.1, self.0)
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

/// Edge weights are the integers read from the weight matrix.
pub type Weight = i64;

/// Filter for adjacency queries
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Both endpoints, storage is traversed as undirected
    #[default]
    Any,
    /// Targets of edges stored with the vertex as source
    Outgoing,
    /// Sources of edges stored with the vertex as target
    Incoming,
}
