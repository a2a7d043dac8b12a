//! Read-only capability traits the algorithms are written against.

use crate::core::{Direction, EdgeKey, VertexId, Weight};

/// Minimal read-only graph trait.
pub trait GraphBase {
    fn order(&self) -> usize;
    fn size(&self) -> usize;

    fn contains_vertex(&self, id: VertexId) -> bool;
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn edge_keys(&self) -> Box<dyn Iterator<Item = EdgeKey> + '_>;

    fn adjacent(&self, v: VertexId, direction: Direction)
    -> Box<dyn Iterator<Item = VertexId> + '_>;
}

/// Edge weight lookup
pub trait EdgeWeights {
    /// Weight of the edge joining `key`'s endpoints in either orientation.
    /// `None` when there is no such edge or it carries no integer weight.
    fn weight_of(&self, key: EdgeKey) -> Option<Weight>;
}
