pub mod graph;

pub use graph::{Edge, Graph, Vertex};
