use thiserror::Error;

use crate::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Edge ({from}, {to}) has no integer WEIGHT attribute")]
    MissingWeight { from: VertexId, to: VertexId },

    #[error("Total weight overflows at edge ({from}, {to})")]
    WeightOverflow { from: VertexId, to: VertexId },

    #[error("Start vertex {0} is not a vertex of the graph")]
    InvalidStart(VertexId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
