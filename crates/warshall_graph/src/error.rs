use thiserror::Error;

use crate::edge::VertexId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    InvalidVertexId {
        vertex: VertexId,
        num_vertices: usize,
    },
    #[error("Edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: i64,
    },
    #[error("Edge {from} -> {to} has weight {weight} which exceeds the maximum edge weight")]
    WeightTooLarge {
        from: VertexId,
        to: VertexId,
        weight: i64,
    },
    #[error("Graph with {num_vertices} vertices exceeds the limit of {max_vertices}")]
    TooManyVertices {
        num_vertices: usize,
        max_vertices: usize,
    },
}
