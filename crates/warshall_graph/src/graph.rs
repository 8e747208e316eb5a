use tracing::trace;

use crate::{
    edge::{Edge, VertexId, Weight},
    error::GraphError,
};

/// Largest vertex count accepted from untrusted input. Keeps the dense
/// distance matrix under a gigabyte.
pub const MAX_VERTICES: usize = 10_000;

/// A directed graph over the vertices `0..num_vertices`.
///
/// Edges are kept in insertion order. Parallel edges between the same pair of
/// vertices are stored as given; solvers decide how to combine them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            num_vertices,
            edges: Vec::new(),
        }
    }

    pub fn with_edges<I>(num_vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Graph::new(num_vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from edges already known to be in range.
    pub(crate) fn from_trusted_edges(num_vertices: usize, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|edge| edge.from() < num_vertices && edge.to() < num_vertices)
        );
        Graph {
            num_vertices,
            edges,
        }
    }

    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        trace!(from, to, weight, "add edge");
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex >= self.num_vertices {
            return Err(GraphError::InvalidVertexId {
                vertex,
                num_vertices: self.num_vertices,
            });
        }
        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
