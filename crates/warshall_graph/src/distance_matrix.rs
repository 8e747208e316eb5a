use crate::edge::VertexId;

pub type Distance = u64;

/// Sentinel stored for pairs without a path.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Dense matrix of minimum path costs between every ordered pair of vertices.
/// Stored as a flat row-major vector: `index = from * num_vertices + to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    distances: Vec<Distance>,
    num_vertices: usize,
}

impl DistanceMatrix {
    /// Every vertex reaches itself at zero cost and nothing else.
    pub(crate) fn unreachable(num_vertices: usize) -> Self {
        let mut distances = vec![UNREACHABLE; num_vertices * num_vertices];
        for vertex in 0..num_vertices {
            distances[vertex * num_vertices + vertex] = 0;
        }

        DistanceMatrix {
            distances,
            num_vertices,
        }
    }

    #[inline(always)]
    fn index(&self, from: VertexId, to: VertexId) -> usize {
        assert!(
            from < self.num_vertices && to < self.num_vertices,
            "vertex pair ({from}, {to}) out of range for {} vertices",
            self.num_vertices
        );
        from * self.num_vertices + to
    }

    /// Lowers the cell to `distance` if that is an improvement.
    #[inline(always)]
    pub(crate) fn seed(&mut self, from: VertexId, to: VertexId, distance: Distance) {
        let index = self.index(from, to);
        if distance < self.distances[index] {
            self.distances[index] = distance;
        }
    }

    pub(crate) fn distances_mut(&mut self) -> &mut [Distance] {
        &mut self.distances
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Minimum cost of a path from `from` to `to`, `None` when `to` cannot be
    /// reached. Panics if either vertex is out of range.
    #[inline(always)]
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Distance> {
        match self.distances[self.index(from, to)] {
            UNREACHABLE => None,
            distance => Some(distance),
        }
    }

    pub fn is_reachable(&self, from: VertexId, to: VertexId) -> bool {
        self.distance(from, to).is_some()
    }

    pub fn row(&self, from: VertexId) -> impl Iterator<Item = Option<Distance>> + '_ {
        (0..self.num_vertices).map(move |to| self.distance(from, to))
    }

    /// Raw cells including the [`UNREACHABLE`] sentinel.
    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }
}
