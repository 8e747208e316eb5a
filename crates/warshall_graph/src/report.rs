use std::fmt;

use crate::{
    distance_matrix::{Distance, DistanceMatrix},
    edge::VertexId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathDistance {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: Distance,
}

impl fmt::Display for PathDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance of path {} --> {} is {}",
            self.from, self.to, self.distance
        )
    }
}

/// Every reachable pair of distinct vertices, in row-major order.
pub fn reachable_pairs(matrix: &DistanceMatrix) -> impl Iterator<Item = PathDistance> + '_ {
    let n = matrix.num_vertices();
    (0..n)
        .flat_map(move |from| (0..n).map(move |to| (from, to)))
        .filter(|(from, to)| from != to)
        .filter_map(move |(from, to)| {
            matrix
                .distance(from, to)
                .map(|distance| PathDistance { from, to, distance })
        })
}
