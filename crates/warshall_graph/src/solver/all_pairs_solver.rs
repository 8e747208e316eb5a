use crate::{distance_matrix::DistanceMatrix, graph::Graph};

pub trait AllPairsSolver {
    fn solve(&self, graph: &Graph) -> DistanceMatrix;
}
