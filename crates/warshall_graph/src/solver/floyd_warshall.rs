use tracing::debug;

use super::all_pairs_solver::AllPairsSolver;
use crate::{
    distance_matrix::{Distance, DistanceMatrix, UNREACHABLE},
    graph::Graph,
};

/// Floyd-Warshall all pairs shortest paths for directed graphs with
/// non-negative weights.
///
/// Parallel edges are combined by keeping the cheapest one. Path sums saturate
/// at [`UNREACHABLE`], so an unreachable leg never produces a shorter path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl AllPairsSolver for FloydWarshall {
    fn solve(&self, graph: &Graph) -> DistanceMatrix {
        let n = graph.num_vertices();
        debug!(
            vertices = n,
            edges = graph.num_edges(),
            "FloydWarshall: solving"
        );

        let mut matrix = DistanceMatrix::unreachable(n);
        for edge in graph.edges() {
            matrix.seed(edge.from(), edge.to(), Distance::from(edge.weight()));
        }

        let dist = matrix.distances_mut();

        // k must stay the outermost loop: dist[i][k] and dist[k][j] only
        // account for intermediates < k when k is visited.
        for k in 0..n {
            for i in 0..n {
                let via = dist[i * n + k];
                if via == UNREACHABLE {
                    continue;
                }

                for j in 0..n {
                    let candidate = via.saturating_add(dist[k * n + j]);
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                    }
                }
            }
        }

        debug!(vertices = n, "FloydWarshall: done");
        matrix
    }
}
