//! The six vertex graph used by the `warshall` demo and as a regression
//! fixture.

use crate::{
    edge::{Edge, VertexId, Weight},
    graph::Graph,
};

pub const EXAMPLE_NUM_VERTICES: usize = 6;

pub const EXAMPLE_EDGES: [(VertexId, VertexId, Weight); 10] = [
    (0, 1, 4),
    (0, 2, 7),
    (1, 2, 8),
    (1, 3, 13),
    (1, 4, 11),
    (2, 3, 12),
    (2, 4, 10),
    (3, 4, 9),
    (3, 5, 15),
    (4, 5, 14),
];

pub const DIAGRAM: &str = r"               /0\
              /   \
            4/     \7
            /   8   \
           1 ------- 2
           | \11  12/|
         13|   \  /  | 10
           |   / \   |
           |  /   \  |
           | /     \ |
           3 ------- 4
            \   9   /
           15\     /14
              \   /
               \5/";

pub fn example_graph() -> Graph {
    let edges = EXAMPLE_EDGES
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect();

    Graph::from_trusted_edges(EXAMPLE_NUM_VERTICES, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_graph_matches_checked_construction() {
        let checked = Graph::with_edges(EXAMPLE_NUM_VERTICES, EXAMPLE_EDGES).unwrap();

        assert_eq!(example_graph(), checked);
        assert_eq!(checked.num_edges(), 10);
    }

    #[test]
    fn test_diagram_labels_every_vertex() {
        for vertex in 0..EXAMPLE_NUM_VERTICES {
            assert!(DIAGRAM.contains(&vertex.to_string()));
        }
    }
}
