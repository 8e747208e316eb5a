use serde::Deserialize;

use crate::{
    edge::{VertexId, Weight},
    error::GraphError,
    graph::{Graph, MAX_VERTICES},
};

/// On-disk representation of a graph.
///
/// Weights are read as signed integers so that negative weights surface as
/// [`GraphError::NegativeWeight`] rather than a parse failure.
#[derive(Deserialize, Debug, Clone)]
pub struct JsonGraph {
    pub num_vertices: usize,
    #[serde(default)]
    pub edges: Vec<JsonEdge>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct JsonEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i64,
}

impl JsonEdge {
    fn weight(&self) -> Result<Weight, GraphError> {
        if self.weight < 0 {
            return Err(GraphError::NegativeWeight {
                from: self.from,
                to: self.to,
                weight: self.weight,
            });
        }

        Weight::try_from(self.weight).map_err(|_| GraphError::WeightTooLarge {
            from: self.from,
            to: self.to,
            weight: self.weight,
        })
    }
}

impl JsonGraph {
    pub fn build_graph(&self) -> Result<Graph, GraphError> {
        if self.num_vertices > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                num_vertices: self.num_vertices,
                max_vertices: MAX_VERTICES,
            });
        }

        let mut graph = Graph::new(self.num_vertices);
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight()?)?;
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::edge::Edge;

    use super::*;

    fn parse(json: &str) -> JsonGraph {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_graph() {
        let json = parse(
            r#"{
                "num_vertices": 3,
                "edges": [
                    { "from": 0, "to": 1, "weight": 5 },
                    { "from": 1, "to": 2, "weight": 0 }
                ]
            }"#,
        );

        let graph = json.build_graph().unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.edges(), &[Edge::new(0, 1, 5), Edge::new(1, 2, 0)]);
    }

    #[test]
    fn test_missing_edges_defaults_to_empty() {
        let graph = parse(r#"{ "num_vertices": 4 }"#).build_graph().unwrap();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_negative_weight() {
        let json = parse(r#"{ "num_vertices": 2, "edges": [{ "from": 0, "to": 1, "weight": -3 }] }"#);

        assert_eq!(
            json.build_graph(),
            Err(GraphError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -3
            })
        );
    }

    #[test]
    fn test_weight_too_large() {
        let json = parse(
            r#"{ "num_vertices": 2, "edges": [{ "from": 1, "to": 0, "weight": 4294967296 }] }"#,
        );

        assert_eq!(
            json.build_graph(),
            Err(GraphError::WeightTooLarge {
                from: 1,
                to: 0,
                weight: 4_294_967_296
            })
        );
    }

    #[test]
    fn test_too_many_vertices() {
        let json = parse(r#"{ "num_vertices": 4294967296 }"#);

        assert_eq!(
            json.build_graph(),
            Err(GraphError::TooManyVertices {
                num_vertices: 4_294_967_296,
                max_vertices: MAX_VERTICES
            })
        );
    }

    #[test]
    fn test_vertex_limit_is_inclusive() {
        let json = parse(r#"{ "num_vertices": 10000 }"#);
        assert_eq!(json.build_graph().unwrap().num_vertices(), MAX_VERTICES);

        let json = parse(r#"{ "num_vertices": 10001 }"#);
        assert!(matches!(
            json.build_graph(),
            Err(GraphError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_invalid_vertex() {
        let json = parse(r#"{ "num_vertices": 2, "edges": [{ "from": 0, "to": 2, "weight": 1 }] }"#);

        assert_eq!(
            json.build_graph(),
            Err(GraphError::InvalidVertexId {
                vertex: 2,
                num_vertices: 2
            })
        );
    }
}
