pub type VertexId = usize;
pub type Weight = u32;

/// A directed, weighted arc between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
