pub mod distance_matrix;
pub mod edge;
pub mod error;
pub mod example;
pub mod graph;
pub mod json;
pub mod report;
pub mod solver;
