pub mod all_pairs_solver;
pub mod floyd_warshall;
