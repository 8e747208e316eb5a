use clap::ValueEnum;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use warshall_graph::{distance_matrix::DistanceMatrix, report::reachable_pairs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per reachable pair
    Lines,
    /// The full distance matrix
    Table,
}

pub fn render(matrix: &DistanceMatrix, format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => render_lines(matrix),
        OutputFormat::Table => render_table(matrix).to_string(),
    }
}

fn render_lines(matrix: &DistanceMatrix) -> String {
    reachable_pairs(matrix)
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(matrix: &DistanceMatrix) -> Table {
    let n = matrix.num_vertices();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(
        std::iter::once(Cell::new("from \\ to"))
            .chain((0..n).map(|to| Cell::new(to).set_alignment(CellAlignment::Right))),
    );

    for from in 0..n {
        let cells = matrix.row(from).map(|distance| {
            let content = distance.map_or_else(|| String::from("-"), |d| d.to_string());
            Cell::new(content).set_alignment(CellAlignment::Right)
        });
        table.add_row(std::iter::once(Cell::new(from)).chain(cells));
    }

    table
}

#[cfg(test)]
mod tests {
    use warshall_graph::{
        example::example_graph,
        graph::Graph,
        solver::{all_pairs_solver::AllPairsSolver, floyd_warshall::FloydWarshall},
    };

    use super::*;

    #[test]
    fn test_render_lines() {
        let graph = Graph::with_edges(3, [(0, 1, 2), (1, 2, 3)]).unwrap();
        let matrix = FloydWarshall.solve(&graph);

        assert_eq!(
            render(&matrix, OutputFormat::Lines),
            "Distance of path 0 --> 1 is 2\n\
             Distance of path 0 --> 2 is 5\n\
             Distance of path 1 --> 2 is 3"
        );
    }

    #[test]
    fn test_render_table() {
        let matrix = FloydWarshall.solve(&example_graph());
        let table = render_table(&matrix);

        assert_eq!(table.row_count(), 6);

        let rendered = table.to_string();
        assert!(rendered.contains("from \\ to"));
        assert!(rendered.contains("29"));
        assert!(rendered.contains('-'));
    }
}
