use std::io::{self, Write};

use warshall_graph::{
    example::{DIAGRAM, example_graph},
    solver::{all_pairs_solver::AllPairsSolver, floyd_warshall::FloydWarshall},
};

use crate::output::{OutputFormat, render};

pub fn run(format: OutputFormat) -> io::Result<()> {
    write_demo(&mut io::stdout().lock(), format)
}

fn write_demo<W: Write>(out: &mut W, format: OutputFormat) -> io::Result<()> {
    let graph = example_graph();

    writeln!(out, "For below tree:")?;
    writeln!(out, "{DIAGRAM}")?;

    let matrix = FloydWarshall.solve(&graph);

    writeln!(
        out,
        "All pair shortest distances generated by FloydWarshallAlgorithm are:"
    )?;
    writeln!(out, "{}", render(&matrix, format))
}
