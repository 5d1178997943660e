//! Basic DirectedGraph usage example

use anyhow::Result;
use digraph::{DirectedGraph, GraphError};

fn main() -> Result<()> {
    println!("DirectedGraph Basic Usage Example");
    println!("=================================");

    let mut graph = DirectedGraph::from(["A", "B", "C"]);
    graph.connect(0, 1)?;
    graph.connect(1, 2)?;

    println!("Chain:");
    print!("{graph}");
    println!("  indegree(C) = {}", graph.indegree(2)?);
    println!("  outdegree(A) = {}", graph.outdegree(0)?);
    println!("  simple = {}", graph.simple());

    // Walk A -> B -> C one branch at a time.
    println!("\nCursor walk:");
    let mut cursor = graph.begin()?;
    loop {
        println!("  at {}", cursor.get(&graph)?);
        if cursor.outdegree(&graph)? == 0 {
            break;
        }
        cursor.next(&graph, 0)?;
    }

    // Parallel edges and loops are allowed.
    graph.connect(0, 1)?;
    graph.connect(2, 2)?;
    println!("\nWith a parallel edge and a loop:");
    print!("{graph}");
    println!("  simple = {}", graph.simple());
    println!("  {:?}", graph.statistics());

    graph.disconnect(0, 1)?;
    println!("\nAfter removing one A -> B:");
    print!("{graph}");

    // Erasing shifts later positions; the edge list follows.
    let removed = graph.erase(0)?;
    println!("\nErased {removed}:");
    print!("{graph}");
    println!("  edges = {:?}", graph.edges());

    match graph.connect(5, 0) {
        Err(err @ GraphError::IndexOutOfRange { .. }) => println!("\nRejected: {err}"),
        other => println!("\nUnexpected: {other:?}"),
    }

    Ok(())
}
