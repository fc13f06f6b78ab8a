//! Print the reference honeycomb-7 adjacency.

use anyhow::Result;
use colored::Colorize;
use pheromq::prelude::*;

pub fn run() -> Result<()> {
    let topo = PetTopology::honeycomb7();

    println!("{} honeycomb-7 (center 0, ring 1-6)", "→".blue());
    for node in topo.nodes() {
        let neighbors: Vec<String> = topo
            .neighbors(node)
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!(
            "  Node {}: {}",
            node.to_string().cyan(),
            neighbors.join(", ")
        );
    }
    Ok(())
}
