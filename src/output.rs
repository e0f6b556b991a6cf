use std::path::Path;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::Result;
use crate::error::Error;
use crate::render_blocks::scene::format_distance;
use crate::types::{City, CityId, CityMap, Edge, Tour};

/// A tour as a petgraph directed graph: cities in map order, legs weighted by distance.
pub type TourGraph = DiGraph<City, f64>;

/// Builds the tour graph. Fails on a leg naming a city that is not in `cities`.
pub fn to_graph(cities: &CityMap, tour: &Tour) -> Result<TourGraph> {
    let mut graph = TourGraph::with_capacity(cities.len(), tour.edges.len());
    let nodes: Vec<NodeIndex> = cities.iter().map(|&c| graph.add_node(c)).collect();

    for edge in &tour.edges {
        let from = node_of(cities, &nodes, edge.from, edge)?;
        let to = node_of(cities, &nodes, edge.to, edge)?;
        graph.add_edge(from, to, edge.weight);
    }

    Ok(graph)
}

fn node_of(cities: &CityMap, nodes: &[NodeIndex], id: CityId, edge: &Edge) -> Result<NodeIndex> {
    cities
        .ordinal(id)
        .map(|i| nodes[i])
        .ok_or(Error::UnknownCity { city: id, edge: *edge })
}

/// Returns the tour in DOT format.
///
/// Nodes are labelled with the city id and coordinates and pinned at their
/// coordinates (`pos="x,y!"`), edges are labelled with their weight.
///
/// Intended to be used with `neato`, which honours the pinned positions.
pub fn to_dot_str(cities: &CityMap, tour: &Tour) -> Result<String> {
    let graph = to_graph(cities, tour)?;
    let mut output = String::from("digraph tour {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");
    output.push_str("  edge [fontcolor=red];\n");

    // Add cities
    for node_idx in graph.node_indices() {
        let city = &graph[node_idx];
        output.push_str(&format!(
            "  C{} [label=\"{}\\n({}, {})\", pos=\"{},{}!\"];\n",
            city.id, city.id, city.x, city.y, city.x, city.y
        ));
    }

    // Add legs
    for edge in graph.edge_references() {
        output.push_str(&format!(
            "  C{} -> C{} [label=\"{}\"];\n",
            graph[edge.source()].id,
            graph[edge.target()].id,
            format_distance(*edge.weight())
        ));
    }
    output.push_str("}\n");
    Ok(output)
}

/// Writes the tour to a file in DOT format.
pub fn to_dot_file(cities: &CityMap, tour: &Tour, path: impl AsRef<Path>) -> Result<()> {
    let dot_str = to_dot_str(cities, tour)?;
    to_file(&dot_str, path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content).map_err(|e| Error::file(path, e))
}
