use crate::errors::GraphError;
use graphstep_api::core::entities::{Edge, Graph, Node};
use tracing::error;

pub const SIMPLE_PATH: &str = "Simple Path";
pub const GRID_GRAPH: &str = "Grid Graph";
pub const WEIGHTED_GRAPH: &str = "Weighted Graph";
pub const DIRECTED_GRAPH: &str = "Directed Graph (PageRank)";
pub const DISCONNECTED_GRAPH: &str = "Disconnected Graph";

/// Builds a graph whose node labels equal their ids.
fn build(directed: bool, nodes: &[(&str, f64, f64)], edges: &[(&str, &str, Option<f64>)]) -> Graph {
    let mut graph = Graph::new(directed);
    for (id, x, y) in nodes {
        graph
            .add_node(Node::new(*id, *x, *y, *id))
            .map_err(|err| error!("{err}"))
            .ok();
    }
    for (source, target, weight) in edges {
        let edge = match weight {
            Some(w) => Edge::weighted(*source, *target, *w),
            None => Edge::new(*source, *target),
        };
        graph.add_edge(edge).map_err(|err| error!("{err}")).ok();
    }
    graph
}

/// Undirected diamond `A-B, A-C, B-D, C-D` with a tail `D-E`.
pub fn simple_path() -> Graph {
    build(
        false,
        &[
            ("A", 100.0, 200.0),
            ("B", 250.0, 100.0),
            ("C", 250.0, 300.0),
            ("D", 400.0, 200.0),
            ("E", 550.0, 200.0),
        ],
        &[
            ("A", "B", None),
            ("A", "C", None),
            ("B", "D", None),
            ("C", "D", None),
            ("D", "E", None),
        ],
    )
}

/// Undirected 3x3 lattice with nodes `1` to `9`, row by row.
pub fn grid_graph() -> Graph {
    let nodes: Vec<(String, f64, f64)> = (0..9)
        .map(|i| {
            (
                (i + 1).to_string(),
                100.0 + 150.0 * (i % 3) as f64,
                100.0 + 150.0 * (i / 3) as f64,
            )
        })
        .collect();
    let nodes: Vec<(&str, f64, f64)> = nodes.iter().map(|(id, x, y)| (id.as_str(), *x, *y)).collect();
    build(
        false,
        &nodes,
        &[
            ("1", "2", None),
            ("2", "3", None),
            ("4", "5", None),
            ("5", "6", None),
            ("7", "8", None),
            ("8", "9", None),
            ("1", "4", None),
            ("4", "7", None),
            ("2", "5", None),
            ("5", "8", None),
            ("3", "6", None),
            ("6", "9", None),
        ],
    )
}

/// Undirected weighted graph from `S` to `T`; the cheapest route costs 11.
pub fn weighted_graph() -> Graph {
    build(
        false,
        &[
            ("S", 100.0, 200.0),
            ("A", 250.0, 100.0),
            ("B", 250.0, 300.0),
            ("C", 400.0, 100.0),
            ("D", 400.0, 300.0),
            ("T", 550.0, 200.0),
        ],
        &[
            ("S", "A", Some(4.0)),
            ("S", "B", Some(2.0)),
            ("A", "C", Some(5.0)),
            ("A", "B", Some(1.0)),
            ("B", "D", Some(8.0)),
            ("C", "T", Some(3.0)),
            ("D", "T", Some(2.0)),
            ("C", "D", Some(1.0)),
        ],
    )
}

/// A small directed web site where every page links back to `Home`.
pub fn directed_graph() -> Graph {
    build(
        true,
        &[
            ("Home", 300.0, 100.0),
            ("About", 150.0, 250.0),
            ("Products", 450.0, 250.0),
            ("Blog", 200.0, 400.0),
            ("Contact", 400.0, 400.0),
        ],
        &[
            ("Home", "About", None),
            ("Home", "Products", None),
            ("Home", "Blog", None),
            ("About", "Home", None),
            ("About", "Contact", None),
            ("Products", "Home", None),
            ("Products", "Contact", None),
            ("Blog", "Home", None),
            ("Blog", "Products", None),
            ("Contact", "Home", None),
        ],
    )
}

/// Two undirected triangles, `A B C` and `X Y Z`.
pub fn disconnected_graph() -> Graph {
    build(
        false,
        &[
            ("A", 100.0, 150.0),
            ("B", 200.0, 100.0),
            ("C", 200.0, 200.0),
            ("X", 400.0, 150.0),
            ("Y", 500.0, 100.0),
            ("Z", 500.0, 200.0),
        ],
        &[
            ("A", "B", None),
            ("A", "C", None),
            ("B", "C", None),
            ("X", "Y", None),
            ("X", "Z", None),
            ("Y", "Z", None),
        ],
    )
}

pub fn sample_graphs() -> Vec<(&'static str, Graph)> {
    vec![
        (SIMPLE_PATH, simple_path()),
        (GRID_GRAPH, grid_graph()),
        (WEIGHTED_GRAPH, weighted_graph()),
        (DIRECTED_GRAPH, directed_graph()),
        (DISCONNECTED_GRAPH, disconnected_graph()),
    ]
}

/// Looks a sample up by name, ignoring ASCII case.
pub fn sample_graph(name: &str) -> Result<Graph, GraphError> {
    sample_graphs()
        .into_iter()
        .find(|(sample, _)| sample.eq_ignore_ascii_case(name))
        .map(|(_, graph)| graph)
        .ok_or_else(|| GraphError::SampleGraphMissing(name.to_string()))
}
