//! JSON graph exchange.
//!
//! The format is `{ "nodes": [{id, x, y, label, partitionId?}],
//! "edges": [{source, target, weight?}], "directed": bool }`. Loading drops
//! edges whose endpoints are not among the nodes; duplicate node ids are an
//! error.
use crate::errors::GraphError;
use graphstep_api::core::entities::{Edge, Graph, Node};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, warn};

#[derive(Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    label: Option<String>,
    #[serde(rename = "partitionId", default)]
    partition_id: Option<usize>,
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        let label = record.label.unwrap_or_else(|| record.id.clone());
        let mut node = Node::new(record.id, record.x, record.y, label);
        node.partition_id = record.partition_id;
        node
    }
}

#[derive(Deserialize)]
struct GraphRecord {
    nodes: Option<Vec<NodeRecord>>,
    edges: Option<Vec<Edge>>,
    #[serde(default)]
    directed: bool,
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    nodes: Vec<&'a Node>,
    edges: &'a [Edge],
    directed: bool,
}

/// What happened while loading a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub nodes: usize,
    pub edges: usize,
    /// Edges dropped because an endpoint was missing.
    pub dropped_edges: Vec<(String, String)>,
}

pub fn load_graph_str(json: &str) -> Result<(Graph, LoadReport), GraphError> {
    let record: GraphRecord = serde_json::from_str(json)?;
    let (Some(nodes), Some(edges)) = (record.nodes, record.edges) else {
        return Err(GraphError::InvalidGraphFormat(
            "expected `nodes` and `edges` arrays".to_string(),
        ));
    };

    let mut graph = Graph::new(record.directed);
    for node in nodes {
        graph.add_node(node.into())?;
    }
    let mut report = LoadReport::default();
    for edge in edges {
        if graph.has_node(&edge.source) && graph.has_node(&edge.target) {
            graph.add_edge(edge)?;
        } else {
            warn!(
                source = edge.source.as_str(),
                target = edge.target.as_str(),
                "dropping edge with unknown endpoint"
            );
            report.dropped_edges.push((edge.source, edge.target));
        }
    }
    report.nodes = graph.count_nodes();
    report.edges = graph.count_edges();
    debug!(nodes = report.nodes, edges = report.edges, "loaded graph");
    Ok((graph, report))
}

pub fn load_graph_file(path: impl AsRef<Path>) -> Result<(Graph, LoadReport), GraphError> {
    let json = fs::read_to_string(path)?;
    load_graph_str(&json)
}

/// Pretty-printed JSON in the exchange format.
pub fn save_graph_string(graph: &Graph) -> Result<String, GraphError> {
    let document = GraphDocument {
        nodes: graph.nodes().collect(),
        edges: graph.edges(),
        directed: graph.is_directed(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn save_graph_file(graph: &Graph, path: impl AsRef<Path>) -> Result<(), GraphError> {
    fs::write(path, save_graph_string(graph)?)?;
    Ok(())
}
