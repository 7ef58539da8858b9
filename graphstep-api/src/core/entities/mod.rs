use crate::core::Direction;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which an edge's visual state is recorded, `"<source>-<target>"`.
pub fn edge_key(source: &str, target: &str) -> String {
    format!("{source}-{target}")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphModelError {
    #[error("Node with id '{0}' already exists")]
    DuplicateNode(String),
    #[error("Edge '{from}' -> '{to}' references missing node '{missing}'")]
    EdgeEndpointMissing {
        from: String,
        to: String,
        missing: String,
    },
}

/// A node as placed by the editor. Positions are for display only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub label: String,
    #[serde(
        rename = "partitionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub partition_id: Option<usize>,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label: label.into(),
            partition_id: None,
        }
    }

    /// A node labelled with its own id, placed at the origin.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), 0.0, 0.0, id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    pub fn weighted(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: Some(weight),
        }
    }

    /// Edges without an explicit weight count as 1.
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// Ordered nodes, ordered edges and a direction flag.
///
/// An undirected graph stores each edge once; engines treat it as traversable
/// both ways. Every edge endpoint is guaranteed to exist because the only ways
/// to add edges check it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
    directed: bool,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            directed,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
        directed: bool,
    ) -> Result<Self, GraphModelError> {
        let mut graph = Self::new(directed);
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), GraphModelError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphModelError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphModelError> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphModelError::EdgeEndpointMissing {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Adds the edge, creating either endpoint first if it is not present yet.
    pub fn add_edge_with_nodes(&mut self, edge: Edge) {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                self.nodes
                    .insert(endpoint.clone(), Node::with_id(endpoint.clone()));
            }
        }
        self.edges.push(edge);
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Direction in which traversals follow edges.
    pub fn traversal_direction(&self) -> Direction {
        if self.directed {
            Direction::OUT
        } else {
            Direction::BOTH
        }
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.nodes.keys().map(|id| id.as_str())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display label of a node, falling back to the id itself.
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes
            .get(id)
            .map(|node| node.label.as_str())
            .unwrap_or(id)
    }

    pub fn label_at(&self, index: usize) -> &str {
        self.node_at(index)
            .map(|node| node.label.as_str())
            .unwrap_or_default()
    }

    pub fn id_at(&self, index: usize) -> &str {
        self.node_at(index)
            .map(|node| node.id.as_str())
            .unwrap_or_default()
    }

    pub fn set_partition_id(&mut self, index: usize, partition_id: usize) -> bool {
        match self.nodes.get_index_mut(index) {
            Some((_, node)) => {
                node.partition_id = Some(partition_id);
                true
            }
            None => false,
        }
    }
}
