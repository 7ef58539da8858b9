use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub mod entities;
pub mod utils;

/// Denotes which way edges are followed when deriving neighbours.
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub enum Direction {
    OUT,
    IN,
    #[default]
    BOTH,
}

/// Visual state of a node inside one recorded step.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeState {
    #[default]
    Default,
    Source,
    Target,
    Visiting,
    Visited,
    Path,
    ForwardFrontier,
    BackwardFrontier,
}

impl NodeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Default => "default",
            NodeState::Source => "source",
            NodeState::Target => "target",
            NodeState::Visiting => "visiting",
            NodeState::Visited => "visited",
            NodeState::Path => "path",
            NodeState::ForwardFrontier => "forward-frontier",
            NodeState::BackwardFrontier => "backward-frontier",
        }
    }

    /// Source and target keep their colouring while a traversal runs over them.
    pub fn is_endpoint(&self) -> bool {
        matches!(self, NodeState::Source | NodeState::Target)
    }
}

impl Display for NodeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual state of an edge inside one recorded step.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    #[default]
    Default,
    Exploring,
    Path,
    Visited,
}

impl EdgeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeState::Default => "default",
            EdgeState::Exploring => "exploring",
            EdgeState::Path => "path",
            EdgeState::Visited => "visited",
        }
    }
}

impl Display for EdgeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
