use graphstep_api::core::{entities::Graph, Direction};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    pub node: usize,
    pub weight: f64,
}

/// Neighbour lists indexed by node position, in edge insertion order.
///
/// Built once per run. Traversal order over a node's neighbours is exactly the
/// order in which the contributing edges were added to the graph.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    neighbours: Vec<Vec<Neighbour>>,
    num_links: usize,
}

impl Adjacency {
    pub fn new(graph: &Graph, direction: Direction) -> Self {
        let mut neighbours = vec![Vec::new(); graph.count_nodes()];
        let mut num_links = 0;
        for edge in graph.edges() {
            let (Some(src), Some(dst)) = (
                graph.node_index(&edge.source),
                graph.node_index(&edge.target),
            ) else {
                continue;
            };
            let weight = edge.weight();
            if matches!(direction, Direction::OUT | Direction::BOTH) {
                neighbours[src].push(Neighbour { node: dst, weight });
                num_links += 1;
            }
            if matches!(direction, Direction::IN | Direction::BOTH) {
                neighbours[dst].push(Neighbour { node: src, weight });
                num_links += 1;
            }
        }
        Self {
            neighbours,
            num_links,
        }
    }

    /// Adjacency honouring the graph's `directed` flag.
    pub fn traversal(graph: &Graph) -> Self {
        Self::new(graph, graph.traversal_direction())
    }

    pub fn neighbours(&self, node: usize) -> &[Neighbour] {
        self.neighbours
            .get(node)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Total number of directed links, counting both halves of undirected edges.
    pub fn num_links(&self) -> usize {
        self.num_links
    }
}
