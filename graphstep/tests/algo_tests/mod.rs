use graphstep::{graphgen::random_attachment::random_weighted_graph, prelude::*};
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::VecDeque;

mod centrality;
mod partitioning;
mod pathing;
mod pregel;

fn assert_eq_hashmaps_approx(
    a: &IndexMap<String, f64>,
    b: &IndexMap<String, f64>,
    precision: f64, // e.g., 1e-5 for 5 decimal places
) {
    assert_eq!(a.len(), b.len(), "maps have different lengths");

    for (key, &val_a) in a {
        let val_b = b
            .get(key)
            .unwrap_or_else(|| panic!("Missing key: {}", key));
        let diff = (val_a - val_b).abs();
        assert!(
            diff <= precision,
            "Value mismatch for key '{}': {} != {} (diff: {})",
            key,
            val_a,
            val_b,
            diff
        );
    }
}

/// Seeded random graph together with two of its node ids.
fn graph_with_endpoints() -> impl Strategy<Value = (Graph, String, String)> {
    (2usize..30, 1usize..4, any::<bool>(), any::<u64>())
        .prop_flat_map(|(n, k, directed, seed)| {
            let graph = random_weighted_graph(n, k, directed, seed);
            (Just(graph), 0..n, 0..n)
        })
        .prop_map(|(graph, s, t)| {
            let source = graph.node_ids().nth(s).unwrap().to_string();
            let target = graph.node_ids().nth(t).unwrap().to_string();
            (graph, source, target)
        })
}

/// Indices reachable from `idx` in one hop, honouring the direction flag.
fn successors(graph: &Graph, idx: usize) -> Vec<(usize, f64)> {
    let id = graph.node_at(idx).unwrap().id.as_str();
    let mut out = vec![];
    for e in graph.edges() {
        if e.source == id {
            out.push((graph.node_index(&e.target).unwrap(), e.weight()));
        } else if !graph.is_directed() && e.target == id {
            out.push((graph.node_index(&e.source).unwrap(), e.weight()));
        }
    }
    out
}

fn hop_distances(graph: &Graph, source: &str) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.count_nodes()];
    let src = graph.node_index(source).unwrap();
    dist[src] = Some(0);
    let mut queue = VecDeque::from([src]);
    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap();
        for (w, _) in successors(graph, v) {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    dist
}

/// Bellman-Ford over all edges, returns infinity for unreachable nodes.
fn weighted_distances(graph: &Graph, source: &str) -> Vec<f64> {
    let n = graph.count_nodes();
    let mut dist = vec![f64::INFINITY; n];
    dist[graph.node_index(source).unwrap()] = 0.0;
    for _ in 0..n {
        for v in 0..n {
            if dist[v].is_finite() {
                for (w, weight) in successors(graph, v) {
                    if dist[v] + weight < dist[w] {
                        dist[w] = dist[v] + weight;
                    }
                }
            }
        }
    }
    dist
}
