// src/graph.rs
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::model::AuthorName;

/// Edge weight for `author → influence`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InfluencedBy;

impl fmt::Display for InfluencedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("influenced by")
    }
}

/// Directed influence graph. An edge A → B reads "A was influenced by B".
/// Nodes are keyed by author name; inserting a node or edge twice is a no-op.
#[derive(Clone, Debug, Default)]
pub struct InfluenceGraph {
    graph: DiGraph<AuthorName, InfluencedBy>,
    index: HashMap<AuthorName, NodeIndex>,
}

impl InfluenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(name) {
            return ix;
        }
        let ix = self.graph.add_node(s!(name));
        self.index.insert(s!(name), ix);
        ix
    }

    /// Adds both endpoints if needed. Returns false if the edge already existed.
    pub fn add_edge(&mut self, author: &str, influence: &str) -> bool {
        let a = self.add_node(author);
        let b = self.add_node(influence);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, InfluencedBy);
        true
    }

    /// Drops the edge, keeping both nodes.
    pub fn remove_edge(&mut self, author: &str, influence: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(author), self.index.get(influence)) else {
            return false;
        };
        match self.graph.find_edge(a, b) {
            Some(e) => self.graph.remove_edge(e).is_some(),
            None => false,
        }
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn contains_edge(&self, author: &str, influence: &str) -> bool {
        match (self.index.get(author), self.index.get(influence)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|e| {
            (self.graph[e.source()].as_str(), self.graph[e.target()].as_str())
        })
    }

    /// Authors `name` was influenced by, sorted.
    pub fn influences_of(&self, name: &str) -> Vec<&str> {
        let Some(&ix) = self.index.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(ix, Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect();
        out.sort_unstable();
        out
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.index.clear();
    }

    /// Graphviz rendering, edges unlabeled.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }

    fn node_set(&self) -> BTreeSet<&str> {
        self.nodes().collect()
    }

    fn edge_set(&self) -> BTreeSet<(&str, &str)> {
        self.edges().collect()
    }
}

// Insertion order is irrelevant: two graphs are equal when their node and
// edge sets are.
impl PartialEq for InfluenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.node_set() == other.node_set() && self.edge_set() == other.edge_set()
    }
}

impl Eq for InfluenceGraph {}
