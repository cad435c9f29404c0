//! In-memory graph container
//!
//! Owns all nodes (keyed by id) and all edges (insertion-ordered list),
//! enforces referential integrity on insertion, and provides the traversal
//! queries: bounded-depth path enumeration, connected-component discovery and
//! orphan/isolation validation.
//!
//! The container is single-threaded by design: mutators take `&mut self`, so
//! concurrent access must be serialized by the caller.

use super::edge::Edge;
use super::node::Node;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node id cannot be empty")]
    EmptyNodeId,

    #[error("edge start node id cannot be empty")]
    EmptyEdgeStart,

    #[error("edge end node id cannot be empty")]
    EmptyEdgeEnd,

    #[error("edge kind cannot be empty")]
    EmptyEdgeKind,

    #[error("property value must be a primitive type or sequence, got {0}")]
    InvalidPropertyType(String),

    #[error("node {0} already exists")]
    NodeAlreadyExists(String),

    #[error("node {0} not found")]
    NodeNotFound(String),

    #[error("edge references non-existent start node: {0}")]
    EdgeStartNotFound(String),

    #[error("edge references non-existent end node: {0}")]
    EdgeEndNotFound(String),

    #[error("duplicate edge: {start} -[{kind}]-> {end}")]
    DuplicateEdge {
        start: String,
        end: String,
        kind: String,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed labeled graph
///
/// Nodes are keyed by id; edges are kept in insertion order, which is also the
/// export and traversal order for edge-keyed queries. A non-empty `source_kind`
/// is stamped onto every node at insertion time.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node storage, id -> Node
    pub(crate) nodes: HashMap<String, Node>,

    /// Edge list in insertion order
    pub(crate) edges: Vec<Edge>,

    /// Dataset-level kind stamped onto nodes at insertion
    pub(crate) source_kind: String,
}

impl Graph {
    /// Create a new graph; `source_kind` may be empty
    pub fn new(source_kind: impl Into<String>) -> Self {
        Graph {
            nodes: HashMap::new(),
            edges: Vec::new(),
            source_kind: source_kind.into(),
        }
    }

    /// The graph-level source kind
    pub fn source_kind(&self) -> &str {
        &self.source_kind
    }

    /// Add a node to the graph
    ///
    /// Fails with [`GraphError::NodeAlreadyExists`] when a node with the same
    /// id is present; the existing node is left untouched. On success a
    /// non-empty `source_kind` is appended to the node's kinds unless already
    /// carried.
    pub fn add_node(&mut self, mut node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(node.id()) {
            return Err(GraphError::NodeAlreadyExists(node.id().to_string()));
        }

        if !self.source_kind.is_empty() && !node.has_kind(&self.source_kind) {
            node.add_kind(self.source_kind.clone());
        }

        debug!("added node {}", node.id());
        self.nodes.insert(node.id().to_string(), node);
        Ok(())
    }

    /// Add an edge to the graph
    ///
    /// Both endpoints must already be registered nodes, and no triple-equal
    /// edge may exist. Rejected calls leave the container unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if !self.nodes.contains_key(edge.start()) {
            return Err(GraphError::EdgeStartNotFound(edge.start().to_string()));
        }
        if !self.nodes.contains_key(edge.end()) {
            return Err(GraphError::EdgeEndNotFound(edge.end().to_string()));
        }
        if self.edges.iter().any(|e| e == &edge) {
            return Err(GraphError::DuplicateEdge {
                start: edge.start().to_string(),
                end: edge.end().to_string(),
                kind: edge.kind().to_string(),
            });
        }

        debug!("added edge {} -[{}]-> {}", edge.start(), edge.kind(), edge.end());
        self.edges.push(edge);
        Ok(())
    }

    /// Remove a node and prune every edge referencing it
    ///
    /// Returns the removed node. After a successful removal no surviving edge
    /// has the id as start or end.
    pub fn remove_node(&mut self, id: &str) -> GraphResult<Node> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;

        let before = self.edges.len();
        self.edges.retain(|e| e.start() != id && e.end() != id);
        debug!(
            "removed node {} and {} incident edges",
            id,
            before - self.edges.len()
        );

        Ok(node)
    }

    /// Remove all nodes and edges; `source_kind` is retained
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by id
    pub fn get_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes (map order, unordered)
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All nodes carrying a specific kind (map order, unordered)
    pub fn get_nodes_by_kind(&self, kind: &str) -> Vec<&Node> {
        self.nodes.values().filter(|n| n.has_kind(kind)).collect()
    }

    /// All edges of a specific kind, in insertion order
    pub fn get_edges_by_kind(&self, kind: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.kind() == kind).collect()
    }

    /// All edges starting from a node, in insertion order
    pub fn get_edges_from(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.starts_from(id)).collect()
    }

    /// All edges ending at a node, in insertion order
    pub fn get_edges_to(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.ends_at(id)).collect()
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of nodes and edges
    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    /// Check if the graph holds no nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Find paths between two nodes using BFS over outgoing edges
    ///
    /// Returns `None` when either id is unknown, the trivial single-node path
    /// when `start_id == end_id`, and otherwise every path to `end_id` found
    /// within `max_depth`. An empty vector means both endpoints exist but no
    /// path was found.
    ///
    /// A node is marked visited when it is enqueued as an intermediate, not
    /// when it is recorded as a path's final hop. The result is therefore the
    /// set of shortest-length paths under frontier ordering, not all simple
    /// paths of bounded length: longer alternates through an already-visited
    /// intermediate are suppressed. Downstream consumers depend on this
    /// shortest-paths-only result set.
    pub fn find_paths(
        &self,
        start_id: &str,
        end_id: &str,
        max_depth: usize,
    ) -> Option<Vec<Vec<String>>> {
        if !self.nodes.contains_key(start_id) || !self.nodes.contains_key(end_id) {
            return None;
        }

        if start_id == end_id {
            return Some(vec![vec![start_id.to_string()]]);
        }

        let mut paths = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();

        queue.push_back((start_id.to_string(), vec![start_id.to_string()]));
        visited.insert(start_id.to_string());

        while let Some((current, path)) = queue.pop_front() {
            // Frontier paths grow monotonically, so the first too-long entry
            // ends the search.
            if path.len() > max_depth {
                break;
            }

            for edge in self.get_edges_from(&current) {
                let next = edge.end();
                if visited.contains(next) {
                    continue;
                }

                let mut new_path = path.clone();
                new_path.push(next.to_string());

                if next == end_id {
                    paths.push(new_path);
                } else {
                    visited.insert(next.to_string());
                    queue.push_back((next.to_string(), new_path));
                }
            }
        }

        Some(paths)
    }

    /// Find all connected components, treating edges as undirected
    ///
    /// Every node appears in exactly one component; isolated nodes form
    /// singleton components.
    pub fn connected_components(&self) -> Vec<HashSet<String>> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut components = Vec::new();

        for node_id in self.nodes.keys() {
            if visited.contains(node_id) {
                continue;
            }

            let mut component = HashSet::new();
            let mut stack = vec![node_id.clone()];

            while let Some(current) = stack.pop() {
                if !visited.insert(current.clone()) {
                    continue;
                }
                component.insert(current.clone());

                for edge in self.get_edges_from(&current) {
                    if !visited.contains(edge.end()) {
                        stack.push(edge.end().to_string());
                    }
                }
                for edge in self.get_edges_to(&current) {
                    if !visited.contains(edge.start()) {
                        stack.push(edge.start().to_string());
                    }
                }
            }

            components.push(component);
        }

        components
    }

    /// Check for common graph issues, reported as human-readable findings
    ///
    /// Orphaned edges (endpoints missing from the node map, only reachable if
    /// the structure was mutated through an unchecked path) produce one
    /// finding per missing endpoint; isolated nodes are reported as a single
    /// aggregate finding.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        for edge in &self.edges {
            if !self.nodes.contains_key(edge.start()) {
                findings.push(format!(
                    "Edge {} references non-existent start node: {}",
                    edge.kind(),
                    edge.start()
                ));
            }
            if !self.nodes.contains_key(edge.end()) {
                findings.push(format!(
                    "Edge {} references non-existent end node: {}",
                    edge.kind(),
                    edge.end()
                ));
            }
        }

        let mut isolated: Vec<&str> = self
            .nodes
            .keys()
            .map(String::as_str)
            .filter(|&id| !self.edges.iter().any(|e| e.starts_from(id) || e.ends_at(id)))
            .collect();
        isolated.sort_unstable();

        if !isolated.is_empty() {
            findings.push(format!(
                "Found {} isolated nodes: {:?}",
                isolated.len(),
                isolated
            ));
        }

        findings
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(nodes={}, edges={}, source_kind='{}')",
            self.nodes.len(),
            self.edges.len(),
            self.source_kind
        )
    }
}
