//! OpenGraph
//!
//! An in-memory property graph builder compatible with the BloodHound
//! OpenGraph ingestion format. Nodes carry typed kinds and scalar properties,
//! edges are directed and identified by their (start, end, kind) triple, and
//! the whole graph serializes to the OpenGraph JSON document shape.
//!
//! The container enforces referential integrity on mutation (edges can only
//! reference registered nodes, removing a node prunes its edges) and offers
//! bounded-depth path enumeration, connected-component discovery and
//! orphan/isolation validation.
//!
//! All operations are synchronous, single-threaded, in-memory mutations; the
//! only I/O is the optional export-to-file step.
//!
//! ## Example Usage
//!
//! ```rust
//! use opengraph::{Edge, Graph, Node};
//!
//! let mut graph = Graph::new("Base");
//!
//! let mut alice = Node::new_with_kinds("alice", vec!["Person".to_string()]).unwrap();
//! alice.set_property("displayname", "Alice");
//! graph.add_node(alice).unwrap();
//! graph.add_node(Node::new("bob").unwrap()).unwrap();
//!
//! graph.add_edge(Edge::new("alice", "bob", "Knows").unwrap()).unwrap();
//!
//! // Every node inserted into a graph with a source kind carries it
//! assert!(graph.get_node("bob").unwrap().has_kind("Base"));
//!
//! let json = graph.to_json(true).unwrap();
//! assert!(json.contains("\"source_kind\": \"Base\""));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeRecord, EndpointRef, ExportError, ExportResult, Graph, GraphDocument, GraphError,
    GraphPayload, GraphResult, Metadata, Node, NodeRecord, Properties, PropertyValue, MATCH_BY_ID,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
