//! BloodHound OpenGraph JSON export and import
//!
//! The wire format is the document shape consumed by the BloodHound OpenGraph
//! ingestion endpoint:
//!
//! ```json
//! {
//!   "graph": {
//!     "nodes": [ {"id": "...", "kinds": ["..."], "properties": {...}} ],
//!     "edges": [ {"kind": "...",
//!                 "start": {"value": "...", "match_by": "id"},
//!                 "end": {"value": "...", "match_by": "id"},
//!                 "properties": {...}} ]
//!   },
//!   "metadata": { "source_kind": "..." }
//! }
//! ```
//!
//! `nodes` and `edges` are always present as arrays, even when empty.
//! `metadata` is emitted only when requested and the graph carries a
//! non-empty source kind. An edge's `properties` key is omitted entirely when
//! the edge has none; this is part of the wire contract, not an optimization.
//!
//! Sources:
//! - https://bloodhound.specterops.io/opengraph/schema#opengraph
//! - https://bloodhound.specterops.io/opengraph/schema#minimal-working-json

use super::edge::Edge;
use super::node::Node;
use super::property::Properties;
use super::store::{Graph, GraphError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during export or import
#[derive(Error, Debug)]
pub enum ExportError {
    /// Malformed JSON or document shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying storage failure, propagated unwrapped
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entity-level failure while rebuilding a graph from a document
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Endpoint references always resolve by node id
pub const MATCH_BY_ID: &str = "id";

/// Top-level export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub graph: GraphPayload,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// The `graph` object: nodes and edges, always present, always arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Serialized node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub kinds: Vec<String>,
    pub properties: IndexMap<String, Value>,
}

/// Serialized edge
///
/// `properties` is present iff the edge carries at least one property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub kind: String,
    pub start: EndpointRef,
    pub end: EndpointRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Value>>,
}

/// How an edge endpoint resolves to a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointRef {
    pub value: String,
    pub match_by: String,
}

impl EndpointRef {
    /// Reference a node by id
    pub fn by_id(value: impl Into<String>) -> Self {
        EndpointRef {
            value: value.into(),
            match_by: MATCH_BY_ID.to_string(),
        }
    }
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub source_kind: String,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        NodeRecord {
            id: node.id().to_string(),
            kinds: node.kinds().to_vec(),
            properties: node.properties().to_json_map(),
        }
    }
}

impl TryFrom<NodeRecord> for Node {
    type Error = GraphError;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        Node::new_with_properties(
            record.id,
            record.kinds,
            Properties::from_json_map(&record.properties)?,
        )
    }
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        let properties = if edge.properties().is_empty() {
            None
        } else {
            Some(edge.properties().to_json_map())
        };

        EdgeRecord {
            kind: edge.kind().to_string(),
            start: EndpointRef::by_id(edge.start()),
            end: EndpointRef::by_id(edge.end()),
            properties,
        }
    }
}

impl TryFrom<EdgeRecord> for Edge {
    type Error = GraphError;

    fn try_from(record: EdgeRecord) -> Result<Self, Self::Error> {
        let properties = match &record.properties {
            Some(map) => Properties::from_json_map(map)?,
            None => Properties::new(),
        };
        Edge::new_with_properties(record.start.value, record.end.value, record.kind, properties)
    }
}

impl Graph {
    /// Build the export document
    ///
    /// Every record is a defensive copy; mutating the document never affects
    /// the graph. `metadata` is included only when requested and the graph's
    /// source kind is non-empty.
    pub fn to_document(&self, include_metadata: bool) -> GraphDocument {
        let nodes = self.nodes().map(NodeRecord::from).collect();
        let edges = self.edges().iter().map(EdgeRecord::from).collect();

        let metadata = if include_metadata && !self.source_kind().is_empty() {
            Some(Metadata {
                source_kind: self.source_kind().to_string(),
            })
        } else {
            None
        };

        GraphDocument {
            graph: GraphPayload { nodes, edges },
            metadata,
        }
    }

    /// Export the graph as a 2-space-indented JSON document
    pub fn to_json(&self, include_metadata: bool) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(
            &self.to_document(include_metadata),
        )?)
    }

    /// Export the graph to a JSON file, metadata included
    ///
    /// Overwrites existing content; the underlying I/O error is propagated
    /// unwrapped to the caller.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        let json = self.to_json(true)?;
        fs::write(path.as_ref(), json)?;
        info!("exported graph to {}", path.as_ref().display());
        Ok(())
    }

    /// Rebuild a graph from an export document string
    pub fn from_json(json: &str) -> ExportResult<Graph> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Graph::from_document(document)
    }

    /// Rebuild a graph from an export document
    ///
    /// Nodes are registered before edges, since edge registration requires
    /// both endpoints to pre-exist; the source kind is taken from the
    /// metadata last, so import never re-stamps kinds (exported nodes already
    /// carry the stamp). Duplicate ids, dangling endpoints, empty identifiers
    /// and composite property values all fail the import.
    pub fn from_document(document: GraphDocument) -> ExportResult<Graph> {
        let mut graph = Graph::new("");

        for record in document.graph.nodes {
            graph.add_node(Node::try_from(record)?)?;
        }
        for record in document.graph.edges {
            graph.add_edge(Edge::try_from(record)?)?;
        }
        if let Some(metadata) = document.metadata {
            graph.source_kind = metadata.source_kind;
        }

        Ok(graph)
    }
}
