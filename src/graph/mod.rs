//! Core graph implementation
//!
//! This module implements an in-memory directed labeled graph with:
//! - Nodes with multiple kinds and properties
//! - Directed edges identified by their (start, end, kind) triple
//! - Referential-integrity enforcement on insertion
//! - Bounded-depth path enumeration and connected-component discovery
//! - Export to and import from the BloodHound OpenGraph JSON document shape

pub mod edge;
pub mod export;
pub mod node;
pub mod property;
pub mod store;

// Re-export main types
pub use edge::Edge;
pub use export::{
    EdgeRecord, EndpointRef, ExportError, ExportResult, GraphDocument, GraphPayload, Metadata,
    NodeRecord, MATCH_BY_ID,
};
pub use node::Node;
pub use property::{Properties, PropertyValue};
pub use store::{Graph, GraphError, GraphResult};
