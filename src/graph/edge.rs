//! Edge implementation for the property graph
//!
//! All edges are directed and one-way. An edge has no identity beyond its
//! (start, end, kind) triple: two edges with the same triple are duplicates
//! regardless of their properties. Endpoint ids are plain strings; referential
//! integrity against live nodes is checked only when the edge is registered
//! with a [`Graph`](super::store::Graph).

use super::property::{Properties, PropertyValue};
use super::store::{GraphError, GraphResult};
use std::fmt;

/// A directed edge in the graph
#[derive(Debug, Clone)]
pub struct Edge {
    /// Id of the node this edge starts from
    start: String,

    /// Id of the node this edge points to
    end: String,

    /// Relationship kind (e.g. "Knows", "CONNECTS_TO")
    kind: String,

    /// Properties associated with this edge
    properties: Properties,
}

impl Edge {
    /// Create a new directed edge with empty properties
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        kind: impl Into<String>,
    ) -> GraphResult<Self> {
        Self::new_with_properties(start, end, kind, Properties::new())
    }

    /// Create a new directed edge with properties
    ///
    /// Fails when the start id, end id, or kind is empty.
    pub fn new_with_properties(
        start: impl Into<String>,
        end: impl Into<String>,
        kind: impl Into<String>,
        properties: Properties,
    ) -> GraphResult<Self> {
        let start = start.into();
        let end = end.into();
        let kind = kind.into();

        if start.is_empty() {
            return Err(GraphError::EmptyEdgeStart);
        }
        if end.is_empty() {
            return Err(GraphError::EmptyEdgeEnd);
        }
        if kind.is_empty() {
            return Err(GraphError::EmptyEdgeKind);
        }

        Ok(Edge {
            start,
            end,
            kind,
            properties,
        })
    }

    /// Id of the node this edge starts from
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Id of the node this edge points to
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Relationship kind
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, id: &str) -> bool {
        self.start == id
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, id: &str) -> bool {
        self.end == id
    }

    /// Set a property value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.set(key, value)
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Borrow the properties container
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Mutably borrow the properties container
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

// Identity is the (start, end, kind) triple; properties never participate.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.kind == other.kind
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge(start='{}', end='{}', kind='{}', properties={})",
            self.start, self.end, self.kind, self.properties
        )
    }
}
