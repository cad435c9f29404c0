//! Node implementation for the property graph
//!
//! Nodes carry a unique string id, an ordered set of kinds (duplicate labels
//! suppressed, first-seen order preserved) and an exclusively owned
//! [`Properties`] container. Equality is defined by id alone.

use super::property::{Properties, PropertyValue};
use super::store::{GraphError, GraphResult};
use std::fmt;

/// A node in the graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier, immutable after construction
    id: String,

    /// Kind labels in first-seen order, no duplicates
    kinds: Vec<String>,

    /// Properties associated with this node
    properties: Properties,
}

impl Node {
    /// Create a new node with no kinds and empty properties
    pub fn new(id: impl Into<String>) -> GraphResult<Self> {
        Self::new_with_properties(id, Vec::new(), Properties::new())
    }

    /// Create a new node with kinds and empty properties
    pub fn new_with_kinds(id: impl Into<String>, kinds: Vec<String>) -> GraphResult<Self> {
        Self::new_with_properties(id, kinds, Properties::new())
    }

    /// Create a new node with kinds and properties
    ///
    /// Fails with [`GraphError::EmptyNodeId`] when the id is empty. Duplicate
    /// kinds in the input are suppressed, keeping the first occurrence.
    pub fn new_with_properties(
        id: impl Into<String>,
        kinds: Vec<String>,
        properties: Properties,
    ) -> GraphResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }

        let mut node = Node {
            id,
            kinds: Vec::with_capacity(kinds.len()),
            properties,
        };
        for kind in kinds {
            node.add_kind(kind);
        }
        Ok(node)
    }

    /// Unique identifier of this node
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Kind labels in first-seen order
    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    /// Add a kind if not already present; re-adding never reorders
    pub fn add_kind(&mut self, kind: impl Into<String>) {
        let kind = kind.into();
        if !self.has_kind(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Remove a kind; no-op if absent
    pub fn remove_kind(&mut self, kind: &str) {
        if let Some(pos) = self.kinds.iter().position(|k| k == kind) {
            self.kinds.remove(pos);
        }
    }

    /// Check if the node carries a specific kind
    pub fn has_kind(&self, kind: &str) -> bool {
        self.kinds.iter().any(|k| k == kind)
    }

    /// Number of kinds
    pub fn kind_count(&self) -> usize {
        self.kinds.len()
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

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(id='{}', kinds={:?}, properties={})",
            self.id, self.kinds, self.properties
        )
    }
}
