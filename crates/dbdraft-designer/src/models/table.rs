//! Table model

use super::Attribute;

/// A designed table: a name plus an ordered list of attributes.
///
/// Attribute insertion order is display order and DDL emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name (unique within a schema)
    pub name: String,
    /// Attributes in declaration order
    pub attributes: Vec<Attribute>,
}

impl Table {
    /// Create a new empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder: add an attribute (duplicates by name are dropped)
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Add an attribute if its name is not already taken on this table.
    /// A duplicate name is a silent no-op; the caller is responsible for
    /// surfacing user-facing errors.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        if self.has_attribute(&attribute.name) {
            return;
        }
        self.attributes.push(attribute);
    }

    /// Remove an attribute by name; an absent name is a no-op
    pub fn remove_attribute(&mut self, attr_name: &str) {
        self.attributes.retain(|a| a.name != attr_name);
    }

    /// Check whether an attribute with this exact name exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Attributes flagged primary key, in declaration order.
    ///
    /// Zero, one, or many: composite keys are supported, and a table
    /// without a primary key is representable (validation catches it
    /// where DDL requires one).
    pub fn primary_keys(&self) -> Vec<&Attribute> {
        self.attributes.iter().filter(|a| a.is_primary_key).collect()
    }
}
