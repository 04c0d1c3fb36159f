//! Attribute (column) model

/// A column of a designed table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name (unique within its table)
    pub name: String,
    /// Data type as free-form SQL text (e.g. "INTEGER", "TEXT")
    pub data_type: String,
    /// Is this attribute part of the primary key?
    pub is_primary_key: bool,
    /// Whether NULL values are allowed
    pub is_nullable: bool,
    /// Is this attribute unique?
    pub is_unique: bool,
}

impl Attribute {
    /// Create an attribute with a name and the default TEXT type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: "TEXT".to_string(),
            is_primary_key: false,
            is_nullable: true,
            is_unique: false,
        }
    }

    /// Builder: set data type
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    /// Builder: set as integer type
    pub fn integer(mut self) -> Self {
        self.data_type = "INTEGER".to_string();
        self
    }

    /// Builder: set as text type
    pub fn text(mut self) -> Self {
        self.data_type = "TEXT".to_string();
        self
    }

    /// Builder: flag as primary key.
    ///
    /// Nullability stays untouched; whether a key column also carries
    /// NOT NULL is an independent choice in the designer.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Builder: set as not null
    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Builder: set as unique
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }
}
