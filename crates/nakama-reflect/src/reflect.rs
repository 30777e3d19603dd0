//! Reflection schema types
//!
//! Records stay plain data. What a scripting layer needs to know about them
//! (field kinds, categories, display names, access) is described here and
//! attached through the [`Reflected`] trait in `schema.rs`.

use serde::Serialize;

/// Category for storage records
pub const CATEGORY_STORAGE: &str = "Nakama|Storage";
/// Category for party records
pub const CATEGORY_PARTIES: &str = "Nakama|Parties";
/// Category for presence records
pub const CATEGORY_PRESENCE: &str = "Nakama|Presence";

/// A record type that can describe itself to a scripting layer.
pub trait Reflected {
    /// Name the record is registered under
    const TYPE_NAME: &'static str;

    /// Describe the record's fields
    fn schema() -> TypeSchema;
}

/// Whether scripts may assign a field
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Shape of a field's value
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "Type")]
pub enum FieldKind {
    String,
    Bool,
    Int32,
    Int64,
    /// UTC calendar timestamp
    DateTime,
    /// Closed enumeration
    Enum {
        #[serde(rename = "Name")]
        name: &'static str,
        #[serde(rename = "Variants")]
        variants: Vec<&'static str>,
    },
    /// Another reflected record
    Struct {
        #[serde(rename = "Name")]
        name: &'static str,
    },
    /// Ordered sequence
    Array {
        #[serde(rename = "Element")]
        element: Box<FieldKind>,
    },
}

impl FieldKind {
    /// Kind of a field holding another reflected record
    pub fn record<T: Reflected>() -> Self {
        FieldKind::Struct { name: T::TYPE_NAME }
    }

    /// Kind of a field holding a sequence of reflected records
    pub fn records<T: Reflected>() -> Self {
        FieldKind::Array {
            element: Box::new(Self::record::<T>()),
        }
    }
}

/// One field of a reflected record
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FieldSchema {
    /// Serialized field name
    pub name: &'static str,
    /// Name shown in editors; usually the same as `name`
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub kind: FieldKind,
    pub access: Access,
}

impl FieldSchema {
    pub fn read_only(name: &'static str, category: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            display_name: name,
            description: "",
            category,
            kind,
            access: Access::ReadOnly,
        }
    }

    pub fn read_write(name: &'static str, category: &'static str, kind: FieldKind) -> Self {
        Self {
            access: Access::ReadWrite,
            ..Self::read_only(name, category, kind)
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn display_as(mut self, display_name: &'static str) -> Self {
        self.display_name = display_name;
        self
    }
}

/// Description of a reflected record
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TypeSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl TypeSchema {
    /// Look up a field by serialized name
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}
