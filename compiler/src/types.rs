use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The subset of JSON Schema understood by the grammar compiler. Untagged
/// deserialization tries the shapes in declaration order, so the most
/// specific ones come first; anything outside these six shapes is rejected
/// at parse time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    OneOf {
        #[serde(rename = "oneOf")]
        one_of: Vec<Schema>,
    },
    Const {
        #[serde(rename = "const")]
        value: Value,
    },
    Enum {
        #[serde(rename = "enum")]
        values: Vec<Value>,
    },
    Object {
        #[serde(rename = "type")]
        kind:       ObjectKind,
        /// Every declared property is mandatory and keeps declaration order.
        properties: IndexMap<String, Schema>,
    },
    Array {
        #[serde(rename = "type")]
        kind:  ArrayKind,
        items: Box<Schema>,
    },
    Basic {
        #[serde(rename = "type")]
        types: TypeSet,
    },
}

impl Schema {
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Schema::Object {
            kind: ObjectKind::Object,
            properties,
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            kind:  ArrayKind::Array,
            items: Box::new(items),
        }
    }

    pub fn basic(types: Vec<PrimitiveType>) -> Self {
        Schema::Basic {
            types: TypeSet::Many(types),
        }
    }

    pub fn one_of(branches: Vec<Schema>) -> Self {
        Schema::OneOf { one_of: branches }
    }

    pub fn constant(value: Value) -> Self {
        Schema::Const { value }
    }

    pub fn enumeration(values: Vec<Value>) -> Self {
        Schema::Enum { values }
    }
}

/// Marker for `"type": "object"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "object")]
    Object,
}

/// Marker for `"type": "array"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ArrayKind {
    #[serde(rename = "array")]
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

/// Fixed order primitive alternatives appear in, independent of how the
/// schema lists them.
pub const CANONICAL_TYPE_ORDER: [PrimitiveType; 5] = [
    PrimitiveType::String,
    PrimitiveType::Number,
    PrimitiveType::Integer,
    PrimitiveType::Boolean,
    PrimitiveType::Null,
];

/// A basic schema's `type` value: one primitive name or a list of them. An
/// empty list is legal and matches nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    One(PrimitiveType),
    Many(Vec<PrimitiveType>),
}

impl TypeSet {
    pub fn contains(&self, primitive: PrimitiveType) -> bool {
        match self {
            TypeSet::One(member) => *member == primitive,
            TypeSet::Many(members) => members.contains(&primitive),
        }
    }
}
