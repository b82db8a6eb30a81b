//! json-gbnf-compiler
//!
//! This crate implements:
//!  1) The JSON-Schema-like input model (`Schema`, a closed sum type with
//!     serde deserialization),
//!  2) The recursive schema-to-terminal compiler (`compile_schema`),
//!  3) Top-level entry points producing `.gbnf` text (`schema_to_gbnf`,
//!     `json_schema_to_gbnf`),
//!  4) Error types (`GbnfError`).

pub mod compiler;
pub mod error;
pub mod types;

pub use compiler::{compile_schema, json_schema_to_gbnf, parse_schema, schema_to_gbnf};
pub use error::GbnfError;
pub use types::{PrimitiveType, Schema, TypeSet};

pub use json_gbnf_grammar::ScopeSettings;
