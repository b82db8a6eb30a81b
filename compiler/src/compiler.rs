use json_gbnf_grammar::{
    Fragment, GrammarGenerator, ScopeSettings, ScopeState, Terminal, TerminalArena, TerminalId,
};
use serde_json::Value;

use crate::error::GbnfError;
use crate::types::{PrimitiveType, Schema, CANONICAL_TYPE_ORDER};

/// Parse `text` as a JSON schema document.
pub fn parse_schema(text: &str) -> Result<Schema, GbnfError> {
    let schema: Schema = serde_json::from_str(text)?;
    Ok(schema)
}

/// Compile one schema node into a terminal tree rooted in `arena`, returning
/// the root terminal. Recursion depth equals schema nesting depth.
pub fn compile_schema(
    schema: &Schema,
    arena: &mut TerminalArena,
    scope: ScopeState,
) -> Result<TerminalId, GbnfError> {
    match schema {
        Schema::OneOf { one_of } => {
            let mut branches = Vec::with_capacity(one_of.len());
            for branch in one_of {
                branches.push(compile_schema(branch, arena, scope)?);
            }
            Ok(arena.push(Terminal::Or(branches)))
        }
        Schema::Const { value } => {
            let terminal = literal_terminal(value)?;
            Ok(arena.push(terminal))
        }
        Schema::Enum { values } => {
            let mut members = Vec::with_capacity(values.len());
            for value in values {
                let terminal = literal_terminal(value)?;
                members.push(arena.push(terminal));
            }
            Ok(arena.push(Terminal::Or(members)))
        }
        Schema::Object { properties, .. } => {
            let field_scope = scope.deeper();
            let mut fields = Vec::with_capacity(properties.len());
            for (name, property) in properties {
                fields.push((name.clone(), compile_schema(property, arena, field_scope)?));
            }
            Ok(arena.push(Terminal::ObjectMap { fields, scope }))
        }
        Schema::Array { items, .. } => {
            let item = compile_schema(items, arena, scope.deeper())?;
            Ok(arena.push(Terminal::Array { item, scope }))
        }
        Schema::Basic { types } => {
            let mut alternatives = Vec::new();
            for primitive in CANONICAL_TYPE_ORDER {
                if types.contains(primitive) {
                    alternatives.push(arena.push(primitive_terminal(primitive)));
                }
            }
            Ok(arena.push(Terminal::Or(alternatives)))
        }
    }
}

fn literal_terminal(value: &Value) -> Result<Terminal, GbnfError> {
    match value {
        Value::Null => Ok(Terminal::NullValue),
        Value::Bool(value) => Ok(Terminal::BooleanValue(*value)),
        Value::Number(number) => Ok(Terminal::NumberValue(number.clone())),
        Value::String(text) => Ok(Terminal::StringValue(text.clone())),
        other => Err(GbnfError::UnsupportedLiteral(other.to_string())),
    }
}

fn primitive_terminal(primitive: PrimitiveType) -> Terminal {
    match primitive {
        PrimitiveType::String => Terminal::StringType,
        PrimitiveType::Number => Terminal::FractionalNumber,
        PrimitiveType::Integer => Terminal::IntegerNumber,
        PrimitiveType::Boolean => Terminal::BooleanType,
        PrimitiveType::Null => Terminal::NullType,
    }
}

/// Compile a schema into a complete `.gbnf` document.
pub fn schema_to_gbnf(schema: &Schema, settings: ScopeSettings) -> Result<String, GbnfError> {
    let mut arena = TerminalArena::new();
    let root = compile_schema(schema, &mut arena, ScopeState::new(settings))?;
    let mut generator = GrammarGenerator::new();
    let root_fragment = match arena.resolve(root, &mut generator) {
        Fragment::Text(text) if !text.is_empty() => text,
        // The schema matches nothing valid anywhere: degrade to the empty
        // literal instead of emitting a malformed rule.
        _ => String::from("\"\""),
    };
    Ok(generator.generate_gbnf_file(&root_fragment))
}

/// Parse `text` as a JSON schema document and compile it.
pub fn json_schema_to_gbnf(text: &str, settings: ScopeSettings) -> Result<String, GbnfError> {
    let schema = parse_schema(text)?;
    schema_to_gbnf(&schema, settings)
}
