use json_gbnf_compiler::{parse_schema, schema_to_gbnf, GbnfError, ScopeSettings};

fn main() -> Result<(), GbnfError> {
    // A schema for a small "person" record. Every property is mandatory and
    // appears in declaration order in the generated output.
    let schema = parse_schema(
        r#"{
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"},
                "tags": {"type": "array", "items": {"type": "string"}}
            }
        }"#,
    )?;

    let pretty = schema_to_gbnf(&schema, ScopeSettings::default())?;
    println!("# grammar with pretty-printing alternatives\n{}\n", pretty);

    let compact = schema_to_gbnf(
        &schema,
        ScopeSettings {
            allow_new_lines:  false,
            scope_pad_spaces: 0,
        },
    )?;
    println!("# compact grammar\n{}", compact);

    Ok(())
}
