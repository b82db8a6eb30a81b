#![cfg(test)]

use json_gbnf_grammar::{
    Fragment, GrammarGenerator, NewLinePlacement, ScopeSettings, ScopeState, Terminal,
    TerminalArena,
};

fn scope_at(depth: u32) -> ScopeState {
    let mut scope = ScopeState::new(ScopeSettings::default());
    for _ in 0..depth {
        scope = scope.deeper();
    }
    scope
}

#[test]
fn test_generate_rule_name_is_monotonic() {
    let mut generator = GrammarGenerator::new();
    assert_eq!(generator.generate_rule_name(), "rule0");
    assert_eq!(generator.generate_rule_name(), "rule1");
    assert_eq!(generator.generate_rule_name(), "rule2");
    assert_eq!(generator.rule_count(), 0);
}

#[test]
fn test_register_rule_keeps_first_position_and_replaces_content() {
    let mut generator = GrammarGenerator::new();
    generator.register_rule("a-rule", String::from("\"a\""));
    generator.register_rule("b-rule", String::from("\"b\""));
    generator.register_rule("a-rule", String::from("\"A\""));

    assert_eq!(generator.rule_count(), 2);
    assert_eq!(generator.rules()[0].name, "a-rule");
    assert_eq!(generator.rules()[0].expansion, "\"A\"");
    assert_eq!(generator.rules()[1].name, "b-rule");
}

#[test]
fn test_literal_values_resolve_inline() {
    let mut arena = TerminalArena::new();
    let null = arena.push(Terminal::NullValue);
    let truthy = arena.push(Terminal::BooleanValue(true));
    let number = arena.push(Terminal::NumberValue(serde_json::Number::from(42)));
    let string = arena.push(Terminal::StringValue(String::from("hello")));

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(null, &mut generator),
        Fragment::Text(String::from(r#""null""#))
    );
    assert_eq!(
        arena.resolve(truthy, &mut generator),
        Fragment::Text(String::from(r#""true""#))
    );
    assert_eq!(
        arena.resolve(number, &mut generator),
        Fragment::Text(String::from(r#""42""#))
    );
    assert_eq!(
        arena.resolve(string, &mut generator),
        Fragment::Text(String::from(r#""\"hello\"""#))
    );
    // One-off literals never touch the rule table.
    assert_eq!(generator.rule_count(), 0);
}

#[test]
fn test_reserved_primitive_rules_deduplicate() {
    let mut arena = TerminalArena::new();
    let first = arena.push(Terminal::FractionalNumber);
    let second = arena.push(Terminal::FractionalNumber);

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(first, &mut generator),
        Fragment::Text(String::from("fractional-number-rule"))
    );
    assert_eq!(
        arena.resolve(second, &mut generator),
        Fragment::Text(String::from("fractional-number-rule"))
    );
    assert_eq!(generator.rule_count(), 1);
}

#[test]
fn test_or_collapses_single_alternative() {
    let mut arena = TerminalArena::new();
    let string_type = arena.push(Terminal::StringType);
    let union = arena.push(Terminal::Or(vec![string_type]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(union, &mut generator),
        Fragment::Text(String::from("string-rule"))
    );
    // Only the string rule itself, no wrapper rule.
    assert_eq!(generator.rule_count(), 1);
    assert!(generator.contains_rule("string-rule"));
}

#[test]
fn test_or_registers_multi_alternative_rule() {
    let mut arena = TerminalArena::new();
    let null_type = arena.push(Terminal::NullType);
    let boolean_type = arena.push(Terminal::BooleanType);
    let union = arena.push(Terminal::Or(vec![null_type, boolean_type]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(union, &mut generator),
        Fragment::Text(String::from("rule0"))
    );
    assert_eq!(
        generator.rule("rule0"),
        Some("( null-rule | boolean-rule )")
    );

    // Resolving the same instance again is idempotent.
    assert_eq!(
        arena.resolve(union, &mut generator),
        Fragment::Text(String::from("rule0"))
    );
    assert_eq!(generator.rule_count(), 3);
}

#[test]
fn test_or_with_no_survivors_is_no_value() {
    let mut arena = TerminalArena::new();
    let empty = arena.push(Terminal::Or(vec![]));
    let zero_width = arena.push(Terminal::Raw(String::from("\"x\"")));
    let nothing = arena.push(Terminal::Repeat {
        item: zero_width,
        min:  0,
        max:  Some(0),
    });
    let degenerate = arena.push(Terminal::Or(vec![nothing]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(arena.resolve(empty, &mut generator), Fragment::NoValue);
    assert_eq!(arena.resolve(degenerate, &mut generator), Fragment::NoValue);
    assert_eq!(generator.rule_count(), 0);
}

#[test]
fn test_identical_composites_get_distinct_rules() {
    let mut arena = TerminalArena::new();
    let a1 = arena.push(Terminal::NullType);
    let b1 = arena.push(Terminal::BooleanType);
    let first = arena.push(Terminal::Or(vec![a1, b1]));
    let second = arena.push(Terminal::Or(vec![a1, b1]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(first, &mut generator),
        Fragment::Text(String::from("rule0"))
    );
    // Structurally identical but a distinct instance: no structural hashing.
    assert_eq!(
        arena.resolve(second, &mut generator),
        Fragment::Text(String::from("rule1"))
    );
    assert_eq!(generator.rule("rule0"), generator.rule("rule1"));
}

#[test]
fn test_repetition_lower_bound() {
    let mut arena = TerminalArena::new();
    let item = arena.push(Terminal::Raw(String::from("\"x\"")));
    let repeat = arena.push(Terminal::Repeat {
        item,
        min: 2,
        max: None,
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(repeat, &mut generator),
        Fragment::Text(String::from("rule0"))
    );
    assert_eq!(generator.rule("rule0"), Some(r#""x" "x" ( "x" )*"#));
}

#[test]
fn test_repetition_upper_bound() {
    let mut arena = TerminalArena::new();
    let item = arena.push(Terminal::Raw(String::from("\"x\"")));
    let repeat = arena.push(Terminal::Repeat {
        item,
        min: 0,
        max: Some(2),
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(repeat, &mut generator),
        Fragment::Text(String::from("rule0"))
    );
    assert_eq!(generator.rule("rule0"), Some(r#"( "x" ( "x" )? )?"#));
}

#[test]
fn test_repetition_exact_count() {
    let mut arena = TerminalArena::new();
    let item = arena.push(Terminal::Raw(String::from("\"x\"")));
    let repeat = arena.push(Terminal::Repeat {
        item,
        min: 3,
        max: Some(3),
    });

    let mut generator = GrammarGenerator::new();
    arena.resolve(repeat, &mut generator);
    assert_eq!(generator.rule("rule0"), Some(r#""x" "x" "x""#));
}

#[test]
fn test_repetition_zero_width_is_no_value() {
    let mut arena = TerminalArena::new();
    let item = arena.push(Terminal::Raw(String::from("\"x\"")));
    let repeat = arena.push(Terminal::Repeat {
        item,
        min: 0,
        max: Some(0),
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(arena.resolve(repeat, &mut generator), Fragment::NoValue);
    assert_eq!(generator.rule_count(), 0);
}

#[test]
fn test_sequence_drops_empty_fragments() {
    let mut arena = TerminalArena::new();
    let a = arena.push(Terminal::Raw(String::from("\"a\"")));
    let x = arena.push(Terminal::Raw(String::from("\"x\"")));
    let nothing = arena.push(Terminal::Repeat {
        item: x,
        min:  0,
        max:  Some(0),
    });
    let blank = arena.push(Terminal::Raw(String::new()));
    let b = arena.push(Terminal::Raw(String::from("\"b\"")));
    let glue = arena.push(Terminal::Sequence(vec![a, nothing, blank, b]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(glue, &mut generator),
        Fragment::Text(String::from(r#""a" "b""#))
    );
    assert_eq!(generator.rule_count(), 0);
}

#[test]
fn test_sequence_of_nothing_is_no_value() {
    let mut arena = TerminalArena::new();
    let blank = arena.push(Terminal::Raw(String::new()));
    let glue = arena.push(Terminal::Sequence(vec![blank]));

    let mut generator = GrammarGenerator::new();
    assert_eq!(arena.resolve(glue, &mut generator), Fragment::NoValue);
}

#[test]
fn test_whitespace_rule_names_track_depth() {
    let mut arena = TerminalArena::new();
    let shallow = arena.push(Terminal::Whitespace {
        scope:     scope_at(1),
        placement: NewLinePlacement::Before,
    });
    let shallow_again = arena.push(Terminal::Whitespace {
        scope:     scope_at(1),
        placement: NewLinePlacement::Before,
    });
    let deep = arena.push(Terminal::Whitespace {
        scope:     scope_at(2),
        placement: NewLinePlacement::Before,
    });
    let top = arena.push(Terminal::Whitespace {
        scope:     scope_at(0),
        placement: NewLinePlacement::Before,
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(shallow, &mut generator),
        Fragment::Text(String::from("whitespace-b-1-4-rule"))
    );
    // A second site with the same formatting context shares the rule.
    assert_eq!(
        arena.resolve(shallow_again, &mut generator),
        Fragment::Text(String::from("whitespace-b-1-4-rule"))
    );
    assert_eq!(
        arena.resolve(deep, &mut generator),
        Fragment::Text(String::from("whitespace-b-2-4-rule"))
    );
    assert_eq!(
        arena.resolve(top, &mut generator),
        Fragment::Text(String::from("whitespace-b-0-4-rule"))
    );
    assert_eq!(generator.rule_count(), 3);

    assert_eq!(
        generator.rule("whitespace-b-1-4-rule"),
        Some(r#"( "\n" ( "    " | "\t" ) | [ ]? )"#)
    );
    assert_eq!(
        generator.rule("whitespace-b-2-4-rule"),
        Some(r#"( "\n" ( "        " | "\t\t" ) | [ ]? )"#)
    );
    assert_eq!(
        generator.rule("whitespace-b-0-4-rule"),
        Some(r#"( "\n" | [ ]? )"#)
    );
}

#[test]
fn test_whitespace_after_placement() {
    let mut arena = TerminalArena::new();
    let after = arena.push(Terminal::Whitespace {
        scope:     scope_at(1),
        placement: NewLinePlacement::After,
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(after, &mut generator),
        Fragment::Text(String::from("whitespace-a-1-4-rule"))
    );
    assert_eq!(
        generator.rule("whitespace-a-1-4-rule"),
        Some(r#"( ( "    " | "\t" ) "\n" | [ ]? )"#)
    );
}

#[test]
fn test_whitespace_without_new_lines() {
    let settings = ScopeSettings {
        allow_new_lines:  false,
        scope_pad_spaces: 4,
    };
    let mut arena = TerminalArena::new();
    let site = arena.push(Terminal::Whitespace {
        scope:     ScopeState::new(settings).deeper(),
        placement: NewLinePlacement::Before,
    });

    let mut generator = GrammarGenerator::new();
    assert_eq!(
        arena.resolve(site, &mut generator),
        Fragment::Text(String::from("whitespace-rule"))
    );
    assert_eq!(generator.rule("whitespace-rule"), Some("[ ]?"));
}

#[test]
fn test_generate_gbnf_file_orders_rules() {
    let mut arena = TerminalArena::new();
    let null_type = arena.push(Terminal::NullType);
    let boolean_type = arena.push(Terminal::BooleanType);
    let union = arena.push(Terminal::Or(vec![null_type, boolean_type]));

    let mut generator = GrammarGenerator::new();
    let root = arena
        .resolve(union, &mut generator)
        .into_text()
        .expect("union should resolve to a rule name");
    let file = generator.generate_gbnf_file(&root);

    let expected = [
        "root ::= rule0",
        r#"null-rule ::= "null""#,
        r#"boolean-rule ::= ( "true" | "false" )"#,
        "rule0 ::= ( null-rule | boolean-rule )",
    ]
    .join("\n");
    assert_eq!(file, expected);
}
