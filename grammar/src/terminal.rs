use serde_json::Number;

use crate::fragment::Fragment;
use crate::generator::GrammarGenerator;
use crate::scope::{NewLinePlacement, ScopeState};
use crate::utils::{gbnf_literal, or_text, quote, repeat_text};
use crate::whitespace::whitespace_grammar;

pub const NULL_RULE_NAME: &str = "null-rule";
pub const BOOLEAN_RULE_NAME: &str = "boolean-rule";
pub const INTEGER_NUMBER_RULE_NAME: &str = "integer-number-rule";
pub const FRACTIONAL_NUMBER_RULE_NAME: &str = "fractional-number-rule";
pub const STRING_RULE_NAME: &str = "string-rule";

const NULL_RULE: &str = "\"null\"";
const BOOLEAN_RULE: &str = "( \"true\" | \"false\" )";
const INTEGER_NUMBER_RULE: &str = "(\"-\"? ([0-9] | [1-9] [0-9]*))";
const FRACTIONAL_NUMBER_RULE: &str =
    "(\"-\"? ([0-9] | [1-9] [0-9]*)) (\".\" [0-9]+)? ([eE] [-+]? [0-9]+)?";
const STRING_RULE: &str = r#""\"" ( [^"\\] | "\\" (["\\/bfnrt] | "u" [0-9a-fA-F] [0-9a-fA-F] [0-9a-fA-F] [0-9a-fA-F]) )* "\"""#;

/// Index of a terminal inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalId(usize);

/// A node representing one fragment of the output grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Terminal {
    /// The JSON literal `null`; resolves inline, never registered.
    NullValue,
    /// A fixed boolean value; resolves inline, never registered.
    BooleanValue(bool),
    /// A fixed number value; resolves inline, never registered.
    NumberValue(Number),
    /// A fixed string value; resolves inline, never registered.
    StringValue(String),

    /// The JSON `null` primitive; reserved rule name.
    NullType,
    /// Any JSON boolean; reserved rule name.
    BooleanType,
    /// Any JSON integer; reserved rule name.
    IntegerNumber,
    /// Any JSON number; reserved rule name.
    FractionalNumber,
    /// Any JSON string; reserved rule name.
    StringType,

    /// Optional formatting whitespace; reserved rule name derived from the
    /// formatting context.
    Whitespace {
        scope:     ScopeState,
        placement: NewLinePlacement,
    },

    /// A JSON object with mandatory fields in declaration order.
    ObjectMap {
        fields: Vec<(String, TerminalId)>,
        scope:  ScopeState,
    },
    /// A homogeneous JSON array.
    Array {
        item:  TerminalId,
        scope: ScopeState,
    },
    /// Alternation between child terminals.
    Or(Vec<TerminalId>),
    /// Bounded repetition of a child terminal; `max: None` means unbounded.
    Repeat {
        item: TerminalId,
        min:  u32,
        max:  Option<u32>,
    },

    /// Ordered glue: children joined by a single space, empty parts dropped;
    /// resolves inline, never registered.
    Sequence(Vec<TerminalId>),
    /// A raw grammar fragment; resolves inline, never registered.
    Raw(String),
}

/// Arena owning every terminal built during one compilation. Nodes are
/// immutable once pushed; per-node rule names live in the generator's side
/// table instead.
#[derive(Debug, Default)]
pub struct TerminalArena {
    nodes: Vec<Terminal>,
}

impl TerminalArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, terminal: Terminal) -> TerminalId {
        let id = TerminalId(self.nodes.len());
        self.nodes.push(terminal);
        id
    }

    pub fn get(&self, id: TerminalId) -> &Terminal {
        &self.nodes[id.0]
    }

    /// Resolve a terminal to a reference usable inside another expansion:
    /// inline text for literal values and glue, a rule name for everything
    /// that registers itself in the rule table. Resolving the same terminal
    /// again yields the same result and a single table entry.
    pub fn resolve(&self, id: TerminalId, generator: &mut GrammarGenerator) -> Fragment {
        match self.get(id) {
            Terminal::NullValue
            | Terminal::BooleanValue(_)
            | Terminal::NumberValue(_)
            | Terminal::StringValue(_)
            | Terminal::Sequence(_)
            | Terminal::Raw(_) => self.grammar(id, generator),

            Terminal::NullType => reserve(generator, NULL_RULE_NAME, NULL_RULE),
            Terminal::BooleanType => reserve(generator, BOOLEAN_RULE_NAME, BOOLEAN_RULE),
            Terminal::IntegerNumber => {
                reserve(generator, INTEGER_NUMBER_RULE_NAME, INTEGER_NUMBER_RULE)
            }
            Terminal::FractionalNumber => {
                reserve(generator, FRACTIONAL_NUMBER_RULE_NAME, FRACTIONAL_NUMBER_RULE)
            }
            Terminal::StringType => reserve(generator, STRING_RULE_NAME, STRING_RULE),

            Terminal::Whitespace { scope, placement } => {
                Fragment::Text(generator.resolve_whitespace(*scope, *placement))
            }

            Terminal::Or(children) => {
                let survivors = self.surviving_alternatives(children, generator);
                match survivors.len() {
                    0 => Fragment::NoValue,
                    // A singleton union needs no wrapping and no rule of its
                    // own, the surviving reference stands in directly.
                    1 => Fragment::Text(survivors.into_iter().next().unwrap_or_default()),
                    _ => {
                        let name = generator.rule_name_for(id);
                        generator.register_rule(&name, format!("( {} )", survivors.join(" | ")));
                        Fragment::Text(name)
                    }
                }
            }

            Terminal::ObjectMap { .. } | Terminal::Array { .. } | Terminal::Repeat { .. } => {
                match self.grammar(id, generator) {
                    Fragment::NoValue => Fragment::NoValue,
                    Fragment::Text(expansion) => {
                        let name = generator.rule_name_for(id);
                        generator.register_rule(&name, expansion);
                        Fragment::Text(name)
                    }
                }
            }
        }
    }

    /// Compute a terminal's raw expansion text, resolving children as
    /// needed.
    pub fn grammar(&self, id: TerminalId, generator: &mut GrammarGenerator) -> Fragment {
        match self.get(id) {
            Terminal::NullValue => Fragment::Text(gbnf_literal("null")),
            Terminal::BooleanValue(value) => {
                Fragment::Text(gbnf_literal(if *value { "true" } else { "false" }))
            }
            Terminal::NumberValue(number) => Fragment::Text(gbnf_literal(&number.to_string())),
            // The value must come out as JSON text, so quote first and wrap
            // the quoted form in a GBNF literal.
            Terminal::StringValue(value) => Fragment::Text(gbnf_literal(&quote(value))),

            Terminal::NullType => Fragment::Text(String::from(NULL_RULE)),
            Terminal::BooleanType => Fragment::Text(String::from(BOOLEAN_RULE)),
            Terminal::IntegerNumber => Fragment::Text(String::from(INTEGER_NUMBER_RULE)),
            Terminal::FractionalNumber => Fragment::Text(String::from(FRACTIONAL_NUMBER_RULE)),
            Terminal::StringType => Fragment::Text(String::from(STRING_RULE)),

            Terminal::Whitespace { scope, placement } => {
                Fragment::Text(whitespace_grammar(*scope, *placement))
            }

            Terminal::Or(children) => {
                let survivors = self.surviving_alternatives(children, generator);
                or_text(survivors)
            }

            Terminal::ObjectMap { fields, scope } => {
                self.object_grammar(fields, *scope, generator)
            }
            Terminal::Array { item, scope } => self.array_grammar(*item, *scope, generator),

            Terminal::Repeat { item, min, max } => match self.resolve(*item, generator) {
                Fragment::Text(text) if !text.is_empty() => repeat_text(&text, *min, *max),
                _ => Fragment::NoValue,
            },

            Terminal::Sequence(children) => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    if let Fragment::Text(text) = self.resolve(*child, generator) {
                        if !text.is_empty() {
                            parts.push(text);
                        }
                    }
                }
                if parts.is_empty() {
                    Fragment::NoValue
                } else {
                    Fragment::Text(parts.join(" "))
                }
            }

            Terminal::Raw(text) => Fragment::Text(text.clone()),
        }
    }

    fn surviving_alternatives(
        &self,
        children: &[TerminalId],
        generator: &mut GrammarGenerator,
    ) -> Vec<String> {
        children
            .iter()
            .filter_map(|child| self.resolve(*child, generator).into_text())
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn object_grammar(
        &self,
        fields: &[(String, TerminalId)],
        scope: ScopeState,
        generator: &mut GrammarGenerator,
    ) -> Fragment {
        let separator = generator.resolve_whitespace(scope.deeper(), NewLinePlacement::Before);
        let closing = generator.resolve_whitespace(scope, NewLinePlacement::Before);

        let mut parts: Vec<String> = vec![String::from("\"{\""), separator.clone()];
        for (position, (key, value)) in fields.iter().enumerate() {
            parts.push(gbnf_literal(&quote(key)));
            parts.push(String::from("\":\""));
            parts.push(String::from("[ ]?"));
            if let Some(text) = self.resolve(*value, generator).into_text() {
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            if position + 1 < fields.len() {
                parts.push(String::from("\",\""));
                parts.push(separator.clone());
            }
        }
        parts.push(closing);
        parts.push(String::from("\"}\""));
        Fragment::Text(parts.join(" "))
    }

    fn array_grammar(
        &self,
        item: TerminalId,
        scope: ScopeState,
        generator: &mut GrammarGenerator,
    ) -> Fragment {
        const EMPTY_LIST: &str = "\"\"";
        let leading = generator.resolve_whitespace(scope.deeper(), NewLinePlacement::Before);
        let closing = generator.resolve_whitespace(scope, NewLinePlacement::Before);

        let mut alternatives = Vec::with_capacity(2);
        if let Some(item_text) = self.resolve(item, generator).into_text() {
            if !item_text.is_empty() {
                let separated = format!("\",\" {} {}", leading, item_text);
                let one_or_more = match repeat_text(&separated, 0, None) {
                    Fragment::Text(more) => format!("{} {}", item_text, more),
                    Fragment::NoValue => item_text,
                };
                alternatives.push(one_or_more);
            }
        }
        alternatives.push(String::from(EMPTY_LIST));

        let items = match or_text(alternatives) {
            Fragment::Text(text) => text,
            Fragment::NoValue => String::from(EMPTY_LIST),
        };
        Fragment::Text(format!("\"[\" {} {} {} \"]\"", leading, items, closing))
    }
}

fn reserve(generator: &mut GrammarGenerator, name: &str, body: &str) -> Fragment {
    generator.register_rule(name, String::from(body));
    Fragment::Text(String::from(name))
}
