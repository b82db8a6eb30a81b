use std::collections::HashMap;

use crate::scope::{NewLinePlacement, ScopeState};
use crate::terminal::TerminalId;
use crate::whitespace::{whitespace_grammar, whitespace_rule_name};

/// One registered grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name:      String,
    pub expansion: String,
}

/// Central registry assigning stable names to reusable grammar fragments.
///
/// Rules keep their first-registration position; registering the same name
/// again replaces the expansion in place. Reserved-name terminals rely on
/// that replacement for structural deduplication, while generated names can
/// never collide because the counter only moves forward.
#[derive(Debug, Default)]
pub struct GrammarGenerator {
    rules:          Vec<Rule>,
    index_by_name:  HashMap<String, usize>,
    next_rule_id:   u32,
    terminal_names: HashMap<TerminalId, String>,
}

impl GrammarGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, never-reused rule name. The counter advances on every call,
    /// whether or not the name ends up registered.
    pub fn generate_rule_name(&mut self) -> String {
        let name = format!("rule{}", self.next_rule_id);
        self.next_rule_id += 1;
        name
    }

    /// The generated rule name cached for one terminal, assigning a fresh
    /// one on first use so repeated resolution stays idempotent.
    pub(crate) fn rule_name_for(&mut self, id: TerminalId) -> String {
        if let Some(name) = self.terminal_names.get(&id) {
            return name.clone();
        }
        let name = self.generate_rule_name();
        self.terminal_names.insert(id, name.clone());
        name
    }

    /// Register `expansion` under `name`. The first write wins the position,
    /// later writes replace the content.
    pub fn register_rule(&mut self, name: &str, expansion: String) {
        match self.index_by_name.get(name) {
            Some(&index) => self.rules[index].expansion = expansion,
            None => {
                self.index_by_name.insert(name.to_owned(), self.rules.len());
                self.rules.push(Rule {
                    name: name.to_owned(),
                    expansion,
                });
            }
        }
    }

    /// Register (or reuse) the whitespace rule for this formatting context
    /// and return its name.
    pub fn resolve_whitespace(&mut self, scope: ScopeState, placement: NewLinePlacement) -> String {
        let name = whitespace_rule_name(scope, placement);
        let grammar = whitespace_grammar(scope, placement);
        self.register_rule(&name, grammar);
        name
    }

    pub fn rule(&self, name: &str) -> Option<&str> {
        self.index_by_name
            .get(name)
            .map(|&index| self.rules[index].expansion.as_str())
    }

    pub fn contains_rule(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Render the final grammar document: the root rule first, then every
    /// registered rule in first-registration order, one `name ::= expansion`
    /// per line.
    pub fn generate_gbnf_file(&self, root_fragment: &str) -> String {
        let mut lines = Vec::with_capacity(self.rules.len() + 1);
        lines.push(format!("root ::= {}", root_fragment));
        for rule in &self.rules {
            lines.push(format!("{} ::= {}", rule.name, rule.expansion));
        }
        lines.join("\n")
    }
}
