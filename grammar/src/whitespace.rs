use crate::scope::{NewLinePlacement, ScopeState};
use crate::utils::gbnf_literal;

const OPTIONAL_SPACE: &str = "[ ]?";

fn effective_placement(scope: ScopeState, placement: NewLinePlacement) -> NewLinePlacement {
    if scope.settings.allow_new_lines {
        placement
    } else {
        NewLinePlacement::Never
    }
}

/// Deterministic rule name for the whitespace at one formatting context.
/// Every call site sharing placement, nesting depth and pad width collapses
/// to a single rule table entry.
pub fn whitespace_rule_name(scope: ScopeState, placement: NewLinePlacement) -> String {
    match effective_placement(scope, placement) {
        NewLinePlacement::Never => String::from("whitespace-rule"),
        NewLinePlacement::Before => format!(
            "whitespace-b-{}-{}-rule",
            scope.nesting_depth, scope.settings.scope_pad_spaces
        ),
        NewLinePlacement::After => format!(
            "whitespace-a-{}-{}-rule",
            scope.nesting_depth, scope.settings.scope_pad_spaces
        ),
    }
}

/// Expansion of the whitespace rule: an optional new line with indentation
/// (a fixed number of spaces, or as many tabs as the nesting depth) against
/// a plain optional-space fallback, so the decoder can pick pretty-printed
/// or compact output at every site.
pub fn whitespace_grammar(scope: ScopeState, placement: NewLinePlacement) -> String {
    let placement = effective_placement(scope, placement);
    if placement == NewLinePlacement::Never {
        return String::from(OPTIONAL_SPACE);
    }

    let new_line = String::from("\"\\n\"");
    let depth = scope.nesting_depth as usize;
    let pretty = if depth == 0 {
        new_line
    } else {
        let spaces = gbnf_literal(&" ".repeat(scope.settings.scope_pad_spaces as usize * depth));
        let tabs = gbnf_literal(&"\t".repeat(depth));
        let indentation = format!("( {} | {} )", spaces, tabs);
        if placement == NewLinePlacement::Before {
            format!("{} {}", new_line, indentation)
        } else {
            format!("{} {}", indentation, new_line)
        }
    };
    format!("( {} | {} )", pretty, OPTIONAL_SPACE)
}
