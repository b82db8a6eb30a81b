use crate::fragment::Fragment;

/// JSON-encode `text`, quotes included.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

/// Wrap `text` in a GBNF literal, escaping the characters that are special
/// inside one.
pub fn gbnf_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Join alternatives GBNF-style: zero surviving alternatives mean nothing
/// valid, a single survivor is spliced through untouched, more are
/// parenthesized and pipe-joined.
pub fn or_text(alternatives: Vec<String>) -> Fragment {
    let mut alternatives: Vec<String> = alternatives
        .into_iter()
        .filter(|alternative| !alternative.is_empty())
        .collect();
    match alternatives.len() {
        0 => Fragment::NoValue,
        1 => Fragment::Text(alternatives.remove(0)),
        _ => Fragment::Text(format!("( {} )", alternatives.join(" | "))),
    }
}

/// Expand repetition bounds into GBNF groups: `min` mandatory copies of
/// `text`, followed by an unbounded `( ... )*` tail when `max` is `None` or
/// by `max - min` nested `( ... )?` groups otherwise. Bounds that collapse
/// to zero width produce no value.
pub fn repeat_text(text: &str, min: u32, max: Option<u32>) -> Fragment {
    if text.is_empty() {
        return Fragment::NoValue;
    }
    let mut parts: Vec<String> = (0..min).map(|_| String::from(text)).collect();
    match max {
        None => parts.push(format!("( {} )*", text)),
        Some(max) => {
            let mut tail = String::new();
            for _ in min..max {
                tail = if tail.is_empty() {
                    format!("( {} )?", text)
                } else {
                    format!("( {} {} )?", text, tail)
                };
            }
            if !tail.is_empty() {
                parts.push(tail);
            }
        }
    }
    if parts.is_empty() {
        Fragment::NoValue
    } else {
        Fragment::Text(parts.join(" "))
    }
}
