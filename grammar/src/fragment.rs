/// The result of resolving a terminal: either grammar text that is safe to
/// splice into a parent expansion, or the marker that the terminal has no
/// valid expansion at all.
///
/// `NoValue` is deliberately distinct from `Text("")` and from the legal
/// two-character GBNF literal `""`, so a schema that matches nothing can
/// never be confused with one that matches the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    NoValue,
}

impl Fragment {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::NoValue => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::NoValue => None,
        }
    }

    pub fn is_no_value(&self) -> bool {
        matches!(self, Fragment::NoValue)
    }
}
