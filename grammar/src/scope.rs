/// Formatting options fixed once at the start of a compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeSettings {
    /// Allow the constrained decoder to pick pretty-printed output.
    pub allow_new_lines:  bool,
    /// Indentation width per nesting level when new lines are allowed.
    pub scope_pad_spaces: u32,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        ScopeSettings {
            allow_new_lines:  true,
            scope_pad_spaces: 4,
        }
    }
}

/// Where a whitespace site may place its optional new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLinePlacement {
    Never,
    Before,
    After,
}

/// Immutable nesting context threaded through compilation.
///
/// `nesting_depth` is always the number of open array/object containers
/// enclosing the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeState {
    pub settings:      ScopeSettings,
    pub nesting_depth: u32,
}

impl ScopeState {
    pub fn new(settings: ScopeSettings) -> Self {
        ScopeState {
            settings,
            nesting_depth: 0,
        }
    }

    /// The state for the contents of a newly opened array or object.
    pub fn deeper(&self) -> Self {
        ScopeState {
            settings:      self.settings,
            nesting_depth: self.nesting_depth + 1,
        }
    }
}
