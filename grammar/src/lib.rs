//! json-gbnf-grammar
//!
//! This crate implements the GBNF side of the json-gbnf compiler:
//!  1) `Terminal` / `TerminalArena`: nodes representing grammar fragments
//!     (literal values, JSON primitives, whitespace, composites, glue),
//!  2) `GrammarGenerator`: the insertion-ordered rule table with its
//!     rule-name supply and deduplication discipline,
//!  3) The scope-aware whitespace sub-grammar shared by composite terminals,
//!  4) Final grammar-file serialization (`generate_gbnf_file`).

pub mod fragment;
pub mod generator;
pub mod scope;
pub mod terminal;
pub mod utils;
pub mod whitespace;

pub use fragment::Fragment;
pub use generator::{GrammarGenerator, Rule};
pub use scope::{NewLinePlacement, ScopeSettings, ScopeState};
pub use terminal::{Terminal, TerminalArena, TerminalId};
