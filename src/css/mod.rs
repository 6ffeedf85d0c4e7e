//! Minimal stylesheet scanner.
//!
//! Not a conforming CSS parser: it recognises comments, quoted strings, blocks and
//! at-rule preludes well enough to pull out selectors, rule bodies and class tokens.

mod selector;
mod stylesheet;

pub use selector::{class_tokens, selector_parts, split_selector_list};
pub use stylesheet::{Rule, Stylesheet};
