//! L-System definitions and the grammar expansion engine.

use crate::turtle::TurtleCommand;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An L-System: a rewriting grammar plus the drawing meaning of its symbols.
///
/// Constructed once per curve (see [`crate::presets`]) and never mutated.
/// `variables` and `constants` document the alphabet but are not enforced
/// anywhere; expansion and interpretation both fall back to sensible
/// defaults for symbols outside either list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LSystem {
    /// Symbols subject to rewriting.
    pub variables: Vec<char>,

    /// Symbols with no rewrite rule; they carry drawing commands only.
    pub constants: Vec<char>,

    /// The initial string before any rewriting.
    pub axiom: String,

    /// Replacement string per symbol. Symbols absent here rewrite to themselves.
    pub rules: HashMap<char, String>,

    /// Drawing command per symbol. Symbols absent here draw nothing.
    pub commands: HashMap<char, TurtleCommand>,
}

impl LSystem {
    /// Expands the axiom through `n` rewrite passes.
    ///
    /// See [`expand`] for the exact semantics and the growth warning.
    pub fn expand(&self, n: u32) -> String {
        expand(&self.axiom, &self.rules, n)
    }
}

/// Applies `rules` to `axiom` for `n` parallel rewrite passes.
///
/// Each pass replaces every symbol of the current generation simultaneously:
/// a symbol with a rule becomes its replacement string, a symbol without one
/// is carried over unchanged. No symbol's replacement depends on its
/// neighbors. `n = 0` returns the axiom as-is.
///
/// Deterministic and total: rules may reference symbols outside any declared
/// alphabet, map a symbol to itself, or be empty. The only practical limit
/// is memory — output length grows combinatorially with `n` for non-trivial
/// rule sets, so start low.
pub fn expand(axiom: &str, rules: &HashMap<char, String>, n: u32) -> String {
    let mut current = axiom.to_owned();
    for pass in 0..n {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        current = next;
        debug!(pass = pass + 1, len = current.len(), "rewrite pass complete");
    }
    current
}
