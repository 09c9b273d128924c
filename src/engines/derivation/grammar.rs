//! Integer-driven symbol derivation.
//!
//! A grammar maps a symbol to a flat, ordered list of choice suffixes (no
//! recursion). Derivation starts from a symbol and, while the symbol is
//! still a rule key, consumes one gene to pick a suffix and appends it as
//! `"_" + suffix`. The first symbol that is not a rule key is the terminal.
//! Each step strictly lengthens the symbol over a finite rule set, so
//! derivation terminates in at most the grammar's depth.

use super::gene_consumer::{GeneConsumer, Interrupt};

pub type Rule = (&'static str, &'static [&'static str]);

/// A fixed choice grammar. Generic over the concrete rule table: any
/// species supplies its own rules and interprets the terminals it produces.
#[derive(Clone, Copy, Debug)]
pub struct Grammar {
    rules: &'static [Rule],
}

impl Grammar {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn choices(&self, symbol: &str) -> Option<&'static [&'static str]> {
        self.rules
            .iter()
            .find(|(key, _)| *key == symbol)
            .map(|(_, choices)| *choices)
    }

    /// Expand `start` until it leaves the rule table, consuming one gene per
    /// expansion step. Returns the fully reduced terminal symbol.
    pub fn derive(&self, start: &str, genes: &mut GeneConsumer) -> Result<String, Interrupt> {
        let mut symbol = start.to_string();
        while let Some(choices) = self.choices(&symbol) {
            let index = genes.choose(choices.len())?;
            symbol.push('_');
            symbol.push_str(choices[index]);
        }
        Ok(symbol)
    }
}
