use serde::Serialize;
use tracing::{debug, info};

use gattai_dict::{ClosureSet, Dictionary, Recipe, Symbol};
use gattai_ids::{DictionaryConfig, StructuralSource};

use crate::decompose::{DecomposePolicy, Decomposer};
use crate::synthesize::synthesize;

/// Counters describing one assembly run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssemblyStats {
    /// Manual overrides merged verbatim.
    pub manual: usize,
    /// Characters that received a generated recipe.
    pub generated: usize,
    /// Synthetic intermediate entries minted along the way.
    pub intermediates: usize,
    /// Closure members whose decomposition failed or stayed terminal;
    /// validation surfaces the ones that matter.
    pub skipped: Vec<Symbol>,
    /// Overrides with more than two parts, left for `check` to report.
    pub skipped_overrides: Vec<Symbol>,
}

#[derive(Debug, Clone)]
pub struct AssemblyOutput {
    pub dictionary: Dictionary,
    pub stats: AssemblyStats,
}

/// Assemble the full dictionary: manual overrides first (authoritative,
/// never overwritten), then a generated recipe for every closure member
/// that is neither atomic nor already covered.
///
/// Decomposition failure is not an error here; the symbol is simply
/// omitted and the reachability validator reports it downstream. The
/// closure set iterates in sorted order, so the output map is byte-stable
/// for fixed inputs.
pub fn assemble(
    source: &StructuralSource,
    closure: &ClosureSet,
    config: &DictionaryConfig,
    policy: DecomposePolicy,
) -> AssemblyOutput {
    let mut dictionary = Dictionary::new();
    let mut stats = AssemblyStats::default();

    for (&symbol, parts) in &config.manual_overrides {
        match parts.as_slice() {
            [left, right] => {
                dictionary.insert_manual(symbol, Recipe::new(*left, *right));
                stats.manual += 1;
            }
            _ => stats.skipped_overrides.push(symbol),
        }
    }

    let mut decomposer = Decomposer::with_policy(source, closure, policy);
    for c in closure.members() {
        if closure.is_atomic(c) {
            continue;
        }
        let symbol = Symbol::Real(c);
        if dictionary.contains_key(symbol) {
            continue;
        }
        let Some(flat) = decomposer.recipe_parts(c) else {
            stats.skipped.push(symbol);
            continue;
        };
        let Some(synthesis) = synthesize(c, &flat) else {
            stats.skipped.push(symbol);
            continue;
        };
        for (id, recipe) in synthesis.intermediates {
            if dictionary.insert_generated(id, recipe) {
                stats.intermediates += 1;
            }
        }
        dictionary.insert_generated(symbol, synthesis.recipe);
        stats.generated += 1;
        debug!(symbol = %symbol, parts = flat.len(), "generated recipe");
    }

    info!(
        manual = stats.manual,
        generated = stats.generated,
        intermediates = stats.intermediates,
        skipped = stats.skipped.len(),
        "dictionary assembled"
    );
    AssemblyOutput { dictionary, stats }
}
