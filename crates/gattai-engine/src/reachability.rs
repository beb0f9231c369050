use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use gattai_dict::{Dictionary, Symbol};

/// The single root cause behind an unreachable symbol.
///
/// Causes propagate through the recipe graph unchanged: the validator is a
/// "find the first missing leaf" search, not a fault aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "symbol", rename_all = "lowercase")]
pub enum Cause {
    /// The symbol has no recipe and is not atomic.
    Missing(Symbol),
    /// The symbol participates in a recipe dependency cycle.
    Cycle(Symbol),
}

impl Cause {
    pub fn symbol(&self) -> Symbol {
        match *self {
            Cause::Missing(s) | Cause::Cycle(s) => s,
        }
    }
}

/// Per-symbol reachability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reachable,
    Unreachable(Cause),
}

impl Verdict {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Verdict::Reachable)
    }
}

/// An unreachable target with its root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unreachable {
    pub symbol: Symbol,
    pub cause: Cause,
}

/// One row of the ranked root-cause table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootCauseCount {
    pub cause: Cause,
    /// How many checked symbols fail transitively because of this cause.
    pub blocked: usize,
}

/// Result of the batch reachability analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ReachabilityReport {
    /// Total symbols checked (dictionary keys plus extra targets).
    pub checked: usize,
    /// Every unreachable symbol with its root cause, sorted by symbol.
    pub unreachable: Vec<Unreachable>,
    /// Root causes ranked by blocked-symbol count (descending), ties by
    /// symbol text, so the highest-impact fix is always listed first.
    pub root_causes: Vec<RootCauseCount>,
}

impl ReachabilityReport {
    pub fn all_reachable(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Memoized recursive traversal with a per-path visited set.
///
/// Reachable and missing-cause verdicts are final and memoized globally.
/// Cycle verdicts are path-scoped and deliberately not cached: a symbol's
/// reachability outside the cyclic context that produced the verdict may
/// differ.
pub struct ReachabilityChecker<'a> {
    dictionary: &'a Dictionary,
    atomic: &'a BTreeSet<char>,
    memo: HashMap<Symbol, Verdict>,
    path: HashSet<Symbol>,
}

impl<'a> ReachabilityChecker<'a> {
    pub fn new(dictionary: &'a Dictionary, atomic: &'a BTreeSet<char>) -> Self {
        ReachabilityChecker {
            dictionary,
            atomic,
            memo: HashMap::new(),
            path: HashSet::new(),
        }
    }

    /// Verdict for a single symbol.
    pub fn verdict(&mut self, symbol: Symbol) -> Verdict {
        if let Symbol::Real(c) = symbol {
            if self.atomic.contains(&c) {
                return Verdict::Reachable;
            }
        }
        if let Some(&hit) = self.memo.get(&symbol) {
            return hit;
        }
        let Some(recipe) = self.dictionary.get(symbol) else {
            let verdict = Verdict::Unreachable(Cause::Missing(symbol));
            self.memo.insert(symbol, verdict);
            return verdict;
        };
        if self.path.contains(&symbol) {
            return Verdict::Unreachable(Cause::Cycle(symbol));
        }

        let recipe = *recipe;
        self.path.insert(symbol);
        // Left first; on a tie the left part's cause wins.
        let mut verdict = Verdict::Reachable;
        for part in recipe.parts() {
            if let v @ Verdict::Unreachable(_) = self.verdict(part) {
                verdict = v;
                break;
            }
        }
        self.path.remove(&symbol);

        match verdict {
            Verdict::Unreachable(Cause::Cycle(_)) => {}
            _ => {
                self.memo.insert(symbol, verdict);
            }
        }
        verdict
    }
}

/// Batch analysis: validate every dictionary key plus `extra_targets`, and
/// tally root causes by the number of symbols they block.
pub fn validate_reachability(
    dictionary: &Dictionary,
    atomic: &BTreeSet<char>,
    extra_targets: &BTreeSet<char>,
) -> ReachabilityReport {
    let mut checker = ReachabilityChecker::new(dictionary, atomic);

    let mut targets: Vec<Symbol> = dictionary.keys().collect();
    for &c in extra_targets {
        let symbol = Symbol::Real(c);
        if !dictionary.contains_key(symbol) {
            targets.push(symbol);
        }
    }

    let mut unreachable = Vec::new();
    for &symbol in &targets {
        if let Verdict::Unreachable(cause) = checker.verdict(symbol) {
            unreachable.push(Unreachable { symbol, cause });
        }
    }
    unreachable.sort_by_key(|u| u.symbol.to_string());

    let mut counts: HashMap<Cause, usize> = HashMap::new();
    for entry in &unreachable {
        *counts.entry(entry.cause).or_insert(0) += 1;
    }
    let mut root_causes: Vec<RootCauseCount> = counts
        .into_iter()
        .map(|(cause, blocked)| RootCauseCount { cause, blocked })
        .collect();
    root_causes.sort_by(|a, b| {
        b.blocked
            .cmp(&a.blocked)
            .then_with(|| a.cause.symbol().to_string().cmp(&b.cause.symbol().to_string()))
    });

    debug!(
        checked = targets.len(),
        unreachable = unreachable.len(),
        "reachability analysis finished"
    );
    ReachabilityReport {
        checked: targets.len(),
        unreachable,
        root_causes,
    }
}
