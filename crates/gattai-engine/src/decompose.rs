use std::collections::HashMap;

use tracing::trace;

use gattai_dict::ClosureSet;
use gattai_ids::StructuralSource;

/// Recursion bound for decomposition. Guards against pathological or
/// cyclic structural data; anything deeper fails explicitly instead of
/// relying on the runtime's stack.
pub const MAX_DEPTH: usize = 5;

/// Ceiling on flat part count. Every part beyond two costs one synthetic
/// merge step, and the game's difficulty model is tuned for short chains.
pub const MAX_PARTS: usize = 4;

/// How to treat constituents that are closure members but not atomic.
///
/// The looser `ExpandKnown` is the default: a known character may still
/// benefit from further decomposition toward atomic parts, and falls back
/// to staying a leaf when its own refinement fails. `KeepKnownLeaves`
/// accepts any closure member as a terminal immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecomposePolicy {
    #[default]
    ExpandKnown,
    KeepKnownLeaves,
}

impl DecomposePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            DecomposePolicy::ExpandKnown => "expand",
            DecomposePolicy::KeepKnownLeaves => "leaves",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Failure {
    DepthExceeded(char),
    TooManyParts { symbol: char, count: usize },
}

/// Recursively reduces raw structural descriptions into flat ordered part
/// sequences over the closure set.
///
/// Pure per run: results depend only on the frozen source, closure set and
/// policy. The memo caches successful flat expansions by symbol; failures
/// are depth-contextual and recomputed, which keeps the cache sound no
/// matter which symbol is asked first.
pub struct Decomposer<'a> {
    source: &'a StructuralSource,
    closure: &'a ClosureSet,
    policy: DecomposePolicy,
    memo: HashMap<char, Vec<char>>,
}

impl<'a> Decomposer<'a> {
    pub fn new(source: &'a StructuralSource, closure: &'a ClosureSet) -> Self {
        Self::with_policy(source, closure, DecomposePolicy::default())
    }

    pub fn with_policy(
        source: &'a StructuralSource,
        closure: &'a ClosureSet,
        policy: DecomposePolicy,
    ) -> Self {
        Decomposer {
            source,
            closure,
            policy,
            memo: HashMap::new(),
        }
    }

    pub fn policy(&self) -> DecomposePolicy {
        self.policy
    }

    /// The "needs a recipe" contract: the flat part sequence for `symbol`,
    /// only when it lands in the playable 2..=4 range. Terminal results
    /// (atomic or entry-less symbols) and bound violations yield `None`.
    pub fn recipe_parts(&mut self, symbol: char) -> Option<Vec<char>> {
        match self.flatten(symbol, 0) {
            Ok(parts) if (2..=MAX_PARTS).contains(&parts.len()) => Some(parts),
            Ok(parts) => {
                trace!(%symbol, count = parts.len(), "flat sequence outside recipe range");
                None
            }
            Err(failure) => {
                trace!(%symbol, ?failure, "decomposition failed");
                None
            }
        }
    }

    fn flatten(&mut self, symbol: char, depth: usize) -> Result<Vec<char>, Failure> {
        // Atomic parts are policy-fixed leaves, decomposable or not.
        if self.closure.is_atomic(symbol) {
            return Ok(vec![symbol]);
        }
        let Some(raw) = self.source.get(symbol) else {
            return Ok(vec![symbol]);
        };
        if let Some(hit) = self.memo.get(&symbol) {
            return Ok(hit.clone());
        }
        if depth > MAX_DEPTH {
            return Err(Failure::DepthExceeded(symbol));
        }

        let raw = raw.to_vec();
        let mut flat = Vec::new();
        for c in raw {
            if self.closure.is_atomic(c) {
                flat.push(c);
            } else if self.closure.contains(c) {
                match self.policy {
                    DecomposePolicy::KeepKnownLeaves => flat.push(c),
                    // Refinement is best-effort for known characters: a
                    // failure keeps the constituent unexpanded instead of
                    // failing the parent.
                    DecomposePolicy::ExpandKnown => match self.flatten(c, depth + 1) {
                        Ok(sub) => flat.extend(sub),
                        Err(_) => flat.push(c),
                    },
                }
            } else {
                // Unknown constituents must reduce; their failure makes the
                // parent unbuildable.
                flat.extend(self.flatten(c, depth + 1)?);
            }
        }

        if flat.len() > MAX_PARTS {
            return Err(Failure::TooManyParts {
                symbol,
                count: flat.len(),
            });
        }
        self.memo.insert(symbol, flat.clone());
        Ok(flat)
    }
}
