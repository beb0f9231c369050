use gattai_dict::{Recipe, Symbol};

/// Outcome of binarizing a flat part sequence for one owner character:
/// the owner's own final recipe plus any synthetic intermediate entries,
/// in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub recipe: Recipe,
    pub intermediates: Vec<(Symbol, Recipe)>,
}

/// Convert a flat sequence of >= 2 parts into a strictly binary recipe
/// tree.
///
/// Left fold: the first two parts of the working sequence become an
/// intermediate recipe keyed by `&<owner>_<step>` (step counts from 0
/// within this call), and the intermediate id goes back to the front.
/// Each round shrinks the sequence by one, so for the decomposer's
/// bounded inputs at most two intermediates are ever minted.
///
/// Returns `None` for sequences shorter than 2; those are terminal and
/// have no recipe.
pub fn synthesize(owner: char, flat: &[char]) -> Option<Synthesis> {
    if flat.len() < 2 {
        return None;
    }

    let mut work: Vec<Symbol> = flat.iter().copied().map(Symbol::Real).collect();
    let mut intermediates = Vec::new();
    let mut step = 0u32;
    while work.len() > 2 {
        let right = work.remove(1);
        let left = work.remove(0);
        let id = Symbol::Synthetic { owner, step };
        intermediates.push((id, Recipe::new(left, right)));
        work.insert(0, id);
        step += 1;
    }

    Some(Synthesis {
        recipe: Recipe::new(work[0], work[1]),
        intermediates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(c: char) -> Symbol {
        Symbol::Real(c)
    }

    #[test]
    fn two_parts_need_no_intermediates() {
        let syn = synthesize('明', &['日', '月']).unwrap();
        assert_eq!(syn.recipe, Recipe::new(real('日'), real('月')));
        assert!(syn.intermediates.is_empty());
    }

    #[test]
    fn three_parts_mint_one_intermediate() {
        let syn = synthesize('想', &['木', '目', '心']).unwrap();
        let i0 = Symbol::Synthetic {
            owner: '想',
            step: 0,
        };
        assert_eq!(
            syn.intermediates,
            vec![(i0, Recipe::new(real('木'), real('目')))]
        );
        assert_eq!(syn.recipe, Recipe::new(i0, real('心')));
    }

    #[test]
    fn four_parts_mint_two_chained_intermediates() {
        let syn = synthesize('謎', &['言', '辶', '米', '木']).unwrap();
        let i0 = Symbol::Synthetic {
            owner: '謎',
            step: 0,
        };
        let i1 = Symbol::Synthetic {
            owner: '謎',
            step: 1,
        };
        assert_eq!(
            syn.intermediates,
            vec![
                (i0, Recipe::new(real('言'), real('辶'))),
                (i1, Recipe::new(i0, real('米'))),
            ]
        );
        assert_eq!(syn.recipe, Recipe::new(i1, real('木')));
    }

    #[test]
    fn single_part_is_not_synthesizable() {
        assert_eq!(synthesize('日', &['日']), None);
        assert_eq!(synthesize('日', &[]), None);
    }
}
