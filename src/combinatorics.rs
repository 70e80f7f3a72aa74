//! Pure helpers for building choice lists.
//!
//! Every decision generator filters, groups, or enumerates subsets of a zone.
//! The helpers here never touch game state; they only reorder and select
//! from what they are given.
//!
//! ## Duplicates
//!
//! Copies of the same card type are interchangeable for choice purposes.
//! `get_pieces(.., unique = true, ..)` keeps one representative per type and
//! `canonical_combinations` collapses subsets that differ only in which
//! copies they pick.

use rustc_hash::FxHashSet;

use crate::cards::{CardId, Piece};

/// Stable split into `(matching, non_matching)`.
///
/// ```
/// use deck_engine::combinatorics::partition;
///
/// let (even, odd) = partition(1..=6, |n| n % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T>(
    items: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> (Vec<T>, Vec<T>) {
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        if predicate(&item) {
            matching.push(item);
        } else {
            rest.push(item);
        }
    }
    (matching, rest)
}

/// Bucket items by the first class they satisfy.
///
/// Returns `classes.len() + 1` buckets; the last one collects items that
/// satisfy no class, so nothing is ever dropped. Order within each bucket
/// follows input order.
///
/// ```
/// use deck_engine::combinatorics::classify;
///
/// let buckets = classify(&[10, 3], 1..=12, |class, n| n % class == 0);
/// assert_eq!(buckets[0], vec![10]);
/// assert_eq!(buckets[1], vec![3, 6, 9, 12]);
/// assert_eq!(buckets[2], vec![1, 2, 4, 5, 7, 8, 11]);
/// ```
pub fn classify<C, T>(
    classes: &[C],
    items: impl IntoIterator<Item = T>,
    satisfies: impl Fn(&C, &T) -> bool,
) -> Vec<Vec<T>> {
    let mut buckets: Vec<Vec<T>> = (0..=classes.len()).map(|_| Vec::new()).collect();
    for item in items {
        let slot = classes
            .iter()
            .position(|class| satisfies(class, &item))
            .unwrap_or(classes.len());
        buckets[slot].push(item);
    }
    buckets
}

/// Pieces of `zone` matching `predicate`, in zone order.
///
/// With `unique`, only the first piece of each card type is kept.
pub fn get_pieces<'a>(
    zone: impl IntoIterator<Item = &'a Piece>,
    unique: bool,
    predicate: impl Fn(&Piece) -> bool,
) -> Vec<Piece> {
    let mut seen: FxHashSet<CardId> = FxHashSet::default();
    zone.into_iter()
        .filter(|piece| predicate(piece))
        .filter(|piece| !unique || seen.insert(piece.card))
        .copied()
        .collect()
}

/// Predicate accepting every piece.
#[must_use]
pub fn any_piece(_: &Piece) -> bool {
    true
}

/// Every positional subset of `zone` with size in `kmin..=kmax`.
///
/// `kmax` defaults to the zone size. Subsets come out grouped by size, each
/// group in lexicographic order of positions. Copies are not merged; see
/// `canonical_combinations` for that.
pub fn get_piece_combinations(zone: &[Piece], kmin: usize, kmax: Option<usize>) -> Vec<Vec<Piece>> {
    let n = zone.len();
    let kmax = kmax.unwrap_or(n).min(n);
    let mut combinations = Vec::new();

    for k in kmin..=kmax {
        let mut indices: Vec<usize> = (0..k).collect();
        loop {
            combinations.push(indices.iter().map(|&i| zone[i]).collect());

            // Advance to the next k-subset; stop once the first index can't move.
            let Some(pivot) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
                break;
            };
            indices[pivot] += 1;
            for j in pivot + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
        }
    }
    combinations
}

/// Subsets of `zone` with duplicates by card type removed.
///
/// Each subset is sorted by card type, and the list is ordered by subset
/// size, then by the card types it contains. Among subsets with the same
/// type signature, the first one enumerated is kept.
pub fn canonical_combinations(zone: &[Piece], kmin: usize, kmax: Option<usize>) -> Vec<Vec<Piece>> {
    let mut seen: FxHashSet<Vec<CardId>> = FxHashSet::default();
    let mut canonical: Vec<(Vec<CardId>, Vec<Piece>)> = Vec::new();

    for mut combo in get_piece_combinations(zone, kmin, kmax) {
        combo.sort_by_key(|piece| piece.card);
        let signature: Vec<CardId> = combo.iter().map(|piece| piece.card).collect();
        if seen.insert(signature.clone()) {
            canonical.push((signature, combo));
        }
    }

    canonical.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    canonical.into_iter().map(|(_, combo)| combo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::core::EntityId;

    fn piece(id: u32, kind: CardKind) -> Piece {
        Piece::new(EntityId(id), CardId(kind as u32), kind)
    }

    fn hand() -> Vec<Piece> {
        vec![
            piece(0, CardKind::Copper),
            piece(1, CardKind::Estate),
            piece(2, CardKind::Copper),
            piece(3, CardKind::Smithy),
        ]
    }

    #[test]
    fn test_classify_routes_unmatched_to_catch_all() {
        let buckets = classify(&["a"], vec!["b", "a", "c"], |class, item| class == item);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], vec!["a"]);
        assert_eq!(buckets[1], vec!["b", "c"]);
    }

    #[test]
    fn test_get_pieces_unique_keeps_first() {
        let hand = hand();
        let unique = get_pieces(&hand, true, any_piece);
        assert_eq!(unique, vec![hand[0], hand[1], hand[3]]);

        let coppers = get_pieces(&hand, false, |p| p.kind == CardKind::Copper);
        assert_eq!(coppers, vec![hand[0], hand[2]]);
    }

    #[test]
    fn test_combination_counts() {
        let hand = hand();
        // 4C1 + 4C2 + 4C3 + 4C4
        assert_eq!(get_piece_combinations(&hand, 1, None).len(), 15);
        // 4C2 + 4C3
        assert_eq!(get_piece_combinations(&hand, 2, Some(3)).len(), 10);
        assert_eq!(get_piece_combinations(&hand, 0, Some(0)), vec![Vec::<Piece>::new()]);
        assert!(get_piece_combinations(&[], 1, None).is_empty());
    }

    #[test]
    fn test_combinations_are_positional() {
        let hand = hand();
        let pairs = get_piece_combinations(&hand[..3], 2, Some(2));
        assert_eq!(
            pairs,
            vec![vec![hand[0], hand[1]], vec![hand[0], hand[2]], vec![hand[1], hand[2]]]
        );
    }

    #[test]
    fn test_canonical_combinations_merge_copies() {
        let hand = hand();
        let combos = canonical_combinations(&hand, 1, None);

        // Types: {C, E, S} singles, {CC, CE, CS, ES} pairs,
        // {CCE, CCS, CES} triples, {CCES} quad.
        assert_eq!(combos.len(), 11);
        assert_eq!(combos[0].len(), 1);
        assert_eq!(combos.last().map(Vec::len), Some(4));

        let sizes: Vec<_> = combos.iter().map(Vec::len).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sizes, sorted);
    }
}
