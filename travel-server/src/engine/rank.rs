//! Top-N selection for ranked results.
//!
//! Both pipelines present their best candidates first. Ordering is by score
//! only; candidates with equal scores keep the order in which they were
//! supplied.

use std::cmp::Reverse;

/// Select the `n` highest-scoring items, best first.
///
/// The sort is stable: ties keep their input order.
pub fn top_n<T, K, F>(mut items: Vec<T>, score_fn: F, n: usize) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by_key(|item| Reverse(score_fn(item)));
    items.truncate(n);
    items
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Items are (input position, score) so stability can be checked.
    fn items_strategy() -> impl Strategy<Value = Vec<(usize, u8)>> {
        prop::collection::vec(0u8..10, 0..30)
            .prop_map(|scores| scores.into_iter().enumerate().collect())
    }

    proptest! {
        #[test]
        fn result_is_sorted_and_stable(items in items_strategy(), n in 0usize..40) {
            let ranked = top_n(items.clone(), |(_, s)| *s, n);

            prop_assert_eq!(ranked.len(), n.min(items.len()));

            for window in ranked.windows(2) {
                let (pos_a, score_a) = window[0];
                let (pos_b, score_b) = window[1];
                prop_assert!(score_a >= score_b);
                if score_a == score_b {
                    prop_assert!(pos_a < pos_b, "tie reordered: {pos_a} after {pos_b}");
                }
            }
        }

        #[test]
        fn result_holds_the_best_scores(items in items_strategy(), n in 0usize..40) {
            let ranked = top_n(items.clone(), |(_, s)| *s, n);

            let mut expected: Vec<u8> = items.iter().map(|(_, s)| *s).collect();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(n);

            let actual: Vec<u8> = ranked.iter().map(|(_, s)| *s).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
