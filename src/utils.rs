//! Small shared helpers: deterministic argmax and RNG construction.

use rand::{SeedableRng, rngs::StdRng};

/// Return the element with the highest score; ties go to the earliest element.
///
/// Scans `elements` in the given order and replaces the current best only on
/// a strictly greater score, so the first element achieving the maximum wins.
/// Returns `None` when `elements` is empty; callers promote that to
/// [`crate::Error::EmptyDomain`] with the offending state attached, never to
/// a default value.
///
/// # Examples
///
/// ```
/// use tabular_rl::utils::argmax;
///
/// let longest = argmax(["one", "to", "three"], |s| s.len() as f64);
/// assert_eq!(longest, Some("three"));
///
/// // Equal scores: the first element wins.
/// let first = argmax(["ab", "cd"], |s| s.len() as f64);
/// assert_eq!(first, Some("ab"));
/// ```
pub fn argmax<I, F>(elements: I, mut score: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let mut best: Option<(I::Item, f64)> = None;
    for element in elements {
        let value = score(&element);
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((element, value)),
        }
    }
    best.map(|(element, _)| element)
}

/// Build a `StdRng` from an explicit seed, or from entropy when none is given.
///
/// Shared by the policy iteration solver (initial-policy draw) and the TD
/// learner (exploration and tie-break draws) so tests can force determinism.
pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_highest_score() {
        let result = argmax(["one", "to", "three"], |s| s.len() as f64);
        assert_eq!(result, Some("three"));
    }

    #[test]
    fn argmax_breaks_ties_toward_first_element() {
        let result = argmax(["ab", "cd"], |s| s.len() as f64);
        assert_eq!(result, Some("ab"));
    }

    #[test]
    fn argmax_returns_none_on_empty_input() {
        let result = argmax(Vec::<i32>::new(), |_| 0.0);
        assert_eq!(result, None);
    }

    #[test]
    fn argmax_handles_negative_scores() {
        let result = argmax([3, 1, 2], |&n| -f64::from(n));
        assert_eq!(result, Some(1));
    }

    #[test]
    fn build_rng_is_deterministic_for_equal_seeds() {
        use rand::Rng;

        let mut a = build_rng(Some(7));
        let mut b = build_rng(Some(7));
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
