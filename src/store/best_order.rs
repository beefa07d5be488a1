//! Best-order placement of new translation keys.
//!
//! A new key is placed next to the existing keys that share the longest
//! common prefix with it, at its lexicographic position among them. Keys
//! sharing no prefix with anything fall back to a plain lexicographic scan of
//! the whole sequence.

/// Order key assigned to the first item of an empty collection.
pub const BASE_ORDER: f64 = 1.0;

/// Distance used when placing before the first or after the last item, and
/// between neighbours after renumbering.
pub const ORDER_STEP: f64 = 1.0;

/// Number of leading characters `a` and `b` have in common.
#[must_use]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Returns the slot where `name` should be inserted into `names`.
///
/// `names` must be in `OriginalOrder`. The result `i` means the new key goes
/// between `names[i - 1]` and `names[i]`.
///
/// # Examples
/// ```
/// use translation_items::store::best_order::insertion_index;
///
/// let names = ["AppleOrange1", "AppleOrange2", "AppleOrange3", "AppleLime1"];
/// assert_eq!(insertion_index(&names, "AppleOrange2.5"), 2);
/// assert_eq!(insertion_index(&names, "AppleOrange"), 0);
/// assert_eq!(insertion_index(&names, "Zebra"), 4);
/// ```
#[must_use]
pub fn insertion_index<S: AsRef<str>>(names: &[S], name: &str) -> usize {
    let best_len =
        names.iter().map(|existing| common_prefix_len(existing.as_ref(), name)).max().unwrap_or(0);

    if best_len == 0 {
        return names.iter().position(|existing| existing.as_ref() > name).unwrap_or(names.len());
    }

    let mut last_match = None;
    for (index, existing) in names.iter().enumerate() {
        let existing = existing.as_ref();
        if common_prefix_len(existing, name) != best_len {
            continue;
        }
        // A strict prefix compares less than its extensions, so it lands first.
        if existing > name {
            return index;
        }
        last_match = Some(index);
    }

    last_match.map_or(names.len(), |index| index + 1)
}

/// Computes an order key strictly between `prev` and `next`.
///
/// Returns `None` when no such value can be represented, e.g. after repeated
/// bisection exhausted the precision between two neighbours or when the
/// neighbours share the same order. Callers must renumber in that case.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn order_between(prev: Option<f64>, next: Option<f64>) -> Option<f64> {
    match (prev, next) {
        (None, None) => Some(BASE_ORDER),
        (None, Some(next)) => Some(next - ORDER_STEP).filter(|order| *order < next),
        (Some(prev), None) => Some(prev + ORDER_STEP).filter(|order| *order > prev),
        (Some(prev), Some(next)) => {
            let middle = (prev + next) / 2.0;
            (prev < middle && middle < next).then_some(middle)
        }
    }
}

/// Evenly spaced order key for position `index` after renumbering.
#[must_use]
#[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
pub fn renumbered_order(index: usize) -> f64 {
    (index as f64).mul_add(ORDER_STEP, BASE_ORDER)
}
