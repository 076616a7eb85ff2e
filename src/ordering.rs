use core::cmp::Ordering;

pub use compare::{Compare, Natural, natural};

/// Adapts a strict "less than" predicate into a three-way comparator.
///
/// Two keys are considered equal when neither orders before the other, so
/// the predicate must be a strict weak ordering.
///
/// # Examples
///
/// ```
/// use bst_map::OrderedMap;
/// use bst_map::ordering::LessThan;
///
/// // Case-insensitive keys.
/// let mut map = OrderedMap::with_comparator(LessThan(|a: &&str, b: &&str| {
///     a.to_lowercase() < b.to_lowercase()
/// }));
/// assert!(map.insert("Apple", 1));
/// assert!(!map.insert("APPLE", 2));
/// assert_eq!(map.search(&"apple"), Some((&"Apple", &1)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LessThan<F>(pub F);

impl<T, F> Compare<T> for LessThan<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Ordering::Less
        } else if (self.0)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
