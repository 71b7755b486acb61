//! Iterator utilities.
use std::cmp::Ordering;

/// The index of a maximal element in a collection, according to a comparison function.
///
/// # Example
/// Get the argmax of an iterator of floats:
///
/// ```
/// use kbandit::utils::iter::ArgMaxBy;
///
/// let v = vec![1.0, 2.5, -3.0, 2.5];
/// let argmax = v.into_iter().argmax_by(f64::total_cmp);
/// assert_eq!(argmax, Some(1));
/// ```
pub trait ArgMaxBy {
    type Item;

    /// The index of an element that gives the maximum value from the specified function.
    ///
    /// If several elements are equally maximum, the first index is returned.
    /// If the iterator is empty, None is returned.
    fn argmax_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<I: Iterator> ArgMaxBy for I {
    type Item = <Self as Iterator>::Item;

    fn argmax_by<F>(self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.enumerate()
            .reduce(|best, item| {
                if compare(&item.1, &best.1) == Ordering::Greater {
                    item
                } else {
                    best
                }
            })
            .map(|(i, _)| i)
    }
}
