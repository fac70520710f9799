use crate::orst::sorters::insertion_sorter::insertion_sort;
use crate::orst::sorters::merge::merge;
use crate::orst::{Order, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort) that hands small
/// partitions to insertion sort.
///
/// # Usage
///```
/// use orst_core::orst::{HybridMergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HybridMergeSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = (0..100).collect::<Vec<_>>();
/// HybridMergeSorter { threshold: 4 }.sort_descending(&mut slice);
/// assert_eq!(slice, (0..100).rev().collect::<Vec<_>>());
///```
///
/// # Algorithm
///
/// Any partition of `threshold` elements or fewer is insertion sorted in one go. Larger ones are
/// split at the midpoint, both halves are copied out and sorted recursively, and the two sorted
/// halves are merged back into the original slice. A threshold of 0 or 1 gives plain merge sort.
///
/// Runs in O(n log n) time with O(n) auxiliary space for the copied halves, and is stable since
/// both insertion sort and the merge keep equal elements in input order.
#[derive(Debug, Clone, Copy)]
pub struct HybridMergeSorter {
    pub threshold: usize,
}

impl HybridMergeSorter {
    pub const DEFAULT_THRESHOLD: usize = 12;
}

impl Default for HybridMergeSorter {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

pub(crate) fn hybrid_merge_sort<T, F>(slice: &mut [T], threshold: usize, order: &Order<F>)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if slice.len() <= 1 {
        return;
    }

    if slice.len() <= threshold {
        insertion_sort(slice, order);
        return;
    }

    let middle = slice.len() / 2;
    let mut left_half = slice[..middle].to_vec();
    let mut right_half = slice[middle..].to_vec();

    hybrid_merge_sort(&mut left_half, threshold, order);
    hybrid_merge_sort(&mut right_half, threshold, order);

    merge(slice, &left_half, &right_half, order);
}

impl<T> Sorter<T> for HybridMergeSorter
where
    T: Clone,
{
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool,
    {
        hybrid_merge_sort(slice, self.threshold, &Order::new(is_less, descending))
    }
}
