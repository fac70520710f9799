//! Comparison sorts that take any "less-than" predicate and a direction flag.
//!
//! Every sorter implements [`Sorter`] and funnels its comparisons through a single [`Order`], so
//! ascending and descending output come from the same code path.
//!
//! # Example
//!
//! ```
//! use orst_core::orst::{BubbleSorter, HybridMergeSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! let mut words = vec!["pear", "fig", "banana"];
//! HybridMergeSorter::default().sort_by(&mut words, |a, b| a.len() < b.len(), true);
//! assert_eq!(words, ["banana", "pear", "fig"]);
//! ```

pub mod benchmark;
mod order;
mod sorters;

pub use order::Order;
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::hybrid_merge_sorter::HybridMergeSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge::merge;
pub use sorters::quick_sorter::{quicksort, QuickSorter};
pub use sorters::selection_sorter::SelectionSorter;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Only [`sort_by`](Sorter::sort_by) has to be written; the natural-order helpers are provided.
pub trait Sorter<T> {
    /// Sorts `slice` in place so that no element is preceded by one that `is_less` (flipped when
    /// `descending` is set) says should come after it.
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool;

    fn sort(&self, slice: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(slice, <T as PartialOrd>::lt, false)
    }

    fn sort_descending(&self, slice: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(slice, <T as PartialOrd>::lt, true)
    }
}
