use crate::orst::{Order, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// The pivot is the median of the first, middle and last elements, which keeps already sorted
/// and reverse sorted input away from the quadratic worst case. Two cursors then walk towards
/// each other from both ends, each stopping at the first element that belongs on the other side
/// *or equals the pivot*, and the stopped elements are swapped. Stopping on equal elements keeps
/// both partitions non-empty even when the pivot is the smallest or largest value.
///
/// The smaller partition is sorted recursively and the larger one in a loop, so the stack never
/// grows beyond O(log n) frames. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

/// Sorts `slice` in ascending natural order with [`QuickSorter`].
///
/// ```
/// let mut slice = vec![3, 3, 1, 2];
/// orst_core::orst::quicksort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 3]);
/// ```
pub fn quicksort<T: Ord>(slice: &mut [T]) {
    QuickSorter.sort(slice)
}

// Orders the first, middle and last elements and returns the index of the median.
fn median_of_three<T, F>(slice: &mut [T], order: &Order<F>) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let last = slice.len() - 1;
    let midpoint = last / 2;

    if order.precedes(&slice[last], &slice[0]) {
        slice.swap(0, last);
    }
    if order.precedes(&slice[midpoint], &slice[0]) {
        slice.swap(0, midpoint);
    }
    if order.precedes(&slice[last], &slice[midpoint]) {
        slice.swap(midpoint, last);
    }

    midpoint
}

// Splits a slice of at least two elements and returns the index where the second partition
// starts. Both partitions are non-empty.
fn partition<T, F>(slice: &mut [T], order: &Order<F>) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut pivot = median_of_three(slice, order);

    // The first and last elements are already on the correct side of the pivot.
    let mut left = 1;
    let mut right = slice.len() - 2;

    while left <= right {
        while left <= right && order.precedes(&slice[left], &slice[pivot]) {
            left += 1;
        }
        while left <= right && order.precedes(&slice[pivot], &slice[right]) {
            right -= 1;
        }

        if left <= right {
            slice.swap(left, right);
            // the pivot value is tracked by position
            if pivot == left {
                pivot = right;
            } else if pivot == right {
                pivot = left;
            }
            left += 1;
            right -= 1;
        }
    }

    left
}

pub(crate) fn quick_sort<T, F>(slice: &mut [T], order: &Order<F>)
where
    F: Fn(&T, &T) -> bool,
{
    let mut slice = slice;

    while slice.len() > 1 {
        let split = partition(slice, order);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(split);

        if left.len() < right.len() {
            quick_sort(left, order);
            slice = right;
        } else {
            quick_sort(right, order);
            slice = left;
        }
    }
}

impl<T> Sorter<T> for QuickSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool,
    {
        quick_sort(slice, &Order::new(is_less, descending))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn all_equal() {
        let mut slice = vec![7; 5000];
        quicksort(&mut slice);
        assert_eq!(slice, vec![7; 5000]);
    }

    #[test]
    fn pivot_is_extreme() {
        let mut slice = [1, 1, 1, 0, 1, 1, 1];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [0, 1, 1, 1, 1, 1, 1]);

        let mut slice = [5, 9, 9, 9, 9, 9, 5];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [5, 5, 9, 9, 9, 9, 9]);
    }

    #[test]
    fn descending() {
        let mut slice = (0..1000).map(|i| (i * 37) % 101).collect::<Vec<_>>();
        let mut expected = slice.clone();
        expected.sort_by(|a, b| b.cmp(a));

        QuickSorter.sort_descending(&mut slice);
        assert_eq!(slice, expected);
    }

    #[test]
    fn median_lands_in_the_middle() {
        let mut slice = [9, 0, 5, 0, 1];
        let midpoint = median_of_three(&mut slice, &Order::new(|a: &i32, b: &i32| a < b, false));
        assert_eq!(midpoint, 2);
        assert_eq!(slice, [1, 0, 5, 0, 9]);
    }

    #[test]
    fn equal_elements_can_be_reordered() {
        let mut slice = [(1, 'a'), (1, 'b'), (0, 'c')];
        QuickSorter.sort_by(&mut slice, |a, b| a.0 < b.0, false);
        assert_eq!(slice, [(0, 'c'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        QuickSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        QuickSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        QuickSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
