use crate::orst::{Order, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_core::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// SelectionSorter.sort_descending(&mut slice);
/// assert_eq!(slice, [5, 4, 3, 2, 1]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large lists, and generally
/// performs worse than the similar insertion sort.
///
/// The list is split into a sorted prefix and an unsorted suffix. Each pass finds the element
/// of the suffix that should precede every other one, swaps it to the front of the suffix and
/// moves the boundary one element to the right. The long-distance swaps make it unstable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

pub(crate) fn selection_sort<T, F>(slice: &mut [T], order: &Order<F>)
where
    F: Fn(&T, &T) -> bool,
{
    for unsorted in 0..slice.len().saturating_sub(1) {
        let mut first_in_rest = unsorted;
        for i in (unsorted + 1)..slice.len() {
            if order.precedes(&slice[i], &slice[first_in_rest]) {
                first_in_rest = i;
            }
        }
        if unsorted != first_in_rest {
            slice.swap(unsorted, first_in_rest);
        }
    }
}

impl<T> Sorter<T> for SelectionSorter {
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool,
    {
        selection_sort(slice, &Order::new(is_less, descending))
    }
}
