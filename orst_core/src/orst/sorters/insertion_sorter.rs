use crate::orst::{Order, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// With `smart: false` the key walks left one neighbour at a time for as long as it precedes that
/// neighbour, which is linear on nearly sorted input. With `smart: true` the insertion point is
/// found by binary search over the sorted prefix and the key is rotated into place. Both variants
/// insert after equal elements and are therefore stable.
///
/// # Usage
///```
/// use orst_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter{ smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

pub(crate) fn insertion_sort<T, F>(slice: &mut [T], order: &Order<F>)
where
    F: Fn(&T, &T) -> bool,
{
    for unsorted in 1..slice.len() {
        let mut i = unsorted;
        while i > 0 && order.precedes(&slice[i], &slice[i - 1]) {
            slice.swap(i - 1, i);
            i -= 1;
        }
    }
}

fn binary_insertion_sort<T, F>(slice: &mut [T], order: &Order<F>)
where
    F: Fn(&T, &T) -> bool,
{
    for unsorted in 1..slice.len() {
        let key = &slice[unsorted];
        let i = slice[..unsorted].partition_point(|sorted| !order.precedes(key, sorted));
        slice[i..=unsorted].rotate_right(1);
    }
}

impl<T> Sorter<T> for InsertionSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool,
    {
        let order = Order::new(is_less, descending);
        if self.smart {
            binary_insertion_sort(slice, &order)
        } else {
            insertion_sort(slice, &order)
        }
    }
}
