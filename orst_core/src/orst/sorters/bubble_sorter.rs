use crate::orst::{Order, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// # Algorithm
///
/// Every pass leaves the last element of the unsorted range in its final place, so the range
/// shrinks by one per pass. A pass without a single swap ends the sort early. Neighbours are
/// only swapped when the right one strictly precedes the left one, which keeps the sort stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

pub(crate) fn bubble_sort<T, F>(slice: &mut [T], order: &Order<F>)
where
    F: Fn(&T, &T) -> bool,
{
    let mut unsorted_len = slice.len();
    let mut swapped = true;

    while swapped && unsorted_len > 1 {
        swapped = false;
        for i in 1..unsorted_len {
            if order.precedes(&slice[i], &slice[i - 1]) {
                slice.swap(i - 1, i);
                swapped = true;
            }
        }
        unsorted_len -= 1;
    }
}

impl<T> Sorter<T> for BubbleSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F, descending: bool)
    where
        F: Fn(&T, &T) -> bool,
    {
        bubble_sort(slice, &Order::new(is_less, descending))
    }
}
