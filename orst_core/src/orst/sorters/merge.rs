use crate::orst::Order;

/// Merges the already ordered `left` and `right` into `dest`.
///
/// The head of `right` is taken only when it strictly precedes the head of `left`, so equal
/// elements keep `left` before `right` and merging two stably sorted runs stays stable. Once one
/// side runs out the rest of the other is copied over as is.
///
/// # Panics
///
/// Panics if `dest.len()` differs from `left.len() + right.len()`.
///
/// # Usage
///```
/// use orst_core::orst::{merge, Order};
///
/// let mut dest = [0; 6];
/// merge(&mut dest, &[1, 4, 6], &[2, 3, 5], &Order::new(|a: &i32, b: &i32| a < b, false));
/// assert_eq!(dest, [1, 2, 3, 4, 5, 6]);
///```
pub fn merge<T, F>(dest: &mut [T], left: &[T], right: &[T], order: &Order<F>)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    assert_eq!(
        dest.len(),
        left.len() + right.len(),
        "merge destination must hold both runs"
    );

    let mut left = left.iter().peekable();
    let mut right = right.iter().peekable();

    for slot in dest.iter_mut() {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => order.precedes(*r, *l),
            (Some(_), None) => false,
            (None, _) => true,
        };
        let next = if take_right { right.next() } else { left.next() };
        if let Some(elem) = next {
            slot.clone_from(elem);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn ascending() -> Order<fn(&i32, &i32) -> bool> {
        Order::new(|a, b| a < b, false)
    }

    #[test]
    fn interleaved_runs() {
        let mut dest = [0; 7];
        merge(&mut dest, &[1, 3, 5, 7], &[2, 4, 6], &ascending());
        assert_eq!(dest, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn one_side_exhausted_first() {
        let mut dest = [0; 5];
        merge(&mut dest, &[1, 2], &[3, 4, 5], &ascending());
        assert_eq!(dest, [1, 2, 3, 4, 5]);

        merge(&mut dest, &[3, 4, 5], &[1, 2], &ascending());
        assert_eq!(dest, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_sides() {
        let mut dest = [0; 3];
        merge(&mut dest, &[], &[1, 2, 3], &ascending());
        assert_eq!(dest, [1, 2, 3]);

        merge(&mut dest, &[4, 5, 6], &[], &ascending());
        assert_eq!(dest, [4, 5, 6]);

        let mut nothing: [i32; 0] = [];
        merge(&mut nothing, &[], &[], &ascending());
    }

    #[test]
    fn ties_keep_left_first() {
        let mut dest = [(0, ' '); 4];
        let order = Order::new(|a: &(i32, char), b: &(i32, char)| a.0 < b.0, false);
        merge(&mut dest, &[(1, 'l'), (2, 'l')], &[(1, 'r'), (2, 'r')], &order);
        assert_eq!(dest, [(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r')]);
    }

    #[test]
    fn descending_runs() {
        let mut dest = [0; 6];
        let order = Order::new(|a: &i32, b: &i32| a < b, true);
        merge(&mut dest, &[9, 5, 1], &[8, 5, 2], &order);
        assert_eq!(dest, [9, 8, 5, 5, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn wrong_destination_length() {
        let mut dest = [0; 2];
        merge(&mut dest, &[1, 2], &[3], &ascending());
    }
}
