/// Combines a "less-than" predicate with a sort direction into the single question every sorter
/// asks: should `a` come before `b` in the output?
///
/// Descending order swaps the operands handed to the predicate instead of negating its result, so
/// equal elements never precede one another in either direction.
///
/// # Usage
///```
/// use orst_core::orst::Order;
///
/// let ascending = Order::new(|a: &i32, b: &i32| a < b, false);
/// assert!(ascending.precedes(&1, &2));
/// assert!(!ascending.precedes(&2, &2));
///
/// let descending = Order::new(|a: &i32, b: &i32| a < b, true);
/// assert!(descending.precedes(&2, &1));
/// assert!(!descending.precedes(&2, &2));
///```
#[derive(Debug, Clone, Copy)]
pub struct Order<F> {
    is_less: F,
    descending: bool,
}

impl<F> Order<F> {
    pub fn new(is_less: F, descending: bool) -> Self {
        Self {
            is_less,
            descending,
        }
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    #[inline]
    pub fn precedes<T>(&self, a: &T, b: &T) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        if self.descending {
            (self.is_less)(b, a)
        } else {
            (self.is_less)(a, b)
        }
    }
}
