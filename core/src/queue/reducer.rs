use std::ops::{Add, BitXor, Sub};

/// The (combine, uncombine) pair a [`RingAccumulator`](super::RingAccumulator)
/// uses to maintain its running aggregate.
///
/// Implementations must satisfy `uncombine(&combine(a, b), b) == a` for every
/// `a` and `b` the ring will see. The ring cannot check this; a reducer that
/// breaks it silently corrupts the aggregate once eviction starts. Operations
/// without an inverse (string concatenation, min/max) cannot be used here.
pub trait Reducer<T> {
    fn combine(&self, acc: &T, value: &T) -> T;
    fn uncombine(&self, acc: &T, value: &T) -> T;
}

/// Numeric `+` / `-`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

impl<T> Reducer<T> for Additive
where
    T: Add<Output = T> + Sub<Output = T> + Clone,
{
    fn combine(&self, acc: &T, value: &T) -> T {
        acc.clone() + value.clone()
    }

    fn uncombine(&self, acc: &T, value: &T) -> T {
        acc.clone() - value.clone()
    }
}

/// Bitwise xor, its own inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xor;

impl<T> Reducer<T> for Xor
where
    T: BitXor<Output = T> + Clone,
{
    fn combine(&self, acc: &T, value: &T) -> T {
        acc.clone() ^ value.clone()
    }

    fn uncombine(&self, acc: &T, value: &T) -> T {
        acc.clone() ^ value.clone()
    }
}

/// Adapts a pair of closures into a [`Reducer`].
#[derive(Clone, Copy)]
pub struct FnReducer<F, G> {
    combine: F,
    uncombine: G,
}

impl<F, G> FnReducer<F, G> {
    pub fn new(combine: F, uncombine: G) -> Self {
        Self { combine, uncombine }
    }
}

impl<T, F, G> Reducer<T> for FnReducer<F, G>
where
    F: Fn(&T, &T) -> T,
    G: Fn(&T, &T) -> T,
{
    fn combine(&self, acc: &T, value: &T) -> T {
        (self.combine)(acc, value)
    }

    fn uncombine(&self, acc: &T, value: &T) -> T {
        (self.uncombine)(acc, value)
    }
}

impl<F, G> std::fmt::Debug for FnReducer<F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnReducer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_inverse() {
        let r = Additive;
        let acc = r.combine(&10i64, &5);
        assert_eq!(acc, 15);
        assert_eq!(r.uncombine(&acc, &5), 10);
    }

    #[test]
    fn test_xor_is_self_inverse() {
        let r = Xor;
        let acc = r.combine(&0b1010u8, &0b0110);
        assert_eq!(r.uncombine(&acc, &0b0110), 0b1010);
    }

    #[test]
    fn test_fn_reducer_calls_closures() {
        let r = FnReducer::new(|a: &f64, b: &f64| a * b, |a: &f64, b: &f64| a / b);
        let acc = r.combine(&3.0, &4.0);
        assert_eq!(acc, 12.0);
        assert_eq!(r.uncombine(&acc, &4.0), 3.0);
    }
}
