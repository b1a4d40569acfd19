use std::ops::{Add, Sub};

use super::reducer::{Additive, Reducer};
use crate::error::QueueError;

/// Fixed-capacity ring that keeps a running reduction of its contents.
///
/// Once full, every enqueue evicts the oldest element: its contribution is
/// removed with [`Reducer::uncombine`] before the new value is folded in with
/// [`Reducer::combine`]. At all times `sum()` equals the fold of `combine`
/// over `items()` starting from the base value.
///
/// Slots outside the logical window may hold stale values after eviction or
/// [`clear`](Self::clear); every read is bounded by `len()` so they are never
/// observable.
#[derive(Debug, Clone)]
pub struct RingAccumulator<T, R = Additive> {
    reducer: R,
    base: T,
    capacity: usize,
    start: usize,
    count: usize,
    backing: Vec<T>,
    aggregate: T,
}

/// Float sliding-window sum.
pub type FloatQueue = RingAccumulator<f64, Additive>;

impl<T, R> RingAccumulator<T, R>
where
    T: Clone,
    R: Reducer<T>,
{
    /// Build a ring and enqueue `initial` in order. Only the newest
    /// `capacity` initial elements are retained.
    pub fn new<I>(capacity: usize, base: T, initial: I, reducer: R) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity(capacity));
        }
        let mut ring = Self {
            reducer,
            aggregate: base.clone(),
            base,
            capacity,
            start: 0,
            count: 0,
            backing: Vec::with_capacity(capacity),
        };
        ring.extend(initial);
        Ok(ring)
    }

    pub fn enqueue(&mut self, value: T) {
        if self.count == self.capacity {
            let idx = self.start;
            self.aggregate = self.reducer.uncombine(&self.aggregate, &self.backing[idx]);
            self.aggregate = self.reducer.combine(&self.aggregate, &value);
            self.backing[idx] = value;
            self.start = (idx + 1) % self.capacity;
            return;
        }

        // Until the first wrap `start` is 0 and the backing Vec is filled
        // strictly in order, so `idx` never exceeds its length.
        let idx = (self.start + self.count) % self.capacity;
        self.aggregate = self.reducer.combine(&self.aggregate, &value);
        if idx < self.backing.len() {
            self.backing[idx] = value;
        } else {
            self.backing.push(value);
        }
        self.count += 1;
    }

    /// Element at `index` in oldest-to-newest order.
    pub fn item(&self, index: usize) -> Result<&T, QueueError> {
        if index >= self.count {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.count,
            });
        }
        Ok(&self.backing[self.physical(index)])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        (0..self.count).map(move |i| &self.backing[self.physical(i)])
    }

    /// All held elements, oldest first.
    pub fn items(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn sum(&self) -> &T {
        &self.aggregate
    }

    /// Fold the held elements from scratch. Equal to [`sum`](Self::sum) as
    /// long as the reducer honours its inverse contract.
    pub fn recompute(&self) -> T {
        self.iter()
            .fold(self.base.clone(), |acc, v| self.reducer.combine(&acc, v))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Fixed capacity.
    pub fn size(&self) -> usize {
        self.capacity
    }

    pub fn base(&self) -> &T {
        &self.base
    }

    pub fn clear(&mut self) {
        self.start = 0;
        self.count = 0;
        self.aggregate = self.base.clone();
    }

    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.capacity
    }
}

impl<T> RingAccumulator<T, Additive>
where
    T: Add<Output = T> + Sub<Output = T> + Clone,
{
    /// Ring summing with `+` / `-`.
    pub fn additive<I>(capacity: usize, base: T, initial: I) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(capacity, base, initial, Additive)
    }
}

impl<T, R> Extend<T> for RingAccumulator<T, R>
where
    T: Clone,
    R: Reducer<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.enqueue(v);
        }
    }
}
