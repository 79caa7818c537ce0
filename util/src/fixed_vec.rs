use core::fmt;
use core::ops::{Deref, DerefMut};

/// Stack-allocated vector with a compile-time capacity, for the per-frame
/// paths that must not allocate.
///
/// Capacities are sized from known worst cases, so running out of room is a
/// bug in the caller and `push` panics rather than dropping items.
#[derive(Clone)]
pub struct FixedVec<T, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedVec<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        assert!(self.len < N, "FixedVec capacity of {} exceeded", N);
        self.items[self.len] = item;
        self.len += 1;
    }

    pub fn extend_from_slice(&mut self, items: &[T]) {
        for &item in items {
            self.push(item);
        }
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy + PartialEq, const N: usize> FixedVec<T, N> {
    /// Removes consecutive repeated items, like `Vec::dedup`.
    pub fn dedup(&mut self) {
        if self.len <= 1 {
            return;
        }

        let mut write = 1;
        for read in 1..self.len {
            if self.items[read] != self.items[write - 1] {
                self.items[write] = self.items[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items[..self.len]
    }
}

impl<T, const N: usize> DerefMut for FixedVec<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items[..self.len]
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
