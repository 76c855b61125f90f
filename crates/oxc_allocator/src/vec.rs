use std::ops;

use bumpalo::collections::Vec as BumpVec;

use crate::Allocator;

/// An arena-allocated, growable vector. A thin wrapper over
/// [`bumpalo::collections::Vec`] so downstream crates name only
/// `lintium_allocator` types.
pub struct Vec<'alloc, T>(BumpVec<'alloc, T>);

impl<'alloc, T> Vec<'alloc, T> {
    pub fn new_in(allocator: &'alloc Allocator) -> Self {
        Self(BumpVec::new_in(allocator))
    }

    pub fn with_capacity_in(capacity: usize, allocator: &'alloc Allocator) -> Self {
        Self(BumpVec::with_capacity_in(capacity, allocator))
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_iter(self) -> bumpalo::collections::vec::IntoIter<'alloc, T> {
        self.0.into_iter()
    }
}

impl<T> ops::Deref for Vec<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> ops::DerefMut for Vec<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Vec<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
