//! A bump allocator used for the parser's scratch allocations: unescaped
//! identifier and string text, and anything else produced while scanning a
//! single statement that does not need to survive past it.
//!
//! [`lintium_ast::ExpressionArena`] does *not* live in here -- its nodes are
//! addressed by index rather than by reference, so its backing storage can
//! be a plain growable buffer that is cleared, not a bump arena that is
//! reset (resetting a `bumpalo::Bump` invalidates any reference still
//! pointing into it, which an index can never do by construction). This
//! arena resets once per statement (see [`Allocator::reset`]) for the
//! narrower set of scratch values it does hold, keeping the parser's peak
//! memory bounded by the size of the largest single statement, not the size
//! of the file.

use std::ops;

use bumpalo::Bump;

mod boxed;
mod vec;

pub use boxed::Box;
pub use vec::Vec;

/// A bump-allocated arena.
///
/// Wraps [`bumpalo::Bump`] so that call sites go through `lintium_allocator`
/// rather than depending on `bumpalo` directly; this keeps the allocator
/// implementation swappable without touching every crate that allocates
/// into it.
#[derive(Default)]
pub struct Allocator {
    bump: Bump,
}

impl Allocator {
    /// Allocate `val` into the arena, returning an arena-lifetime reference.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &mut T {
        self.bump.alloc(val)
    }

    /// Allocate a new empty [`Vec`] backed by this arena.
    #[inline]
    pub fn new_vec<T>(&self) -> Vec<T> {
        Vec::new_in(self)
    }

    /// Allocate a new empty [`Vec`] with the given capacity.
    #[inline]
    pub fn new_vec_with_capacity<T>(&self, capacity: usize) -> Vec<T> {
        Vec::with_capacity_in(capacity, self)
    }

    /// Copy `src` into the arena as a `&str`.
    #[inline]
    pub fn alloc_str<'a>(&'a self, src: &str) -> &'a str {
        self.bump.alloc_str(src)
    }

    /// Drop everything allocated so far and reclaim the backing chunks.
    ///
    /// Called by the parser between statements so that one expression's
    /// arena footprint can't accumulate across an entire program.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Number of bytes currently reserved by the underlying bump chunks.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl ops::Deref for Allocator {
    type Target = Bump;

    fn deref(&self) -> &Self::Target {
        &self.bump
    }
}

#[cfg(test)]
mod test {
    use super::Allocator;

    #[test]
    fn alloc_and_reset() {
        let mut allocator = Allocator::default();
        let x = allocator.alloc(42u32);
        assert_eq!(*x, 42);
        let before = allocator.allocated_bytes();
        allocator.reset();
        assert!(allocator.allocated_bytes() <= before);
    }

    #[test]
    fn vec_push() {
        let allocator = Allocator::default();
        let mut v = allocator.new_vec::<u32>();
        v.push(1);
        v.push(2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
