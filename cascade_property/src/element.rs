// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element handles and inheritance walking.
//!
//! The element model is owned by the embedder. This module only needs to know
//! how to get from an element to its parent, which is what
//! [`CascadeElement`] expresses, and provides [`walk_inherited`] for walking
//! the ancestor chain with an explicit depth bound.

/// An element handle that can report its parent.
///
/// Handles are expected to be cheap to clone (an index, a reference, or a
/// reference-counted pointer).
///
/// # Example
///
/// ```rust
/// use cascade_property::CascadeElement;
///
/// #[derive(Clone, Copy)]
/// struct Node<'a> {
///     parents: &'a [Option<usize>],
///     index: usize,
/// }
///
/// impl CascadeElement for Node<'_> {
///     fn parent(&self) -> Option<Self> {
///         self.parents[self.index].map(|index| Node { parents: self.parents, index })
///     }
/// }
///
/// let parents = [None, Some(0)];
/// let child = Node { parents: &parents, index: 1 };
/// assert_eq!(child.parent().map(|p| p.index), Some(0));
/// ```
pub trait CascadeElement: Clone {
    /// Returns the parent element, or `None` for a root.
    fn parent(&self) -> Option<Self>;
}

/// A value found by [`walk_inherited`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Inherited<T> {
    /// The value produced by the probe.
    pub value: T,
    /// How many parent links were followed; `0` is the starting element.
    pub depth: usize,
}

/// Walks from `start` up the ancestor chain until `probe` yields a value.
///
/// `probe` is called on `start` first, then on each ancestor in turn.
/// Returns `None` when the chain ends without a value, or when more than
/// `max_depth` parent links would have to be followed. The bound protects
/// against cyclic parent relationships in the embedder's element model.
///
/// # Example
///
/// ```rust
/// use cascade_property::{CascadeElement, walk_inherited};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Depth(u32);
///
/// impl CascadeElement for Depth {
///     fn parent(&self) -> Option<Self> {
///         self.0.checked_sub(1).map(Depth)
///     }
/// }
///
/// let found = walk_inherited(Depth(5), 16, |d| (d.0 == 2).then_some("set at 2")).unwrap();
/// assert_eq!(found.value, "set at 2");
/// assert_eq!(found.depth, 3);
///
/// assert!(walk_inherited(Depth(5), 2, |d| (d.0 == 2).then_some(())).is_none());
/// ```
pub fn walk_inherited<E, T, F>(start: E, max_depth: usize, mut probe: F) -> Option<Inherited<T>>
where
    E: CascadeElement,
    F: FnMut(&E) -> Option<T>,
{
    let mut current = start;
    let mut depth = 0;
    loop {
        if let Some(value) = probe(&current) {
            return Some(Inherited { value, depth });
        }
        let parent = current.parent()?;
        if depth >= max_depth {
            log::warn!("inheritance walk stopped after {max_depth} ancestors");
            return None;
        }
        depth += 1;
        current = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// A chain where element `n` has parent `n - 1` and `0` is the root.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Chain(usize);

    impl CascadeElement for Chain {
        fn parent(&self) -> Option<Self> {
            self.0.checked_sub(1).map(Chain)
        }
    }

    /// An element that is its own parent.
    #[derive(Clone, Copy, Debug)]
    struct Loop;

    impl CascadeElement for Loop {
        fn parent(&self) -> Option<Self> {
            Some(Self)
        }
    }

    #[test]
    fn probe_hits_start_element() {
        let found = walk_inherited(Chain(3), 8, |_| Some(1)).unwrap();
        assert_eq!(found, Inherited { value: 1, depth: 0 });
    }

    #[test]
    fn probe_hits_ancestor() {
        let found = walk_inherited(Chain(3), 8, |e| (e.0 == 0).then_some("root")).unwrap();
        assert_eq!(found.value, "root");
        assert_eq!(found.depth, 3);
    }

    #[test]
    fn chain_exhausted_returns_none() {
        let visited = Cell::new(0);
        let found: Option<Inherited<()>> = walk_inherited(Chain(2), 8, |_| {
            visited.set(visited.get() + 1);
            None
        });
        assert!(found.is_none());
        assert_eq!(visited.get(), 3);
    }

    #[test]
    fn depth_bound_stops_cycles() {
        let visited = Cell::new(0);
        let found: Option<Inherited<()>> = walk_inherited(Loop, 4, |_| {
            visited.set(visited.get() + 1);
            None
        });
        assert!(found.is_none());
        // The start element plus four ancestors.
        assert_eq!(visited.get(), 5);
    }
}
